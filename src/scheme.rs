// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Cost schemes: named tables of value tokens and their costs.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{SCHEME_COST_COLUMN, SCHEME_ID_COLUMN, SCHEME_TOKEN_COLUMN};
use crate::error::{KernelError, Result};
use crate::source::{open_file, read_rows};
use crate::types::id::SchemeId;
use crate::types::value::{Cost, Value};

#[derive(Debug, Deserialize)]
struct SchemeRecord {
    scheme: u32,
    token: String,
    cost: Cost,
}

/// One scheme: tokens in the order they first appear in the source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scheme {
    id: SchemeId,
    entries: Vec<Value>,
}

impl Scheme {
    pub fn new(id: SchemeId) -> Self {
        Self {
            id,
            entries: Vec::new(),
        }
    }

    /// Adds a token. Fails with `MalformedSource` for an empty or repeated token.
    pub fn insert(&mut self, token: impl Into<String>, cost: Cost) -> Result<()> {
        let token = token.into();
        if token.is_empty() {
            return Err(KernelError::MalformedSource(format!(
                "scheme {} has an empty token",
                self.id
            )));
        }
        if self.entries.iter().any(|v| v.token == token) {
            return Err(KernelError::MalformedSource(format!(
                "scheme {} lists token {:?} twice",
                self.id, token
            )));
        }
        self.entries.push(Value::new(token, cost));
        Ok(())
    }

    pub fn id(&self) -> SchemeId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.entries
    }

    pub fn get(&self, token: &str) -> Option<&Value> {
        self.entries.iter().find(|v| v.token == token)
    }

    pub fn cost_of(&self, token: &str) -> Option<Cost> {
        self.get(token).map(|v| v.cost)
    }

    /// Lowest-cost value; ties go to the earlier token.
    pub fn cheapest(&self) -> Option<&Value> {
        self.entries.iter().min_by_key(|v| v.cost)
    }

    /// Values sorted by cost, ties kept in source order.
    pub fn by_cost(&self) -> Vec<&Value> {
        let mut values: Vec<&Value> = self.entries.iter().collect();
        values.sort_by_key(|v| v.cost);
        values
    }
}

/// Every scheme of one cost source, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CostSchemes {
    schemes: BTreeMap<SchemeId, Scheme>,
}

impl CostSchemes {
    /// Loads a `scheme`/`token`/`cost` source. One row per (scheme, token) pair.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let rows: Vec<SchemeRecord> = read_rows(
            source,
            "cost scheme",
            &[SCHEME_ID_COLUMN, SCHEME_TOKEN_COLUMN, SCHEME_COST_COLUMN],
        )?;

        let mut schemes: BTreeMap<SchemeId, Scheme> = BTreeMap::new();
        for row in rows {
            let id = SchemeId(row.scheme);
            schemes
                .entry(id)
                .or_insert_with(|| Scheme::new(id))
                .insert(row.token, row.cost)?;
        }
        tracing::debug!(schemes = schemes.len(), "Loaded cost schemes");
        Ok(Self { schemes })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(open_file(path)?)
    }

    pub fn get_scheme(&self, id: SchemeId) -> Result<&Scheme> {
        self.schemes.get(&id).ok_or(KernelError::UnknownSchemeId(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = SchemeId> + '_ {
        self.schemes.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scheme> {
        self.schemes.values()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
