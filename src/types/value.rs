// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Assignable values.

use serde::{Deserialize, Serialize};

/// Cost of a single value, in scheme units.
pub type Cost = u64;

/// A value token (transmitter type, channel) together with its cost.
///
/// Two values conflict when their tokens are equal. The cost plays no part in
/// conflict detection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Value {
    pub token: String,
    pub cost: Cost,
}

impl Value {
    pub fn new(token: impl Into<String>, cost: Cost) -> Self {
        Self {
            token: token.into(),
            cost,
        }
    }

    pub fn conflicts_with(&self, other: &Value) -> bool {
        self.token == other.token
    }
}
