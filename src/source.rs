// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! CSV source readers shared by the graph and scheme loaders.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{KernelError, Result};

/// Opens a headed CSV source with fields and headers trimmed.
pub fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source)
}

pub fn open_file(path: impl AsRef<Path>) -> Result<File> {
    Ok(File::open(path)?)
}

/// Fails with `MalformedSource` unless every column in `required` is present.
pub fn require_columns<R: Read>(
    reader: &mut csv::Reader<R>,
    source: &str,
    required: &[&str],
) -> Result<()> {
    let headers = reader.headers()?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(KernelError::MalformedSource(format!(
                "{} source is missing column `{}`",
                source, column
            )));
        }
    }
    Ok(())
}

/// Checks the columns, then deserializes every row. Stops at the first bad row.
pub fn read_rows<R: Read, T: DeserializeOwned>(
    source: R,
    name: &str,
    required: &[&str],
) -> Result<Vec<T>> {
    let mut reader = csv_reader(source);
    require_columns(&mut reader, name, required)?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<T>() {
        rows.push(record.map_err(|e| match KernelError::from(e) {
            KernelError::MalformedSource(msg) => {
                KernelError::MalformedSource(format!("{} source: {}", name, msg))
            }
            other => other,
        })?);
    }
    Ok(rows)
}
