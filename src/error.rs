// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::types::id::SchemeId;

#[derive(Error, Debug)]
pub enum KernelError {
    /// A source is missing a required column or holds an unreadable row.
    #[error("Malformed source: {0}")]
    MalformedSource(String),

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    /// An adjacency row is owned by an id that was never loaded as a node.
    #[error("Unknown node id: {0}")]
    UnknownNodeId(String),

    #[error("Unknown neighbour id {neighbour:?} listed for {owner:?}")]
    UnknownNeighbourId { owner: String, neighbour: String },

    #[error("Unknown scheme id: {0}")]
    UnknownSchemeId(SchemeId),

    /// A value was read or summed before the node was assigned.
    #[error("Node {0} has no assigned value")]
    NotAssigned(String),

    #[error("No conflict-free assignment found")]
    Unsatisfiable,

    /// Total cost does not fit in a `Cost`.
    #[error("Cost overflow")]
    Overflow,

    #[error("Snapshot mismatch: expected {expected} values, found {found}")]
    SnapshotMismatch { expected: usize, found: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for KernelError {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            match e.into_kind() {
                csv::ErrorKind::Io(io) => KernelError::Io(io),
                other => KernelError::MalformedSource(format!("{:?}", other)),
            }
        } else {
            KernelError::MalformedSource(e.to_string())
        }
    }
}

pub type KernelResult<T> = std::result::Result<T, KernelError>;
pub type Result<T> = KernelResult<T>;
