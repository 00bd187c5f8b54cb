// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! freqmap-kernel: frequency assignment modelled as graph colouring.
//!
//! Regions are nodes, shared borders are edges, and every node gets a value
//! (a transmitter type with a cost) from a cost scheme. Two neighbours with
//! the same value token are a violation. Strategies in [`strategy`] fill the
//! graph; the graph answers questions about the result.

pub mod config;
pub mod error;
pub mod types;
pub mod source;
pub mod graph;
pub mod scheme;
pub mod strategy;
pub mod fixtures;

pub use error::{KernelError, Result};
pub use graph::{Graph, Node};
pub use scheme::{CostSchemes, Scheme};
pub use strategy::{AssignmentStrategy, Outcome, StrategyKind, StrategySettings};
pub use types::{Cost, NodeId, SchemeId, Value};

#[cfg(test)]
pub mod tests;
