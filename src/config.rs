// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

use crate::types::id::SchemeId;

/// Required columns of the node source.
pub const NODE_ID_COLUMN: &str = "id";
pub const NODE_NAME_COLUMN: &str = "name";

/// Required columns of the adjacency source.
pub const ADJACENCY_OWNER_COLUMN: &str = "state";
pub const ADJACENCY_LIST_COLUMN: &str = "neighbours";

/// Required columns of the cost-scheme source.
pub const SCHEME_ID_COLUMN: &str = "scheme";
pub const SCHEME_TOKEN_COLUMN: &str = "token";
pub const SCHEME_COST_COLUMN: &str = "cost";

/// Separator between ids inside a `neighbours` field.
pub const NEIGHBOUR_DELIMITER: char = ',';

/// Characters stripped from both ends of a neighbour token, besides whitespace.
pub const NEIGHBOUR_BRACKETS: [char; 2] = ['[', ']'];

pub const DEFAULT_SCHEME_ID: SchemeId = SchemeId(1);

/// Upper bound on passes for the iterative strategies.
pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000;

pub const DEFAULT_SEED: u64 = 42;

/// Search nodes visited by the exhaustive strategy before it settles for the best so far.
pub const DEFAULT_STEP_LIMIT: u64 = 5_000_000;
