//! Adjacency helpers.

use crate::config::{NEIGHBOUR_BRACKETS, NEIGHBOUR_DELIMITER};
use crate::graph::node::Node;
use crate::types::id::NodeId;

/// Strips brackets and whitespace from both ends of a neighbour token.
pub fn strip_token(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_whitespace() || NEIGHBOUR_BRACKETS.contains(&c))
}

/// Splits a `neighbours` field such as `"[B, C, ]"` into its ids.
///
/// Tokens that are empty after stripping are dropped, so trailing delimiters
/// and empty lists (`"[]"`) yield nothing.
pub fn parse_neighbour_list(field: &str) -> Vec<&str> {
    field
        .split(NEIGHBOUR_DELIMITER)
        .map(strip_token)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Iterator over the undirected edges of a node table, each reported once
/// with the lower id first.
pub struct EdgeIterator<'a> {
    nodes: &'a [Node],
    node: usize,
    pos: usize,
}

impl<'a> EdgeIterator<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self { nodes, node: 0, pos: 0 }
    }
}

impl<'a> Iterator for EdgeIterator<'a> {
    type Item = (NodeId, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.nodes.get(self.node) {
            while let Some(&other) = current.neighbours.get(self.pos) {
                self.pos += 1;
                if other > current.id {
                    return Some((current.id, other));
                }
            }
            self.node += 1;
            self.pos = 0;
        }
        None
    }
}
