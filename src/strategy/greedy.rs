// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Cheapest-first greedy fill.

use crate::error::Result;
use crate::graph::Graph;
use crate::scheme::Scheme;
use crate::strategy::{ensure_assignable, AssignmentStrategy, Outcome};

/// Clears the graph, then fills it one empty node at a time.
pub struct Greedy;

/// Fills every empty node, in load order, with the cheapest value no
/// neighbour holds. When every value clashes the cheapest one is used.
///
/// Nodes that already hold a value are left alone. Returns the number of
/// nodes filled.
pub fn fill(graph: &mut Graph, scheme: &Scheme) -> Result<u64> {
    ensure_assignable(graph, scheme)?;
    let ranked = scheme.by_cost();

    let mut filled = 0;
    while let Some(node) = graph.get_empty_node() {
        let id = node.id();
        let choice = ranked
            .iter()
            .find(|v| graph.neighbour_conflicts(node, v) == 0)
            .or_else(|| ranked.first())
            .map(|v| (*v).clone());

        match choice {
            Some(value) => graph.set_value(id, value)?,
            None => break,
        }
        filled += 1;
    }
    Ok(filled)
}

impl AssignmentStrategy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn assign(&mut self, graph: &mut Graph, scheme: &Scheme) -> Result<Outcome> {
        graph.clear_values();
        let filled = fill(graph, scheme)?;
        Outcome::measure(self.name(), filled, graph)
    }
}
