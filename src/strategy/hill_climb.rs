// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Hill climbing over single-node moves.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::Result;
use crate::graph::{Graph, Node};
use crate::scheme::Scheme;
use crate::strategy::{ensure_assignable, greedy, AssignmentStrategy, Outcome};
use crate::types::id::NodeId;
use crate::types::value::{Cost, Value};

/// Clashes with neighbours first, cost second. Lower is better.
fn score(graph: &Graph, node: &Node, value: &Value) -> (usize, Cost) {
    (graph.neighbour_conflicts(node, value), value.cost)
}

/// Starts from the current assignment (greedy-filled where incomplete) and
/// moves nodes one at a time to the value with the fewest neighbour clashes,
/// then the lowest cost. Each pass visits every node in a shuffled order; the
/// climb stops after a pass without an improving move.
pub struct HillClimb {
    rng: StdRng,
    max_passes: u64,
}

impl HillClimb {
    pub fn new(seed: u64, max_passes: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_passes,
        }
    }
}

impl AssignmentStrategy for HillClimb {
    fn name(&self) -> &'static str {
        "hill-climb"
    }

    fn assign(&mut self, graph: &mut Graph, scheme: &Scheme) -> Result<Outcome> {
        ensure_assignable(graph, scheme)?;
        if !graph.is_solution() {
            greedy::fill(graph, scheme)?;
        }

        let mut order: Vec<NodeId> = graph.nodes().map(Node::id).collect();
        let mut passes = 0;
        while passes < self.max_passes {
            passes += 1;
            order.shuffle(&mut self.rng);

            let mut improved = false;
            for &id in &order {
                let node = graph.node(id)?;
                let current = node.get_value()?;
                let current_score = score(graph, node, current);

                let best = scheme
                    .values()
                    .iter()
                    .map(|v| (score(graph, node, v), v))
                    .min_by_key(|(rank, _)| *rank);

                if let Some((rank, value)) = best {
                    if rank < current_score {
                        let value = value.clone();
                        graph.set_value(id, value)?;
                        improved = true;
                    }
                }
            }

            if !improved {
                break;
            }
        }

        Outcome::measure(self.name(), passes, graph)
    }
}
