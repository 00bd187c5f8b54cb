// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Random reassignment.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::graph::{Graph, Node};
use crate::scheme::Scheme;
use crate::strategy::{ensure_assignable, AssignmentStrategy, Outcome};
use crate::types::id::NodeId;
use crate::types::value::Value;

/// Gives every node a random value, then keeps re-rolling the violating
/// nodes until none are left or the iteration limit runs out.
pub struct RandomReassignment {
    rng: StdRng,
    max_iterations: u64,
}

impl RandomReassignment {
    pub fn new(seed: u64, max_iterations: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_iterations,
        }
    }

    fn pick(&mut self, values: &[Value]) -> Value {
        values[self.rng.gen_range(0..values.len())].clone()
    }
}

impl AssignmentStrategy for RandomReassignment {
    fn name(&self) -> &'static str {
        "random"
    }

    fn assign(&mut self, graph: &mut Graph, scheme: &Scheme) -> Result<Outcome> {
        ensure_assignable(graph, scheme)?;
        let values = scheme.values();

        let ids: Vec<NodeId> = graph.nodes().map(Node::id).collect();
        for id in ids {
            let value = self.pick(values);
            graph.set_value(id, value)?;
        }

        let mut iterations = 0;
        while iterations < self.max_iterations {
            let violating: Vec<NodeId> = graph.get_violations().iter().map(|n| n.id()).collect();
            if violating.is_empty() {
                break;
            }
            for id in violating {
                let value = self.pick(values);
                graph.set_value(id, value)?;
            }
            iterations += 1;
        }

        if graph.violation_count() > 0 {
            tracing::warn!(
                max_iterations = self.max_iterations,
                "Random reassignment stopped with violations left"
            );
        }
        Outcome::measure(self.name(), iterations, graph)
    }
}
