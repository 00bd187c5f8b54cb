// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Exact search for the cheapest conflict-free assignment.

use crate::error::{KernelError, Result};
use crate::graph::{Graph, Node};
use crate::scheme::Scheme;
use crate::strategy::{ensure_assignable, AssignmentStrategy, Outcome};
use crate::types::id::NodeId;
use crate::types::value::{Cost, Value};

/// Depth-first branch and bound over nodes in load order, cheapest values
/// first.
///
/// A partial assignment is cut once `cost + remaining * cheapest` cannot beat
/// the best complete assignment seen. `step_limit` caps the number of search
/// nodes; when it is hit the best assignment found so far is kept.
pub struct Exhaustive {
    step_limit: u64,
}

impl Exhaustive {
    pub fn new(step_limit: u64) -> Self {
        Self { step_limit }
    }
}

/// One level of the search: the next value index to try for the node at
/// this depth and the cost accumulated above it.
struct Frame {
    next: usize,
    cost: Cost,
}

struct Search {
    order: Vec<NodeId>,
    cheapest: Cost,
    steps: u64,
    limit: u64,
    best: Option<(Cost, Vec<Option<Value>>)>,
}

impl Search {
    /// Counts a search node at `depth` and decides whether it needs a frame.
    /// Complete assignments are recorded here and never get one.
    fn enter(&mut self, graph: &Graph, depth: usize, cost: Cost) -> Option<Frame> {
        if self.steps >= self.limit {
            return None;
        }
        self.steps += 1;

        if depth == self.order.len() {
            if self.best.as_ref().map_or(true, |(best, _)| cost < *best) {
                self.best = Some((cost, graph.snapshot()));
            }
            return None;
        }

        let remaining = (self.order.len() - depth) as Cost;
        if let Some((best, _)) = &self.best {
            let bound = cost.saturating_add(remaining.saturating_mul(self.cheapest));
            if bound >= *best {
                return None;
            }
        }
        Some(Frame { next: 0, cost })
    }

    /// Walks the tree with an explicit stack; depth is the stack length.
    fn run(&mut self, graph: &mut Graph, values: &[Value]) -> Result<()> {
        let mut stack: Vec<Frame> = Vec::with_capacity(self.order.len());
        stack.extend(self.enter(graph, 0, 0));

        while !stack.is_empty() {
            let depth = stack.len() - 1;
            let id = self.order[depth];
            graph.clear_value(id)?;

            if self.steps >= self.limit {
                break;
            }

            let frame = &mut stack[depth];
            let mut candidate = None;
            while frame.next < values.len() {
                let index = frame.next;
                frame.next += 1;
                if !graph.would_conflict(id, &values[index])? {
                    candidate = Some(index);
                    break;
                }
            }

            let Some(index) = candidate else {
                stack.pop();
                continue;
            };

            let value = &values[index];
            let cost = frame
                .cost
                .checked_add(value.cost)
                .ok_or(KernelError::Overflow)?;
            graph.set_value(id, value.clone())?;
            stack.extend(self.enter(graph, depth + 1, cost));
        }
        Ok(())
    }
}

impl AssignmentStrategy for Exhaustive {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    /// Fails with `Unsatisfiable` when no conflict-free assignment was found
    /// and with `Overflow` when a partial cost leaves the `Cost` range. In
    /// both cases the graph keeps the values it had before the call.
    fn assign(&mut self, graph: &mut Graph, scheme: &Scheme) -> Result<Outcome> {
        ensure_assignable(graph, scheme)?;
        let values: Vec<Value> = scheme.by_cost().into_iter().cloned().collect();

        let previous = graph.snapshot();
        graph.clear_values();

        let mut search = Search {
            order: graph.nodes().map(Node::id).collect(),
            cheapest: values.first().map_or(0, |v| v.cost),
            steps: 0,
            limit: self.step_limit,
            best: None,
        };
        if let Err(e) = search.run(graph, &values) {
            graph.restore(previous)?;
            return Err(e);
        }

        if search.steps >= search.limit {
            tracing::warn!(steps = search.steps, "Exhaustive search hit its step limit");
        }

        match search.best {
            Some((_, best)) => {
                graph.restore(best)?;
                Outcome::measure(self.name(), search.steps, graph)
            }
            None => {
                graph.restore(previous)?;
                Err(KernelError::Unsatisfiable)
            }
        }
    }
}
