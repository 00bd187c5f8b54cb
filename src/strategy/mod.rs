// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Assignment strategies.
//!
//! A strategy takes a fully loaded graph and a resolved scheme and gives every
//! node a value through the graph's mutation surface. How many passes it makes
//! and whether it uses randomness is its own business.

pub mod exhaustive;
pub mod greedy;
pub mod hill_climb;
pub mod random;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_ITERATIONS, DEFAULT_SEED, DEFAULT_STEP_LIMIT};
use crate::error::{KernelError, Result};
use crate::graph::Graph;
use crate::scheme::Scheme;
use crate::types::value::Cost;

pub use exhaustive::Exhaustive;
pub use greedy::Greedy;
pub use hill_climb::HillClimb;
pub use random::RandomReassignment;

pub trait AssignmentStrategy {
    fn name(&self) -> &'static str;

    /// Assigns a value to every node of `graph` using values from `scheme`.
    fn assign(&mut self, graph: &mut Graph, scheme: &Scheme) -> Result<Outcome>;
}

/// What a strategy left behind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub strategy: String,
    pub iterations: u64,
    pub violations: usize,
    pub cost: Cost,
}

impl Outcome {
    /// Reads violations and cost off a fully assigned graph.
    pub fn measure(strategy: &str, iterations: u64, graph: &Graph) -> Result<Self> {
        let outcome = Self {
            strategy: strategy.to_string(),
            iterations,
            violations: graph.violation_count(),
            cost: graph.calculate_value()?,
        };
        tracing::info!(
            strategy,
            iterations,
            violations = outcome.violations,
            cost = outcome.cost,
            "Assignment finished"
        );
        Ok(outcome)
    }
}

/// Tuning shared by the strategy variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySettings {
    pub seed: u64,
    pub max_iterations: u64,
    pub step_limit: u64,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Random,
    Greedy,
    HillClimb,
    Exhaustive,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Random,
        StrategyKind::Greedy,
        StrategyKind::HillClimb,
        StrategyKind::Exhaustive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Greedy => "greedy",
            StrategyKind::HillClimb => "hill-climb",
            StrategyKind::Exhaustive => "exhaustive",
        }
    }

    pub fn build(&self, settings: &StrategySettings) -> Box<dyn AssignmentStrategy> {
        match self {
            StrategyKind::Random => {
                Box::new(RandomReassignment::new(settings.seed, settings.max_iterations))
            }
            StrategyKind::Greedy => Box::new(Greedy),
            StrategyKind::HillClimb => {
                Box::new(HillClimb::new(settings.seed, settings.max_iterations))
            }
            StrategyKind::Exhaustive => Box::new(Exhaustive::new(settings.step_limit)),
        }
    }
}

impl Default for StrategyKind {
    fn default() -> Self {
        StrategyKind::Random
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown strategy {:?}, expected one of: random, greedy, hill-climb, exhaustive",
                    s
                )
            })
    }
}

/// A non-empty graph cannot be assigned from a scheme without values.
pub(crate) fn ensure_assignable(graph: &Graph, scheme: &Scheme) -> Result<()> {
    if !graph.is_empty() && scheme.is_empty() {
        return Err(KernelError::MalformedSource(format!(
            "scheme {} has no values to assign",
            scheme.id()
        )));
    }
    Ok(())
}
