use anyhow::{Context, Result};
use serde::Serialize;

use freqmap_kernel::{CostSchemes, Graph, Outcome, SchemeId, StrategyKind, StrategySettings};

use crate::config::GraphSources;

/// One node as it ends up in a report.
#[derive(Debug, Clone, Serialize)]
pub struct NodeRow {
    pub id: String,
    pub name: String,
    pub token: Option<String>,
    pub cost: Option<u64>,
    pub valid: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub scheme: SchemeId,
    pub outcome: Outcome,
    pub solution: bool,
    pub violations: Vec<String>,
    pub cost: Option<u64>,
    pub nodes: Vec<NodeRow>,
}

/// A loaded graph plus the schemes it can be assigned from.
pub struct AssignmentEngine {
    pub graph: Graph,
    pub schemes: CostSchemes,
}

impl AssignmentEngine {
    pub fn load(sources: &GraphSources, schemes_path: &std::path::Path) -> Result<Self> {
        let graph = Graph::open(&sources.nodes, &sources.neighbours).with_context(|| {
            format!(
                "Failed to build graph from {} and {}",
                sources.nodes.display(),
                sources.neighbours.display()
            )
        })?;
        let schemes = CostSchemes::open(schemes_path)
            .with_context(|| format!("Failed to load cost schemes from {}", schemes_path.display()))?;

        tracing::info!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            schemes = schemes.len(),
            "Sources loaded"
        );
        Ok(Self { graph, schemes })
    }

    /// Resolves the scheme first, so an unknown id leaves the graph untouched.
    pub fn run(
        &mut self,
        kind: StrategyKind,
        scheme_id: SchemeId,
        settings: &StrategySettings,
    ) -> Result<Report> {
        let scheme = self.schemes.get_scheme(scheme_id)?;
        let mut strategy = kind.build(settings);
        tracing::debug!(strategy = strategy.name(), scheme = %scheme_id, "Running strategy");

        let outcome = strategy
            .assign(&mut self.graph, scheme)
            .with_context(|| format!("Strategy {} failed", kind))?;
        Ok(self.report(scheme_id, outcome))
    }

    pub fn report(&self, scheme: SchemeId, outcome: Outcome) -> Report {
        let graph = &self.graph;
        let nodes = graph
            .nodes()
            .map(|n| NodeRow {
                id: n.key().to_string(),
                name: n.name().to_string(),
                token: n.value().map(|v| v.token.clone()),
                cost: n.value().map(|v| v.cost),
                valid: graph.is_valid(n.id()).unwrap_or(true),
            })
            .collect();

        Report {
            scheme,
            outcome,
            solution: graph.is_solution(),
            violations: graph.get_violations().iter().map(|n| n.key().to_string()).collect(),
            cost: graph.calculate_value().ok(),
            nodes,
        }
    }
}
