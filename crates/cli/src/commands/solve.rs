use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::fs;

use anyhow::Context;

use crate::config::{GraphSources, RunConfig};
use crate::engine::{AssignmentEngine, Report};

pub fn run(sources: &GraphSources, cfg: &RunConfig) -> anyhow::Result<Report> {
    let mut engine = AssignmentEngine::load(sources, &cfg.schemes)?;
    let report = engine.run(cfg.strategy, cfg.scheme_id, &cfg.settings)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Token", "Cost", "Valid"]);

    for row in &report.nodes {
        table.add_row(vec![
            row.id.clone(),
            row.name.clone(),
            row.token.clone().unwrap_or_else(|| "-".to_string()),
            row.cost.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
            if row.valid { "yes" } else { "NO" }.to_string(),
        ]);
    }

    println!("\nAssignment ({} / scheme {})\n", report.outcome.strategy, report.scheme);
    println!("{table}\n");
    println!("Iterations: {}", report.outcome.iterations);
    println!("Violations: {}", report.violations.len());
    if !report.violations.is_empty() {
        println!("Violating:  {}", report.violations.join(", "));
    }
    println!("Solution:   {}", report.solution);
    match report.cost {
        Some(cost) => println!("Total cost: {}\n", cost),
        None => println!("Total cost: n/a\n"),
    }

    if let Some(path) = &cfg.json_report {
        let body = serde_json::to_string_pretty(&report)?;
        fs::write(path, body)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Report written");
    }

    Ok(report)
}
