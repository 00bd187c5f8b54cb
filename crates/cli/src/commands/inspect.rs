use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use anyhow::Context;
use freqmap_kernel::Graph;

use crate::config::GraphSources;

pub fn run(sources: &GraphSources) -> anyhow::Result<()> {
    let graph = Graph::open(&sources.nodes, &sources.neighbours)
        .context("Failed to build graph")?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Degree", "Neighbours"]);

    for node in graph.nodes() {
        let neighbours: Vec<&str> = node
            .neighbours()
            .iter()
            .filter_map(|id| graph.node(*id).ok())
            .map(|n| n.key())
            .collect();
        table.add_row(vec![
            node.key().to_string(),
            node.name().to_string(),
            node.degree().to_string(),
            neighbours.join(", "),
        ]);
    }

    let max_degree = graph.nodes().map(|n| n.degree()).max().unwrap_or(0);

    println!("\nGraph Report");
    println!("------------");
    println!("Nodes:      {}", graph.len());
    println!("Edges:      {}", graph.edge_count());
    println!("Max degree: {}\n", max_degree);
    println!("{table}\n");

    Ok(())
}
