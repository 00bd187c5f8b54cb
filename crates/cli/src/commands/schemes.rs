use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::path::Path;

use freqmap_kernel::CostSchemes;

pub fn run(schemes_path: &Path) -> anyhow::Result<()> {
    let schemes = CostSchemes::open(schemes_path)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Scheme", "Tokens", "Cheapest"]);

    for scheme in schemes.iter() {
        let tokens: Vec<String> = scheme
            .values()
            .iter()
            .map(|v| format!("{}={}", v.token, v.cost))
            .collect();
        let cheapest = scheme
            .cheapest()
            .map(|v| v.token.clone())
            .unwrap_or_default();
        table.add_row(vec![scheme.id().to_string(), tokens.join(" "), cheapest]);
    }

    println!("\nCost Schemes\n");
    println!("{table}\n");

    Ok(())
}
