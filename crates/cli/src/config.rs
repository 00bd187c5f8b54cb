use std::path::PathBuf;

use freqmap_kernel::config::DEFAULT_SCHEME_ID;
use freqmap_kernel::{SchemeId, StrategyKind, StrategySettings};

/// Input files for one graph.
#[derive(Debug, Clone)]
pub struct GraphSources {
    pub nodes: PathBuf,
    pub neighbours: PathBuf,
}

/// Everything `solve` needs besides the graph sources.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub schemes: PathBuf,
    pub scheme_id: SchemeId,
    pub strategy: StrategyKind,
    pub settings: StrategySettings,
    pub json_report: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            schemes: PathBuf::from("data/transmitters.csv"),
            scheme_id: DEFAULT_SCHEME_ID,
            strategy: StrategyKind::default(),
            settings: StrategySettings::default(),
            json_report: None,
        }
    }
}
