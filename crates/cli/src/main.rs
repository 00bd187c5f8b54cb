use clap::{Parser, Subcommand};
use std::path::PathBuf;

use freqmap_cli::commands::{inspect, schemes, solve};
use freqmap_cli::config::{GraphSources, RunConfig};
use freqmap_cli::telemetry;
use freqmap_kernel::config::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_SCHEME_ID, DEFAULT_SEED, DEFAULT_STEP_LIMIT,
};
use freqmap_kernel::{SchemeId, StrategyKind, StrategySettings};

#[derive(Parser)]
#[command(name = "freqmap")]
#[command(about = "Assign transmitter types to neighbouring regions without clashes", long_about = None)]
struct Cli {
    /// Debug logging for freqmap crates (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct SourceArgs {
    /// CSV with columns `id`, `name`
    #[arg(long)]
    nodes: PathBuf,

    /// CSV with columns `state`, `neighbours`
    #[arg(long)]
    neighbours: PathBuf,
}

impl SourceArgs {
    fn into_sources(self) -> GraphSources {
        GraphSources {
            nodes: self.nodes,
            neighbours: self.neighbours,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph, assign values with a strategy and report the result
    Solve {
        #[command(flatten)]
        sources: SourceArgs,

        /// CSV with columns `scheme`, `token`, `cost`
        #[arg(long)]
        schemes: PathBuf,

        /// Cost scheme to assign from
        #[arg(long, default_value_t = DEFAULT_SCHEME_ID.0)]
        scheme: u32,

        /// random, greedy, hill-climb or exhaustive
        #[arg(long, default_value_t = StrategyKind::Random)]
        strategy: StrategyKind,

        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Pass limit for the iterative strategies
        #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
        max_iterations: u64,

        /// Search node limit for the exhaustive strategy
        #[arg(long, default_value_t = DEFAULT_STEP_LIMIT)]
        step_limit: u64,

        /// Also write the report as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Show node count, edge count and per-node neighbours
    Inspect {
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// List the cost schemes in a scheme source
    Schemes {
        #[arg(long)]
        schemes: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_telemetry(cli.verbose);

    match cli.command {
        Commands::Solve {
            sources,
            schemes,
            scheme,
            strategy,
            seed,
            max_iterations,
            step_limit,
            json,
        } => {
            let cfg = RunConfig {
                schemes,
                scheme_id: SchemeId(scheme),
                strategy,
                settings: StrategySettings {
                    seed,
                    max_iterations,
                    step_limit,
                },
                json_report: json,
            };
            solve::run(&sources.into_sources(), &cfg).map(|_| ())
        }
        Commands::Inspect { sources } => inspect::run(&sources.into_sources()),
        Commands::Schemes { schemes: path } => schemes::run(&path),
    }
}
