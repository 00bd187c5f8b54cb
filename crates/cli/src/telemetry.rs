// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "freqmap_cli=info,freqmap_kernel=info";
const VERBOSE_FILTER: &str = "freqmap_cli=debug,freqmap_kernel=debug";

/// Initialize logging. `RUST_LOG` wins over `verbose` when set.
pub fn init_telemetry(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| fallback.into());

    // A second init (tests, embedding) keeps the first subscriber.
    if tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
