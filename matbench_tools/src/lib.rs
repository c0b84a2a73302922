//! Command-line glue for the matbench tools.
//!
//! Each binary parses its arguments, converts them into the settings structs from
//! `matbench_core::config` and hands off to the matching `run` function here so `main.rs`
//! stays minimal.

pub mod export;
pub mod generate;

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default `warn` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
