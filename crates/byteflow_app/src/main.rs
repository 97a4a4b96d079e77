// SPDX-License-Identifier: MIT OR Apache-2.0
//! `byteflow` - headless runner for saved node sets.
//!
//! Commands:
//! - `byteflow list` prints the registered node kinds
//! - `byteflow init <file>` writes a sample node set (`.json` or `.ron`)
//! - `byteflow run <file>` restores every node, processes it once and
//!   prints its outputs
//!
//! Log output is controlled with `RUST_LOG`.

mod runner;

use clap::Parser;
use runner::Cli;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVES: &str = "byteflow_app=info,byteflow_node=info";

fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting byteflow v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    if let Err(e) = runner::execute(cli.command) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
