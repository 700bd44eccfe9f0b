//! Artist Atlas - a directory service over a remote music artist catalog.
//!
//! Mirrors the upstream catalog in memory on first use and answers three
//! kinds of queries against it: filtered listing, single-artist detail
//! enriched with touring data, and ranked capped search.

pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod source;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("artist_atlas=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
