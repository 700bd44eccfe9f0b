//! Command-line interface for artist-atlas.
//!
//! This module provides the presentation layer over the directory core:
//! listing with filters, single-artist detail, and ranked search.

mod commands;

pub use commands::{Cli, Commands, run_command};
