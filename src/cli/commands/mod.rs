//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `list`: filtered catalog listing
//! - `show`: single-artist detail with touring schedule
//! - `search`: ranked prefix/substring/member search
//!
//! Commands only parse arguments and render text; all query semantics live
//! in [`crate::directory`].

mod list;
mod search;
mod show;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config;
use crate::directory::Directory;
use crate::source::UpstreamClient;

pub use list::cmd_list;
pub use search::cmd_search;
pub use show::cmd_show;

/// Artist Atlas CLI - browse a mirrored catalog of music artists
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// List artists, optionally filtered by creation year and group size
    List {
        /// Only artists formed in or after this year
        #[arg(long)]
        min_year: Option<String>,
        /// Only artists formed in or before this year
        #[arg(long)]
        max_year: Option<String>,
        /// Accepted member counts (repeatable)
        #[arg(long = "members")]
        members: Vec<String>,
    },
    /// Show one artist with its touring schedule
    Show {
        /// Artist id (positive integer)
        id: String,
    },
    /// Search artists by name or member, case-insensitive
    Search {
        /// Free-text query
        query: String,
        /// Emit results as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Dispatch the parsed command line.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let directory = open_directory();

    match &cli.command {
        Commands::List {
            min_year,
            max_year,
            members,
        } => cmd_list(
            &rt,
            &directory,
            min_year.as_deref(),
            max_year.as_deref(),
            members,
        ),
        Commands::Show { id } => cmd_show(&rt, &directory, id),
        Commands::Search { query, json } => cmd_search(&rt, &directory, query, *json),
    }
}

/// Build the directory service from on-disk configuration.
fn open_directory() -> Directory<UpstreamClient> {
    let config = config::load_or_init();
    let client = UpstreamClient::new(
        config.upstream.base_url.clone(),
        config.upstream.timeout(),
    );
    Directory::new(client)
}
