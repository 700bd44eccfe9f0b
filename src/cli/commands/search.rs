//! Ranked search command.

use tokio::runtime::Runtime;

use crate::directory::Directory;
use crate::source::ArtistSource;

/// Search the catalog and print the capped, ranked results.
///
/// With `--json` the output is the `[{id, name, image}, ...]` payload shape.
pub fn cmd_search<S: ArtistSource>(
    rt: &Runtime,
    directory: &Directory<S>,
    query: &str,
    json: bool,
) -> anyhow::Result<()> {
    rt.block_on(async {
        let results = directory.search(query).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }

        if results.is_empty() {
            println!("No results for \"{query}\".");
            return Ok(());
        }

        for item in &results {
            println!("{:>4}  {}", item.id, item.name);
        }
        Ok(())
    })
}
