//! Filtered catalog listing command.

use tokio::runtime::Runtime;

use crate::directory::{Directory, filter};
use crate::source::ArtistSource;

/// List the catalog, filtered by the raw year/member parameters.
///
/// Malformed parameters are normalized to permissive defaults rather than
/// rejected, matching the filter engine's contract.
pub fn cmd_list<S: ArtistSource>(
    rt: &Runtime,
    directory: &Directory<S>,
    min_year: Option<&str>,
    max_year: Option<&str>,
    members: &[String],
) -> anyhow::Result<()> {
    let criteria = filter::parse_filter_criteria(min_year, max_year, members);

    rt.block_on(async {
        let artists = directory.list(&criteria).await?;

        if artists.is_empty() {
            println!("No artists match the given filters.");
            return Ok(());
        }

        println!("{:>4}  {:<30} {:>7}  {}", "ID", "Name", "Formed", "Members");
        for artist in &artists {
            println!(
                "{:>4}  {:<30} {:>7}  {}",
                artist.id,
                artist.name,
                artist.creation_year,
                artist.members.len()
            );
        }
        println!();
        println!("{} artist(s)", artists.len());
        Ok(())
    })
}
