//! Single-artist detail command.

use tokio::runtime::Runtime;

use crate::directory::Directory;
use crate::error::Error;
use crate::source::ArtistSource;

/// Show one artist with its touring schedule.
///
/// The id is validated here, before it reaches the core: anything that is
/// not a positive integer is an invalid parameter, not a lookup miss.
pub fn cmd_show<S: ArtistSource>(
    rt: &Runtime,
    directory: &Directory<S>,
    raw_id: &str,
) -> anyhow::Result<()> {
    let id: u32 = raw_id
        .trim()
        .parse()
        .ok()
        .filter(|&id| id > 0)
        .ok_or_else(|| Error::invalid_parameter("artist id must be a positive number"))?;

    rt.block_on(async {
        let detail = directory.detail(id).await?;
        let artist = detail.artist;

        println!("{} (id {})", artist.name, artist.id);
        println!("  Formed:      {}", artist.creation_year);
        println!("  First album: {}", artist.first_album);
        println!("  Members:");
        for member in &artist.members {
            println!("    - {member}");
        }

        if detail.relations.is_empty() {
            println!("  No known concert dates.");
        } else {
            println!("  Concerts:");
            for (location, dates) in &detail.relations {
                println!("    {location}: {}", dates.join(", "));
            }
        }
        Ok(())
    })
}
