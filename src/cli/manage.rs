use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::Args;
use simplelog::info;

use crate::cli::print_all;
use crate::lidarr::queries::LidarrCommand;
use crate::lidarr::LidarrClient;

#[derive(Args, Debug, PartialEq)]
pub struct TagsArgs {
    /// Create a tag with this label
    #[arg(long, conflicts_with_all = ["delete", "details"])]
    pub create: Option<String>,
    /// Delete the tag with this id
    #[arg(long, conflicts_with = "details")]
    pub delete: Option<i64>,
    /// Show what each tag is used by
    #[arg(long)]
    pub details: bool,
}

#[derive(Args, Debug, PartialEq)]
pub struct CommandArgs {
    /// Command name, e.g. `RssSync`, `AlbumSearch` or `RefreshArtist`
    pub name: String,
    /// Ids the command works on. `RenameFiles` and `RetagFiles` take the artist id first.
    pub ids: Vec<i64>,
}

pub async fn run_tags_cmd(args: TagsArgs, lidarr: &LidarrClient) -> Result<()> {
    if let Some(label) = args.create {
        let tag = lidarr.create_tag(&label).await?;
        info!("Created tag {tag}");
        return Ok(());
    }

    if let Some(id) = args.delete {
        lidarr.del_tag(id).await?;
        info!("Deleted tag {id}");
        return Ok(());
    }

    if args.details {
        let details = lidarr.get_tag_details(None).await?.into_vec();
        print_all(&details, "No tags.");
    } else {
        let tags = lidarr.get_tag(None).await?.into_vec();
        print_all(&tags, "No tags.");
    }

    Ok(())
}

pub async fn run_status_cmd(lidarr: &LidarrClient) -> Result<()> {
    let status = lidarr.get_system_status().await?;
    println!("{status}");
    Ok(())
}

pub async fn run_command_cmd(args: CommandArgs, lidarr: &LidarrClient) -> Result<()> {
    let command = LidarrCommand::from_str(&args.name)
        .map_err(|_| anyhow!("Unknown command `{}`", args.name))?
        .with_ids(&args.ids);

    let queued = lidarr.post_command(&command).await?;
    println!("{queued}");
    Ok(())
}
