use anyhow::Result;
use clap::Args;
use simplelog::info;

use crate::cli::print_all;
use crate::lidarr::models::Album;
use crate::lidarr::queries::{AlbumQuery, TrackFileQuery, TrackQuery};
use crate::lidarr::LidarrClient;

#[derive(Args, Debug, PartialEq)]
pub struct ArtistArgs {
    /// Show a single library artist
    #[arg(long)]
    pub id: Option<i64>,
    /// Look up artists by name instead of listing the library
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args, Debug, PartialEq)]
pub struct AlbumArgs {
    /// Show a single album along with its tracks
    #[arg(long, conflicts_with_all = ["artist_id", "search"])]
    pub id: Option<i64>,
    /// Only list albums by this artist
    #[arg(long)]
    pub artist_id: Option<i64>,
    /// Look up albums by name instead of listing the library
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args, Debug, PartialEq)]
#[command(group = clap::ArgGroup::new("owner").required(true).multiple(true))]
pub struct TracksArgs {
    #[arg(long, group = "owner")]
    pub artist_id: Option<i64>,
    #[arg(long, group = "owner")]
    pub album_id: Option<i64>,
    /// List track files instead of tracks
    #[arg(long)]
    pub files: bool,
}

pub async fn run_artist_cmd(args: ArtistArgs, lidarr: &LidarrClient) -> Result<()> {
    let artists = match args.search {
        Some(term) => lidarr.lookup_artist(&term).await?,
        None => lidarr.get_artist(args.id).await?.into_vec(),
    };

    print_all(&artists, "No artists found.");
    Ok(())
}

pub async fn run_album_cmd(args: AlbumArgs, lidarr: &LidarrClient) -> Result<()> {
    if let Some(id) = args.id {
        let album = lidarr.get_album_by_id(id).await?;
        return print_album_with_tracks(&album, lidarr).await;
    }

    let albums = match args.search {
        Some(term) => lidarr.lookup_album(&term).await?,
        None => {
            let query = AlbumQuery {
                artist_id: args.artist_id,
                ..Default::default()
            };
            lidarr.get_album(&query).await?
        }
    };

    print_all(&albums, "No albums found.");
    Ok(())
}

async fn print_album_with_tracks(album: &Album, lidarr: &LidarrClient) -> Result<()> {
    println!("{album}");

    if let Some(release) = album.monitored_release() {
        info!(
            "Monitored release: {} ({} track(s))",
            release.title.as_deref().unwrap_or_default(),
            release.track_count.unwrap_or_default()
        );
    }

    let Some(album_id) = album.id else {
        return Ok(());
    };
    let query = TrackQuery {
        album_id: Some(album_id),
        ..Default::default()
    };
    let tracks = lidarr.get_tracks(&query).await?;
    for track in tracks {
        println!("  {track}");
    }

    Ok(())
}

pub async fn run_tracks_cmd(args: TracksArgs, lidarr: &LidarrClient) -> Result<()> {
    if args.files {
        let query = TrackFileQuery {
            artist_id: args.artist_id,
            album_ids: args.album_id.into_iter().collect(),
            ..Default::default()
        };
        let files = lidarr.get_track_files(&query).await?;
        if files.is_empty() {
            println!("No track files found.");
        }
        for file in files {
            println!(
                "{} [{}]",
                file.path.as_deref().unwrap_or_default(),
                file.quality
            );
        }
        return Ok(());
    }

    let query = TrackQuery {
        artist_id: args.artist_id,
        album_id: args.album_id,
        ..Default::default()
    };
    let tracks = lidarr.get_tracks(&query).await?;
    print_all(&tracks, "No tracks found.");

    Ok(())
}
