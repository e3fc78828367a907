use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::activity::{CalendarArgs, HistoryArgs, QueueArgs, WantedArgs};
use crate::cli::config::CliConfig;
use crate::cli::library::{AlbumArgs, ArtistArgs, TracksArgs};
use crate::cli::manage::{CommandArgs, TagsArgs};
use crate::config::{Config, ConfigOverrides};
use crate::lidarr::LidarrClient;

mod activity;
mod config;
mod library;
mod manage;

#[derive(PartialEq, Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: ConfigOverrides,
    #[command(subcommand)]
    pub commands: Commands,
}

#[derive(PartialEq, Subcommand)]
pub enum Commands {
    /// List, show or look up artists
    Artist(ArtistArgs),
    /// List, show or look up albums
    Album(AlbumArgs),
    /// List the tracks or track files of an artist or album
    Tracks(TracksArgs),
    /// Show the download queue
    Queue(QueueArgs),
    /// Show recent history
    History(HistoryArgs),
    /// Show missing albums, or albums below their quality cutoff
    Wanted(WantedArgs),
    /// Show upcoming releases
    Calendar(CalendarArgs),
    /// List, create or delete tags
    Tags(TagsArgs),
    /// Show the server status
    Status,
    /// Queue a background command such as `RssSync`
    Command(CommandArgs),
    /// Show or save the configuration
    Config(CliConfig),
}

pub async fn run_cli_command(cli: Cli) -> Result<()> {
    let Cli {
        overrides,
        commands,
    } = cli;

    match commands {
        Commands::Config(cfg) => config::run_config_cmd(cfg, &overrides).await,
        commands => {
            let config = Config::load(&overrides).await?;
            let lidarr = LidarrClient::from_config(&config)?;
            run_lidarr_cmd(commands, &lidarr).await
        }
    }
}

async fn run_lidarr_cmd(commands: Commands, lidarr: &LidarrClient) -> Result<()> {
    match commands {
        Commands::Artist(args) => library::run_artist_cmd(args, lidarr).await?,
        Commands::Album(args) => library::run_album_cmd(args, lidarr).await?,
        Commands::Tracks(args) => library::run_tracks_cmd(args, lidarr).await?,
        Commands::Queue(args) => activity::run_queue_cmd(args, lidarr).await?,
        Commands::History(args) => activity::run_history_cmd(args, lidarr).await?,
        Commands::Wanted(args) => activity::run_wanted_cmd(args, lidarr).await?,
        Commands::Calendar(args) => activity::run_calendar_cmd(args, lidarr).await?,
        Commands::Tags(args) => manage::run_tags_cmd(args, lidarr).await?,
        Commands::Status => manage::run_status_cmd(lidarr).await?,
        Commands::Command(args) => manage::run_command_cmd(args, lidarr).await?,
        Commands::Config(_) => {}
    }

    Ok(())
}

/// Prints one record per line, or `empty` when there are none.
fn print_all<T: std::fmt::Display>(items: &[T], empty: &str) {
    if items.is_empty() {
        println!("{empty}");
        return;
    }

    for item in items {
        println!("{item}");
    }
}

#[cfg(test)]
mod cli_tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_overrides() {
        let cli = Cli::try_parse_from([
            "arrkit",
            "artist",
            "--url",
            "http://nas:8686",
            "--search",
            "Rush",
        ])
        .unwrap();

        assert_eq!(cli.overrides.lidarr_url.as_deref(), Some("http://nas:8686"));
        match cli.commands {
            Commands::Artist(args) => assert_eq!(args.search.as_deref(), Some("Rush")),
            _ => panic!("expected the artist command"),
        }
    }

    #[test]
    fn test_parse_command_ids() {
        let cli = Cli::try_parse_from(["arrkit", "command", "AlbumSearch", "3", "4"]).unwrap();
        match cli.commands {
            Commands::Command(args) => {
                assert_eq!(args.name, "AlbumSearch");
                assert_eq!(args.ids, vec![3, 4]);
            }
            _ => panic!("expected the command command"),
        }
    }
}
