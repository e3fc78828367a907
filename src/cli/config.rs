use anyhow::Result;
use clap::{Args, Subcommand};
use simplelog::{error, info};

use crate::config::{get_config_path, Config as AppConfig, ConfigOverrides};
use crate::lidarr::LidarrClient;

#[derive(Args, PartialEq)]
pub struct CliConfig {
    #[command(subcommand)]
    config_cmds: ConfigCmds,
}

#[derive(Subcommand, PartialEq)]
enum ConfigCmds {
    /// Print the effective configuration
    Show,
    /// Write the given flags or environment variables to the config file
    Save(SaveArgs),
}

#[derive(Args, PartialEq)]
struct SaveArgs {
    /// Save without checking that the server answers
    #[arg(long)]
    skip_check: bool,
}

pub async fn run_config_cmd(cfg: CliConfig, overrides: &ConfigOverrides) -> Result<()> {
    match cfg.config_cmds {
        ConfigCmds::Show => {
            let config = AppConfig::load(overrides).await?;
            println!("{config}");
        }
        ConfigCmds::Save(args) => {
            let path = get_config_path()?;
            let config = AppConfig::load_from(&path)
                .await?
                .unwrap_or_default()
                .apply(overrides)?;

            if !args.skip_check {
                info!("Testing connection to Lidarr. Please wait...");
                let lidarr = LidarrClient::from_config(&config)?;
                match lidarr.get_system_status().await {
                    Ok(status) => info!(
                        "Connected to {} {}",
                        status.app_name.as_deref().unwrap_or("Lidarr"),
                        status.version.as_deref().unwrap_or_default()
                    ),
                    Err(err) => {
                        error!("Could not connect to Lidarr. Check your URL and API key.");
                        return Err(err.into());
                    }
                }
            }

            config.save_to(&path).await?;
        }
    }

    Ok(())
}
