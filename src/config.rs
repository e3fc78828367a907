//! Configuration for `arrkit`
//!
//! Settings are read from `config.json` in the user's config directory and can be
//! overridden from the environment or the command line.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use simplelog::{debug, info, warn};

use crate::lidarr::types::{ApiKey, LidarrUrl};

const CONFIG_DIR: &str = "arrkit";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_TIMEOUT: &str = "30s";

fn default_timeout() -> String {
    DEFAULT_TIMEOUT.to_string()
}

/// Represents the configuration file
#[derive(Builder, Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Config {
    lidarr_url: LidarrUrl,
    api_key: ApiKey,
    /// A `humantime` duration such as `30s` or `2m`
    #[builder(setter(into), default = "default_timeout()")]
    #[serde(default = "default_timeout")]
    timeout: String,
}

/// Values that take precedence over the config file.
///
/// Each one can come from a flag or from its environment variable.
#[derive(Args, Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Lidarr server URL
    #[arg(long = "url", env = "LIDARR_URL", global = true)]
    pub lidarr_url: Option<String>,
    /// Lidarr API key, found under Settings > General
    #[arg(long, env = "LIDARR_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,
    /// Request timeout, e.g. `30s`
    #[arg(long, env = "LIDARR_TIMEOUT", global = true)]
    pub timeout: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lidarr_url: LidarrUrl::default(),
            api_key: ApiKey::default(),
            timeout: default_timeout(),
        }
    }
}

impl ConfigOverrides {
    fn is_empty(&self) -> bool {
        self.lidarr_url.is_none() && self.api_key.is_none() && self.timeout.is_none()
    }
}

impl Config {
    pub fn get_lidarr_url(&self) -> &str {
        &self.lidarr_url
    }

    pub fn get_api_key(&self) -> &str {
        &self.api_key
    }

    pub fn get_timeout(&self) -> Duration {
        humantime::parse_duration(&self.timeout).unwrap_or_else(|err| {
            warn!("Invalid timeout `{}` ({err}); using {DEFAULT_TIMEOUT}", self.timeout);
            Duration::from_secs(30)
        })
    }

    /// Applies `overrides` on top of this config, validating every value given.
    pub fn apply(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(url) = &overrides.lidarr_url {
            self.lidarr_url = LidarrUrl::try_new(url.as_str())
                .with_context(|| format!("`{url}` is not a valid Lidarr URL"))?;
        }
        if let Some(key) = &overrides.api_key {
            self.api_key = ApiKey::try_new(key.as_str())
                .context("The API key must be 32 hexadecimal characters")?;
        }
        if let Some(timeout) = &overrides.timeout {
            self.timeout = timeout.trim().to_string();
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        humantime::parse_duration(&self.timeout)
            .with_context(|| format!("`{}` is not a valid timeout", self.timeout))?;
        Ok(())
    }

    /// Loads the config file at `path`, if there is one.
    pub async fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(None);
        }

        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Unable to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Unable to parse {}", path.display()))?;
        config.validate()?;

        Ok(Some(config))
    }

    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, data)
            .await
            .with_context(|| format!("Unable to write {}", path.display()))?;

        info!("Config saved to {}", path.display());
        Ok(())
    }

    /// Builds the effective config from the default file and `overrides`.
    pub async fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let path = get_config_path()?;

        let config = match Self::load_from(&path).await? {
            Some(config) => config,
            None if overrides.api_key.is_some() => Config::default(),
            None => {
                return Err(anyhow!(
                    "No config found at {}. Pass `--api-key` (or set LIDARR_API_KEY), or run `arrkit config save`.",
                    path.display()
                ))
            }
        };

        if overrides.is_empty() {
            return Ok(config);
        }
        config.apply(overrides)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Unable to locate the user config directory")?;
    Ok(dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let key = self.get_api_key();
        let masked = format!("{}...", key.chars().take(4).collect::<String>());

        let mut output = String::default();
        output += &format!("Lidarr URL:  {}\n", self.get_lidarr_url());
        output += &format!("API key:     {masked}\n");
        output += &format!("Timeout:     {}", self.timeout);

        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod config_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const KEY: &str = "0123456789abcdef0123456789abcdef";

    fn overrides(url: Option<&str>, key: Option<&str>, timeout: Option<&str>) -> ConfigOverrides {
        ConfigOverrides {
            lidarr_url: url.map(str::to_string),
            api_key: key.map(str::to_string),
            timeout: timeout.map(str::to_string),
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.get_lidarr_url(), "http://127.0.0.1:8686");
        assert_eq!(config.get_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder() {
        let config = ConfigBuilder::default()
            .lidarr_url(LidarrUrl::try_new("https://music.example.com").unwrap())
            .api_key(ApiKey::try_new(KEY).unwrap())
            .timeout("2m")
            .build()
            .unwrap();
        assert_eq!(config.get_timeout(), Duration::from_secs(120));
        assert_eq!(config.get_api_key(), KEY);
    }

    #[test]
    fn test_overrides_replace_values() {
        let config = Config::default()
            .apply(&overrides(Some("http://nas:8686/lidarr"), Some(KEY), Some("10s")))
            .unwrap();

        assert_eq!(config.get_lidarr_url(), "http://nas:8686/lidarr");
        assert_eq!(config.get_api_key(), KEY);
        assert_eq!(config.get_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_overrides_are_validated() {
        assert!(Config::default()
            .apply(&overrides(Some("nas:8686"), None, None))
            .is_err());
        assert!(Config::default()
            .apply(&overrides(None, Some("short"), None))
            .is_err());
        assert!(Config::default()
            .apply(&overrides(None, None, Some("soon")))
            .is_err());
    }

    #[test]
    fn test_display_masks_key() {
        let config = Config::default()
            .apply(&overrides(None, Some(KEY), None))
            .unwrap();
        let output = config.to_string();
        assert!(output.contains("API key:     0123..."));
        assert!(!output.contains(KEY));
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("arrkit-config-test-{}", std::process::id()))
            .join(CONFIG_FILE);

        assert_eq!(Config::load_from(&path).await.unwrap(), None);

        let config = Config::default()
            .apply(&overrides(Some("http://10.0.0.2:8686"), Some(KEY), None))
            .unwrap();
        config.save_to(&path).await.unwrap();

        let loaded = Config::load_from(&path).await.unwrap();
        assert_eq!(loaded, Some(config));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[tokio::test]
    async fn test_missing_timeout_defaults() {
        let path = std::env::temp_dir()
            .join(format!("arrkit-config-timeout-{}", std::process::id()))
            .join(CONFIG_FILE);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).unwrap();
        }
        std::fs::write(
            &path,
            format!(r#"{{"lidarr_url": "http://127.0.0.1:8686", "api_key": "{KEY}"}}"#),
        )
        .unwrap();

        let loaded = Config::load_from(&path).await.unwrap().unwrap();
        assert_eq!(loaded.get_timeout(), Duration::from_secs(30));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
