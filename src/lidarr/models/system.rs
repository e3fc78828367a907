use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lidarr::models::raw::{Hydrate, Raw};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub app_name: Option<String>,
    pub instance_name: Option<String>,
    pub version: Option<String>,
    pub build_time: Option<DateTime<Utc>>,
    pub is_debug: Option<bool>,
    pub is_production: Option<bool>,
    pub is_admin: Option<bool>,
    pub is_user_interactive: Option<bool>,
    pub startup_path: Option<String>,
    pub app_data: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub is_net_core: Option<bool>,
    pub is_linux: Option<bool>,
    pub is_osx: Option<bool>,
    pub is_windows: Option<bool>,
    pub is_docker: Option<bool>,
    pub mode: Option<String>,
    pub branch: Option<String>,
    pub authentication: Option<String>,
    pub sqlite_version: Option<String>,
    pub migration_version: Option<i64>,
    pub url_base: Option<String>,
    pub runtime_version: Option<String>,
    pub runtime_name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub package_update_mechanism: Option<String>,
}

impl Hydrate for SystemStatus {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            app_name: raw.string("appName"),
            instance_name: raw.string("instanceName"),
            version: raw.string("version"),
            build_time: raw.datetime("buildTime"),
            is_debug: raw.bool("isDebug"),
            is_production: raw.bool("isProduction"),
            is_admin: raw.bool("isAdmin"),
            is_user_interactive: raw.bool("isUserInteractive"),
            startup_path: raw.string("startupPath"),
            app_data: raw.string("appData"),
            os_name: raw.string("osName"),
            os_version: raw.string("osVersion"),
            is_net_core: raw.bool("isNetCore"),
            is_linux: raw.bool("isLinux"),
            is_osx: raw.bool("isOsx"),
            is_windows: raw.bool("isWindows"),
            is_docker: raw.bool("isDocker"),
            mode: raw.string("mode"),
            branch: raw.string("branch"),
            authentication: raw.string("authentication"),
            sqlite_version: raw.string("sqliteVersion"),
            migration_version: raw.int("migrationVersion"),
            url_base: raw.string("urlBase"),
            runtime_version: raw.string("runtimeVersion"),
            runtime_name: raw.string("runtimeName"),
            start_time: raw.datetime("startTime"),
            package_update_mechanism: raw.string("packageUpdateMechanism"),
        }
    }
}

impl Display for SystemStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut output = String::default();
        output += &format!(
            "{} {}\n",
            self.app_name.as_deref().unwrap_or("Lidarr"),
            self.version.as_deref().unwrap_or("(unknown version)")
        );
        if let Some(branch) = &self.branch {
            output += &format!("Branch:   {branch}\n");
        }
        if let Some(os) = &self.os_name {
            output += &format!(
                "OS:       {os} {}\n",
                self.os_version.as_deref().unwrap_or_default()
            );
        }
        if let Some(start_time) = self.start_time {
            output += &format!("Started:  {}\n", start_time.format("%Y-%m-%d %H:%M:%S UTC"));
        }

        write!(f, "{}", output.trim_end())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootFolder {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub default_metadata_profile_id: Option<i64>,
    pub default_quality_profile_id: Option<i64>,
    pub default_monitor_option: Option<String>,
    pub default_new_item_monitor_option: Option<String>,
    pub default_tags: Vec<i64>,
    pub accessible: Option<bool>,
    pub free_space: Option<i64>,
    pub total_space: Option<i64>,
}

impl Hydrate for RootFolder {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            name: raw.string("name"),
            path: raw.string("path"),
            default_metadata_profile_id: raw.int("defaultMetadataProfileId"),
            default_quality_profile_id: raw.int("defaultQualityProfileId"),
            default_monitor_option: raw.string("defaultMonitorOption"),
            default_new_item_monitor_option: raw.string("defaultNewItemMonitorOption"),
            default_tags: raw.ints("defaultTags"),
            accessible: raw.bool("accessible"),
            free_space: raw.int("freeSpace"),
            total_space: raw.int("totalSpace"),
        }
    }
}
