use serde::Serialize;

use crate::lidarr::models::common::{Field, ProviderMessage};
use crate::lidarr::models::raw::{Hydrate, Raw};

/// An import list provider. The schema endpoint returns these with `presets`, which are
/// themselves import lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportList {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub fields: Vec<Field>,
    pub implementation_name: Option<String>,
    pub implementation: Option<String>,
    pub config_contract: Option<String>,
    pub info_link: Option<String>,
    pub message: ProviderMessage,
    pub tags: Vec<i64>,
    pub presets: Vec<ImportList>,
    pub enable_automatic_add: Option<bool>,
    pub should_monitor: Option<String>,
    pub should_monitor_existing: Option<bool>,
    pub should_search: Option<bool>,
    pub root_folder_path: Option<String>,
    pub monitor_new_items: Option<String>,
    pub quality_profile_id: Option<i64>,
    pub metadata_profile_id: Option<i64>,
    pub list_type: Option<String>,
    pub list_order: Option<i64>,
    pub min_refresh_interval: Option<String>,
}

impl Hydrate for ImportList {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            name: raw.string("name"),
            fields: raw.records("fields"),
            implementation_name: raw.string("implementationName"),
            implementation: raw.string("implementation"),
            config_contract: raw.string("configContract"),
            info_link: raw.string("infoLink"),
            message: raw.record("message"),
            tags: raw.ints("tags"),
            presets: raw.records("presets"),
            enable_automatic_add: raw.bool("enableAutomaticAdd"),
            should_monitor: raw.string("shouldMonitor"),
            should_monitor_existing: raw.bool("shouldMonitorExisting"),
            should_search: raw.bool("shouldSearch"),
            root_folder_path: raw.string("rootFolderPath"),
            monitor_new_items: raw.string("monitorNewItems"),
            quality_profile_id: raw.int("qualityProfileId"),
            metadata_profile_id: raw.int("metadataProfileId"),
            list_type: raw.string("listType"),
            list_order: raw.int("listOrder"),
            min_refresh_interval: raw.string("minRefreshInterval"),
        }
    }
}

impl ImportList {
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.as_deref() == Some(name))
    }
}
