use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::lidarr::models::common::IdRefs;
use crate::lidarr::models::raw::{Hydrate, Raw};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: Option<i64>,
    pub label: Option<String>,
}

impl Hydrate for Tag {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            label: raw.string("label"),
        }
    }
}

/// A tag together with everything that uses it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDetails {
    pub id: Option<i64>,
    pub label: Option<String>,
    pub delay_profile_ids: IdRefs,
    pub import_list_ids: IdRefs,
    pub notification_ids: IdRefs,
    pub release_profile_ids: IdRefs,
    pub indexer_ids: IdRefs,
    pub download_client_ids: IdRefs,
    pub auto_tag_ids: IdRefs,
    pub artist_ids: IdRefs,
}

impl Hydrate for TagDetails {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            label: raw.string("label"),
            delay_profile_ids: raw.id_refs("delayProfileIds"),
            import_list_ids: raw.id_refs("importListIds"),
            notification_ids: raw.id_refs("notificationIds"),
            release_profile_ids: raw.id_refs("releaseProfileIds"),
            indexer_ids: raw.id_refs("indexerIds"),
            download_client_ids: raw.id_refs("downloadClientIds"),
            auto_tag_ids: raw.id_refs("autoTagIds"),
            artist_ids: raw.id_refs("artistIds"),
        }
    }
}

impl TagDetails {
    pub fn is_unused(&self) -> bool {
        [
            &self.delay_profile_ids,
            &self.import_list_ids,
            &self.notification_ids,
            &self.release_profile_ids,
            &self.indexer_ids,
            &self.download_client_ids,
            &self.auto_tag_ids,
            &self.artist_ids,
        ]
        .iter()
        .all(|refs| refs.is_empty())
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.id.unwrap_or_default(),
            self.label.as_deref().unwrap_or_default()
        )
    }
}

impl Display for TagDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        str += &format!(
            "[{}] {}",
            self.id.unwrap_or_default(),
            self.label.as_deref().unwrap_or_default()
        );
        if self.is_unused() {
            str += " (unused)";
        } else {
            str += &format!(
                " - {} artist(s), {} import list(s)",
                self.artist_ids.len(),
                self.import_list_ids.len()
            );
        }

        write!(f, "{str}")
    }
}
