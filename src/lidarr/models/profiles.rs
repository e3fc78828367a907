use serde::Serialize;

use crate::lidarr::models::common::{IdName, QualityInfo};
use crate::lidarr::models::raw::{Hydrate, Raw};

// METADATA PROFILES ##########################################################

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataProfile {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub primary_album_types: Vec<ProfileAlbumType>,
    pub secondary_album_types: Vec<ProfileAlbumType>,
    pub release_statuses: Vec<ProfileReleaseStatus>,
}

impl Hydrate for MetadataProfile {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            name: raw.string("name"),
            primary_album_types: raw.records("primaryAlbumTypes"),
            secondary_album_types: raw.records("secondaryAlbumTypes"),
            release_statuses: raw.records("releaseStatuses"),
        }
    }
}

impl MetadataProfile {
    /// Names of the primary album types this profile lets through.
    pub fn allowed_primary_types(&self) -> Vec<&str> {
        allowed(&self.primary_album_types)
    }

    pub fn allowed_secondary_types(&self) -> Vec<&str> {
        allowed(&self.secondary_album_types)
    }

    pub fn allowed_release_statuses(&self) -> Vec<&str> {
        self.release_statuses
            .iter()
            .filter(|s| s.allowed == Some(true))
            .filter_map(|s| s.release_status.name.as_deref())
            .collect()
    }
}

fn allowed(types: &[ProfileAlbumType]) -> Vec<&str> {
    types
        .iter()
        .filter(|t| t.allowed == Some(true))
        .filter_map(|t| t.album_type.name.as_deref())
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAlbumType {
    pub album_type: IdName,
    pub allowed: Option<bool>,
}

impl Hydrate for ProfileAlbumType {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            album_type: raw.record("albumType"),
            allowed: raw.bool("allowed"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReleaseStatus {
    pub release_status: IdName,
    pub allowed: Option<bool>,
}

impl Hydrate for ProfileReleaseStatus {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            release_status: raw.record("releaseStatus"),
            allowed: raw.bool("allowed"),
        }
    }
}

// QUALITY PROFILES ###########################################################

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfile {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub upgrade_allowed: Option<bool>,
    pub cutoff: Option<i64>,
    pub items: Vec<QualityProfileItem>,
    pub min_format_score: Option<i64>,
    pub cutoff_format_score: Option<i64>,
}

impl Hydrate for QualityProfile {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            name: raw.string("name"),
            upgrade_allowed: raw.bool("upgradeAllowed"),
            cutoff: raw.int("cutoff"),
            items: raw.records("items"),
            min_format_score: raw.int("minFormatScore"),
            cutoff_format_score: raw.int("cutoffFormatScore"),
        }
    }
}

/// Either a single quality or a named group of qualities in `items`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfileItem {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub quality: QualityInfo,
    pub items: Vec<QualityProfileItem>,
    pub allowed: Option<bool>,
}

impl Hydrate for QualityProfileItem {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            name: raw.string("name"),
            quality: raw.record("quality"),
            items: raw.records("items"),
            allowed: raw.bool("allowed"),
        }
    }
}

impl QualityProfileItem {
    pub fn is_group(&self) -> bool {
        !self.items.is_empty()
    }
}

#[cfg(test)]
mod profiles_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_metadata_profile_allow_lists() {
        let profile = MetadataProfile::hydrate(&json!({
            "id": 1,
            "name": "Standard",
            "primaryAlbumTypes": [
                {"albumType": {"id": 0, "name": "Album"}, "allowed": true},
                {"albumType": {"id": 1, "name": "EP"}, "allowed": false},
                {"albumType": null, "allowed": true}
            ],
            "secondaryAlbumTypes": [
                {"albumType": {"id": 0, "name": "Studio"}, "allowed": true}
            ],
            "releaseStatuses": [
                {"releaseStatus": {"id": 0, "name": "Official"}, "allowed": true},
                {"releaseStatus": {"id": 1, "name": "Bootleg"}, "allowed": false}
            ]
        }));

        assert_eq!(profile.allowed_primary_types(), vec!["Album"]);
        assert_eq!(profile.allowed_secondary_types(), vec!["Studio"]);
        assert_eq!(profile.allowed_release_statuses(), vec!["Official"]);
        assert_eq!(profile.primary_album_types[2].album_type, IdName::default());
        assert_eq!(profile.rehydrate(), profile);
    }

    #[test]
    fn test_quality_profile_groups() {
        let profile = QualityProfile::hydrate(&json!({
            "id": 1,
            "name": "Lossless",
            "cutoff": 1005,
            "items": [
                {"quality": {"id": 1, "name": "MP3-192"}, "allowed": false, "items": []},
                {
                    "id": 1005,
                    "name": "Lossless",
                    "allowed": true,
                    "items": [
                        {"quality": {"id": 6, "name": "FLAC"}, "allowed": true},
                        {"quality": {"id": 7, "name": "ALAC"}, "allowed": true}
                    ]
                }
            ]
        }));

        assert_eq!(profile.items.len(), 2);
        assert!(!profile.items[0].is_group());
        assert!(profile.items[1].is_group());
        assert_eq!(profile.items[1].items[1].quality.name.as_deref(), Some("ALAC"));
        assert_eq!(profile.items[1].quality, QualityInfo::default());
    }
}
