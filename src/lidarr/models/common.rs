//! Small records shared between several resources.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::Value;

use crate::lidarr::coerce;
use crate::lidarr::models::raw::{Hydrate, Raw};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub votes: Option<i64>,
    pub value: Option<f64>,
}

impl Hydrate for Ratings {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            votes: raw.int("votes"),
            value: raw.float("value"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: Option<String>,
    pub cover_type: Option<String>,
    pub extension: Option<String>,
    pub remote_url: Option<String>,
}

impl Hydrate for Image {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            url: raw.string("url"),
            cover_type: raw.string("coverType"),
            extension: raw.string("extension"),
            remote_url: raw.string("remoteUrl"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl Hydrate for Link {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            url: raw.string("url"),
            name: raw.string("name"),
        }
    }
}

/// File counts for an artist or an album. `album_count` is only sent for artists.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub album_count: Option<i64>,
    pub track_file_count: Option<i64>,
    pub track_count: Option<i64>,
    pub total_track_count: Option<i64>,
    pub size_on_disk: Option<i64>,
    pub percent_of_tracks: Option<f64>,
}

impl Hydrate for Statistics {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            album_count: raw.int("albumCount"),
            track_file_count: raw.int("trackFileCount"),
            track_count: raw.int("trackCount"),
            total_track_count: raw.int("totalTrackCount"),
            size_on_disk: raw.int("sizeOnDisk"),
            percent_of_tracks: raw.float("percentOfTracks"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdName {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl Hydrate for IdName {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            name: raw.string("name"),
        }
    }
}

// QUALITY ####################################################################

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityInfo {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl Hydrate for QualityInfo {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            name: raw.string("name"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub version: Option<i64>,
    pub real: Option<i64>,
    pub is_repack: Option<bool>,
}

impl Hydrate for Revision {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            version: raw.int("version"),
            real: raw.int("real"),
            is_repack: raw.bool("isRepack"),
        }
    }
}

/// Both halves are always present once hydrated.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quality {
    pub quality: QualityInfo,
    pub revision: Revision,
}

impl Hydrate for Quality {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            quality: raw.record("quality"),
            revision: raw.record("revision"),
        }
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = self.quality.name.as_deref().unwrap_or("Unknown");
        match self.revision.version {
            Some(version) if version > 1 => write!(f, "{name} v{version}"),
            _ => write!(f, "{name}"),
        }
    }
}

// MESSAGES ###################################################################

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    pub title: Option<String>,
    pub messages: Vec<String>,
}

impl Hydrate for StatusMessage {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            title: raw.string("title"),
            messages: raw.strings("messages"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMessage {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub message_type: Option<String>,
}

impl Hydrate for ProviderMessage {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            message: raw.string("message"),
            message_type: raw.string("type"),
        }
    }
}

// PROVIDER FIELDS ############################################################

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub value: Option<i64>,
    pub name: Option<String>,
    pub order: Option<i64>,
    pub hint: Option<String>,
}

impl Hydrate for SelectOption {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            value: raw.int("value"),
            name: raw.string("name"),
            order: raw.int("order"),
            hint: raw.string("hint"),
        }
    }
}

/// A configurable setting on a provider (import list, indexer, ...).
///
/// `value` is kept as raw JSON since its type depends on `field_type`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub order: Option<i64>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub unit: Option<String>,
    pub help_text: Option<String>,
    pub help_text_warning: Option<String>,
    pub help_link: Option<String>,
    pub value: Option<Value>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub advanced: Option<bool>,
    pub select_options: Vec<SelectOption>,
    pub select_options_provider_action: Option<String>,
    pub section: Option<String>,
    pub hidden: Option<String>,
    pub privacy: Option<String>,
    pub placeholder: Option<String>,
    pub is_float: Option<bool>,
}

impl Hydrate for Field {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            order: raw.int("order"),
            name: raw.string("name"),
            label: raw.string("label"),
            unit: raw.string("unit"),
            help_text: raw.string("helpText"),
            help_text_warning: raw.string("helpTextWarning"),
            help_link: raw.string("helpLink"),
            value: raw.value("value"),
            field_type: raw.string("type"),
            advanced: raw.bool("advanced"),
            select_options: raw.records("selectOptions"),
            select_options_provider_action: raw.string("selectOptionsProviderAction"),
            section: raw.string("section"),
            hidden: raw.string("hidden"),
            privacy: raw.string("privacy"),
            placeholder: raw.string("placeholder"),
            is_float: raw.bool("isFloat"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: Option<String>,
    pub instrument: Option<String>,
    pub images: Vec<Image>,
}

impl Hydrate for Member {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            name: raw.string("name"),
            instrument: raw.string("instrument"),
            images: raw.records("images"),
        }
    }
}

// ID REFERENCES ##############################################################

/// A cross-reference list that some endpoints send as bare ids and others as `{id, name}`
/// pairs. Which one it is gets decided from the value itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IdRefs {
    Ids(Vec<i64>),
    Refs(Vec<IdName>),
}

impl Default for IdRefs {
    fn default() -> Self {
        IdRefs::Ids(vec![])
    }
}

impl IdRefs {
    pub fn hydrate(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Array(items)) if items.iter().any(Value::is_object) => IdRefs::Refs(
                items
                    .iter()
                    .map(|item| match item {
                        Value::Object(_) => IdName::hydrate(item),
                        bare => IdName {
                            id: coerce::to_int(bare),
                            name: None,
                        },
                    })
                    .collect(),
            ),
            Some(value) => IdRefs::Ids(coerce::to_list(value, coerce::to_int)),
            None => IdRefs::default(),
        }
    }

    pub fn ids(&self) -> Vec<i64> {
        match self {
            IdRefs::Ids(ids) => ids.clone(),
            IdRefs::Refs(refs) => refs.iter().filter_map(|r| r.id).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            IdRefs::Ids(ids) => ids.len(),
            IdRefs::Refs(refs) => refs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod common_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_quality_is_never_half_built() {
        let quality = Quality::hydrate(&json!({"quality": {"id": 6, "name": "FLAC"}}));
        assert_eq!(quality.quality.name.as_deref(), Some("FLAC"));
        assert_eq!(quality.revision, Revision::default());

        let quality = Quality::hydrate(&json!(null));
        assert_eq!(quality, Quality::default());
    }

    #[test]
    fn test_quality_display() {
        let quality = Quality::hydrate(&json!({
            "quality": {"id": 6, "name": "FLAC"},
            "revision": {"version": 2, "real": 0, "isRepack": false}
        }));
        assert_eq!(quality.to_string(), "FLAC v2");
        assert_eq!(Quality::default().to_string(), "Unknown");
    }

    #[test]
    fn test_field_value_passes_through() {
        let field = Field::hydrate(&json!({
            "name": "profileIds",
            "type": "select",
            "value": [1, 2],
            "selectOptions": [{"value": 1, "name": "Any"}],
            "unknownKey": true
        }));
        assert_eq!(field.value, Some(json!([1, 2])));
        assert_eq!(field.field_type.as_deref(), Some("select"));
        assert_eq!(field.select_options.len(), 1);
        assert_eq!(field.select_options[0].name.as_deref(), Some("Any"));
    }

    #[test]
    fn test_id_refs_from_ids() {
        let refs = IdRefs::hydrate(Some(&json!([1, 2, 3])));
        assert_eq!(refs, IdRefs::Ids(vec![1, 2, 3]));
        assert_eq!(refs.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_id_refs_from_pairs() {
        let refs = IdRefs::hydrate(Some(&json!([{"id": 4, "name": "four"}, {"name": "nameless"}])));
        assert_eq!(refs.len(), 2);
        assert_eq!(refs.ids(), vec![4]);
        match refs {
            IdRefs::Refs(pairs) => assert_eq!(pairs[0].name.as_deref(), Some("four")),
            IdRefs::Ids(_) => panic!("expected id/name pairs"),
        }
    }

    #[test]
    fn test_id_refs_mixed_keeps_bare_ids() {
        let refs = IdRefs::hydrate(Some(&json!([1, {"id": 2, "name": "two"}, "3"])));
        assert_eq!(refs.len(), 3);
        assert_eq!(refs.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_id_refs_absent() {
        assert!(IdRefs::hydrate(None).is_empty());
        assert_eq!(IdRefs::hydrate(Some(&json!("x"))), IdRefs::Ids(vec![]));
    }
}
