//! Typed records for everything Lidarr sends back.
//!
//! Every record implements [`Hydrate`] and can be built from any JSON value without failing.

use serde::Serialize;
use serde_json::Value;

pub use crate::lidarr::models::album::{Album, AlbumAddOptions, Medium, Release, SearchResult};
pub use crate::lidarr::models::artist::{AlbumRef, Artist, ArtistAddOptions};
pub use crate::lidarr::models::blocklist::{Blocklist, BlocklistItem};
pub use crate::lidarr::models::command::{Command, CommandBody};
pub use crate::lidarr::models::common::{
    Field, IdName, IdRefs, Image, Link, Member, ProviderMessage, Quality, QualityInfo, Ratings,
    Revision, SelectOption, Statistics, StatusMessage,
};
pub use crate::lidarr::models::history::{History, HistoryData, HistoryRecord};
pub use crate::lidarr::models::import_list::ImportList;
pub use crate::lidarr::models::profiles::{
    MetadataProfile, ProfileAlbumType, ProfileReleaseStatus, QualityProfile, QualityProfileItem,
};
pub use crate::lidarr::models::queue::{Queue, QueueItem};
pub use crate::lidarr::models::raw::{Hydrate, Raw};
pub use crate::lidarr::models::system::{RootFolder, SystemStatus};
pub use crate::lidarr::models::tag::{Tag, TagDetails};
pub use crate::lidarr::models::track::{ArtistTitleInfo, AudioTags, MediaInfo, Track, TrackFile};

pub mod album;
pub mod artist;
pub mod blocklist;
pub mod command;
pub mod common;
pub mod history;
pub mod import_list;
pub mod profiles;
pub mod queue;
pub mod raw;
pub mod system;
pub mod tag;
pub mod track;

pub type WantedMissing = Page<Album>;
pub type WantedCutoff = Page<Album>;

/// One page of a paginated listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_key: Option<String>,
    pub sort_direction: Option<String>,
    pub total_records: Option<i64>,
    pub records: Vec<T>,
}

impl<T: Hydrate> Hydrate for Page<T> {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            page: raw.int("page"),
            page_size: raw.int("pageSize"),
            sort_key: raw.string("sortKey"),
            sort_direction: raw.string("sortDirection"),
            total_records: raw.int("totalRecords"),
            records: raw.records("records"),
        }
    }
}

impl<T> Page<T> {
    /// Total number of pages, when the server reported enough to work it out.
    pub fn total_pages(&self) -> Option<i64> {
        match (self.total_records, self.page_size) {
            (Some(total), Some(size)) if size > 0 => {
                Some(total / size + i64::from(total % size > 0))
            }
            _ => None,
        }
    }

    pub fn has_next_page(&self) -> bool {
        match (self.page, self.total_pages()) {
            (Some(page), Some(pages)) => page < pages,
            _ => false,
        }
    }
}

/// The result of an endpoint that returns a list when called without an id and a single
/// record when called with one.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Hydrate> OneOrMany<T> {
    /// Picks the variant from the shape of the JSON root alone.
    pub fn hydrate(value: &Value) -> Self {
        match value {
            Value::Array(items) => OneOrMany::Many(items.iter().map(T::hydrate).collect()),
            other => OneOrMany::One(T::hydrate(other)),
        }
    }

    pub fn hydrate_opt(value: Option<&Value>) -> Self {
        match value {
            Some(value) => Self::hydrate(value),
            None => OneOrMany::Many(vec![]),
        }
    }
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }

    pub fn first(&self) -> Option<&T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(items) => items.first(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One entry of the array returned by the `test` endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: Option<bool>,
    pub property_name: Option<String>,
    pub error_message: Option<String>,
    pub severity: Option<String>,
    pub is_warning: Option<bool>,
}

impl Hydrate for ValidationOutcome {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            is_valid: raw.bool("isValid"),
            property_name: raw.string("propertyName"),
            error_message: raw.string("errorMessage"),
            severity: raw.string("severity"),
            is_warning: raw.bool("isWarning"),
        }
    }
}

/// Folds the outcomes of a `test` call into a single pass/fail.
///
/// An empty body or an empty array passes. Otherwise every outcome must carry
/// `isValid: true`; an outcome without the flag counts as a failure.
pub fn all_valid(value: Option<&Value>) -> bool {
    OneOrMany::<ValidationOutcome>::hydrate_opt(value)
        .into_vec()
        .iter()
        .all(|outcome| outcome.is_valid == Some(true))
}

#[cfg(test)]
mod models_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_one_or_many_from_array() {
        let result = OneOrMany::<Artist>::hydrate(&json!([
            {"id": 1, "artistName": "Rush"},
            {"id": 2}
        ]));
        match &result {
            OneOrMany::Many(artists) => {
                assert_eq!(artists.len(), 2);
                assert_eq!(artists[0].get_name(), "Rush");
                assert_eq!(artists[1].id, Some(2));
            }
            OneOrMany::One(_) => panic!("expected a list"),
        }
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_one_or_many_from_object() {
        let result = OneOrMany::<Artist>::hydrate(&json!({"id": 1, "artistName": "Rush"}));
        assert_eq!(
            result,
            OneOrMany::One(Artist {
                id: Some(1),
                artist_name: Some("Rush".to_string()),
                ..Default::default()
            })
        );
        assert_eq!(result.first().and_then(|a| a.id), Some(1));
        assert_eq!(result.into_vec().len(), 1);
    }

    #[test]
    fn test_one_or_many_absent() {
        let result = OneOrMany::<Tag>::hydrate_opt(None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_validation_aggregation() {
        assert!(all_valid(Some(&json!([]))));
        assert!(all_valid(None));
        assert!(all_valid(Some(&json!([{"isValid": true}, {"isValid": true}]))));
        assert!(!all_valid(Some(&json!([{"isValid": true}, {"isValid": false}]))));
        assert!(!all_valid(Some(&json!([{"propertyName": "apiKey"}]))));
        assert!(all_valid(Some(&json!({"isValid": true}))));
        assert!(!all_valid(Some(&json!({"isValid": false, "errorMessage": "nope"}))));
    }

    #[test]
    fn test_page_paging_helpers() {
        let page = WantedMissing::hydrate(&json!({
            "page": 1,
            "pageSize": 10,
            "totalRecords": 25,
            "records": [{"title": "Hemispheres"}]
        }));
        assert_eq!(page.total_pages(), Some(3));
        assert!(page.has_next_page());
        assert_eq!(page.records[0].get_title(), "Hemispheres");

        let huge = WantedMissing::hydrate(&json!({
            "page": 1,
            "pageSize": 2,
            "totalRecords": i64::MAX
        }));
        assert_eq!(huge.total_pages(), Some(i64::MAX / 2 + 1));

        let empty = WantedCutoff::default();
        assert_eq!(empty.total_pages(), None);
        assert!(!empty.has_next_page());
    }

    #[test]
    fn test_every_shape_defaults_from_empty_input() {
        fn check<T: Hydrate + Default + PartialEq + std::fmt::Debug>() {
            assert_eq!(T::hydrate(&json!({})), T::default());
            assert_eq!(T::hydrate(&json!(null)), T::default());
            assert_eq!(T::hydrate_opt(None), T::default());
        }

        check::<Ratings>();
        check::<Image>();
        check::<Link>();
        check::<Statistics>();
        check::<Quality>();
        check::<StatusMessage>();
        check::<Field>();
        check::<Member>();
        check::<Artist>();
        check::<AlbumRef>();
        check::<Album>();
        check::<Release>();
        check::<Medium>();
        check::<SearchResult>();
        check::<Track>();
        check::<TrackFile>();
        check::<AudioTags>();
        check::<QueueItem>();
        check::<Queue>();
        check::<HistoryRecord>();
        check::<History>();
        check::<BlocklistItem>();
        check::<Blocklist>();
        check::<ImportList>();
        check::<MetadataProfile>();
        check::<QualityProfile>();
        check::<Command>();
        check::<Tag>();
        check::<TagDetails>();
        check::<SystemStatus>();
        check::<RootFolder>();
        check::<ValidationOutcome>();
    }

    #[test]
    fn test_wrong_types_degrade_to_defaults() {
        let album = Album::hydrate(&json!({
            "id": "not a number",
            "monitored": {"nested": true},
            "releases": "not a list",
            "artist": [1, 2, 3],
            "genres": "Rock",
            "releaseDate": "sometime"
        }));

        assert_eq!(album.id, None);
        assert_eq!(album.monitored, None);
        assert!(album.releases.is_empty());
        assert_eq!(album.artist, Artist::default());
        assert_eq!(album.genres, vec!["Rock"]);
        assert_eq!(album.release_date, None);
    }
}
