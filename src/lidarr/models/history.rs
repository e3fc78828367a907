use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lidarr::models::album::Album;
use crate::lidarr::models::artist::Artist;
use crate::lidarr::models::common::Quality;
use crate::lidarr::models::raw::{Hydrate, Raw};
use crate::lidarr::models::track::Track;
use crate::lidarr::models::Page;

pub type History = Page<HistoryRecord>;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: Option<i64>,
    pub album_id: Option<i64>,
    pub artist_id: Option<i64>,
    pub track_id: Option<i64>,
    pub source_title: Option<String>,
    pub quality: Quality,
    pub quality_cutoff_not_met: Option<bool>,
    pub date: Option<DateTime<Utc>>,
    pub download_id: Option<String>,
    pub event_type: Option<String>,
    pub data: HistoryData,
    pub album: Album,
    pub artist: Artist,
    pub track: Track,
}

impl Hydrate for HistoryRecord {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            album_id: raw.int("albumId"),
            artist_id: raw.int("artistId"),
            track_id: raw.int("trackId"),
            source_title: raw.string("sourceTitle"),
            quality: raw.record("quality"),
            quality_cutoff_not_met: raw.bool("qualityCutoffNotMet"),
            date: raw.datetime("date"),
            download_id: raw.string("downloadId"),
            event_type: raw.string("eventType"),
            data: raw.record("data"),
            album: raw.record("album"),
            artist: raw.record("artist"),
            track: raw.record("track"),
        }
    }
}

/// Event specific details. The server sends every value as a string; which keys are
/// filled in depends on `event_type`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryData {
    pub indexer: Option<String>,
    pub release_group: Option<String>,
    pub nzb_info_url: Option<String>,
    pub download_client: Option<String>,
    pub download_client_name: Option<String>,
    pub size: Option<String>,
    pub published_date: Option<DateTime<Utc>>,
    pub download_url: Option<String>,
    pub guid: Option<String>,
    pub protocol: Option<String>,
    pub age: Option<String>,
    pub torrent_info_hash: Option<String>,
    pub imported_path: Option<String>,
    pub dropped_path: Option<String>,
    pub status_messages: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

impl Hydrate for HistoryData {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            indexer: raw.string("indexer"),
            release_group: raw.string("releaseGroup"),
            nzb_info_url: raw.string("nzbInfoUrl"),
            download_client: raw.string("downloadClient"),
            download_client_name: raw.string("downloadClientName"),
            size: raw.string("size"),
            published_date: raw.datetime("publishedDate"),
            download_url: raw.string("downloadUrl"),
            guid: raw.string("guid"),
            protocol: raw.string("protocol"),
            age: raw.string("age"),
            torrent_info_hash: raw.string("torrentInfoHash"),
            imported_path: raw.string("importedPath"),
            dropped_path: raw.string("droppedPath"),
            status_messages: raw.string("statusMessages"),
            reason: raw.string("reason"),
            message: raw.string("message"),
        }
    }
}

impl Display for HistoryRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        if let Some(date) = &self.date {
            str += &format!("{} ", date.format("%Y-%m-%d %H:%M"));
        }
        str += &format!("{:<24} ", self.event_type.as_deref().unwrap_or("unknown"));
        str += self.source_title.as_deref().unwrap_or_default();
        str += &format!(" [{}]", self.quality);

        write!(f, "{str}")
    }
}

#[cfg(test)]
mod history_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_history_page() {
        let history = History::hydrate(&json!({
            "page": "2",
            "pageSize": 1,
            "sortKey": "date",
            "sortDirection": "descending",
            "totalRecords": 30,
            "records": [{
                "id": 9,
                "eventType": "grabbed",
                "date": "2023-11-12T13:14:15.16Z",
                "sourceTitle": "Rush-Signals-1982-FLAC",
                "quality": {"quality": {"name": "FLAC"}},
                "data": {
                    "indexer": "Example",
                    "size": "412345678",
                    "publishedDate": "2023-11-10T00:00:00Z",
                    "somethingElse": "ignored"
                }
            }]
        }));

        assert_eq!(history.page, Some(2));
        assert_eq!(history.sort_direction.as_deref(), Some("descending"));
        let record = &history.records[0];
        assert_eq!(record.event_type.as_deref(), Some("grabbed"));
        assert!(record.date.is_some());
        assert_eq!(record.data.indexer.as_deref(), Some("Example"));
        assert_eq!(record.data.size.as_deref(), Some("412345678"));
        assert!(record.data.published_date.is_some());
        assert_eq!(record.album, Album::default());
        assert_eq!(record.track, Track::default());
    }

    #[test]
    fn test_history_record_without_data() {
        let record = HistoryRecord::hydrate(&json!({"id": 1, "data": null}));
        assert_eq!(record.data, HistoryData::default());
    }

    #[test]
    fn test_history_record_display() {
        let record = HistoryRecord::hydrate(&json!({
            "eventType": "trackFileImported",
            "date": "2023-11-12T13:14:15Z",
            "sourceTitle": "Rush-Signals-1982-FLAC",
            "quality": {"quality": {"name": "FLAC"}}
        }));
        assert_eq!(
            record.to_string(),
            "2023-11-12 13:14 trackFileImported        Rush-Signals-1982-FLAC [FLAC]"
        );
    }

    #[test]
    fn test_history_record_display_long_event() {
        let record = HistoryRecord::hydrate(&json!({
            "eventType": "downloadImportIncomplete",
            "sourceTitle": "Rush-Signals-1982-FLAC",
            "quality": {"quality": {"name": "FLAC"}}
        }));
        assert_eq!(
            record.to_string(),
            "downloadImportIncomplete Rush-Signals-1982-FLAC [FLAC]"
        );
    }
}
