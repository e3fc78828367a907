use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lidarr::models::album::Album;
use crate::lidarr::models::artist::Artist;
use crate::lidarr::models::common::{Quality, StatusMessage};
use crate::lidarr::models::raw::{Hydrate, Raw};
use crate::lidarr::models::Page;

pub type Queue = Page<QueueItem>;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    pub id: Option<i64>,
    pub artist_id: Option<i64>,
    pub album_id: Option<i64>,
    pub artist: Artist,
    pub album: Album,
    pub quality: Quality,
    pub size: Option<f64>,
    pub title: Option<String>,
    #[serde(rename = "sizeleft")]
    pub size_left: Option<f64>,
    #[serde(rename = "timeleft")]
    pub time_left: Option<String>,
    pub estimated_completion_time: Option<DateTime<Utc>>,
    pub added: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub tracked_download_status: Option<String>,
    pub tracked_download_state: Option<String>,
    pub status_messages: Vec<StatusMessage>,
    pub error_message: Option<String>,
    pub download_id: Option<String>,
    pub protocol: Option<String>,
    pub download_client: Option<String>,
    pub download_client_has_post_import_category: Option<bool>,
    pub indexer: Option<String>,
    pub output_path: Option<String>,
    pub track_file_count: Option<i64>,
    pub track_has_file_count: Option<i64>,
    pub download_forced: Option<bool>,
}

impl Hydrate for QueueItem {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            artist_id: raw.int("artistId"),
            album_id: raw.int("albumId"),
            artist: raw.record("artist"),
            album: raw.record("album"),
            quality: raw.record("quality"),
            size: raw.float("size"),
            title: raw.string("title"),
            size_left: raw.float("sizeleft"),
            time_left: raw.string("timeleft"),
            estimated_completion_time: raw.datetime("estimatedCompletionTime"),
            added: raw.datetime("added"),
            status: raw.string("status"),
            tracked_download_status: raw.string("trackedDownloadStatus"),
            tracked_download_state: raw.string("trackedDownloadState"),
            status_messages: raw.records("statusMessages"),
            error_message: raw.string("errorMessage"),
            download_id: raw.string("downloadId"),
            protocol: raw.string("protocol"),
            download_client: raw.string("downloadClient"),
            download_client_has_post_import_category: raw
                .bool("downloadClientHasPostImportCategory"),
            indexer: raw.string("indexer"),
            output_path: raw.string("outputPath"),
            track_file_count: raw.int("trackFileCount"),
            track_has_file_count: raw.int("trackHasFileCount"),
            download_forced: raw.bool("downloadForced"),
        }
    }
}

impl QueueItem {
    /// Percentage downloaded, when both sizes are known.
    pub fn progress(&self) -> Option<f64> {
        match (self.size, self.size_left) {
            (Some(size), Some(left)) if size > 0.0 => Some((size - left) / size * 100.0),
            _ => None,
        }
    }
}

impl Display for QueueItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        str += self.title.as_deref().unwrap_or("Unknown download");
        str += &format!(" [{}]", self.quality);
        if let Some(status) = &self.status {
            str += &format!(" {status}");
        }
        if let Some(progress) = self.progress() {
            str += &format!(" {progress:.1}%");
        }
        if let Some(time_left) = &self.time_left {
            str += &format!(" ({time_left} left)");
        }

        write!(f, "{str}")
    }
}
