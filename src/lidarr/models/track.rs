use std::fmt::{Display, Formatter};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lidarr::models::common::{Quality, Ratings};
use crate::lidarr::models::raw::{Hydrate, Raw};

/// A track belongs to its album and artist by id only.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: Option<i64>,
    pub artist_id: Option<i64>,
    pub foreign_track_id: Option<String>,
    pub foreign_recording_id: Option<String>,
    pub track_file_id: Option<i64>,
    pub album_id: Option<i64>,
    pub explicit: Option<bool>,
    pub absolute_track_number: Option<i64>,
    pub track_number: Option<String>,
    pub title: Option<String>,
    /// Milliseconds
    pub duration: Option<i64>,
    pub medium_number: Option<i64>,
    pub has_file: Option<bool>,
    pub ratings: Ratings,
}

impl Hydrate for Track {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            artist_id: raw.int("artistId"),
            foreign_track_id: raw.string("foreignTrackId"),
            foreign_recording_id: raw.string("foreignRecordingId"),
            track_file_id: raw.int("trackFileId"),
            album_id: raw.int("albumId"),
            explicit: raw.bool("explicit"),
            absolute_track_number: raw.int("absoluteTrackNumber"),
            track_number: raw.string("trackNumber"),
            title: raw.string("title"),
            duration: raw.int("duration"),
            medium_number: raw.int("mediumNumber"),
            has_file: raw.bool("hasFile"),
            ratings: raw.record("ratings"),
        }
    }
}

impl Track {
    pub fn get_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn get_duration(&self) -> Duration {
        Duration::from_millis(self.duration.unwrap_or_default().max(0) as u64)
    }
}

impl Display for Track {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        if let Some(number) = &self.track_number {
            str += &format!("{number}. ");
        }
        str += self.get_title();
        str += &format!(
            " ({})",
            humantime::format_duration(Duration::from_secs(self.get_duration().as_secs()))
        );
        if self.has_file != Some(true) {
            str += " [missing]";
        }

        write!(f, "{str}")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackFile {
    pub id: Option<i64>,
    pub artist_id: Option<i64>,
    pub album_id: Option<i64>,
    pub path: Option<String>,
    pub size: Option<i64>,
    pub date_added: Option<DateTime<Utc>>,
    pub scene_name: Option<String>,
    pub release_group: Option<String>,
    pub quality: Quality,
    pub quality_weight: Option<i64>,
    pub media_info: MediaInfo,
    pub quality_cutoff_not_met: Option<bool>,
    pub audio_tags: AudioTags,
}

impl Hydrate for TrackFile {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            artist_id: raw.int("artistId"),
            album_id: raw.int("albumId"),
            path: raw.string("path"),
            size: raw.int("size"),
            date_added: raw.datetime("dateAdded"),
            scene_name: raw.string("sceneName"),
            release_group: raw.string("releaseGroup"),
            quality: raw.record("quality"),
            quality_weight: raw.int("qualityWeight"),
            media_info: raw.record("mediaInfo"),
            quality_cutoff_not_met: raw.bool("qualityCutoffNotMet"),
            audio_tags: raw.record("audioTags"),
        }
    }
}

impl TrackFile {
    /// Whether the server sent any parsed tags for this file.
    pub fn has_audio_tags(&self) -> bool {
        self.audio_tags != AudioTags::default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
    pub id: Option<i64>,
    pub audio_channels: Option<f64>,
    pub audio_bit_rate: Option<String>,
    pub audio_codec: Option<String>,
    pub audio_bits: Option<String>,
    pub audio_sample_rate: Option<String>,
}

impl Hydrate for MediaInfo {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            audio_channels: raw.float("audioChannels"),
            audio_bit_rate: raw.string("audioBitRate"),
            audio_codec: raw.string("audioCodec"),
            audio_bits: raw.string("audioBits"),
            audio_sample_rate: raw.string("audioSampleRate"),
        }
    }
}

/// Tags Lidarr read from the file itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTags {
    pub title: Option<String>,
    pub clean_title: Option<String>,
    pub artist_title: Option<String>,
    pub album_title: Option<String>,
    pub artist_title_info: ArtistTitleInfo,
    #[serde(rename = "artistMBId")]
    pub artist_mb_id: Option<String>,
    #[serde(rename = "albumMBId")]
    pub album_mb_id: Option<String>,
    #[serde(rename = "releaseMBId")]
    pub release_mb_id: Option<String>,
    #[serde(rename = "recordingMBId")]
    pub recording_mb_id: Option<String>,
    #[serde(rename = "trackMBId")]
    pub track_mb_id: Option<String>,
    pub disc_number: Option<i64>,
    pub disc_count: Option<i64>,
    pub year: Option<i64>,
    pub label: Option<String>,
    pub catalog_number: Option<String>,
    pub disambiguation: Option<String>,
    /// A .NET timespan string, e.g. `00:04:33.1230000`
    pub duration: Option<String>,
    pub quality: Quality,
    pub media_info: MediaInfo,
    pub track_numbers: Vec<i64>,
    pub release_group: Option<String>,
    pub release_hash: Option<String>,
}

impl Hydrate for AudioTags {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            title: raw.string("title"),
            clean_title: raw.string("cleanTitle"),
            artist_title: raw.string("artistTitle"),
            album_title: raw.string("albumTitle"),
            artist_title_info: raw.record("artistTitleInfo"),
            artist_mb_id: raw.string("artistMBId"),
            album_mb_id: raw.string("albumMBId"),
            release_mb_id: raw.string("releaseMBId"),
            recording_mb_id: raw.string("recordingMBId"),
            track_mb_id: raw.string("trackMBId"),
            disc_number: raw.int("discNumber"),
            disc_count: raw.int("discCount"),
            year: raw.int("year"),
            label: raw.string("label"),
            catalog_number: raw.string("catalogNumber"),
            disambiguation: raw.string("disambiguation"),
            duration: raw.string("duration"),
            quality: raw.record("quality"),
            media_info: raw.record("mediaInfo"),
            track_numbers: raw.ints("trackNumbers"),
            release_group: raw.string("releaseGroup"),
            release_hash: raw.string("releaseHash"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistTitleInfo {
    pub title: Option<String>,
    pub title_without_year: Option<String>,
    pub year: Option<i64>,
}

impl Hydrate for ArtistTitleInfo {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            title: raw.string("title"),
            title_without_year: raw.string("titleWithoutYear"),
            year: raw.int("year"),
        }
    }
}

#[cfg(test)]
mod track_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_track_hydrates() {
        let track = Track::hydrate(&json!({
            "id": 100,
            "albumId": 7,
            "artistId": 3,
            "trackNumber": 1,
            "title": "Tom Sawyer",
            "duration": 276000,
            "hasFile": true,
            "ratings": {"votes": 3, "value": "9.5"}
        }));

        assert_eq!(track.track_number.as_deref(), Some("1"));
        assert_eq!(track.get_duration(), Duration::from_secs(276));
        assert_eq!(track.ratings.value, Some(9.5));
        assert_eq!(track.to_string(), "1. Tom Sawyer (4m 36s)");
    }

    #[test]
    fn test_missing_track_display() {
        let track = Track::hydrate(&json!({"title": "Vital Signs", "ratings": null}));
        assert_eq!(track.ratings, Ratings::default());
        assert_eq!(track.to_string(), "Vital Signs (0s) [missing]");
    }

    #[test]
    fn test_track_file_nested_records() {
        let file = TrackFile::hydrate(&json!({
            "id": 5,
            "path": "/music/Rush/Moving Pictures/01 Tom Sawyer.flac",
            "dateAdded": "2022-05-06T07:08:09.1234567Z",
            "quality": {"quality": {"id": 6, "name": "FLAC"}},
            "mediaInfo": {"audioChannels": 2, "audioCodec": "FLAC", "audioBitRate": "1000 kbps"},
            "audioTags": {
                "artistMBId": "534ee493",
                "trackNumbers": [1],
                "artistTitleInfo": {"title": "Rush", "year": 0},
                "quality": {"revision": {"version": 1}}
            }
        }));

        assert!(file.date_added.is_some());
        assert_eq!(file.quality.quality.name.as_deref(), Some("FLAC"));
        assert_eq!(file.media_info.audio_channels, Some(2.0));
        assert!(file.has_audio_tags());
        assert_eq!(file.audio_tags.artist_mb_id.as_deref(), Some("534ee493"));
        assert_eq!(file.audio_tags.artist_title_info.title.as_deref(), Some("Rush"));
        assert_eq!(file.audio_tags.quality.revision.version, Some(1));
        assert_eq!(file.audio_tags.quality.quality.name, None);
        assert_eq!(file.rehydrate(), file);
    }

    #[test]
    fn test_track_file_without_tags() {
        let file = TrackFile::hydrate(&json!({"id": 1, "audioTags": null}));
        assert!(!file.has_audio_tags());
        assert_eq!(file.audio_tags, AudioTags::default());
    }
}
