use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::Serialize;

use crate::lidarr::models::artist::Artist;
use crate::lidarr::models::common::{Image, Link, Ratings, Statistics};
use crate::lidarr::models::raw::{Hydrate, Raw};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub disambiguation: Option<String>,
    pub overview: Option<String>,
    pub artist_id: Option<i64>,
    pub foreign_album_id: Option<String>,
    pub monitored: Option<bool>,
    pub any_release_ok: Option<bool>,
    pub profile_id: Option<i64>,
    pub duration: Option<i64>,
    pub album_type: Option<String>,
    pub secondary_types: Vec<String>,
    pub medium_count: Option<i64>,
    pub ratings: Ratings,
    pub release_date: Option<DateTime<Utc>>,
    pub releases: Vec<Release>,
    pub genres: Vec<String>,
    pub media: Vec<Medium>,
    pub artist: Artist,
    pub images: Vec<Image>,
    pub links: Vec<Link>,
    pub statistics: Statistics,
    pub add_options: AlbumAddOptions,
    pub remote_cover: Option<String>,
    pub last_search_time: Option<DateTime<Utc>>,
    pub grabbed: Option<bool>,
}

impl Hydrate for Album {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            title: raw.string("title"),
            disambiguation: raw.string("disambiguation"),
            overview: raw.string("overview"),
            artist_id: raw.int("artistId"),
            foreign_album_id: raw.string("foreignAlbumId"),
            monitored: raw.bool("monitored"),
            any_release_ok: raw.bool("anyReleaseOk"),
            profile_id: raw.int("profileId"),
            duration: raw.int("duration"),
            album_type: raw.string("albumType"),
            secondary_types: raw.strings("secondaryTypes"),
            medium_count: raw.int("mediumCount"),
            ratings: raw.record("ratings"),
            release_date: raw.datetime("releaseDate"),
            releases: raw.records("releases"),
            genres: raw.strings("genres"),
            media: raw.records("media"),
            artist: raw.record("artist"),
            images: raw.records("images"),
            links: raw.records("links"),
            statistics: raw.record("statistics"),
            add_options: raw.record("addOptions"),
            remote_cover: raw.string("remoteCover"),
            last_search_time: raw.datetime("lastSearchTime"),
            grabbed: raw.bool("grabbed"),
        }
    }
}

impl Album {
    pub fn get_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// The release Lidarr currently tracks for this album, if it has picked one.
    pub fn monitored_release(&self) -> Option<&Release> {
        self.releases.iter().find(|r| r.monitored == Some(true))
    }

    pub fn track_count(&self) -> i64 {
        self.statistics.track_count.unwrap_or_default()
    }
}

impl Display for Album {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        str += &format!("[{}] ", self.id.unwrap_or_default());
        str += self.artist.get_name();
        if !self.artist.get_name().is_empty() {
            str += " - ";
        }
        str += self.get_title();
        if let Some(date) = self.release_date {
            str += &format!(" ({})", date.format("%Y-%m-%d"));
        }
        if !self.genres.is_empty() {
            str += &format!(" [{}]", self.genres.iter().join(", "));
        }

        write!(f, "{str}")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumAddOptions {
    pub add_type: Option<String>,
    pub search_for_new_album: Option<bool>,
}

impl Hydrate for AlbumAddOptions {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            add_type: raw.string("addType"),
            search_for_new_album: raw.bool("searchForNewAlbum"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub id: Option<i64>,
    pub album_id: Option<i64>,
    pub foreign_release_id: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub duration: Option<i64>,
    pub track_count: Option<i64>,
    pub media: Vec<Medium>,
    pub medium_count: Option<i64>,
    pub disambiguation: Option<String>,
    pub country: Vec<String>,
    pub label: Vec<String>,
    pub format: Option<String>,
    pub monitored: Option<bool>,
}

impl Hydrate for Release {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            album_id: raw.int("albumId"),
            foreign_release_id: raw.string("foreignReleaseId"),
            title: raw.string("title"),
            status: raw.string("status"),
            duration: raw.int("duration"),
            track_count: raw.int("trackCount"),
            media: raw.records("media"),
            medium_count: raw.int("mediumCount"),
            disambiguation: raw.string("disambiguation"),
            country: raw.strings("country"),
            label: raw.strings("label"),
            format: raw.string("format"),
            monitored: raw.bool("monitored"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Medium {
    pub medium_number: Option<i64>,
    pub medium_name: Option<String>,
    pub medium_format: Option<String>,
}

impl Hydrate for Medium {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            medium_number: raw.int("mediumNumber"),
            medium_name: raw.string("mediumName"),
            medium_format: raw.string("mediumFormat"),
        }
    }
}

/// One hit from the combined artist/album search. Only one of `artist` and `album` carries
/// data; the other is left empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: Option<i64>,
    pub foreign_id: Option<String>,
    pub artist: Artist,
    pub album: Album,
}

impl Hydrate for SearchResult {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            foreign_id: raw.string("foreignId"),
            artist: raw.record("artist"),
            album: raw.record("album"),
        }
    }
}

impl SearchResult {
    pub fn is_album(&self) -> bool {
        self.album.foreign_album_id.is_some() || self.album.title.is_some()
    }
}
