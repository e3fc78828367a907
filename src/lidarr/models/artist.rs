use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lidarr::models::common::{Image, Link, Member, Ratings, Statistics};
use crate::lidarr::models::raw::{Hydrate, Raw};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: Option<i64>,
    pub artist_metadata_id: Option<i64>,
    pub status: Option<String>,
    pub ended: Option<bool>,
    pub artist_name: Option<String>,
    pub foreign_artist_id: Option<String>,
    pub mb_id: Option<String>,
    pub tadb_id: Option<i64>,
    pub discogs_id: Option<i64>,
    pub all_music_id: Option<String>,
    pub overview: Option<String>,
    pub artist_type: Option<String>,
    pub disambiguation: Option<String>,
    pub links: Vec<Link>,
    /// The next album to be released. Only a summary is kept, never the full album.
    pub next_album: AlbumRef,
    pub last_album: AlbumRef,
    pub images: Vec<Image>,
    pub members: Vec<Member>,
    pub remote_poster: Option<String>,
    pub path: Option<String>,
    pub quality_profile_id: Option<i64>,
    pub metadata_profile_id: Option<i64>,
    pub monitored: Option<bool>,
    pub monitor_new_items: Option<String>,
    pub root_folder_path: Option<String>,
    pub folder: Option<String>,
    pub genres: Vec<String>,
    pub clean_name: Option<String>,
    pub sort_name: Option<String>,
    pub tags: Vec<i64>,
    pub added: Option<DateTime<Utc>>,
    pub add_options: ArtistAddOptions,
    pub ratings: Ratings,
    pub statistics: Statistics,
}

impl Hydrate for Artist {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            artist_metadata_id: raw.int("artistMetadataId"),
            status: raw.string("status"),
            ended: raw.bool("ended"),
            artist_name: raw.string("artistName"),
            foreign_artist_id: raw.string("foreignArtistId"),
            mb_id: raw.string("mbId"),
            tadb_id: raw.int("tadbId"),
            discogs_id: raw.int("discogsId"),
            all_music_id: raw.string("allMusicId"),
            overview: raw.string("overview"),
            artist_type: raw.string("artistType"),
            disambiguation: raw.string("disambiguation"),
            links: raw.records("links"),
            next_album: raw.record("nextAlbum"),
            last_album: raw.record("lastAlbum"),
            images: raw.records("images"),
            members: raw.records("members"),
            remote_poster: raw.string("remotePoster"),
            path: raw.string("path"),
            quality_profile_id: raw.int("qualityProfileId"),
            metadata_profile_id: raw.int("metadataProfileId"),
            monitored: raw.bool("monitored"),
            monitor_new_items: raw.string("monitorNewItems"),
            root_folder_path: raw.string("rootFolderPath"),
            folder: raw.string("folder"),
            genres: raw.strings("genres"),
            clean_name: raw.string("cleanName"),
            sort_name: raw.string("sortName"),
            tags: raw.ints("tags"),
            added: raw.datetime("added"),
            add_options: raw.record("addOptions"),
            ratings: raw.record("ratings"),
            statistics: raw.record("statistics"),
        }
    }
}

impl Artist {
    pub fn get_name(&self) -> &str {
        self.artist_name.as_deref().unwrap_or_default()
    }

    pub fn is_monitored(&self) -> bool {
        self.monitored.unwrap_or(false)
    }
}

impl Display for Artist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        str += &format!("[{}] ", self.id.unwrap_or_default());
        str += self.get_name();
        if let Some(status) = &self.status {
            str += &format!(" ({status})");
        }
        if let Some(albums) = self.statistics.album_count {
            str += &format!(" - {albums} album(s)");
        }

        write!(f, "{str}")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistAddOptions {
    pub monitor: Option<String>,
    pub albums_to_monitor: Vec<String>,
    pub monitored: Option<bool>,
    pub search_for_missing_albums: Option<bool>,
}

impl Hydrate for ArtistAddOptions {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            monitor: raw.string("monitor"),
            albums_to_monitor: raw.strings("albumsToMonitor"),
            monitored: raw.bool("monitored"),
            search_for_missing_albums: raw.bool("searchForMissingAlbums"),
        }
    }
}

/// The album fields kept when an album shows up inside an artist.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRef {
    pub id: Option<i64>,
    pub artist_id: Option<i64>,
    pub foreign_album_id: Option<String>,
    pub title: Option<String>,
    pub album_type: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub monitored: Option<bool>,
}

impl Hydrate for AlbumRef {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            artist_id: raw.int("artistId"),
            foreign_album_id: raw.string("foreignAlbumId"),
            title: raw.string("title"),
            album_type: raw.string("albumType"),
            release_date: raw.datetime("releaseDate"),
            monitored: raw.bool("monitored"),
        }
    }
}
