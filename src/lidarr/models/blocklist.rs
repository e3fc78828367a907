use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lidarr::models::artist::Artist;
use crate::lidarr::models::common::Quality;
use crate::lidarr::models::raw::{Hydrate, Raw};
use crate::lidarr::models::Page;

pub type Blocklist = Page<BlocklistItem>;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocklistItem {
    pub id: Option<i64>,
    pub artist_id: Option<i64>,
    pub album_ids: Vec<i64>,
    pub source_title: Option<String>,
    pub quality: Quality,
    pub date: Option<DateTime<Utc>>,
    pub protocol: Option<String>,
    pub indexer: Option<String>,
    pub message: Option<String>,
    pub artist: Artist,
}

impl Hydrate for BlocklistItem {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            artist_id: raw.int("artistId"),
            album_ids: raw.ints("albumIds"),
            source_title: raw.string("sourceTitle"),
            quality: raw.record("quality"),
            date: raw.datetime("date"),
            protocol: raw.string("protocol"),
            indexer: raw.string("indexer"),
            message: raw.string("message"),
            artist: raw.record("artist"),
        }
    }
}
