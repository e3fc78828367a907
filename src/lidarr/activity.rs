//! Downloads in flight and what already happened: queue, history, blocklist, wanted and calendar.

use chrono::{DateTime, SecondsFormat, Utc};
use log::info;
use serde_json::json;

use crate::error::{LidarrError, Result};
use crate::lidarr::models::{
    Album, Blocklist, History, HistoryRecord, Queue, QueueItem, WantedCutoff, WantedMissing,
};
use crate::lidarr::queries::PageQuery;
use crate::lidarr::{many, one, require_ids, LidarrClient};

fn to_param(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// QUEUE ######################################################################

impl LidarrClient {
    pub async fn get_queue(&self, query: &PageQuery) -> Result<Queue> {
        query.validate()?;
        let body = self.client.get("queue", &query.to_params()).await?;
        Ok(one(body))
    }

    /// Queue items without paging, optionally narrowed to an artist or a set of albums.
    pub async fn get_queue_details(
        &self,
        artist_id: Option<i64>,
        album_ids: &[i64],
    ) -> Result<Vec<QueueItem>> {
        let mut params = vec![];
        if let Some(artist_id) = artist_id {
            params.push(("artistId", artist_id.to_string()));
        }
        params.extend(album_ids.iter().map(|id| ("albumIds", id.to_string())));

        let body = self.client.get("queue/details", &params).await?;
        Ok(many(body))
    }

    pub async fn del_queue(&self, id: i64, remove_from_client: bool, blocklist: bool) -> Result<()> {
        info!("Removing queue item {id}");
        self.client
            .delete(
                &format!("queue/{id}"),
                &[
                    ("removeFromClient", remove_from_client.to_string()),
                    ("blocklist", blocklist.to_string()),
                ],
                None,
            )
            .await?;
        Ok(())
    }
}

// HISTORY ####################################################################

impl LidarrClient {
    pub async fn get_history(&self, query: &PageQuery) -> Result<History> {
        query.validate()?;
        let body = self.client.get("history", &query.to_params()).await?;
        Ok(one(body))
    }

    pub async fn get_history_since(&self, date: DateTime<Utc>) -> Result<Vec<HistoryRecord>> {
        let body = self
            .client
            .get("history/since", &[("date", to_param(&date))])
            .await?;
        Ok(many(body))
    }

    pub async fn get_history_artist(
        &self,
        artist_id: i64,
        album_id: Option<i64>,
    ) -> Result<Vec<HistoryRecord>> {
        let mut params = vec![("artistId", artist_id.to_string())];
        if let Some(album_id) = album_id {
            params.push(("albumId", album_id.to_string()));
        }

        let body = self.client.get("history/artist", &params).await?;
        Ok(many(body))
    }
}

// BLOCKLIST ##################################################################

impl LidarrClient {
    pub async fn get_blocklist(&self, query: &PageQuery) -> Result<Blocklist> {
        query.validate()?;
        let body = self.client.get("blocklist", &query.to_params()).await?;
        Ok(one(body))
    }

    pub async fn del_blocklist(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("blocklist/{id}"), &[], None)
            .await?;
        Ok(())
    }

    pub async fn del_blocklist_bulk(&self, ids: &[i64]) -> Result<()> {
        require_ids(ids, "Clearing the blocklist")?;
        let body = json!({ "ids": ids });
        self.client
            .delete("blocklist/bulk", &[], Some(&body))
            .await?;
        Ok(())
    }
}

// WANTED #####################################################################

impl LidarrClient {
    /// Monitored albums with missing tracks.
    pub async fn get_wanted_missing(&self, query: &PageQuery) -> Result<WantedMissing> {
        query.validate()?;
        let body = self.client.get("wanted/missing", &query.to_params()).await?;
        Ok(one(body))
    }

    /// Albums whose files have not reached the quality profile's cutoff.
    pub async fn get_wanted_cutoff(&self, query: &PageQuery) -> Result<WantedCutoff> {
        query.validate()?;
        let body = self.client.get("wanted/cutoff", &query.to_params()).await?;
        Ok(one(body))
    }
}

// CALENDAR ###################################################################

impl LidarrClient {
    /// Albums released between `start` and `end`, both inclusive.
    pub async fn get_calendar(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        unmonitored: bool,
    ) -> Result<Vec<Album>> {
        if start > end {
            return Err(LidarrError::precondition(format!(
                "Calendar start ({}) is after its end ({})",
                to_param(&start),
                to_param(&end)
            )));
        }

        let body = self
            .client
            .get(
                "calendar",
                &[
                    ("start", to_param(&start)),
                    ("end", to_param(&end)),
                    ("unmonitored", unmonitored.to_string()),
                ],
            )
            .await?;
        Ok(many(body))
    }
}
