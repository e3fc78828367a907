//! Searching and managing the music library: artists, albums, tracks and track files.

use log::{debug, info};
use serde_json::json;

use crate::error::{LidarrError, Result};
use crate::lidarr::models::{Album, Artist, OneOrMany, SearchResult, Track, TrackFile};
use crate::lidarr::queries::{
    AddAlbumOptions, AddArtistOptions, AlbumQuery, TrackFileQuery, TrackQuery,
};
use crate::lidarr::{
    many, merge_fields, one, one_or_many, path_with_id, require_id, require_ids, to_body,
    LidarrClient,
};

fn require_term(term: &str) -> Result<()> {
    if term.trim().is_empty() {
        return Err(LidarrError::precondition("A search term is required"));
    }
    Ok(())
}

fn removal_params(
    delete_files: bool,
    add_import_list_exclusion: bool,
) -> Vec<(&'static str, String)> {
    vec![
        ("deleteFiles", delete_files.to_string()),
        ("addImportListExclusion", add_import_list_exclusion.to_string()),
    ]
}

// SEARCH #####################################################################

impl LidarrClient {
    /// Searches for artists and albums at once.
    pub async fn lookup(&self, term: &str) -> Result<Vec<SearchResult>> {
        require_term(term)?;
        let body = self
            .client
            .get("search", &[("term", term.trim().to_string())])
            .await?;
        Ok(many(body))
    }

    pub async fn lookup_artist(&self, term: &str) -> Result<Vec<Artist>> {
        require_term(term)?;
        let body = self
            .client
            .get("artist/lookup", &[("term", term.trim().to_string())])
            .await?;
        Ok(many(body))
    }

    pub async fn lookup_album(&self, term: &str) -> Result<Vec<Album>> {
        require_term(term)?;
        let body = self
            .client
            .get("album/lookup", &[("term", term.trim().to_string())])
            .await?;
        Ok(many(body))
    }
}

// ARTISTS ####################################################################

impl LidarrClient {
    /// Every artist in the library, or just the one with `id`.
    pub async fn get_artist(&self, id: Option<i64>) -> Result<OneOrMany<Artist>> {
        let body = self.client.get(&path_with_id("artist", id), &[]).await?;
        Ok(one_or_many(body))
    }

    /// Finds library artists by their MusicBrainz id.
    pub async fn get_artist_by_foreign_id(&self, mb_id: &str) -> Result<Vec<Artist>> {
        if mb_id.trim().is_empty() {
            return Err(LidarrError::precondition("A MusicBrainz id is required"));
        }
        let body = self
            .client
            .get("artist", &[("mbId", mb_id.trim().to_string())])
            .await?;
        Ok(many(body))
    }

    /// Adds an artist found through [`lookup_artist`](Self::lookup_artist).
    pub async fn add_artist(&self, artist: &Artist, options: &AddArtistOptions) -> Result<Artist> {
        if artist.foreign_artist_id.is_none() {
            return Err(LidarrError::precondition(
                "Only artists returned by a lookup (with a `foreignArtistId`) can be added",
            ));
        }
        options.validate()?;

        let mut body = to_body(artist)?;
        merge_fields(&mut body, options.to_fields());

        info!("Adding artist `{}`", artist.get_name());
        let body = self.client.post("artist", &[], Some(&body)).await?;
        Ok(one(body))
    }

    pub async fn upd_artist(&self, artist: &Artist) -> Result<Artist> {
        let id = require_id(artist.id, "An artist")?;
        let body = to_body(artist)?;
        let body = self
            .client
            .put(&format!("artist/{id}"), &[], Some(&body))
            .await?;
        Ok(one(body))
    }

    pub async fn del_artist(
        &self,
        id: i64,
        delete_files: bool,
        add_import_list_exclusion: bool,
    ) -> Result<()> {
        info!("Deleting artist {id}");
        self.client
            .delete(
                &format!("artist/{id}"),
                &removal_params(delete_files, add_import_list_exclusion),
                None,
            )
            .await?;
        Ok(())
    }
}

// ALBUMS #####################################################################

impl LidarrClient {
    pub async fn get_album(&self, query: &AlbumQuery) -> Result<Vec<Album>> {
        let body = self.client.get("album", &query.to_params()).await?;
        Ok(many(body))
    }

    pub async fn get_album_by_id(&self, id: i64) -> Result<Album> {
        let body = self.client.get(&format!("album/{id}"), &[]).await?;
        Ok(one(body))
    }

    /// Adds an album found through [`lookup_album`](Self::lookup_album), along with its
    /// artist when the artist is not in the library yet.
    pub async fn add_album(&self, album: &Album, options: &AddAlbumOptions) -> Result<Album> {
        if album.foreign_album_id.is_none() {
            return Err(LidarrError::precondition(
                "Only albums returned by a lookup (with a `foreignAlbumId`) can be added",
            ));
        }
        if album.artist.foreign_artist_id.is_none() {
            return Err(LidarrError::precondition(
                "The album to add must carry its artist's `foreignArtistId`",
            ));
        }
        let artist_options = options.as_artist_options();
        artist_options.validate()?;

        let mut artist = to_body(&album.artist)?;
        merge_fields(&mut artist, artist_options.to_fields());

        let mut body = to_body(album)?;
        merge_fields(&mut body, options.to_fields());
        merge_fields(&mut body, json!({ "artist": artist }));

        info!("Adding album `{}`", album.get_title());
        let body = self.client.post("album", &[], Some(&body)).await?;
        Ok(one(body))
    }

    pub async fn upd_album(&self, album: &Album) -> Result<Album> {
        let id = require_id(album.id, "An album")?;
        let body = to_body(album)?;
        let body = self
            .client
            .put(&format!("album/{id}"), &[], Some(&body))
            .await?;
        Ok(one(body))
    }

    /// Sets the monitored flag on several albums at once.
    pub async fn upd_album_monitor(&self, album_ids: &[i64], monitored: bool) -> Result<Vec<Album>> {
        require_ids(album_ids, "Changing album monitoring")?;
        let body = json!({"albumIds": album_ids, "monitored": monitored});
        let body = self.client.put("album/monitor", &[], Some(&body)).await?;
        Ok(many(body))
    }

    pub async fn del_album(
        &self,
        id: i64,
        delete_files: bool,
        add_import_list_exclusion: bool,
    ) -> Result<()> {
        info!("Deleting album {id}");
        self.client
            .delete(
                &format!("album/{id}"),
                &removal_params(delete_files, add_import_list_exclusion),
                None,
            )
            .await?;
        Ok(())
    }
}

// TRACKS #####################################################################

impl LidarrClient {
    pub async fn get_track(&self, id: i64) -> Result<Track> {
        let body = self.client.get(&format!("track/{id}"), &[]).await?;
        Ok(one(body))
    }

    pub async fn get_tracks(&self, query: &TrackQuery) -> Result<Vec<Track>> {
        query.validate()?;
        let body = self.client.get("track", &query.to_params()).await?;
        Ok(many(body))
    }

    pub async fn get_track_file(&self, id: i64) -> Result<TrackFile> {
        let body = self.client.get(&format!("trackfile/{id}"), &[]).await?;
        Ok(one(body))
    }

    pub async fn get_track_files(&self, query: &TrackFileQuery) -> Result<Vec<TrackFile>> {
        query.validate()?;
        let body = self.client.get("trackfile", &query.to_params()).await?;
        Ok(many(body))
    }

    pub async fn upd_track_file(&self, track_file: &TrackFile) -> Result<TrackFile> {
        let id = require_id(track_file.id, "A track file")?;
        let body = to_body(track_file)?;
        let body = self
            .client
            .put(&format!("trackfile/{id}"), &[], Some(&body))
            .await?;
        Ok(one(body))
    }

    pub async fn del_track_file(&self, id: i64) -> Result<()> {
        info!("Deleting track file {id}");
        self.client
            .delete(&format!("trackfile/{id}"), &[], None)
            .await?;
        Ok(())
    }

    pub async fn del_track_files(&self, ids: &[i64]) -> Result<()> {
        require_ids(ids, "Deleting track files")?;
        debug!("Deleting {} track file(s)", ids.len());
        let body = json!({ "trackFileIds": ids });
        self.client
            .delete("trackfile/bulk", &[], Some(&body))
            .await?;
        Ok(())
    }
}
