//! Parameters for the Lidarr endpoints that take more than an id.

use derive_builder::Builder;
use serde::Serialize;
use serde_json::{json, Value};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::{LidarrError, Result};

type QueryParams = Vec<(&'static str, String)>;

fn push_opt<T: ToString>(params: &mut QueryParams, key: &'static str, value: &Option<T>) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}

fn push_all<T: ToString>(params: &mut QueryParams, key: &'static str, values: &[T]) {
    params.extend(values.iter().map(|v| (key, v.to_string())));
}

/// Fails unless at least one of the named parameters was supplied.
pub(crate) fn require_any(what: &str, supplied: &[(&str, bool)]) -> Result<()> {
    if supplied.iter().any(|(_, present)| *present) {
        return Ok(());
    }

    let names = supplied
        .iter()
        .map(|(name, _)| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(LidarrError::precondition(format!(
        "{what} requires at least one of {names}"
    )))
}

// ENUMS ######################################################################

#[derive(Clone, Copy, Debug, Default, Display, EnumString, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Default,
    Ascending,
    Descending,
}

/// Which existing albums to monitor when adding an artist.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MonitorOption {
    #[default]
    All,
    Future,
    Missing,
    Existing,
    Latest,
    First,
    None,
}

/// Whether albums released after an artist is added get monitored.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum NewItemMonitorOption {
    #[default]
    All,
    None,
    New,
}

// PAGING #####################################################################

#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(default)]
pub struct PageQuery {
    #[builder(setter(strip_option))]
    pub page: Option<i64>,
    #[builder(setter(strip_option))]
    pub page_size: Option<i64>,
    #[builder(setter(into, strip_option))]
    pub sort_key: Option<String>,
    #[builder(setter(strip_option))]
    pub sort_direction: Option<SortDirection>,
    #[builder(setter(strip_option))]
    pub include_artist: Option<bool>,
    #[builder(setter(strip_option))]
    pub include_album: Option<bool>,
    /// Only used by the wanted endpoints
    #[builder(setter(strip_option))]
    pub monitored: Option<bool>,
}

impl PageQuery {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.page.is_some_and(|p| p < 1) {
            return Err(LidarrError::precondition("`page` starts at 1"));
        }
        if self.page_size.is_some_and(|s| s < 1) {
            return Err(LidarrError::precondition("`page_size` must be positive"));
        }
        Ok(())
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        let mut params = vec![];
        push_opt(&mut params, "page", &self.page);
        push_opt(&mut params, "pageSize", &self.page_size);
        push_opt(&mut params, "sortKey", &self.sort_key);
        push_opt(&mut params, "sortDirection", &self.sort_direction);
        push_opt(&mut params, "includeArtist", &self.include_artist);
        push_opt(&mut params, "includeAlbum", &self.include_album);
        push_opt(&mut params, "monitored", &self.monitored);
        params
    }
}

// LIBRARY ####################################################################

#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(default)]
pub struct AlbumQuery {
    #[builder(setter(strip_option))]
    pub artist_id: Option<i64>,
    #[builder(setter(into))]
    pub album_ids: Vec<i64>,
    #[builder(setter(into, strip_option))]
    pub foreign_album_id: Option<String>,
    #[builder(setter(strip_option))]
    pub include_all_artist_albums: Option<bool>,
}

impl AlbumQuery {
    pub(crate) fn to_params(&self) -> QueryParams {
        let mut params = vec![];
        push_opt(&mut params, "artistId", &self.artist_id);
        push_all(&mut params, "albumIds", &self.album_ids);
        push_opt(&mut params, "foreignAlbumId", &self.foreign_album_id);
        push_opt(
            &mut params,
            "includeAllArtistAlbums",
            &self.include_all_artist_albums,
        );
        params
    }
}

#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(default)]
pub struct TrackQuery {
    #[builder(setter(strip_option))]
    pub artist_id: Option<i64>,
    #[builder(setter(strip_option))]
    pub album_id: Option<i64>,
    #[builder(setter(strip_option))]
    pub album_release_id: Option<i64>,
    #[builder(setter(into))]
    pub track_ids: Vec<i64>,
}

impl TrackQuery {
    pub(crate) fn validate(&self) -> Result<()> {
        require_any(
            "Fetching tracks",
            &[
                ("artist_id", self.artist_id.is_some()),
                ("album_id", self.album_id.is_some()),
                ("album_release_id", self.album_release_id.is_some()),
                ("track_ids", !self.track_ids.is_empty()),
            ],
        )
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        let mut params = vec![];
        push_opt(&mut params, "artistId", &self.artist_id);
        push_opt(&mut params, "albumId", &self.album_id);
        push_opt(&mut params, "albumReleaseId", &self.album_release_id);
        push_all(&mut params, "trackIds", &self.track_ids);
        params
    }
}

#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(default)]
pub struct TrackFileQuery {
    #[builder(setter(strip_option))]
    pub artist_id: Option<i64>,
    #[builder(setter(into))]
    pub album_ids: Vec<i64>,
    #[builder(setter(into))]
    pub track_file_ids: Vec<i64>,
    #[builder(setter(strip_option))]
    pub unmapped: Option<bool>,
}

impl TrackFileQuery {
    pub(crate) fn validate(&self) -> Result<()> {
        require_any(
            "Fetching track files",
            &[
                ("artist_id", self.artist_id.is_some()),
                ("album_ids", !self.album_ids.is_empty()),
                ("track_file_ids", !self.track_file_ids.is_empty()),
                ("unmapped", self.unmapped == Some(true)),
            ],
        )
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        let mut params = vec![];
        push_opt(&mut params, "artistId", &self.artist_id);
        push_all(&mut params, "albumId", &self.album_ids);
        push_all(&mut params, "trackFileIds", &self.track_file_ids);
        push_opt(&mut params, "unmapped", &self.unmapped);
        params
    }
}

// ADDING #####################################################################

#[derive(Builder, Clone, Debug, PartialEq)]
pub struct AddArtistOptions {
    #[builder(setter(into))]
    pub root_dir: String,
    pub quality_profile_id: i64,
    pub metadata_profile_id: i64,
    #[builder(default = "true")]
    pub monitored: bool,
    #[builder(default)]
    pub monitor: MonitorOption,
    #[builder(default)]
    pub monitor_new_items: NewItemMonitorOption,
    #[builder(default)]
    pub search_for_missing_albums: bool,
}

impl AddArtistOptions {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.root_dir.trim().is_empty() {
            return Err(LidarrError::precondition(
                "Adding requires a root folder path",
            ));
        }
        if self.quality_profile_id < 1 || self.metadata_profile_id < 1 {
            return Err(LidarrError::precondition(
                "Adding requires both a quality profile and a metadata profile id",
            ));
        }
        Ok(())
    }

    /// Fields merged into the artist object before it is sent.
    pub(crate) fn to_fields(&self) -> Value {
        json!({
            "rootFolderPath": self.root_dir,
            "qualityProfileId": self.quality_profile_id,
            "metadataProfileId": self.metadata_profile_id,
            "monitored": self.monitored,
            "monitorNewItems": self.monitor_new_items,
            "addOptions": {
                "monitor": self.monitor,
                "albumsToMonitor": [],
                "monitored": self.monitored,
                "searchForMissingAlbums": self.search_for_missing_albums,
            },
        })
    }
}

#[derive(Builder, Clone, Debug, PartialEq)]
pub struct AddAlbumOptions {
    #[builder(setter(into))]
    pub root_dir: String,
    pub quality_profile_id: i64,
    pub metadata_profile_id: i64,
    #[builder(default = "true")]
    pub monitored: bool,
    /// How to monitor the artist when it is not in the library yet
    #[builder(default = "MonitorOption::None")]
    pub artist_monitor: MonitorOption,
    #[builder(default)]
    pub search_for_new_album: bool,
}

impl AddAlbumOptions {
    pub(crate) fn as_artist_options(&self) -> AddArtistOptions {
        AddArtistOptions {
            root_dir: self.root_dir.clone(),
            quality_profile_id: self.quality_profile_id,
            metadata_profile_id: self.metadata_profile_id,
            monitored: self.monitored,
            monitor: self.artist_monitor,
            monitor_new_items: NewItemMonitorOption::All,
            search_for_missing_albums: false,
        }
    }

    pub(crate) fn to_fields(&self) -> Value {
        json!({
            "monitored": self.monitored,
            "addOptions": {
                "addType": "manual",
                "searchForNewAlbum": self.search_for_new_album,
            },
        })
    }
}

// COMMANDS ###################################################################

/// Commands understood by `POST /api/v1/command`. The variant name is the command name.
#[derive(Clone, Debug, EnumString, IntoStaticStr, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum LidarrCommand {
    AlbumSearch { album_ids: Vec<i64> },
    ArtistSearch { artist_id: i64 },
    MissingAlbumSearch,
    CutoffUnmetAlbumSearch,
    RefreshArtist { artist_id: Option<i64> },
    RefreshAlbum { album_id: i64 },
    RescanFolders,
    DownloadedAlbumsScan { path: Option<String> },
    RenameFiles { artist_id: i64, files: Vec<i64> },
    RetagFiles { artist_id: i64, files: Vec<i64> },
    RssSync,
    Backup,
    ApplicationUpdate,
}

impl LidarrCommand {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Fills in the ids of a command parsed from its name. Commands without ids ignore them.
    pub fn with_ids(self, ids: &[i64]) -> Self {
        let first = ids.first().copied();
        match self {
            LidarrCommand::AlbumSearch { .. } => LidarrCommand::AlbumSearch {
                album_ids: ids.to_vec(),
            },
            LidarrCommand::ArtistSearch { .. } => LidarrCommand::ArtistSearch {
                artist_id: first.unwrap_or_default(),
            },
            LidarrCommand::RefreshArtist { .. } => LidarrCommand::RefreshArtist { artist_id: first },
            LidarrCommand::RefreshAlbum { .. } => LidarrCommand::RefreshAlbum {
                album_id: first.unwrap_or_default(),
            },
            LidarrCommand::RenameFiles { .. } => LidarrCommand::RenameFiles {
                artist_id: first.unwrap_or_default(),
                files: ids.iter().skip(1).copied().collect(),
            },
            LidarrCommand::RetagFiles { .. } => LidarrCommand::RetagFiles {
                artist_id: first.unwrap_or_default(),
                files: ids.iter().skip(1).copied().collect(),
            },
            other => other,
        }
    }

    /// Checks the payload a command needs and builds the request body.
    pub(crate) fn to_body(&self) -> Result<Value> {
        let name = self.name();
        let body = match self {
            LidarrCommand::AlbumSearch { album_ids } => {
                if album_ids.is_empty() {
                    return Err(LidarrError::precondition(
                        "`AlbumSearch` requires at least one album id",
                    ));
                }
                json!({"name": name, "albumIds": album_ids})
            }
            LidarrCommand::ArtistSearch { artist_id } => {
                json!({"name": name, "artistId": require_positive("ArtistSearch", *artist_id)?})
            }
            LidarrCommand::RefreshArtist {
                artist_id: Some(artist_id),
            } => json!({"name": name, "artistId": artist_id}),
            LidarrCommand::RefreshAlbum { album_id } => {
                json!({"name": name, "albumId": require_positive("RefreshAlbum", *album_id)?})
            }
            LidarrCommand::DownloadedAlbumsScan { path: Some(path) } => {
                json!({"name": name, "path": path})
            }
            LidarrCommand::RenameFiles { artist_id, files }
            | LidarrCommand::RetagFiles { artist_id, files } => {
                if files.is_empty() {
                    return Err(LidarrError::precondition(format!(
                        "`{name}` requires at least one track file id"
                    )));
                }
                json!({
                    "name": name,
                    "artistId": require_positive(name, *artist_id)?,
                    "files": files,
                })
            }
            _ => json!({"name": name}),
        };
        Ok(body)
    }
}

fn require_positive(command: &str, id: i64) -> Result<i64> {
    if id < 1 {
        return Err(LidarrError::precondition(format!(
            "`{command}` requires an id"
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod queries_tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_query_params() {
        let query = PageQueryBuilder::default()
            .page(2)
            .page_size(50)
            .sort_key("date")
            .sort_direction(SortDirection::Descending)
            .build()
            .unwrap();

        assert_eq!(
            query.to_params(),
            vec![
                ("page", "2".to_string()),
                ("pageSize", "50".to_string()),
                ("sortKey", "date".to_string()),
                ("sortDirection", "descending".to_string()),
            ]
        );
        assert!(query.validate().is_ok());
        assert!(PageQuery::new(0, 10).validate().is_err());
        assert!(PageQuery::default().to_params().is_empty());
    }

    #[test]
    fn test_album_query_repeats_ids() {
        let query = AlbumQueryBuilder::default()
            .album_ids(vec![3, 4])
            .include_all_artist_albums(true)
            .build()
            .unwrap();
        assert_eq!(
            query.to_params(),
            vec![
                ("albumIds", "3".to_string()),
                ("albumIds", "4".to_string()),
                ("includeAllArtistAlbums", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_track_query_requires_an_id() {
        let err = TrackQuery::default().validate().unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(
            err.to_string(),
            "Fetching tracks requires at least one of `artist_id`, `album_id`, `album_release_id`, `track_ids`"
        );

        let query = TrackQueryBuilder::default().album_id(7).build().unwrap();
        assert!(query.validate().is_ok());
        assert_eq!(query.to_params(), vec![("albumId", "7".to_string())]);

        let query = TrackQueryBuilder::default()
            .track_ids(vec![1])
            .build()
            .unwrap();
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_track_file_query_requires_an_id() {
        assert!(TrackFileQuery::default().validate().is_err());
        let query = TrackFileQueryBuilder::default()
            .artist_id(3)
            .build()
            .unwrap();
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_enum_strings() {
        assert_eq!(SortDirection::Ascending.to_string(), "ascending");
        assert_eq!(MonitorOption::from_str("Missing").unwrap(), MonitorOption::Missing);
        assert_eq!(NewItemMonitorOption::New.to_string(), "new");
        assert_eq!(
            serde_json::to_value(MonitorOption::Latest).unwrap(),
            serde_json::json!("latest")
        );
    }

    #[test]
    fn test_add_artist_options() {
        let options = AddArtistOptionsBuilder::default()
            .root_dir("/music")
            .quality_profile_id(1)
            .metadata_profile_id(1)
            .monitor(MonitorOption::Future)
            .build()
            .unwrap();
        assert!(options.validate().is_ok());

        let fields = options.to_fields();
        assert_eq!(fields["rootFolderPath"], "/music");
        assert_eq!(fields["monitored"], true);
        assert_eq!(fields["addOptions"]["monitor"], "future");

        let missing_root = AddArtistOptions {
            root_dir: " ".to_string(),
            ..options.clone()
        };
        assert!(missing_root.validate().is_err());

        let missing_profile = AddArtistOptions {
            metadata_profile_id: 0,
            ..options
        };
        assert!(missing_profile.validate().is_err());
    }

    #[test]
    fn test_add_album_options_defaults() {
        let options = AddAlbumOptionsBuilder::default()
            .root_dir("/music")
            .quality_profile_id(2)
            .metadata_profile_id(3)
            .build()
            .unwrap();
        assert_eq!(options.artist_monitor, MonitorOption::None);
        assert_eq!(options.as_artist_options().monitor, MonitorOption::None);
        assert_eq!(options.to_fields()["addOptions"]["searchForNewAlbum"], false);
    }

    #[test]
    fn test_command_names_and_bodies() {
        let command = LidarrCommand::AlbumSearch {
            album_ids: vec![1, 2],
        };
        assert_eq!(command.name(), "AlbumSearch");
        assert_eq!(
            command.to_body().unwrap(),
            serde_json::json!({"name": "AlbumSearch", "albumIds": [1, 2]})
        );

        assert_eq!(
            LidarrCommand::RssSync.to_body().unwrap(),
            serde_json::json!({"name": "RssSync"})
        );
        assert_eq!(
            LidarrCommand::RefreshArtist { artist_id: None }.to_body().unwrap(),
            serde_json::json!({"name": "RefreshArtist"})
        );
    }

    #[test]
    fn test_command_companion_payload_required() {
        let err = LidarrCommand::AlbumSearch { album_ids: vec![] }
            .to_body()
            .unwrap_err();
        assert!(err.is_precondition());

        let err = LidarrCommand::RenameFiles {
            artist_id: 3,
            files: vec![],
        }
        .to_body()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "`RenameFiles` requires at least one track file id"
        );

        assert!(LidarrCommand::ArtistSearch { artist_id: 0 }
            .to_body()
            .is_err());
    }

    #[test]
    fn test_command_from_name_with_ids() {
        let command = LidarrCommand::from_str("albumsearch").unwrap().with_ids(&[5, 6]);
        assert_eq!(
            command,
            LidarrCommand::AlbumSearch {
                album_ids: vec![5, 6]
            }
        );

        let command = LidarrCommand::from_str("RetagFiles").unwrap().with_ids(&[3, 10, 11]);
        assert_eq!(
            command,
            LidarrCommand::RetagFiles {
                artist_id: 3,
                files: vec![10, 11]
            }
        );

        assert_eq!(
            LidarrCommand::from_str("Backup").unwrap().with_ids(&[1]),
            LidarrCommand::Backup
        );
        assert!(LidarrCommand::from_str("NotACommand").is_err());
    }
}
