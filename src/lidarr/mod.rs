//! The Lidarr API client.
//!
//! [`LidarrClient`] owns the HTTP transport. Its operations are spread over
//! [`library`], [`activity`], [`settings`] and [`system`], grouped the way the Lidarr UI
//! groups them. Every operation checks its arguments before anything is sent and hands
//! the response to the [`models`] for hydration.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{LidarrError, Result};
use crate::http_client::HttpClient;
use crate::lidarr::models::{all_valid, Hydrate, OneOrMany};

pub mod activity;
pub mod coerce;
pub mod library;
pub mod models;
pub mod queries;
pub mod settings;
pub mod system;
pub mod types;

#[derive(Clone, Debug)]
pub struct LidarrClient {
    client: HttpClient,
}

impl LidarrClient {
    pub fn new(lidarr_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = HttpClient::new(lidarr_url, api_key, timeout)?;
        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        debug!("Connecting to {}", config.get_lidarr_url());
        Self::new(
            config.get_lidarr_url(),
            config.get_api_key(),
            config.get_timeout(),
        )
    }

    pub fn get_base_url(&self) -> &str {
        self.client.get_base_url()
    }
}

// HELPERS ####################################################################

/// `artist` or `artist/3`
fn path_with_id(base: &str, id: Option<i64>) -> String {
    match id {
        Some(id) => format!("{base}/{id}"),
        None => base.to_string(),
    }
}

fn one<T: Hydrate>(body: Option<Value>) -> T {
    T::hydrate_opt(body.as_ref())
}

fn one_or_many<T: Hydrate>(body: Option<Value>) -> OneOrMany<T> {
    OneOrMany::hydrate_opt(body.as_ref())
}

/// A list endpoint. A lone object is taken as a list of one.
fn many<T: Hydrate>(body: Option<Value>) -> Vec<T> {
    one_or_many(body).into_vec()
}

/// Serializes a record for a request, leaving out every key hydration filled in.
///
/// Nulls go, as do nested records and lists left empty once their nulls are gone. Hydration
/// cannot tell an absent list from an empty one, so neither is sent.
fn to_body<T: Serialize>(record: &T) -> Result<Value> {
    let mut body = serde_json::to_value(record)?;
    drop_absent(&mut body);
    Ok(body)
}

/// Returns true when nothing is left of `value`.
fn drop_absent(value: &mut Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(fields) => {
            fields.retain(|_, field| !drop_absent(field));
            fields.is_empty()
        }
        Value::Array(items) => {
            items.iter_mut().for_each(|item| {
                drop_absent(item);
            });
            items.is_empty()
        }
        _ => false,
    }
}

/// Copies every key of `fields` onto `body`, replacing what is there.
fn merge_fields(body: &mut Value, fields: Value) {
    if let (Some(body), Value::Object(fields)) = (body.as_object_mut(), fields) {
        body.extend(fields);
    }
}

fn require_id(id: Option<i64>, what: &str) -> Result<i64> {
    match id {
        Some(id) => Ok(id),
        None => Err(LidarrError::precondition(format!(
            "{what} without an `id` cannot be updated"
        ))),
    }
}

fn require_ids(ids: &[i64], what: &str) -> Result<()> {
    if ids.is_empty() {
        return Err(LidarrError::precondition(format!(
            "{what} requires at least one id"
        )));
    }
    Ok(())
}

/// Reads the outcome of a `test` endpoint.
///
/// Lidarr answers a failed test with `400 Bad Request` and the validation failures as the
/// body, so that case is folded into `false` rather than raised.
fn validation_passed(response: Result<Option<Value>>) -> Result<bool> {
    match response {
        Ok(body) => Ok(all_valid(body.as_ref())),
        Err(err) => {
            if let LidarrError::Status { status, body, .. } = &err {
                if *status == StatusCode::BAD_REQUEST {
                    if let Ok(failures @ Value::Array(_)) = serde_json::from_str::<Value>(body) {
                        debug!("Test failed validation: {failures}");
                        return Ok(all_valid(Some(&failures)));
                    }
                }
            }
            Err(err)
        }
    }
}

#[cfg(test)]
pub(crate) fn offline_client() -> LidarrClient {
    // Nothing listens on port 1; any request that gets sent fails as a transport error.
    LidarrClient::new(
        "http://127.0.0.1:1",
        "0123456789abcdef0123456789abcdef",
        Duration::from_secs(1),
    )
    .unwrap()
}

#[cfg(test)]
mod lidarr_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::lidarr::models::{Album, Tag};

    #[test]
    fn test_path_with_id() {
        assert_eq!(path_with_id("artist", None), "artist");
        assert_eq!(path_with_id("artist", Some(3)), "artist/3");
    }

    #[test]
    fn test_many_accepts_a_single_object() {
        let tags: Vec<Tag> = many(Some(json!({"id": 1, "label": "jazz"})));
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].label.as_deref(), Some("jazz"));

        let tags: Vec<Tag> = many(None);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_to_body_sends_only_received_keys() {
        let album = Album::hydrate(&json!({"id": 1, "title": "Signals", "monitored": true}));
        assert_eq!(
            to_body(&album).unwrap(),
            json!({"id": 1, "title": "Signals", "monitored": true})
        );
    }

    #[test]
    fn test_to_body_keeps_nested_data() {
        let album = Album::hydrate(&json!({
            "id": 1,
            "monitored": false,
            "artist": {"id": 3, "artistName": "Rush", "ratings": {}},
            "genres": [],
            "releases": [{"id": 7, "monitored": true, "media": []}]
        }));
        assert_eq!(
            to_body(&album).unwrap(),
            json!({
                "id": 1,
                "monitored": false,
                "artist": {"id": 3, "artistName": "Rush"},
                "releases": [{"id": 7, "monitored": true}]
            })
        );
    }

    #[test]
    fn test_drop_absent_keeps_falsy_scalars() {
        let mut value = json!({"a": 0, "b": false, "c": "", "d": null, "e": {"f": null}});
        assert!(!drop_absent(&mut value));
        assert_eq!(value, json!({"a": 0, "b": false, "c": ""}));
        assert!(drop_absent(&mut json!({"x": [], "y": {"z": null}})));
    }

    #[test]
    fn test_merge_fields_overwrites() {
        let mut body = json!({"id": 1, "monitored": false});
        merge_fields(&mut body, json!({"monitored": true, "path": "/music"}));
        assert_eq!(body, json!({"id": 1, "monitored": true, "path": "/music"}));
    }

    #[test]
    fn test_require_helpers() {
        assert_eq!(require_id(Some(4), "Artist").unwrap(), 4);
        let err = require_id(None, "Artist").unwrap_err();
        assert_eq!(err.to_string(), "Artist without an `id` cannot be updated");

        assert!(require_ids(&[1], "Deleting").is_ok());
        assert!(require_ids(&[], "Deleting").unwrap_err().is_precondition());
    }

    #[test]
    fn test_validation_passed() {
        assert!(validation_passed(Ok(None)).unwrap());
        assert!(validation_passed(Ok(Some(json!([])))).unwrap());
        assert!(!validation_passed(Ok(Some(json!([{"isValid": false}])))).unwrap());

        let rejected = LidarrError::Status {
            status: StatusCode::BAD_REQUEST,
            url: "http://127.0.0.1:8686/api/v1/importlist/test".to_string(),
            body: json!([{"propertyName": "accessToken", "errorMessage": "Invalid"}])
                .to_string(),
        };
        assert!(!validation_passed(Err(rejected)).unwrap());

        let server_error = LidarrError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://127.0.0.1:8686/api/v1/importlist/test".to_string(),
            body: "[]".to_string(),
        };
        let err = validation_passed(Err(server_error)).unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_client_base_url() {
        assert_eq!(offline_client().get_base_url(), "http://127.0.0.1:1/");
    }
}
