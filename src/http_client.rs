//! A custom [`Client`](reqwest::Client) used for every request made to the Lidarr server.
//!
//! The client only moves JSON around: it builds the URL, attaches the API key, raises on
//! non-success statuses and hands back the parsed body. Turning that body into records is
//! left to the [`models`](crate::lidarr::models).

use std::time::Duration;

use log::debug;
use reqwest::{header, Method, Url};
use serde_json::Value;

use crate::error::{LidarrError, Result};

const API_PREFIX: &str = "api/v1/";
const USER_AGENT: &str = concat!("arrkit/", env!("CARGO_PKG_VERSION"));

/// Query parameters, in the order they are appended. Keys may repeat.
pub type Params<'a> = &'a [(&'a str, String)];

/// A custom [`Client`](reqwest::Client), with a base url and headers set during creation.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The Lidarr server URL, always ending in `/`
    base_url: Url,
    /// Default headers sent with every request
    headers: header::HeaderMap,
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a new custom ['Client'](reqwest::Client)
    ///
    /// The API key is sent as the `X-Api-Key` header on every request.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        debug!("Creating HTTP client...");

        let mut headers = header::HeaderMap::new();
        headers.append(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let mut key = header::HeaderValue::from_str(api_key).map_err(|_| {
            LidarrError::precondition("The API key contains characters not allowed in a header")
        })?;
        key.set_sensitive(true);
        headers.append(header::HeaderName::from_static("x-api-key"), key);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .zstd(true)
            .build()?;

        Ok(Self {
            base_url: normalise_base_url(base_url)?,
            headers,
            client,
        })
    }

    pub fn get_base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Perform a `GET` request
    pub async fn get(&self, path: &str, params: Params<'_>) -> Result<Option<Value>> {
        self.request(Method::GET, path, params, None).await
    }

    /// Perform a `POST` request with a JSON body
    pub async fn post(
        &self,
        path: &str,
        params: Params<'_>,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        self.request(Method::POST, path, params, body).await
    }

    /// Perform a `PUT` request with a JSON body
    pub async fn put(
        &self,
        path: &str,
        params: Params<'_>,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        self.request(Method::PUT, path, params, body).await
    }

    /// Perform a `DELETE` request, optionally with a JSON body
    pub async fn delete(
        &self,
        path: &str,
        params: Params<'_>,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        self.request(Method::DELETE, path, params, body).await
    }

    /// Sends a request and parses the body. An empty body gives `None`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Params<'_>,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let url = self.build_final_url(path, params)?;
        debug!("{method} {url}");

        let req = self
            .client
            .request(method, url.clone())
            .headers(self.headers.clone());
        let req = if let Some(body) = body {
            req.json(body)
        } else {
            req
        };

        let resp = req.send().await?;
        let status = resp.status();
        let contents = resp.text().await?;

        if !status.is_success() {
            return Err(LidarrError::Status {
                status,
                url: url.to_string(),
                body: truncate_string(&contents, 2000),
            });
        }

        if contents.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Constructs the final URL passed to the respective request
    ///
    /// Merges the base url, the API prefix, the path, and any parameters together
    fn build_final_url(&self, path: &str, params: Params<'_>) -> Result<Url> {
        let path = path.trim_start_matches('/');
        let mut url = self.base_url.join(API_PREFIX)?.join(path)?;

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }

        Ok(url)
    }
}

fn normalise_base_url(base_url: &str) -> Result<Url> {
    let base_url = base_url.trim();
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn truncate_string(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}...", &s[..idx]),
    }
}
