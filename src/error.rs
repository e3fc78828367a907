//! Errors returned by the Lidarr client.
//!
//! Hydrating a response never fails, so everything here comes from either the caller
//! (a [`Precondition`](LidarrError::Precondition) checked before anything is sent) or the
//! transport.

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, LidarrError>;

#[derive(Debug, thiserror::Error)]
pub enum LidarrError {
    /// The call was rejected locally and never sent to the server
    #[error("{0}")]
    Precondition(String),

    /// The server answered with a non-success status
    #[error("{status} returned by {url}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// Connection, TLS or timeout failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The body could not be read as JSON at all
    #[error("Unable to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LidarrError {
    pub fn precondition(message: impl Into<String>) -> Self {
        LidarrError::Precondition(message.into())
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, LidarrError::Precondition(_))
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            LidarrError::Status { status, .. } => Some(*status),
            LidarrError::Http(err) => err.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod error_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_precondition_message() {
        let err = LidarrError::precondition("One of `artist_id` or `album_id` is required");
        assert!(err.is_precondition());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "One of `artist_id` or `album_id` is required");
    }

    #[test]
    fn test_status_message() {
        let err = LidarrError::Status {
            status: StatusCode::NOT_FOUND,
            url: "http://127.0.0.1:8686/api/v1/artist/9".to_string(),
            body: "{\"message\":\"NotFound\"}".to_string(),
        };
        assert!(!err.is_precondition());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(
            err.to_string(),
            "404 Not Found returned by http://127.0.0.1:8686/api/v1/artist/9: {\"message\":\"NotFound\"}"
        );
    }
}
