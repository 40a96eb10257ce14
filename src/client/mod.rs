//! Singer API Client
//!
//! The [`SingerApi`] trait is the only way views talk to the outside world.
//! [`HttpSingerApi`] implements it over `reqwest`; the browser UI implements it
//! over `gloo-net` using the same [`Endpoints`] and DTOs.
//!
//! Endpoints (relative to the configured base, e.g. `http://localhost:5000/api`):
//!
//! - `GET    /singers`                  list all singers
//! - `GET    /singers/{id}`             fetch one singer
//! - `POST   /singers`                  create `{name, songs}`
//! - `PUT    /singers/{id}`             append `{songs}`
//! - `PUT    /singers/{id}/name`        rename `{name}`
//! - `DELETE /singers/{id}`             delete singer
//! - `DELETE /singers/{id}/songs/{song}` delete one song (percent-encoded)
//!
//! Any non-2xx status is an error; status codes are not distinguished.

#[cfg(test)]
pub(crate) mod fake;
#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::{ClientConfig, HttpSingerApi};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::{Singer, SingerId};

/// Operations against the singer API
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SingerApi {
    /// Fetch every singer
    async fn list_singers(&self) -> Result<Vec<Singer>, ClientError>;

    /// Fetch a single singer
    async fn get_singer(&self, id: &SingerId) -> Result<Singer, ClientError>;

    /// Create a singer, returning the id assigned by the API
    async fn create_singer(&self, name: &str, songs: &[String]) -> Result<SingerId, ClientError>;

    /// Append songs to an existing singer
    async fn append_songs(&self, id: &SingerId, songs: &[String]) -> Result<(), ClientError>;

    /// Change a singer's name
    async fn rename_singer(&self, id: &SingerId, name: &str) -> Result<(), ClientError>;

    /// Delete a singer and all of their songs
    async fn delete_singer(&self, id: &SingerId) -> Result<(), ClientError>;

    /// Delete one song from a singer
    async fn delete_song(&self, id: &SingerId, song: &str) -> Result<(), ClientError>;

    /// Check that the API is up
    async fn health(&self) -> Result<HealthStatus, ClientError>;
}

/// Which API call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListSingers,
    GetSinger,
    CreateSinger,
    AppendSongs,
    RenameSinger,
    DeleteSinger,
    DeleteSong,
    Health,
    /// Setting up the transport, before any request
    BuildClient,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::ListSingers => "fetch singers",
            Operation::GetSinger => "fetch singer",
            Operation::CreateSinger => "add singer",
            Operation::AppendSongs => "update singer",
            Operation::RenameSinger => "rename singer",
            Operation::DeleteSinger => "delete singer",
            Operation::DeleteSong => "delete song",
            Operation::Health => "reach API",
            Operation::BuildClient => "create HTTP client",
        };
        f.write_str(label)
    }
}

/// Errors returned by [`SingerApi`] implementations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The API answered with a non-success status
    #[error("Failed to {op}: {message} (HTTP {status})")]
    Status {
        op: Operation,
        status: u16,
        message: String,
    },

    #[error("Failed to {op}: request timed out")]
    Timeout { op: Operation },

    #[error("Failed to {op}: API unavailable")]
    Unavailable { op: Operation },

    /// Request could not be built or sent
    #[error("Failed to {op}: {message}")]
    Transport { op: Operation, message: String },

    /// Response body was not the expected JSON
    #[error("Failed to {op}: invalid response: {message}")]
    Decode { op: Operation, message: String },
}

impl ClientError {
    pub fn operation(&self) -> Operation {
        match self {
            ClientError::Status { op, .. }
            | ClientError::Timeout { op }
            | ClientError::Unavailable { op }
            | ClientError::Transport { op, .. }
            | ClientError::Decode { op, .. } => *op,
        }
    }

    /// Build a status error from a raw response body.
    ///
    /// Uses the `{"error": ...}` field when the body has one.
    pub fn from_status(op: Operation, status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => "no details".to_string(),
            Err(_) => body.trim().to_string(),
        };
        ClientError::Status {
            op,
            status,
            message,
        }
    }
}

/// URL builder for the singer endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn singers(&self) -> String {
        format!("{}/singers", self.base)
    }

    pub fn singer(&self, id: &SingerId) -> String {
        format!("{}/singers/{}", self.base, urlencoding::encode(id.as_str()))
    }

    pub fn singer_name(&self, id: &SingerId) -> String {
        format!("{}/name", self.singer(id))
    }

    pub fn song(&self, id: &SingerId, song: &str) -> String {
        format!("{}/songs/{}", self.singer(id), urlencoding::encode(song))
    }

    /// Health lives at the server root, outside the `/api` prefix
    pub fn health(&self) -> String {
        let root = self.base.strip_suffix("/api").unwrap_or(&self.base);
        format!("{}/health", root)
    }
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
pub struct CreateSingerRequest<'a> {
    pub name: &'a str,
    pub songs: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct AppendSongsRequest<'a> {
    pub songs: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct RenameSingerRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CreateSingerResponse {
    pub id: SingerId,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_trim_trailing_slash() {
        let endpoints = Endpoints::new("http://localhost:5000/api/");
        assert_eq!(endpoints.singers(), "http://localhost:5000/api/singers");
    }

    #[test]
    fn test_song_endpoint_is_percent_encoded() {
        let endpoints = Endpoints::new("/api");
        let id = SingerId::new("64f0");
        assert_eq!(
            endpoints.song(&id, "Don't Stop Me Now"),
            "/api/singers/64f0/songs/Don%27t%20Stop%20Me%20Now"
        );
        assert_eq!(endpoints.song(&id, "AC/DC"), "/api/singers/64f0/songs/AC%2FDC");
    }

    #[test]
    fn test_singer_name_endpoint() {
        let endpoints = Endpoints::new("/api");
        assert_eq!(endpoints.singer_name(&SingerId::new("7")), "/api/singers/7/name");
    }

    #[test]
    fn test_health_endpoint_leaves_api_prefix() {
        assert_eq!(
            Endpoints::new("http://localhost:5000/api").health(),
            "http://localhost:5000/health"
        );
        assert_eq!(Endpoints::new("http://music.local").health(), "http://music.local/health");
    }

    #[test]
    fn test_status_error_uses_error_field() {
        let err = ClientError::from_status(
            Operation::DeleteSinger,
            404,
            r#"{"error": "Singer not found"}"#,
        );
        assert_eq!(err.to_string(), "Failed to delete singer: Singer not found (HTTP 404)");
        assert_eq!(err.operation(), Operation::DeleteSinger);
    }

    #[test]
    fn test_status_error_falls_back_to_body() {
        let err = ClientError::from_status(Operation::ListSingers, 502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "Failed to fetch singers: Bad Gateway (HTTP 502)");

        let err = ClientError::from_status(Operation::ListSingers, 500, "");
        assert_eq!(err.to_string(), "Failed to fetch singers: no details (HTTP 500)");
    }
}
