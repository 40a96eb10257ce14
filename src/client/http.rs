//! reqwest-backed Singer API Client

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{
    AppendSongsRequest, ClientError, CreateSingerRequest, CreateSingerResponse, Endpoints,
    HealthStatus, Operation, RenameSingerRequest, SingerApi,
};
use crate::model::{Singer, SingerId};

/// Configuration for [`HttpSingerApi`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API (e.g., "http://localhost:5000/api")
    pub base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Singer API client over HTTP
pub struct HttpSingerApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpSingerApi {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(build_error)?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(&config.base_url),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Send a request and turn any non-2xx status into an error
    async fn send(
        &self,
        op: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(|e| send_error(op, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(operation = %op, status = status.as_u16(), "API returned error status");
        Err(ClientError::from_status(op, status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(
        op: Operation,
        response: Response,
    ) -> Result<T, ClientError> {
        response.json::<T>().await.map_err(|e| ClientError::Decode {
            op,
            message: e.to_string(),
        })
    }
}

fn build_error(e: reqwest::Error) -> ClientError {
    ClientError::Transport {
        op: Operation::BuildClient,
        message: e.to_string(),
    }
}

fn send_error(op: Operation, e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout { op }
    } else if e.is_connect() {
        ClientError::Unavailable { op }
    } else {
        ClientError::Transport {
            op,
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl SingerApi for HttpSingerApi {
    async fn list_singers(&self) -> Result<Vec<Singer>, ClientError> {
        let url = self.endpoints.singers();
        tracing::debug!("GET {}", url);

        let op = Operation::ListSingers;
        let response = self.send(op, self.client.get(&url)).await?;
        Self::decode(op, response).await
    }

    async fn get_singer(&self, id: &SingerId) -> Result<Singer, ClientError> {
        let url = self.endpoints.singer(id);
        tracing::debug!("GET {}", url);

        let op = Operation::GetSinger;
        let response = self.send(op, self.client.get(&url)).await?;
        Self::decode(op, response).await
    }

    async fn create_singer(&self, name: &str, songs: &[String]) -> Result<SingerId, ClientError> {
        let url = self.endpoints.singers();
        tracing::debug!("POST {}", url);

        let op = Operation::CreateSinger;
        let body = CreateSingerRequest { name, songs };
        let response = self.send(op, self.client.post(&url).json(&body)).await?;
        let created: CreateSingerResponse = Self::decode(op, response).await?;

        tracing::info!(singer = %created.id, songs = songs.len(), "created singer");
        Ok(created.id)
    }

    async fn append_songs(&self, id: &SingerId, songs: &[String]) -> Result<(), ClientError> {
        let url = self.endpoints.singer(id);
        tracing::debug!("PUT {}", url);

        let body = AppendSongsRequest { songs };
        self.send(Operation::AppendSongs, self.client.put(&url).json(&body))
            .await?;

        tracing::info!(singer = %id, songs = songs.len(), "appended songs");
        Ok(())
    }

    async fn rename_singer(&self, id: &SingerId, name: &str) -> Result<(), ClientError> {
        let url = self.endpoints.singer_name(id);
        tracing::debug!("PUT {}", url);

        let body = RenameSingerRequest { name };
        self.send(Operation::RenameSinger, self.client.put(&url).json(&body))
            .await?;

        tracing::info!(singer = %id, "renamed singer");
        Ok(())
    }

    async fn delete_singer(&self, id: &SingerId) -> Result<(), ClientError> {
        let url = self.endpoints.singer(id);
        tracing::debug!("DELETE {}", url);

        self.send(Operation::DeleteSinger, self.client.delete(&url))
            .await?;

        tracing::info!(singer = %id, "deleted singer");
        Ok(())
    }

    async fn delete_song(&self, id: &SingerId, song: &str) -> Result<(), ClientError> {
        let url = self.endpoints.song(id, song);
        tracing::debug!("DELETE {}", url);

        self.send(Operation::DeleteSong, self.client.delete(&url))
            .await?;

        tracing::info!(singer = %id, song, "deleted song");
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.endpoints.health();
        tracing::debug!("GET {}", url);

        let op = Operation::Health;
        let response = self.send(op, self.client.get(&url)).await?;
        Self::decode(op, response).await
    }
}
