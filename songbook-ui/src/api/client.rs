//! HTTP API Client
//!
//! [`SingerApi`] over `gloo-net`, sharing endpoints and DTOs with the native
//! client.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use songbook::client::{
    AppendSongsRequest, CreateSingerRequest, CreateSingerResponse, RenameSingerRequest,
};
use songbook::{ClientError, Endpoints, HealthStatus, Operation, Singer, SingerApi, SingerId};

/// Default API base URL (same origin, proxied to the API server)
pub const DEFAULT_API_BASE: &str = "/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("songbook_api_url").ok().flatten());

    stored.unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Singer API client for the browser
#[derive(Debug, Clone)]
pub struct GlooSingerApi {
    endpoints: Endpoints,
}

impl GlooSingerApi {
    pub fn new() -> Self {
        Self {
            endpoints: Endpoints::new(&get_api_base()),
        }
    }
}

impl Default for GlooSingerApi {
    fn default() -> Self {
        Self::new()
    }
}

fn transport(op: Operation, e: gloo_net::Error) -> ClientError {
    ClientError::Transport {
        op,
        message: format!("Network error: {}", e),
    }
}

/// Turn a sent request into a response, rejecting any non-2xx status
async fn check(
    op: Operation,
    sent: Result<Response, gloo_net::Error>,
) -> Result<Response, ClientError> {
    let response = sent.map_err(|e| transport(op, e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        web_sys::console::error_1(&format!("{} failed with HTTP {}", op, response.status()).into());
        return Err(ClientError::from_status(op, response.status(), &body));
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(op: Operation, response: Response) -> Result<T, ClientError> {
    response.json().await.map_err(|e| ClientError::Decode {
        op,
        message: e.to_string(),
    })
}

#[async_trait(?Send)]
impl SingerApi for GlooSingerApi {
    async fn list_singers(&self) -> Result<Vec<Singer>, ClientError> {
        let op = Operation::ListSingers;
        let response = check(op, Request::get(&self.endpoints.singers()).send().await).await?;
        decode(op, response).await
    }

    async fn get_singer(&self, id: &SingerId) -> Result<Singer, ClientError> {
        let op = Operation::GetSinger;
        let response = check(op, Request::get(&self.endpoints.singer(id)).send().await).await?;
        decode(op, response).await
    }

    async fn create_singer(&self, name: &str, songs: &[String]) -> Result<SingerId, ClientError> {
        let op = Operation::CreateSinger;
        let request = Request::post(&self.endpoints.singers())
            .json(&CreateSingerRequest { name, songs })
            .map_err(|e| transport(op, e))?;

        let response = check(op, request.send().await).await?;
        let created: CreateSingerResponse = decode(op, response).await?;
        Ok(created.id)
    }

    async fn append_songs(&self, id: &SingerId, songs: &[String]) -> Result<(), ClientError> {
        let op = Operation::AppendSongs;
        let request = Request::put(&self.endpoints.singer(id))
            .json(&AppendSongsRequest { songs })
            .map_err(|e| transport(op, e))?;

        check(op, request.send().await).await?;
        Ok(())
    }

    async fn rename_singer(&self, id: &SingerId, name: &str) -> Result<(), ClientError> {
        let op = Operation::RenameSinger;
        let request = Request::put(&self.endpoints.singer_name(id))
            .json(&RenameSingerRequest { name })
            .map_err(|e| transport(op, e))?;

        check(op, request.send().await).await?;
        Ok(())
    }

    async fn delete_singer(&self, id: &SingerId) -> Result<(), ClientError> {
        let op = Operation::DeleteSinger;
        check(op, Request::delete(&self.endpoints.singer(id)).send().await).await?;
        Ok(())
    }

    async fn delete_song(&self, id: &SingerId, song: &str) -> Result<(), ClientError> {
        let op = Operation::DeleteSong;
        check(op, Request::delete(&self.endpoints.song(id, song)).send().await).await?;
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let op = Operation::Health;
        let response = check(op, Request::get(&self.endpoints.health()).send().await).await?;
        decode(op, response).await
    }
}
