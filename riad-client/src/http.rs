//! HTTP client for the riad-server admin API
//!
//! The session lives in the client's cookie store: `login` stores the
//! `session` cookie and every guarded call sends (and refreshes) it.

use std::collections::BTreeMap;

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::ErrorBody;
use shared::models::{ContentUpdate, Kind, KindStats, RequestPatch, ServiceRecord};
use shared::response::{Ack, LoginRequest, SessionInfo};

/// HTTP client for riad-server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Map a non-success status to a [`ClientError`], using the server's
    /// `{"error": ...}` message when there is one
    async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Err(ClientError::RateLimited),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
            _ => Err(ClientError::Internal(message)),
        }
    }

    /// Handle the HTTP response; a 2xx body that is not the expected JSON
    /// is a [`ClientError::InvalidResponse`]
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let text = Self::check(response).await?.text().await?;
        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Auth API ==========

    /// Log in as the admin; the session cookie is kept by the client
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<()> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post::<Ack, _>("/api/auth/login", &request).await?;
        Ok(())
    }

    /// Current admin session
    pub async fn session(&self) -> ClientResult<SessionInfo> {
        self.get("/api/auth/session").await
    }

    /// Logout
    pub async fn logout(&self) -> ClientResult<()> {
        let response = self.client.post(self.url("/api/auth/logout")).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    // ========== Requests API ==========

    /// Submit a public form for `kind`
    pub async fn submit<B: Serialize>(&self, kind: Kind, form: &B) -> ClientResult<()> {
        self.post::<Ack, _>(&kind.base_path(), form).await?;
        Ok(())
    }

    /// Every record of `R`'s kind, newest first
    pub async fn list<R: ServiceRecord>(&self) -> ClientResult<Vec<R>> {
        self.get(&R::KIND.base_path()).await
    }

    /// Apply a partial update to one record
    pub async fn patch(&self, kind: Kind, patch: &RequestPatch) -> ClientResult<()> {
        let response = self
            .client
            .patch(self.url(&kind.base_path()))
            .json(patch)
            .send()
            .await?;
        Self::handle_response::<Ack>(response).await?;
        Ok(())
    }

    /// Delete one record (no-op when it is already gone)
    pub async fn delete(&self, kind: Kind, id: i64) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&kind.base_path()))
            .query(&[("id", id)])
            .send()
            .await?;
        Self::handle_response::<Ack>(response).await?;
        Ok(())
    }

    // ========== Admin API ==========

    /// Total and pending counts per kind slug
    pub async fn stats(&self) -> ClientResult<BTreeMap<String, KindStats>> {
        self.get("/api/admin/stats").await
    }

    /// Server-side CSV export of every record of `kind`
    pub async fn export(&self, kind: Kind) -> ClientResult<String> {
        let path = format!("/api/admin/export/{}", kind.slug());
        let response = self.client.get(self.url(&path)).send().await?;
        Ok(Self::check(response).await?.text().await?)
    }

    /// Public site content as a key → value map
    pub async fn content(&self) -> ClientResult<BTreeMap<String, String>> {
        self.get("/api/content").await
    }

    /// Create or replace one content entry
    pub async fn update_content(
        &self,
        key: &str,
        value: &str,
        section: Option<&str>,
    ) -> ClientResult<()> {
        let update = ContentUpdate {
            key: Some(key.to_string()),
            value: Some(value.to_string()),
            section: section.map(str::to_string),
        };
        self.post::<Ack, _>("/api/content", &update).await?;
        Ok(())
    }
}
