/**
 * Backend API Client
 *
 * HTTP client functions against the ChatLink backend. Authenticated calls
 * carry the session token as the `jwt` cookie, the way a browser would.
 */

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::client::config::ClientConfig;
use crate::shared::{ProviderTokenResponse, UserSummary};

/// Attempts for the provider token fetch before giving up.
pub const TOKEN_FETCH_ATTEMPTS: u32 = 3;

/// API client errors
#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request failed with status {0}")]
    Status(StatusCode),
}

/// HTTP client for the ChatLink backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Update the session token used for authenticated calls.
    pub fn set_session_token(&mut self, token: Option<String>) {
        self.config.set_session_token(token);
    }

    /// Fetch a provider chat token for the authenticated user.
    ///
    /// Transient failures are retried up to [`TOKEN_FETCH_ATTEMPTS`] times;
    /// the last error is returned when the budget is exhausted.
    pub async fn fetch_provider_token(&self) -> Result<String, ApiClientError> {
        let mut last_error = None;
        for attempt in 1..=TOKEN_FETCH_ATTEMPTS {
            match self.try_fetch_provider_token().await {
                Ok(token) => return Ok(token),
                Err(e) => {
                    tracing::warn!("Provider token fetch attempt {attempt} failed: {e}");
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or(ApiClientError::Status(StatusCode::INTERNAL_SERVER_ERROR)))
    }

    async fn try_fetch_provider_token(&self) -> Result<String, ApiClientError> {
        let response = self
            .authenticated(self.http.get(self.config.api_url("/api/chat/token")))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiClientError::Status(response.status()));
        }

        let body: ProviderTokenResponse = response.json().await?;
        Ok(body.token)
    }

    /// Fetch the authenticated user's profile.
    pub async fn fetch_current_user(&self) -> Result<UserSummary, ApiClientError> {
        let response = self
            .authenticated(self.http.get(self.config.api_url("/api/auth/me")))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiClientError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    fn authenticated(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.session_cookie_header() {
            Some(cookie) => request.header(reqwest::header::COOKIE, cookie),
            None => request,
        }
    }
}
