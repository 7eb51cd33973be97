use crate::backend::middleware::auth::SESSION_COOKIE;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: String,
    provider_api_key: Option<String>,
    session_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let server_url = std::env::var("CHATLINK_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let provider_api_key = std::env::var("STREAM_API_KEY").ok().filter(|v| !v.is_empty());
        Self {
            server_url,
            provider_api_key,
            session_token: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with explicit values (used by tests).
    pub fn with_values(server_url: impl Into<String>, provider_api_key: Option<String>) -> Self {
        Self {
            server_url: server_url.into(),
            provider_api_key,
            session_token: None,
        }
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// The provider API key, if configured
    pub fn provider_api_key(&self) -> Option<&str> {
        self.provider_api_key.as_deref()
    }

    /// Set the session token carried as the `jwt` cookie
    pub fn set_session_token(&mut self, token: Option<String>) {
        self.session_token = token;
    }

    /// Clear the session token (logout)
    pub fn clear_session_token(&mut self) {
        self.session_token = None;
    }

    /// The `Cookie` header value for authenticated requests, if any
    pub fn session_cookie_header(&self) -> Option<String> {
        self.session_token
            .as_ref()
            .map(|token| format!("{SESSION_COOKIE}={token}"))
    }
}
