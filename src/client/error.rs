/**
 * Client Error Types
 *
 * Fault taxonomy of the chat bootstrap. Every variant is terminal: the UI
 * renders the message and offers a reload; only the token fetch has a
 * built-in retry budget before it lands here.
 */

use thiserror::Error;

/// Terminal failures of the chat bootstrap sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatSetupError {
    /// The provider token could not be fetched within the retry budget
    #[error("Failed to get authentication token")]
    TokenFetchFailed,

    /// The provider API key is not configured on this client
    #[error("Chat service is not configured properly")]
    ProviderMisconfigured,

    /// No target participant to open a channel with
    #[error("Invalid chat target")]
    InvalidTarget,

    /// Connecting to the provider or opening the channel failed
    #[error("Failed to connect to chat: {0}")]
    ConnectFailed(String),
}
