/**
 * Chat Provider Seam
 *
 * The hosted chat service is an opaque external system; this trait is the
 * client's seam onto it. The production adapter wraps the provider SDK,
 * tests drive the bootstrap with a recording mock.
 *
 * Operations mirror what the bootstrap needs: connect a user session,
 * watch a channel with a fixed member list, send a message, disconnect.
 */

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::{ChannelId, UserSummary};

/// Failures reported by the provider.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("provider connection failed: {0}")]
    Connect(String),
    #[error("channel error: {0}")]
    Channel(String),
    #[error("provider request failed: {0}")]
    Request(String),
}

/// Client-side handle to the external chat provider.
#[async_trait]
pub trait ChatProvider: Send {
    /// Establish a session for the given user with a provider token.
    async fn connect_user(
        &mut self,
        identity: &UserSummary,
        token: &str,
    ) -> Result<(), ProviderError>;

    /// Identifier of the currently connected user, if a session exists.
    fn connected_user(&self) -> Option<&str>;

    /// Open and subscribe to a channel with the given member list.
    async fn watch_channel(
        &mut self,
        channel: &ChannelId,
        members: &[&str],
    ) -> Result<(), ProviderError>;

    /// Send a message to a channel.
    async fn send_message(&mut self, channel: &ChannelId, text: &str)
        -> Result<(), ProviderError>;

    /// Tear down the session. Idempotent: disconnecting without a session
    /// is a no-op.
    async fn disconnect(&mut self) -> Result<(), ProviderError>;
}
