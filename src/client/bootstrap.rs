/**
 * Chat Bootstrap
 *
 * The client-side sequence that takes an authenticated user to a ready
 * two-party channel, modeled as an explicit state machine:
 *
 *   Idle -> FetchingToken -> Connecting -> OpeningChannel -> Ready
 *                 \________________\______________\-> Error (terminal)
 *
 * Rules:
 * - Missing inputs (no auth user yet) leave the machine Idle; that is a
 *   not-ready outcome, not an error.
 * - A session for the same user is reused; re-running the sequence never
 *   issues a second connect for an already-connected user.
 * - When the identifying user changes, the previous session is torn down
 *   to completion before the new connect is attempted, so two live
 *   sessions cannot overlap.
 * - Every failure past the guards is terminal; the only recovery is a
 *   reload, except the token fetch's built-in retry budget.
 */

use crate::client::api::ApiClient;
use crate::client::error::ChatSetupError;
use crate::client::provider::ChatProvider;
use crate::shared::{ChannelId, UserSummary};

/// Observable state of the bootstrap sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapPhase {
    Idle,
    FetchingToken,
    Connecting,
    OpeningChannel,
    Ready,
    Error(ChatSetupError),
}

/// Result of a completed (non-failing) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Session connected and channel watched
    Ready,
    /// Inputs are not complete yet; nothing was attempted
    NotReady,
}

/// Identifying inputs of the sequence. A change of `auth_user` forces a
/// full teardown; a change of `target_user_id` only reopens the channel.
#[derive(Debug, Clone, Default)]
pub struct BootstrapInputs {
    pub auth_user: Option<UserSummary>,
    pub target_user_id: Option<String>,
}

/// Drives the chat bootstrap against a provider implementation.
pub struct ChatBootstrap<P: ChatProvider> {
    api: ApiClient,
    provider: P,
    inputs: BootstrapInputs,
    token: Option<String>,
    channel: Option<ChannelId>,
    phase: BootstrapPhase,
}

impl<P: ChatProvider> ChatBootstrap<P> {
    pub fn new(api: ApiClient, provider: P) -> Self {
        Self {
            api,
            provider,
            inputs: BootstrapInputs::default(),
            token: None,
            channel: None,
            phase: BootstrapPhase::Idle,
        }
    }

    pub fn phase(&self) -> &BootstrapPhase {
        &self.phase
    }

    /// The watched channel, once Ready.
    pub fn channel(&self) -> Option<&ChannelId> {
        self.channel.as_ref()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Replace the identifying inputs and re-run the sequence.
    ///
    /// If the authenticated user changed, the existing session is torn
    /// down to completion (and the cached token dropped) before the new
    /// run starts.
    pub async fn set_inputs(
        &mut self,
        inputs: BootstrapInputs,
    ) -> Result<BootstrapOutcome, ChatSetupError> {
        let user_changed = self.inputs.auth_user.as_ref().map(|u| &u.id)
            != inputs.auth_user.as_ref().map(|u| &u.id);
        if user_changed {
            self.teardown().await;
            self.token = None;
        }
        self.inputs = inputs;
        self.run().await
    }

    /// Run the bootstrap sequence from the current inputs.
    pub async fn run(&mut self) -> Result<BootstrapOutcome, ChatSetupError> {
        let inputs = self.inputs.clone();

        // Not-ready is distinct from error: without an authenticated user
        // there is nothing to do yet.
        let Some(user) = inputs.auth_user else {
            self.phase = BootstrapPhase::Idle;
            return Ok(BootstrapOutcome::NotReady);
        };

        if self.api.config().provider_api_key().is_none() {
            tracing::error!("Provider API key is not configured");
            return Err(self.fail(ChatSetupError::ProviderMisconfigured));
        }

        let Some(target) = inputs.target_user_id.filter(|t| !t.is_empty()) else {
            tracing::error!("Target user id is missing");
            return Err(self.fail(ChatSetupError::InvalidTarget));
        };

        let token = if let Some(token) = self.token.clone() {
            token
        } else {
            self.phase = BootstrapPhase::FetchingToken;
            match self.api.fetch_provider_token().await {
                Ok(token) => {
                    self.token = Some(token.clone());
                    token
                }
                Err(e) => {
                    tracing::error!("Provider token fetch failed: {e}");
                    return Err(self.fail(ChatSetupError::TokenFetchFailed));
                }
            }
        };

        if self.provider.connected_user() == Some(user.id.as_str()) {
            tracing::debug!("Session for {} already exists, reusing", user.id);
        } else {
            // A session for a different user must be fully torn down
            // before the new connect.
            if self.provider.connected_user().is_some() {
                if let Err(e) = self.provider.disconnect().await {
                    tracing::warn!("Teardown before reconnect failed: {e}");
                }
            }

            self.phase = BootstrapPhase::Connecting;
            if let Err(e) = self.provider.connect_user(&user, &token).await {
                tracing::error!("Provider connect failed: {e}");
                return Err(self.fail(ChatSetupError::ConnectFailed(e.to_string())));
            }
        }

        self.phase = BootstrapPhase::OpeningChannel;
        let channel = ChannelId::for_pair(&user.id, &target);
        if let Err(e) = self
            .provider
            .watch_channel(&channel, &[&user.id, &target])
            .await
        {
            tracing::error!("Channel watch failed: {e}");
            return Err(self.fail(ChatSetupError::ConnectFailed(e.to_string())));
        }

        self.channel = Some(channel);
        self.phase = BootstrapPhase::Ready;
        Ok(BootstrapOutcome::Ready)
    }

    /// Tear down the live session, waiting for the disconnect to finish.
    pub async fn teardown(&mut self) {
        if self.provider.connected_user().is_some() {
            tracing::debug!("Disconnecting chat session");
            if let Err(e) = self.provider.disconnect().await {
                tracing::warn!("Disconnect failed: {e}");
            }
        }
        self.channel = None;
        self.phase = BootstrapPhase::Idle;
    }

    /// Post a video-call invitation into the ready channel.
    pub async fn send_call_link(&mut self, origin: &str) -> Result<(), ChatSetupError> {
        let Some(channel) = self.channel.clone() else {
            return Err(ChatSetupError::InvalidTarget);
        };

        let call_url = format!("{origin}/call/{channel}");
        let text = format!("I've started a video call. Join me here: {call_url}");
        self.provider
            .send_message(&channel, &text)
            .await
            .map_err(|e| ChatSetupError::ConnectFailed(e.to_string()))
    }

    fn fail(&mut self, error: ChatSetupError) -> ChatSetupError {
        self.phase = BootstrapPhase::Error(error.clone());
        error
    }
}
