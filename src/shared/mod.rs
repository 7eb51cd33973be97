//! Types shared between the backend and the client.

pub mod channel;
pub mod types;

pub use channel::ChannelId;
pub use types::{ProviderTokenResponse, UserSummary};
