//! ChatLink - Main Library
//!
//! ChatLink is a chat/video-call application: an Axum API backend over
//! PostgreSQL that handles user authentication and provider-token issuance,
//! and a client library that bootstraps a real-time chat session against an
//! external hosted chat provider.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between frontend and backend
//!   - Channel identity derivation
//!   - Wire types (provider token response, user summary)
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with JWT-cookie authentication gate
//!   - Signup/login/logout/me handlers
//!   - Provider chat-token issuance
//!   - PostgreSQL persistence behind a `UserStore` seam
//!
//! - **`client`** - Client-side chat bootstrap
//!   - Provider-token fetch with a bounded retry budget
//!   - Explicit bootstrap state machine (fetch token, connect, open
//!     channel) over an abstract `ChatProvider`
//!
//! # Authentication
//!
//! Requests carry a signed session token in the `jwt` cookie. The auth gate
//! verifies it against a shared secret, loads the corresponding user with
//! the credential field excluded, and attaches the resolved principal to the
//! request. Every failure class maps to a distinct 401/500 JSON response;
//! nothing propagates past the gate.
//!
//! # Chat Transport
//!
//! Message delivery, presence, and call signaling are delegated to the
//! external hosted provider. This crate only derives the deterministic
//! two-party channel identity and drives the provider through the
//! `client::provider::ChatProvider` trait.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

/// Client-side chat bootstrap
pub mod client;
