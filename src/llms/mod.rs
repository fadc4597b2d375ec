//! The model-backend boundary.
//!
//! The core is agnostic to which provider backs generation; it depends only
//! on the message-list-in, single-string-out shape of [`ModelClient::call`].
//! No retry, backoff or rate limiting happens at this layer — a transport
//! failure propagates straight to the orchestrator's caller.

pub mod providers;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Message;

/// Failure modes of a model backend call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never completed (connection, DNS, timeout).
    #[error("model request failed: {0}")]
    Http(String),

    /// Non-success HTTP status other than auth/quota.
    #[error("model endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider rejected the credentials.
    #[error("model provider rejected authentication")]
    Auth,

    /// Rate limit or quota exhausted.
    #[error("model provider quota exhausted")]
    Quota,

    /// A well-formed response with no text content.
    #[error("model reply contained no text content")]
    EmptyResponse,

    /// The response body could not be parsed.
    #[error("could not parse model reply: {0}")]
    Malformed(String),
}

/// A chat-completion backend.
///
/// Implementations take the full ordered conversation and return the
/// model's single text reply. This is the core's only suspension point; a
/// generation request issues these calls strictly sequentially.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn call(&self, messages: &[Message]) -> Result<String, ProviderError>;
}
