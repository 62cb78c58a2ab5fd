//! Conversational session engine for North Light.
//!
//! Provides:
//! - An append-only transcript that signals its renderer on every append
//! - A session controller running one query/answer cycle at a time
//! - Pluggable resolvers: a canned local echo and the remote `/chat` service
//! - Failure classification into a fixed transcript text plus a toast

pub mod classifier;
pub mod controller;
pub mod local;
pub mod remote;
pub mod transcript;

#[cfg(test)]
pub(crate) mod test_support;

use async_trait::async_trait;

pub use classifier::{classify, Classification, CONNECTION_ERROR_TITLE, GENERIC_FAILURE_TEXT};
pub use controller::{SessionBuilder, SessionController, SubmitOutcome, SubmitRejection};
pub use local::LocalEchoResolver;
pub use remote::{RemoteConfig, RemoteResolver};
pub use transcript::Transcript;

/// Turns a user query into an answer.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, query: &str) -> Result<String, ResolveError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No connection to the service could be established.
    #[error("cannot connect to {host}: {reason}")]
    Connectivity { host: String, reason: String },
    /// The service answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Protocol { status: u16 },
    /// The service answered successfully but the body had the wrong shape.
    #[error("{0}")]
    Payload(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("HTTP client error: {0}")]
    Client(String),
}
