//! Canned reply after a fixed delay, used by the embedded widget.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{ResolveError, Resolver};

pub const DEFAULT_REPLY: &str =
    "Thanks for your message! I'm here to help you with any questions you might have.";

/// Resolver that ignores the query and answers with a fixed text.
#[derive(Debug, Clone)]
pub struct LocalEchoResolver {
    reply: String,
    delay: Duration,
}

impl LocalEchoResolver {
    pub fn new(reply: impl Into<String>, delay: Duration) -> Self {
        Self {
            reply: reply.into(),
            delay,
        }
    }
}

impl Default for LocalEchoResolver {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY, Duration::from_secs(1))
    }
}

#[async_trait]
impl Resolver for LocalEchoResolver {
    async fn resolve(&self, query: &str) -> Result<String, ResolveError> {
        debug!(query_len = query.len(), delay_ms = self.delay.as_millis() as u64, "Local echo");
        tokio::time::sleep(self.delay).await;
        Ok(self.reply.clone())
    }
}
