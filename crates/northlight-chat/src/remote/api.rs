//! Resolver trait implementation for RemoteResolver.

use async_trait::async_trait;
use tracing::debug;

use crate::{ResolveError, Resolver};

use super::client::{parse_answer, RemoteResolver};

#[async_trait]
impl Resolver for RemoteResolver {
    async fn resolve(&self, query: &str) -> Result<String, ResolveError> {
        let url = self.chat_url(query);
        debug!(%url, "Sending request");

        let mut request = self.http.get(&url);
        if self.config.send_json_content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, "application/json");
        }

        let response = request.send().await.map_err(|e| self.send_error(e))?;

        let status = response.status();
        debug!(status = status.as_u16(), ok = status.is_success(), "Response status");
        if !status.is_success() {
            return Err(ResolveError::Protocol {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::Transport(format!("failed to read response body: {e}")))?;
        debug!(body = %body.chars().take(200).collect::<String>(), "Response data");

        parse_answer(&body)
    }
}
