//! Remote resolver struct, URL building, and payload parsing.

use serde::Deserialize;

use crate::ResolveError;

use super::config::RemoteConfig;

const CHAT_PATH: &str = "/chat";

#[derive(Deserialize)]
struct ChatAnswer {
    answer: String,
}

/// Resolver backed by the remote `/chat` endpoint.
pub struct RemoteResolver {
    pub(crate) config: RemoteConfig,
    pub(crate) http: reqwest::Client,
}

impl RemoteResolver {
    pub fn new(config: RemoteConfig) -> Result<Self, ResolveError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ResolveError::Client(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Full request URL for a query, percent-encoding it as one parameter.
    pub fn chat_url(&self, query: &str) -> String {
        format!(
            "{}{CHAT_PATH}?query={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        )
    }

    /// Host named in connectivity diagnostics.
    pub(crate) fn host(&self) -> String {
        reqwest::Url::parse(&self.config.base_url)
            .ok()
            .and_then(|url| url.host_str().map(String::from))
            .unwrap_or_else(|| self.config.base_url.clone())
    }

    /// Sort a failed `send` into connectivity vs. other transport errors.
    pub(crate) fn send_error(&self, err: reqwest::Error) -> ResolveError {
        if err.is_connect() && !err.is_timeout() {
            ResolveError::Connectivity {
                host: self.host(),
                reason: err.to_string(),
            }
        } else {
            ResolveError::Transport(err.to_string())
        }
    }
}

/// Extract the `answer` text from a successful response body.
pub(crate) fn parse_answer(body: &str) -> Result<String, ResolveError> {
    serde_json::from_str::<ChatAnswer>(body)
        .map(|payload| payload.answer)
        .map_err(|e| ResolveError::Payload(format!("invalid response payload: {e}")))
}
