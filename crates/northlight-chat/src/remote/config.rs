//! Remote resolver configuration.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    /// Send `Content-Type: application/json` even though the GET has no body.
    pub send_json_content_type: bool,
    /// Whole-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            send_json_content_type: true,
            timeout: None,
        }
    }

    pub fn with_json_content_type(mut self, enabled: bool) -> Self {
        self.send_json_content_type = enabled;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::new("http://localhost:10000")
    }
}
