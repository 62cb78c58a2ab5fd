//! Remote answering service configuration.

use serde::{Deserialize, Serialize};

/// Where and how the playground reaches the answering service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL; queries go to `<base_url>/chat?query=...`.
    pub base_url: String,
    /// Send `Content-Type: application/json` on the (bodyless) GET.
    pub send_json_content_type: bool,
    /// Whole-request timeout in seconds (valid range: 1-600). Unset waits indefinitely.
    pub timeout_secs: Option<u32>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:10000".into(),
            send_json_content_type: true,
            timeout_secs: None,
        }
    }
}
