//! Builds the session controller for a mode from config.

use std::sync::Arc;
use std::time::Duration;

use northlight_chat::{
    LocalEchoResolver, RemoteConfig, RemoteResolver, Resolver, SessionController,
};
use northlight_common::{NorthlightError, SharedNotificationQueue};
use northlight_config::NorthlightConfig;
use tracing::info;

use crate::cli::Mode;

pub(crate) fn remote_config(config: &NorthlightConfig, base_url: Option<&str>) -> RemoteConfig {
    let backend = &config.backend;
    let mut remote = RemoteConfig::new(base_url.unwrap_or(&backend.base_url))
        .with_json_content_type(backend.send_json_content_type);
    if let Some(secs) = backend.timeout_secs {
        remote = remote.with_timeout(Duration::from_secs(u64::from(secs)));
    }
    remote
}

pub(crate) fn build_session(
    mode: Mode,
    config: &NorthlightConfig,
    base_url: Option<&str>,
    toasts: SharedNotificationQueue,
) -> northlight_common::Result<SessionController> {
    let resolver: Arc<dyn Resolver> = match mode {
        Mode::Widget => Arc::new(LocalEchoResolver::new(
            config.widget.reply.clone(),
            Duration::from_millis(u64::from(config.widget.reply_delay_ms)),
        )),
        Mode::Playground => {
            let remote = remote_config(config, base_url);
            info!(base_url = %remote.base_url, "Using remote answering service");
            Arc::new(
                RemoteResolver::new(remote).map_err(|e| NorthlightError::Chat(e.to_string()))?,
            )
        }
    };

    let mut builder = SessionController::builder(resolver, Arc::new(toasts))
        .with_notification_ttl(Duration::from_secs(u64::from(
            config.notifications.ttl_secs,
        )));
    if mode == Mode::Widget {
        builder = builder.with_greeting(config.widget.greeting.clone());
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_override_wins() {
        let config = NorthlightConfig::default();
        let remote = remote_config(&config, Some("https://abc.ngrok.io"));
        assert_eq!(remote.base_url, "https://abc.ngrok.io");
        assert!(remote.send_json_content_type);
        assert!(remote.timeout.is_none());
    }

    #[test]
    fn timeout_is_carried_over() {
        let mut config = NorthlightConfig::default();
        config.backend.timeout_secs = Some(30);
        let remote = remote_config(&config, None);
        assert_eq!(remote.timeout, Some(Duration::from_secs(30)));
        assert_eq!(remote.base_url, "http://localhost:10000");
    }

    #[tokio::test]
    async fn widget_session_starts_with_greeting() {
        let config = NorthlightConfig::default();
        let session =
            build_session(Mode::Widget, &config, None, SharedNotificationQueue::new(4)).unwrap();
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].content, "Hello! How can I help you today?");
    }

    #[tokio::test]
    async fn playground_session_starts_empty() {
        let config = NorthlightConfig::default();
        let session =
            build_session(Mode::Playground, &config, None, SharedNotificationQueue::new(4))
                .unwrap();
        assert_eq!(session.message_count(), 0);
        assert!(!session.is_awaiting_response());
    }
}
