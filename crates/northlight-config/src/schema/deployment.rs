//! Per-deployment presentation and canned-reply settings.

use serde::{Deserialize, Serialize};

/// The embedded chat bubble with a local canned reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    /// Bot message the transcript is seeded with.
    pub greeting: String,
    /// Canned answer returned for every query.
    pub reply: String,
    /// Delay before the canned answer, in milliseconds (valid range: 0-60000).
    pub reply_delay_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Chatty North".into(),
            subtitle: "Always here to help".into(),
            placeholder: "Type your message...".into(),
            greeting: "Hello! How can I help you today?".into(),
            reply: "Thanks for your message! I'm here to help you with any questions you might have."
                .into(),
            reply_delay_ms: 1000,
        }
    }
}

/// The full-page playground backed by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    /// Shown while the transcript is empty.
    pub welcome: String,
    pub welcome_hint: String,
    /// Typing indicator text while a reply is awaited.
    pub thinking: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            title: "North Light AI Playground".into(),
            subtitle: "Intelligent RAG-powered assistant".into(),
            placeholder: "Ask me anything about your website...".into(),
            welcome: "Welcome to North Light AI Playground".into(),
            welcome_hint: "Ask me anything about your website content and get intelligent \
                           responses powered by RAG technology."
                .into(),
            thinking: "AI is thinking...".into(),
        }
    }
}
