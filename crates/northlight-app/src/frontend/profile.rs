//! Per-mode presentation texts.

use northlight_config::NorthlightConfig;

use crate::cli::Mode;

/// What the terminal shows around the transcript for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Profile {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub bot_name: String,
    pub thinking: String,
    /// Shown while the transcript is empty.
    pub welcome: Option<(String, String)>,
}

impl Profile {
    pub(crate) fn for_mode(mode: Mode, config: &NorthlightConfig) -> Self {
        match mode {
            Mode::Widget => Self {
                title: config.widget.title.clone(),
                subtitle: config.widget.subtitle.clone(),
                placeholder: config.widget.placeholder.clone(),
                bot_name: config.widget.title.clone(),
                thinking: "...".into(),
                welcome: None,
            },
            Mode::Playground => Self {
                title: config.playground.title.clone(),
                subtitle: config.playground.subtitle.clone(),
                placeholder: config.playground.placeholder.clone(),
                bot_name: "AI".into(),
                thinking: config.playground.thinking.clone(),
                welcome: Some((
                    config.playground.welcome.clone(),
                    config.playground.welcome_hint.clone(),
                )),
            },
        }
    }
}
