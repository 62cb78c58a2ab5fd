//! Terminal rendering of transcript events and toasts.

use std::io::Write;

use northlight_common::{
    Message, Notification, NotificationVariant, SessionEvent, SharedNotificationQueue,
};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use super::profile::Profile;

pub(crate) fn format_message(message: &Message, profile: &Profile) -> String {
    let who = if message.is_user() {
        "you"
    } else {
        profile.bot_name.as_str()
    };
    format!("[{}] {who}: {}", message.display_time(), message.content)
}

pub(crate) fn format_toast(notification: &Notification) -> String {
    let marker = match notification.variant {
        NotificationVariant::Destructive => "!!",
        NotificationVariant::Default => "--",
    };
    format!(
        "{marker} {}: {}",
        notification.title, notification.description
    )
}

pub(crate) fn print_header(profile: &Profile, transcript: &[Message]) {
    println!("== {} ==", profile.title);
    println!("   {}", profile.subtitle);
    if transcript.is_empty() {
        if let Some((welcome, hint)) = &profile.welcome {
            println!();
            println!("{welcome}");
            println!("{hint}");
        }
    }
    for message in transcript {
        println!("{}", format_message(message, profile));
    }
    println!("({}; /quit to leave)", profile.placeholder);
}

/// Draw session events until the session closes.
///
/// Transcript lines go to `out`, toasts still within their TTL go to `err`.
pub(crate) async fn render_events<W: Write, E: Write>(
    mut rx: broadcast::Receiver<SessionEvent>,
    toasts: SharedNotificationQueue,
    profile: Profile,
    mut out: W,
    mut err: E,
) {
    loop {
        let closed = match rx.recv().await {
            Ok(SessionEvent::TranscriptAppended(message)) => {
                let _ = writeln!(out, "{}", format_message(&message, &profile));
                false
            }
            Ok(SessionEvent::ScrollToLatest) => {
                let _ = out.flush();
                false
            }
            Ok(SessionEvent::AwaitingChanged(true)) => {
                let _ = writeln!(out, "   {}", profile.thinking);
                false
            }
            Ok(SessionEvent::AwaitingChanged(false)) => false,
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Renderer fell behind");
                false
            }
            Ok(SessionEvent::Closed) | Err(RecvError::Closed) => true,
        };

        for toast in toasts.drain() {
            let _ = writeln!(err, "{}", format_toast(&toast));
        }
        if closed {
            let _ = out.flush();
            break;
        }
    }
}
