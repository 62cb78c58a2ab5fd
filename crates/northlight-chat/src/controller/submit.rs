//! The query/answer cycle.

use northlight_common::{Message, Sender};
use tracing::{debug, info, warn};

use crate::classifier::{classify, Classification};

use super::manager::SessionController;
use super::types::{InFlightGuard, SubmitOutcome, SubmitRejection};

impl SessionController {
    /// Submit `text` as a user query and wait for its outcome.
    ///
    /// Blank text, a torn-down session, or a query already in flight make
    /// this a no-op. Otherwise the user message is appended, the resolver
    /// is awaited, and exactly one bot message follows.
    pub async fn submit(&self, text: impl Into<String>) -> SubmitOutcome {
        let text = text.into();
        if text.trim().is_empty() {
            return SubmitOutcome::Rejected(SubmitRejection::EmptyInput);
        }

        let mut guard = match InFlightGuard::acquire(&self.inner.awaiting, &self.inner.events) {
            Ok(guard) => guard,
            Err(rejection) => {
                debug!(session = %self.inner.id, "Submission ignored while awaiting a reply");
                return SubmitOutcome::Rejected(rejection);
            }
        };

        {
            let mut state = self.state();
            if self.is_torn_down() {
                return SubmitOutcome::Rejected(SubmitRejection::TornDown);
            }
            let message = Message::new(self.inner.ids.next_id(), Sender::User, text.as_str());
            state.transcript.append(message);
            state.pending_input.clear();
            guard.announce();
        }

        info!(session = %self.inner.id, query_len = text.len(), "Dispatching query");
        let outcome = self.inner.resolver.resolve(&text).await;

        let mut state = self.state();
        if self.is_torn_down() {
            info!(session = %self.inner.id, "Session torn down, dropping outcome");
            return SubmitOutcome::Dropped;
        }

        match outcome {
            Ok(answer) => {
                let message = Message::new(self.inner.ids.next_id(), Sender::Bot, answer);
                state.transcript.append(message);
                SubmitOutcome::Answered
            }
            Err(err) => {
                warn!(session = %self.inner.id, error = %err, "Query failed");
                let Classification {
                    transcript_text,
                    mut notification,
                } = classify(&err);
                if let Some(ttl) = self.inner.notification_ttl {
                    notification = notification.with_ttl(ttl);
                }
                let message = Message::new(self.inner.ids.next_id(), Sender::Bot, transcript_text);
                state.transcript.append(message);
                // Notifiers must not call back into the session from here.
                self.inner.notifier.notify(notification);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Submit whatever is in the pending input (the Enter-key path).
    pub async fn submit_pending(&self) -> SubmitOutcome {
        let text = self.pending_input();
        self.submit(text).await
    }
}
