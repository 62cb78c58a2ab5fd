//! SessionController struct, construction, and state accessors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use northlight_common::{
    EventBus, Message, MessageIdGenerator, Notifier, Sender, SessionEvent, SessionId,
};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::transcript::Transcript;
use crate::Resolver;

pub(super) struct SessionState {
    pub(super) transcript: Transcript,
    pub(super) pending_input: String,
}

pub(super) struct Inner {
    pub(super) id: SessionId,
    pub(super) state: Mutex<SessionState>,
    /// Whether a resolver call is outstanding.
    pub(super) awaiting: AtomicBool,
    pub(super) resolver: Arc<dyn Resolver>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) events: EventBus,
    pub(super) ids: MessageIdGenerator,
    /// Cancelled on teardown while holding `state`, so a check made under
    /// the same lock cannot race an append past it.
    pub(super) liveness: CancellationToken,
    pub(super) notification_ttl: Option<Duration>,
}

/// Handle to one chat session. Clones share the same session.
#[derive(Clone)]
pub struct SessionController {
    pub(super) inner: Arc<Inner>,
}

/// Builds a [`SessionController`].
pub struct SessionBuilder {
    resolver: Arc<dyn Resolver>,
    notifier: Arc<dyn Notifier>,
    greeting: Option<String>,
    notification_ttl: Option<Duration>,
}

impl SessionBuilder {
    /// Seed the transcript with a bot greeting.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    /// Override how long failure toasts stay visible.
    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = Some(ttl);
        self
    }

    pub fn build(self) -> SessionController {
        let events = EventBus::default();
        let ids = MessageIdGenerator::new();
        let mut transcript = Transcript::new(events.clone());
        if let Some(greeting) = self.greeting {
            transcript.append(Message::new(ids.next_id(), Sender::Bot, greeting));
        }

        let id = SessionId::new();
        info!(session = %id, seeded = !transcript.is_empty(), "Session started");

        SessionController {
            inner: Arc::new(Inner {
                id,
                state: Mutex::new(SessionState {
                    transcript,
                    pending_input: String::new(),
                }),
                awaiting: AtomicBool::new(false),
                resolver: self.resolver,
                notifier: self.notifier,
                events,
                ids,
                liveness: CancellationToken::new(),
                notification_ttl: self.notification_ttl,
            }),
        }
    }
}

impl SessionController {
    pub fn builder(resolver: Arc<dyn Resolver>, notifier: Arc<dyn Notifier>) -> SessionBuilder {
        SessionBuilder {
            resolver,
            notifier,
            greeting: None,
            notification_ttl: None,
        }
    }

    /// A session with an empty transcript.
    pub fn new(resolver: Arc<dyn Resolver>, notifier: Arc<dyn Notifier>) -> Self {
        Self::builder(resolver, notifier).build()
    }

    pub(super) fn state(&self) -> MutexGuard<'_, SessionState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> &SessionId {
        &self.inner.id
    }

    /// Replace the not-yet-submitted input text.
    pub fn set_input(&self, text: impl Into<String>) {
        self.state().pending_input = text.into();
    }

    pub fn pending_input(&self) -> String {
        self.state().pending_input.clone()
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.inner.awaiting.load(Ordering::Acquire)
    }

    /// Whether the send affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_awaiting_response()
            && !self.is_torn_down()
            && !self.state().pending_input.trim().is_empty()
    }

    /// Snapshot of the transcript in insertion order.
    pub fn transcript(&self) -> Vec<Message> {
        self.state().transcript.all().to_vec()
    }

    pub fn message_count(&self) -> usize {
        self.state().transcript.len()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Discard the session. Outcomes still in flight are dropped on arrival.
    ///
    /// Once this returns the transcript no longer changes, and `Closed` is
    /// the last transcript-related event subscribers see.
    pub fn teardown(&self) {
        let _state = self.state();
        if self.inner.liveness.is_cancelled() {
            return;
        }
        debug!(session = %self.inner.id, awaiting = self.is_awaiting_response(), "Tearing down");
        self.inner.liveness.cancel();
        self.inner.events.publish(SessionEvent::Closed);
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.liveness.is_cancelled()
    }
}
