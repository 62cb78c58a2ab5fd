//! Append-only message history.

use northlight_common::{EventBus, Message, SessionEvent};

/// Ordered transcript of a session. Messages are never edited or removed.
#[derive(Debug)]
pub struct Transcript {
    messages: Vec<Message>,
    events: EventBus,
}

impl Transcript {
    pub fn new(events: EventBus) -> Self {
        Self {
            messages: Vec::new(),
            events,
        }
    }

    /// Append a message, then tell the renderer to redraw and scroll.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message.clone());
        self.events.publish(SessionEvent::TranscriptAppended(message));
        self.events.publish(SessionEvent::ScrollToLatest);
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
