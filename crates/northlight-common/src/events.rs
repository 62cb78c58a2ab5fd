use tokio::sync::broadcast;

use crate::message::Message;

/// Signals a session publishes to its rendering collaborators.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A message was appended to the transcript.
    TranscriptAppended(Message),
    /// The view should scroll to the newest message.
    ScrollToLatest,
    /// The awaiting-response flag changed (drives the typing indicator).
    AwaitingChanged(bool),
    /// The session was torn down; nothing further is appended.
    Closed,
}

#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    /// Publish to every subscriber; returns how many received it.
    pub fn publish(&self, event: SessionEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::MessageIdGenerator;
    use crate::message::Sender;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(SessionEvent::ScrollToLatest);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::ScrollToLatest));
    }

    #[tokio::test]
    async fn clones_share_subscribers() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let clone = bus.clone();

        let msg = Message::new(MessageIdGenerator::new().next_id(), Sender::User, "hello");
        clone.publish(SessionEvent::TranscriptAppended(msg));
        clone.publish(SessionEvent::AwaitingChanged(true));

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, SessionEvent::TranscriptAppended(ref m) if m.content == "hello"));
        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, SessionEvent::AwaitingChanged(true)));
    }

    #[tokio::test]
    async fn closed_arrives_after_earlier_events() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(SessionEvent::AwaitingChanged(false));
        bus.publish(SessionEvent::Closed);

        assert!(matches!(rx.recv().await.unwrap(), SessionEvent::AwaitingChanged(false)));
        assert!(matches!(rx.recv().await.unwrap(), SessionEvent::Closed));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(SessionEvent::ScrollToLatest), 0);
    }
}
