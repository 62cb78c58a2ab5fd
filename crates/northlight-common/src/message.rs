use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::MessageId;

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(id: MessageId, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Local wall-clock time for display, e.g. `14:03:27`.
    pub fn display_time(&self) -> String {
        self.created_at
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::MessageIdGenerator;

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
    }

    #[test]
    fn display_time_has_clock_shape() {
        let msg = Message::new(MessageIdGenerator::new().next_id(), Sender::Bot, "hi");
        let time = msg.display_time();
        assert_eq!(time.len(), 8);
        assert_eq!(time.matches(':').count(), 2);
        assert!(!msg.is_user());
    }
}
