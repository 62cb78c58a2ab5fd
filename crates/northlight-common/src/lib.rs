pub mod errors;
pub mod events;
pub mod id;
pub mod message;
pub mod notifications;

pub use errors::{ConfigError, NorthlightError};
pub use events::{EventBus, SessionEvent};
pub use id::{MessageId, MessageIdGenerator, SessionId};
pub use message::{Message, Sender};
pub use notifications::{
    Notification, NotificationQueue, NotificationVariant, Notifier, SharedNotificationQueue,
};

pub type Result<T> = std::result::Result<T, NorthlightError>;
