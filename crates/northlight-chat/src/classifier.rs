//! Maps resolver failures to what the user sees.
//!
//! The transcript always gets the same fixed sentence; diagnostic detail
//! only ever travels in the transient notification.

use northlight_common::Notification;

use crate::ResolveError;

pub const GENERIC_FAILURE_TEXT: &str =
    "Sorry, I'm having trouble connecting to the backend. Please check the console for details.";

pub const CONNECTION_ERROR_TITLE: &str = "Connection Error";

/// User-facing outcome of a failed query.
#[derive(Debug, Clone)]
pub struct Classification {
    pub transcript_text: &'static str,
    pub notification: Notification,
}

pub fn classify(error: &ResolveError) -> Classification {
    let description = match error {
        ResolveError::Connectivity { host, .. } => format!(
            "Cannot connect to {host} from this client. \
             Try running the app locally or use a tunnel service like ngrok."
        ),
        other => format!("Error: {other}"),
    };

    Classification {
        transcript_text: GENERIC_FAILURE_TEXT,
        notification: Notification::destructive(CONNECTION_ERROR_TITLE, description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use northlight_common::NotificationVariant;

    fn connectivity() -> ResolveError {
        ResolveError::Connectivity {
            host: "localhost".into(),
            reason: "connection refused".into(),
        }
    }

    #[test]
    fn connectivity_suggests_local_run_or_tunnel() {
        let c = classify(&connectivity());
        assert_eq!(c.transcript_text, GENERIC_FAILURE_TEXT);
        assert_eq!(c.notification.title, "Connection Error");
        assert_eq!(c.notification.variant, NotificationVariant::Destructive);
        assert!(c.notification.description.contains("Cannot connect to localhost"));
        assert!(c.notification.description.contains("tunnel"));
    }

    #[test]
    fn protocol_failure_carries_status_code() {
        let c = classify(&ResolveError::Protocol { status: 500 });
        assert_eq!(c.notification.description, "Error: HTTP error! status: 500");
        assert_eq!(c.notification.title, CONNECTION_ERROR_TITLE);
    }

    #[test]
    fn payload_failure_carries_detail() {
        let c = classify(&ResolveError::Payload("missing field `answer`".into()));
        assert_eq!(c.notification.description, "Error: missing field `answer`");
    }

    #[test]
    fn transport_failure_is_described() {
        let c = classify(&ResolveError::Transport("operation timed out".into()));
        assert!(c.notification.description.contains("operation timed out"));
    }

    #[test]
    fn transcript_text_never_leaks_error_detail() {
        let errors = [
            connectivity(),
            ResolveError::Protocol { status: 503 },
            ResolveError::Payload("<script>alert(1)</script>".into()),
            ResolveError::Transport("reset".into()),
            ResolveError::Client("tls".into()),
        ];
        for err in &errors {
            let c = classify(err);
            assert_eq!(c.transcript_text, GENERIC_FAILURE_TEXT);
            assert_eq!(c.notification.variant, NotificationVariant::Destructive);
        }
    }

    #[test]
    fn classification_is_stable() {
        let a = classify(&ResolveError::Protocol { status: 404 });
        let b = classify(&ResolveError::Protocol { status: 404 });
        assert_eq!(a.transcript_text, b.transcript_text);
        assert_eq!(a.notification.description, b.notification.description);
    }
}
