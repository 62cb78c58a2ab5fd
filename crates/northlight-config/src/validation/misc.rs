//! Validation for the smaller sections: widget and notifications.

use crate::schema::NorthlightConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate widget constraints.
pub(crate) fn validate_widget(errors: &mut Vec<String>, config: &NorthlightConfig) {
    validate_range(
        errors,
        "widget.reply_delay_ms",
        config.widget.reply_delay_ms,
        0,
        60_000,
    );
    validate_not_blank(errors, "widget.reply", &config.widget.reply);
}

/// Validate notification queue constraints.
pub(crate) fn validate_notifications(errors: &mut Vec<String>, config: &NorthlightConfig) {
    validate_range(
        errors,
        "notifications.capacity",
        config.notifications.capacity,
        1,
        64,
    );
    validate_range(
        errors,
        "notifications.ttl_secs",
        config.notifications.ttl_secs,
        1,
        120,
    );
}
