//! Backend validation (base URL shape, timeout range).

use crate::schema::NorthlightConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate the remote service settings.
pub(crate) fn validate_backend(errors: &mut Vec<String>, config: &NorthlightConfig) {
    let base_url = config.backend.base_url.trim();
    validate_not_blank(errors, "backend.base_url", base_url);
    if !base_url.is_empty() && !base_url.starts_with("http://") && !base_url.starts_with("https://")
    {
        errors.push(format!(
            "backend.base_url = {base_url:?} must start with http:// or https://"
        ));
    }
    if base_url.contains('?') || base_url.contains('#') {
        errors.push(format!(
            "backend.base_url = {base_url:?} must not carry a query or fragment"
        ));
    }

    if let Some(timeout) = config.backend.timeout_secs {
        validate_range(errors, "backend.timeout_secs", timeout, 1, 600);
    }
}
