use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NorthlightError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("chat error: {0}")]
    Chat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("backend.base_url is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: backend.base_url is empty"
        );
    }

    #[test]
    fn northlight_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: NorthlightError = config_err.into();
        assert!(matches!(err, NorthlightError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn northlight_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
        let err: NorthlightError = io_err.into();
        assert!(matches!(err, NorthlightError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn northlight_error_chat_display() {
        let err = NorthlightError::Chat("runtime unavailable".into());
        assert_eq!(err.to_string(), "chat error: runtime unavailable");
    }
}
