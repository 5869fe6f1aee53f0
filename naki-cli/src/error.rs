use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error [{kind}]: {0}", kind = .0.kind())]
    Decode(#[from] mirai_event::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No configuration directory available on this platform")]
    NoConfigDir,

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("{failed} of {total} payloads failed to decode")]
    PartialFailure { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use mirai_event::DecodeError;

    #[test]
    fn test_decode_error_display_names_kind() {
        let error = AppError::from(DecodeError::UnknownVariant("Bogus".to_string()));
        assert_eq!(
            error.to_string(),
            "Decode error [unknown_variant]: unknown variant: Bogus"
        );

        let error = AppError::from(DecodeError::RecursionLimitExceeded { limit: 3 });
        assert!(error.to_string().starts_with("Decode error [recursion_limit_exceeded]: "));
    }

    #[test]
    fn test_partial_failure_display() {
        let error = AppError::PartialFailure { failed: 2, total: 5 };
        assert_eq!(error.to_string(), "2 of 5 payloads failed to decode");
    }
}
