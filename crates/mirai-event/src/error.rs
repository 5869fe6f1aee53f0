//! Decode error types.

use thiserror::Error;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that terminate a decode call.
///
/// Every failure surfaces as one of these; nested failures (message chains,
/// quoted origins) propagate unchanged instead of degrading into an empty chain.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The bytes are not valid JSON, or not the JSON shape the entry point expects.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The object has no string `type` field.
    #[error("missing or non-string `type` discriminator")]
    MissingDiscriminator,

    /// The discriminator is a string but no variant is registered for it.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// The discriminator matched, but a field violates the variant's shape.
    #[error("{tag}: {}{reason}", .field.as_deref().map(|f| format!("field `{f}`: ")).unwrap_or_default())]
    VariantDecodeFailure {
        tag: String,
        field: Option<String>,
        reason: String,
    },

    /// Quoted replies are nested deeper than the configured limit.
    #[error("message chain nesting exceeds the limit of {limit}")]
    RecursionLimitExceeded { limit: usize },
}

impl DecodeError {
    /// Create a variant decode failure.
    pub fn variant(
        tag: impl Into<String>,
        field: Option<impl Into<String>>,
        reason: impl Into<String>,
    ) -> Self {
        Self::VariantDecodeFailure {
            tag: tag.into(),
            field: field.map(Into::into),
            reason: reason.into(),
        }
    }

    /// The discriminator involved in the failure, when one was read.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::UnknownVariant(tag) | Self::VariantDecodeFailure { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// The offending field of a [`DecodeError::VariantDecodeFailure`].
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::VariantDecodeFailure { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Whether the input was not JSON at all.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedJson(_))
    }

    /// Short stable name of the error kind, suitable for logs and metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedJson(_) => "malformed_json",
            Self::MissingDiscriminator => "missing_discriminator",
            Self::UnknownVariant(_) => "unknown_variant",
            Self::VariantDecodeFailure { .. } => "variant_decode_failure",
            Self::RecursionLimitExceeded { .. } => "recursion_limit_exceeded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_display_with_field() {
        let err = DecodeError::variant("FriendMessage", Some("sender"), "missing field");
        assert_eq!(err.to_string(), "FriendMessage: field `sender`: missing field");
        assert_eq!(err.tag(), Some("FriendMessage"));
        assert_eq!(err.field(), Some("sender"));
    }

    #[test]
    fn test_variant_display_without_field() {
        let err = DecodeError::variant("Plain", None::<String>, "expected a map");
        assert_eq!(err.to_string(), "Plain: expected a map");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(DecodeError::MissingDiscriminator.kind(), "missing_discriminator");
        assert_eq!(
            DecodeError::UnknownVariant("Bogus".into()).kind(),
            "unknown_variant"
        );
        assert_eq!(
            DecodeError::RecursionLimitExceeded { limit: 16 }.to_string(),
            "message chain nesting exceeds the limit of 16"
        );
    }

    #[test]
    fn test_malformed_from_serde() {
        let err: DecodeError = serde_json::from_slice::<serde_json::Value>(b"{")
            .unwrap_err()
            .into();
        assert!(err.is_malformed());
        assert_eq!(err.tag(), None);
    }
}
