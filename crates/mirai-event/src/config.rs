//! Decoder configuration.

use serde::{Deserialize, Serialize};

/// Default limit on quote-of-quote nesting.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Largest nesting limit the JSON parser can honour.
///
/// Every quote level adds two levels of JSON nesting (the origin array and
/// the quote object) and serde_json stops parsing at 128, so chains nested
/// deeper than this never reach the depth check.
pub const MAX_SUPPORTED_DEPTH: usize = 60;

/// Tunables shared by every decoder handed out by [`crate::Registries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Maximum message chain nesting. The top-level chain of an event sits at
    /// depth 0, the origin of a quote inside it at depth 1, and so on; a chain
    /// at depth `>= max_depth` is rejected.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    /// Set the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check the configuration for values that would reject every payload.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 {
            return Err("max_depth must be at least 1".to_string());
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(format!(
                "max_depth must be at most {MAX_SUPPORTED_DEPTH}, got {}",
                self.max_depth
            ));
        }
        Ok(())
    }
}
