//! Top-level event decoding.

use serde_json::Value;
use tracing::{debug, trace};

use super::Event;
use crate::error::{DecodeError, Result};
use crate::message::ChainDecoder;
use crate::payload::{Payload, parse_json, split_tag};
use crate::registry::EventRegistry;

/// Decodes webhook bodies into [`Event`]s.
///
/// Holds shared references only, so one decoder can be copied freely and
/// used from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct EventDecoder<'r> {
    registry: &'r EventRegistry,
    chains: ChainDecoder<'r>,
}

impl<'r> EventDecoder<'r> {
    pub fn new(registry: &'r EventRegistry, chains: ChainDecoder<'r>) -> Self {
        Self { registry, chains }
    }

    /// Decode one event from a raw webhook body.
    pub fn decode(&self, bytes: &[u8]) -> Result<Event> {
        let value: Value = parse_json(bytes, self.chains.max_depth()).inspect_err(|e| {
            debug!(kind = e.kind(), error = %e, "rejected unparsable event payload");
        })?;
        self.decode_value(value)
    }

    pub fn decode_str(&self, text: &str) -> Result<Event> {
        self.decode(text.as_bytes())
    }

    /// Decode one event from an already parsed JSON value.
    pub fn decode_value(&self, value: Value) -> Result<Event> {
        self.dispatch(value).inspect_err(|e| {
            debug!(kind = e.kind(), tag = e.tag(), error = %e, "rejected event payload");
        })
    }

    fn dispatch(&self, value: Value) -> Result<Event> {
        let (tag, fields) = split_tag(value)?;
        let Some(rule) = self.registry.lookup(&tag) else {
            return Err(DecodeError::UnknownVariant(tag));
        };
        trace!(tag = %tag, "dispatching event");
        rule(Payload::new(tag, fields), &self.chains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecoderConfig;
    use crate::registry::Registries;

    #[test]
    fn test_decode_bot_event() {
        let registries = Registries::with_defaults();
        let decoder = registries.event_decoder(&DecoderConfig::default());

        let event = decoder
            .decode_str(r#"{"type":"BotOnlineEvent","qq":123456}"#)
            .unwrap();
        assert_eq!(event.discriminator(), "BotOnlineEvent");
    }

    #[test]
    fn test_decode_failures() {
        let registries = Registries::with_defaults();
        let decoder = registries.event_decoder(&DecoderConfig::default());

        assert!(decoder.decode(b"{not json").unwrap_err().is_malformed());
        assert!(matches!(
            decoder.decode(br#"{"qq":1}"#),
            Err(DecodeError::MissingDiscriminator)
        ));
        assert!(matches!(
            decoder.decode(br#"[1, 2]"#),
            Err(DecodeError::MissingDiscriminator)
        ));
        assert!(matches!(
            decoder.decode(br#"{"type":"Plain","text":"x"}"#),
            Err(DecodeError::UnknownVariant(ref tag)) if tag == "Plain"
        ));

        let err = decoder
            .decode(br#"{"type":"BotOnlineEvent","qq":"abc"}"#)
            .unwrap_err();
        assert_eq!(err.tag(), Some("BotOnlineEvent"));
        assert_eq!(err.field(), Some("qq"));
    }

    #[test]
    fn test_empty_registry_knows_nothing() {
        let registries = Registries::with_defaults();
        let events = EventRegistry::new();
        let decoder = EventDecoder::new(&events, registries.chain_decoder(&DecoderConfig::default()));

        assert!(matches!(
            decoder.decode(br#"{"type":"BotOnlineEvent","qq":1}"#),
            Err(DecodeError::UnknownVariant(_))
        ));
    }
}
