//! Discriminator registries.
//!
//! A registry maps a wire discriminator to the rule that decodes its payload.
//! Registration takes `&mut self` and happens once at startup; decoders only
//! ever hold a shared reference, so a registry in use can no longer change.

use rustc_hash::FxHashMap;

use crate::config::DecoderConfig;
use crate::error::Result;
use crate::event::{self, Event, EventDecoder};
use crate::message::{self, ChainDecoder, Message};
use crate::payload::Payload;

/// Decode rule for a top-level event payload.
pub type EventRule = fn(Payload, &ChainDecoder<'_>) -> Result<Event>;

/// Decode rule for a message chain element at the given nesting depth.
pub type ElementRule = fn(Payload, &ChainDecoder<'_>, usize) -> Result<Message>;

/// Registry of event decode rules.
pub type EventRegistry = TypeRegistry<EventRule>;

/// Registry of message element decode rules.
pub type ElementRegistry = TypeRegistry<ElementRule>;

/// Mapping from discriminator to decode rule.
#[derive(Clone)]
pub struct TypeRegistry<R> {
    rules: FxHashMap<&'static str, R>,
}

impl<R: Copy> TypeRegistry<R> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: FxHashMap::default(),
        }
    }

    /// Register a set of `(discriminator, rule)` pairs.
    ///
    /// A discriminator registered twice keeps the last rule.
    pub fn register<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'static str, R)>,
    {
        self.rules.extend(entries);
    }

    /// Look up the rule for a discriminator.
    pub fn lookup(&self, tag: &str) -> Option<R> {
        self.rules.get(tag).copied()
    }

    /// Whether a discriminator is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }

    /// All registered discriminators, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.rules.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<R: Copy> Default for TypeRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for TypeRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<_> = self.rules.keys().collect();
        tags.sort_unstable();
        f.debug_struct("TypeRegistry").field("tags", &tags).finish()
    }
}

impl TypeRegistry<EventRule> {
    /// Create a registry holding every built-in event variant.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(event::EVENT_RULES.iter().copied());
        registry
    }
}

impl TypeRegistry<ElementRule> {
    /// Create a registry holding every built-in message element.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(message::ELEMENT_RULES.iter().copied());
        registry
    }
}

/// The event and element registries of one process, built once at startup.
#[derive(Debug, Clone)]
pub struct Registries {
    pub events: EventRegistry,
    pub elements: ElementRegistry,
}

impl Registries {
    /// Create both registries with the built-in variant tables.
    pub fn with_defaults() -> Self {
        Self {
            events: EventRegistry::with_defaults(),
            elements: ElementRegistry::with_defaults(),
        }
    }

    /// Borrow a decoder for top-level event payloads.
    pub fn event_decoder(&self, config: &DecoderConfig) -> EventDecoder<'_> {
        EventDecoder::new(&self.events, self.chain_decoder(config))
    }

    /// Borrow a decoder for bare message chains.
    pub fn chain_decoder(&self, config: &DecoderConfig) -> ChainDecoder<'_> {
        ChainDecoder::new(&self.elements, config)
    }
}

impl Default for Registries {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_registry_with_defaults() {
        let registry = EventRegistry::with_defaults();

        assert_eq!(registry.len(), 49);
        assert!(registry.contains("FriendMessage"));
        assert!(registry.contains("GroupMessage"));
        assert!(registry.contains("BotLeaveEventActive"));
        assert!(registry.contains("CommandExecutedEvent"));
        assert!(!registry.contains("Plain"));
    }

    #[test]
    fn test_element_registry_with_defaults() {
        let registry = ElementRegistry::with_defaults();

        assert_eq!(registry.len(), 18);
        assert!(registry.contains("Source"));
        assert!(registry.contains("Quote"));
        assert!(registry.contains("Xml"));
        assert!(!registry.contains("ForwardMessage"));
        assert!(!registry.contains("FriendMessage"));
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = EventRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("FriendMessage").is_none());
    }

    #[test]
    fn test_duplicate_registration_keeps_last() {
        fn first(_: Payload, _: &ChainDecoder<'_>, _: usize) -> Result<Message> {
            Ok(Message::AtAll(message::AtAll {}))
        }
        fn second(_: Payload, _: &ChainDecoder<'_>, _: usize) -> Result<Message> {
            Ok(Message::Plain(message::Plain::new("second")))
        }

        let mut registry = ElementRegistry::new();
        registry.register([("X", first as ElementRule), ("X", second as ElementRule)]);
        assert_eq!(registry.len(), 1);

        let elements = ElementRegistry::new();
        let chains = ChainDecoder::new(&elements, &DecoderConfig::default());
        let rule = registry.lookup("X").unwrap();
        let message = rule(Payload::new("X".into(), Default::default()), &chains, 0).unwrap();
        assert_eq!(message, Message::Plain(message::Plain::new("second")));
    }

    #[test]
    fn test_tags_sorted() {
        let tags = ElementRegistry::with_defaults().tags();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        assert_eq!(tags, sorted);
    }
}
