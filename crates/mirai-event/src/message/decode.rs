//! Message chain decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use super::{
    App, At, AtAll, Dice, Face, File, Image, Json, MarketFace, Message, MessageChain, MiraiCode,
    MusicShare, Plain, Poke, Quote, Source, Voice, Xml,
};
use crate::config::DecoderConfig;
use crate::error::{DecodeError, Result};
use crate::payload::{Payload, parse_json, split_tag};
use crate::registry::ElementRegistry;

/// Wire field of a quote's nested chain.
const ORIGIN: &str = "origin";

/// Decodes message chains against the element registry.
///
/// Nested chains (quote origins) are decoded with the same decoder one level
/// deeper; a chain at depth `>= max_depth` fails with
/// [`DecodeError::RecursionLimitExceeded`].
#[derive(Debug, Clone, Copy)]
pub struct ChainDecoder<'r> {
    registry: &'r ElementRegistry,
    max_depth: usize,
}

impl<'r> ChainDecoder<'r> {
    pub fn new(registry: &'r ElementRegistry, config: &DecoderConfig) -> Self {
        Self {
            registry,
            max_depth: config.max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Decode a chain from raw bytes holding a JSON array.
    ///
    /// Bytes that are not JSON, or JSON that is not an array, are
    /// [`DecodeError::MalformedJson`].
    pub fn decode(&self, bytes: &[u8]) -> Result<MessageChain> {
        let items: Vec<Value> = parse_json(bytes, self.max_depth)?;
        self.decode_elements(items, 0)
    }

    /// Decode the raw elements of a chain sitting at `depth`.
    ///
    /// The result has exactly one element per input item, in input order.
    /// The first failing element fails the whole chain.
    pub fn decode_elements(&self, items: Vec<Value>, depth: usize) -> Result<MessageChain> {
        if depth >= self.max_depth {
            debug!(depth, limit = self.max_depth, "message chain nested too deep");
            return Err(DecodeError::RecursionLimitExceeded {
                limit: self.max_depth,
            });
        }

        let mut chain = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let message = self.decode_element(item, depth).inspect_err(|e| {
                debug!(index, depth, kind = e.kind(), error = %e, "message element rejected");
            })?;
            chain.push(message);
        }
        Ok(MessageChain::from(chain))
    }

    fn decode_element(&self, item: Value, depth: usize) -> Result<Message> {
        let (tag, fields) = split_tag(item)?;
        let Some(rule) = self.registry.lookup(&tag) else {
            return Err(DecodeError::UnknownVariant(tag));
        };
        trace!(tag = %tag, depth, "decoding message element");
        rule(Payload::new(tag, fields), self, depth)
    }
}

/// How an element struct is built from its payload.
///
/// The default decodes the fields directly; elements that nest a chain
/// override it.
pub(crate) trait ElementPayload: DeserializeOwned {
    fn from_payload(payload: Payload, _chains: &ChainDecoder<'_>, _depth: usize) -> Result<Self> {
        payload.decode()
    }
}

impl ElementPayload for Source {}
impl ElementPayload for At {}
impl ElementPayload for AtAll {}
impl ElementPayload for Face {}
impl ElementPayload for Plain {}
impl ElementPayload for Image {}
impl ElementPayload for Voice {}
impl ElementPayload for Xml {}
impl ElementPayload for Json {}
impl ElementPayload for App {}
impl ElementPayload for Poke {}
impl ElementPayload for Dice {}
impl ElementPayload for MarketFace {}
impl ElementPayload for MusicShare {}
impl ElementPayload for File {}
impl ElementPayload for MiraiCode {}

impl ElementPayload for Quote {
    fn from_payload(mut payload: Payload, chains: &ChainDecoder<'_>, depth: usize) -> Result<Self> {
        let origin = payload.require_chain(ORIGIN)?;
        let mut quote: Quote = payload.decode()?;
        quote.origin = chains.decode_elements(origin, depth + 1)?;
        Ok(quote)
    }
}
