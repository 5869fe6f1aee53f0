//! Mirai-event: registry-driven decoding of mirai webhook events.
//!
//! Raw webhook bodies are decoded into a closed [`Event`] union by looking up
//! the `type` discriminator in an [`EventRegistry`]. Events that carry a
//! message chain decode it through a separate [`ElementRegistry`], recursing
//! into quoted replies under a depth limit. Decoding performs no I/O.
//!
//! ## Core Types
//!
//! - [`Event`] - One decoded webhook event
//! - [`Message`] / [`MessageChain`] - Message elements and ordered chains
//! - [`DecodeError`] - Why a payload was rejected
//!
//! ## Decoding
//!
//! - [`Registries`] - Both registries, built once at startup
//! - [`EventDecoder`] - Entry point for webhook bodies
//! - [`ChainDecoder`] - Entry point for bare message chains
//! - [`DecoderConfig`] - Nesting limit
//!
//! ## Capability View
//!
//! - [`MessageEvent`] - Uniform sender and chain access for message events
//! - [`Identity`] / [`Conversation`] - Normalized sender and reply target
//!
//! ```
//! use mirai_event::{DecoderConfig, Registries};
//!
//! let registries = Registries::with_defaults();
//! let decoder = registries.event_decoder(&DecoderConfig::default());
//!
//! let event = decoder
//!     .decode_str(r#"{"type":"FriendMessage","sender":{"ID":1,"nickname":"x","remark":""},"messageChain":[{"type":"Plain","text":"hi"}]}"#)
//!     .unwrap();
//! let message = event.as_message().unwrap();
//! assert_eq!(message.sender_or_subject().id, 1);
//! assert_eq!(message.plain_text(), "hi");
//! ```

pub mod capability;
pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod payload;
pub mod registry;

pub use capability::{Conversation, Identity, MessageEvent, Origin};
pub use config::{DEFAULT_MAX_DEPTH, DecoderConfig, MAX_SUPPORTED_DEPTH};
pub use error::{DecodeError, Result};
pub use event::{Event, EventDecoder};
pub use message::{ChainDecoder, Message, MessageChain};
pub use payload::{DISCRIMINATOR, Payload};
pub use registry::{ElementRegistry, ElementRule, EventRegistry, EventRule, Registries, TypeRegistry};
