//! Message element payloads.
//!
//! Field names follow the upstream wire vocabulary. Element fields are all
//! optional on the wire and fall back to their zero value when absent.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::MessageChain;

/// Metadata header; by convention the first element of a received chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    /// Message ID, used when quoting or recalling.
    pub id: i64,
    /// Unix timestamp in seconds.
    pub time: i64,
}

/// A quoted reply, owning the chain of the message it quotes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quote {
    /// Message ID of the quoted message.
    pub id: i64,
    /// Group the quoted message was received in, 0 for friend messages.
    #[serde(alias = "groupID")]
    pub group_id: i64,
    /// Sender of the quoted message.
    #[serde(alias = "senderID")]
    pub sender_id: i64,
    /// Receiver of the quoted message.
    #[serde(alias = "targetID", skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    /// Chain of the quoted message, decoded through the element registry.
    #[serde(skip_deserializing)]
    pub origin: MessageChain,
}

/// Mention of one group member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct At {
    pub target: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Mention of every group member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtAll {}

/// Built-in emoji. `faceId` takes precedence over `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Face {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plain {
    pub text: String,
}

impl Plain {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Image payload, shared by `Image` and `FlashImage`.
///
/// A non-empty `imageId` makes receivers ignore `url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    #[serde(alias = "imageID", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
}

/// Voice clip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Voice {
    #[serde(alias = "voiceID", skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
    /// Length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
}

/// Raw XML card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Xml {
    pub xml: String,
}

/// Raw JSON card. The payload is kept as the string it arrived as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Json {
    pub json: String,
}

/// Rich app card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Poke {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dice {
    pub value: i64,
}

/// Store sticker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketFace {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MusicShare {
    pub kind: String,
    pub title: String,
    pub summary: String,
    pub jump_url: String,
    pub picture_url: String,
    pub music_url: String,
    pub brief: String,
}

/// Group file reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    pub id: String,
    pub name: String,
    pub size: i64,
}

/// Mirai code text, e.g. `[mirai:atall]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiraiCode {
    pub code: String,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Source:{}]", self.id)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Quote:{}]", self.id)
    }
}

impl fmt::Display for At {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display.as_deref() {
            Some(display) if !display.is_empty() => f.write_str(display),
            _ => write!(f, "@{}", self.target),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.face_id, &self.name) {
            (Some(id), _) => write!(f, "[Face:{id}]"),
            (None, Some(name)) => write!(f, "[Face:{name}]"),
            (None, None) => f.write_str("[Face]"),
        }
    }
}

impl Image {
    /// Best available reference to the image, URL first.
    pub fn reference(&self) -> Option<&str> {
        self.url
            .as_deref()
            .or(self.image_id.as_deref())
            .or(self.path.as_deref())
    }
}
