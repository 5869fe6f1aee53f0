//! Message chains and their elements.
//!
//! A [`MessageChain`] is an ordered list of self-tagged [`Message`] elements.
//! Element order is kept exactly as received; the "Source comes first"
//! convention is a producer guarantee and is not checked here.

mod decode;
mod elements;

use std::fmt;
use std::ops::Index;

use serde::Serialize;

pub use decode::ChainDecoder;
pub use elements::{
    App, At, AtAll, Dice, Face, File, Image, Json, MarketFace, MiraiCode, MusicShare, Plain, Poke,
    Quote, Source, Voice, Xml,
};

use crate::registry::ElementRule;

macro_rules! message_elements {
    ( $( $(#[$meta:meta])* $variant:ident($ty:ty) = $tag:literal ),+ $(,)? ) => {
        /// One element of a message chain.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "type")]
        pub enum Message {
            $(
                $(#[$meta])*
                #[serde(rename = $tag)]
                $variant($ty),
            )+
        }

        impl Message {
            /// Wire discriminator of this element.
            pub fn discriminator(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $tag, )+
                }
            }
        }

        // Built-in element table.
        pub(crate) static ELEMENT_RULES: &[(&str, ElementRule)] = &[
            $(
                (
                    $tag,
                    |payload, chains, depth| {
                        <$ty as decode::ElementPayload>::from_payload(payload, chains, depth)
                            .map(Message::$variant)
                    },
                ),
            )+
        ];
    };
}

message_elements! {
    Source(Source) = "Source",
    /// Quoted reply; the only element that nests another chain.
    Quote(Quote) = "Quote",
    At(At) = "At",
    AtAll(AtAll) = "AtAll",
    Face(Face) = "Face",
    Plain(Plain) = "Plain",
    Image(Image) = "Image",
    FlashImage(Image) = "FlashImage",
    Voice(Voice) = "Voice",
    Xml(Xml) = "Xml",
    Json(Json) = "Json",
    App(App) = "App",
    Poke(Poke) = "Poke",
    Dice(Dice) = "Dice",
    MarketFace(MarketFace) = "MarketFace",
    MusicShare(MusicShare) = "MusicShare",
    File(File) = "File",
    MiraiCode(MiraiCode) = "MiraiCode",
}

impl Message {
    /// Text of a `Plain` element.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain(plain) => Some(&plain.text),
            _ => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(source) => write!(f, "{source}"),
            Self::Quote(quote) => write!(f, "{quote}"),
            Self::At(at) => write!(f, "{at}"),
            Self::AtAll(_) => f.write_str("@all"),
            Self::Face(face) => write!(f, "{face}"),
            Self::Plain(plain) => f.write_str(&plain.text),
            Self::Image(image) => write!(f, "[Image:{}]", image.reference().unwrap_or_default()),
            Self::FlashImage(image) => {
                write!(f, "[FlashImage:{}]", image.reference().unwrap_or_default())
            }
            Self::Voice(_) => f.write_str("[Voice]"),
            Self::Xml(_) => f.write_str("[Xml]"),
            Self::Json(_) => f.write_str("[Json]"),
            Self::App(_) => f.write_str("[App]"),
            Self::Poke(poke) => write!(f, "[Poke:{}]", poke.name),
            Self::Dice(dice) => write!(f, "[Dice:{}]", dice.value),
            Self::MarketFace(face) => write!(f, "[MarketFace:{}]", face.name),
            Self::MusicShare(music) => write!(f, "[MusicShare:{}]", music.title),
            Self::File(file) => write!(f, "[File:{}]", file.name),
            Self::MiraiCode(code) => f.write_str(&code.code),
        }
    }
}

/// An ordered sequence of message elements forming one message body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MessageChain(Vec<Message>);

impl MessageChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.0.get(index)
    }

    /// The first `Source` element, wherever it sits.
    pub fn source(&self) -> Option<&Source> {
        self.0.iter().find_map(|m| match m {
            Message::Source(source) => Some(source),
            _ => None,
        })
    }

    /// ID of this message, for quoting or recalling it.
    pub fn message_id(&self) -> Option<i64> {
        self.source().map(|s| s.id)
    }

    /// The first `Quote` element.
    pub fn quote(&self) -> Option<&Quote> {
        self.0.iter().find_map(|m| match m {
            Message::Quote(quote) => Some(quote),
            _ => None,
        })
    }

    /// Concatenated text of all `Plain` elements, ignoring everything else.
    pub fn plain_text(&self) -> String {
        self.0.iter().filter_map(Message::as_plain).collect()
    }
}

impl From<Vec<Message>> for MessageChain {
    fn from(messages: Vec<Message>) -> Self {
        Self(messages)
    }
}

impl FromIterator<Message> for MessageChain {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MessageChain {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MessageChain {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for MessageChain {
    type Output = Message;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for MessageChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in self.0.iter().filter(|m| !matches!(m, Message::Source(_))) {
            write!(f, "{message}")?;
        }
        Ok(())
    }
}
