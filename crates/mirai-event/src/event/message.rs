//! Message events, received and synchronized.
//!
//! Received messages name their `sender`. Sync messages are copies of what
//! the bot itself sent from another client, so they name the `subject` the
//! message was sent to instead.

use serde::{Deserialize, Serialize};

use super::EventPayload;
use super::contact::{Friend, Group, GroupMember, OtherClient, Stranger};
use crate::error::Result;
use crate::message::{ChainDecoder, MessageChain};
use crate::payload::Payload;

/// Wire field holding the chain of every message event.
const MESSAGE_CHAIN: &str = "messageChain";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendMessage {
    pub sender: Friend,
    #[serde(skip_deserializing)]
    pub message_chain: MessageChain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessage {
    pub sender: GroupMember,
    #[serde(skip_deserializing)]
    pub message_chain: MessageChain,
}

/// Temporary session message from a group member who is not a friend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TempMessage {
    pub sender: GroupMember,
    #[serde(skip_deserializing)]
    pub message_chain: MessageChain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrangerMessage {
    pub sender: Stranger,
    #[serde(skip_deserializing)]
    pub message_chain: MessageChain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherClientMessage {
    pub sender: OtherClient,
    #[serde(skip_deserializing)]
    pub message_chain: MessageChain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendSyncMessage {
    /// Friend the message was sent to.
    pub subject: Friend,
    #[serde(skip_deserializing)]
    pub message_chain: MessageChain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSyncMessage {
    /// Group the message was sent to.
    pub subject: Group,
    #[serde(skip_deserializing)]
    pub message_chain: MessageChain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TempSyncMessage {
    pub subject: GroupMember,
    #[serde(skip_deserializing)]
    pub message_chain: MessageChain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrangerSyncMessage {
    pub subject: Stranger,
    #[serde(skip_deserializing)]
    pub message_chain: MessageChain,
}

macro_rules! chain_bearing {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl EventPayload for $ty {
                fn from_payload(mut payload: Payload, chains: &ChainDecoder<'_>) -> Result<Self> {
                    let raw = payload.require_chain(MESSAGE_CHAIN)?;
                    let mut event: Self = payload.decode()?;
                    event.message_chain = chains.decode_elements(raw, 0)?;
                    Ok(event)
                }
            }
        )+
    };
}

chain_bearing!(
    FriendMessage,
    GroupMessage,
    TempMessage,
    StrangerMessage,
    OtherClientMessage,
    FriendSyncMessage,
    GroupSyncMessage,
    TempSyncMessage,
    StrangerSyncMessage,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecoderConfig;
    use crate::error::DecodeError;
    use crate::payload::split_tag;
    use crate::registry::ElementRegistry;
    use serde_json::json;

    fn decode<T: EventPayload>(value: serde_json::Value) -> Result<T> {
        let registry = ElementRegistry::with_defaults();
        let chains = ChainDecoder::new(&registry, &DecoderConfig::default());
        let (tag, fields) = split_tag(value).unwrap();
        T::from_payload(Payload::new(tag, fields), &chains)
    }

    #[test]
    fn test_friend_message() {
        let event: FriendMessage = decode(json!({
            "type": "FriendMessage",
            "sender": {"ID": 1, "nickname": "x", "remark": ""},
            "messageChain": [{"type": "Plain", "text": "hi"}]
        }))
        .unwrap();

        assert_eq!(event.sender.id, 1);
        assert_eq!(event.message_chain.plain_text(), "hi");
    }

    #[test]
    fn test_missing_chain_fails() {
        let err = decode::<FriendMessage>(json!({
            "type": "FriendMessage",
            "sender": {"ID": 1}
        }))
        .unwrap_err();

        assert_eq!(err.tag(), Some("FriendMessage"));
        assert_eq!(err.field(), Some("messageChain"));
    }

    #[test]
    fn test_bad_chain_element_propagates() {
        let err = decode::<GroupSyncMessage>(json!({
            "type": "GroupSyncMessage",
            "subject": {"id": 5, "name": "g", "permission": "MEMBER"},
            "messageChain": [{"type": "Nope"}]
        }))
        .unwrap_err();

        assert!(matches!(err, DecodeError::UnknownVariant(ref tag) if tag == "Nope"));
    }

    #[test]
    fn test_missing_sender_fails() {
        let err = decode::<StrangerMessage>(json!({
            "type": "StrangerMessage",
            "messageChain": []
        }))
        .unwrap_err();

        assert_eq!(err.field(), Some("sender"));
    }
}
