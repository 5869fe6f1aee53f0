//! Other-client presence and console command events.

use serde::{Deserialize, Serialize};

use super::EventPayload;
use super::contact::{Friend, GroupMember, OtherClient};
use crate::error::Result;
use crate::message::{ChainDecoder, MessageChain};
use crate::payload::Payload;

/// Another client of the bot's account came online.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherClientOnlineEvent {
    pub client: Option<OtherClient>,
    /// Device kind reported by the server.
    pub kind: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherClientOfflineEvent {
    pub client: Option<OtherClient>,
}

/// A command was executed. Both `friend` and `member` are `None` when it
/// came from the console.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandExecutedEvent {
    pub name: String,
    pub friend: Option<Friend>,
    pub member: Option<GroupMember>,
    #[serde(skip_deserializing)]
    pub args: MessageChain,
}

impl EventPayload for OtherClientOnlineEvent {}
impl EventPayload for OtherClientOfflineEvent {}

impl EventPayload for CommandExecutedEvent {
    fn from_payload(mut payload: Payload, chains: &ChainDecoder<'_>) -> Result<Self> {
        let raw = payload.take_chain("args")?;
        let mut event: Self = payload.decode()?;
        if let Some(raw) = raw {
            event.args = chains.decode_elements(raw, 0)?;
        }
        Ok(event)
    }
}

impl CommandExecutedEvent {
    /// Whether the command came from the console rather than a chat.
    pub fn is_console(&self) -> bool {
        self.friend.is_none() && self.member.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecoderConfig;
    use crate::payload::split_tag;
    use crate::registry::ElementRegistry;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<CommandExecutedEvent> {
        let registry = ElementRegistry::with_defaults();
        let chains = ChainDecoder::new(&registry, &DecoderConfig::default());
        let (tag, fields) = split_tag(value).unwrap();
        CommandExecutedEvent::from_payload(Payload::new(tag, fields), &chains)
    }

    #[test]
    fn test_command_args_decoded() {
        let event = decode(json!({
            "type": "CommandExecutedEvent",
            "name": "help",
            "friend": null,
            "member": null,
            "args": [{"type": "Plain", "text": "all"}]
        }))
        .unwrap();

        assert!(event.is_console());
        assert_eq!(event.args.plain_text(), "all");
    }

    #[test]
    fn test_command_without_args() {
        let event = decode(json!({"type": "CommandExecutedEvent", "name": "stop"})).unwrap();
        assert!(event.args.is_empty());
    }

    #[test]
    fn test_command_bad_args_fails() {
        let err = decode(json!({
            "type": "CommandExecutedEvent",
            "name": "x",
            "args": "not a chain"
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("args"));
    }
}
