//! Uniform access to message-bearing events.
//!
//! The nine message and sync-message variants each name their counterpart
//! with a different identity shape. [`MessageEvent`] flattens them to an
//! [`Identity`] and a [`Conversation`] so callers can read sender and content
//! without matching every variant. The typed identity stays reachable through
//! [`Identity::origin`].
//!
//! Control events have no such view; match on [`Event`] directly. Unregistered
//! discriminators never produce an [`Event`], so that match needs no fallback.

use std::fmt;

use serde::Serialize;

use crate::event::{
    Event, Friend, FriendMessage, FriendSyncMessage, Group, GroupMember, GroupMessage,
    GroupSyncMessage, OtherClient, OtherClientMessage, Stranger, StrangerMessage,
    StrangerSyncMessage, TempMessage, TempSyncMessage,
};
use crate::message::MessageChain;

/// The typed identity an [`Identity`] was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Origin<'a> {
    Friend(&'a Friend),
    Member(&'a GroupMember),
    Group(&'a Group),
    Stranger(&'a Stranger),
    OtherClient(&'a OtherClient),
}

/// Minimal identity common to every sender or subject shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identity<'a> {
    /// QQ number, or group number when the subject is a group.
    pub id: i64,
    /// Display name: nickname, in-group name, group name or client platform.
    pub name: &'a str,
    pub origin: Origin<'a>,
}

impl<'a> From<&'a Friend> for Identity<'a> {
    fn from(friend: &'a Friend) -> Self {
        Self {
            id: friend.id,
            name: &friend.nickname,
            origin: Origin::Friend(friend),
        }
    }
}

impl<'a> From<&'a GroupMember> for Identity<'a> {
    fn from(member: &'a GroupMember) -> Self {
        Self {
            id: member.id,
            name: &member.member_name,
            origin: Origin::Member(member),
        }
    }
}

impl<'a> From<&'a Group> for Identity<'a> {
    fn from(group: &'a Group) -> Self {
        Self {
            id: group.id,
            name: &group.name,
            origin: Origin::Group(group),
        }
    }
}

impl<'a> From<&'a Stranger> for Identity<'a> {
    fn from(stranger: &'a Stranger) -> Self {
        Self {
            id: stranger.id,
            name: &stranger.nickname,
            origin: Origin::Stranger(stranger),
        }
    }
}

impl<'a> From<&'a OtherClient> for Identity<'a> {
    fn from(client: &'a OtherClient) -> Self {
        Self {
            id: client.id,
            name: &client.platform,
            origin: Origin::OtherClient(client),
        }
    }
}

/// Where a reply to a message would go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conversation {
    Friend { id: i64 },
    Group { id: i64 },
    /// Temporary session with a member, reached through their group.
    Temp { group: i64, member: i64 },
    Stranger { id: i64 },
    OtherClient { id: i64 },
}

impl Conversation {
    /// Group number, for group and temporary conversations.
    pub fn group_id(&self) -> Option<i64> {
        match self {
            Self::Group { id } => Some(*id),
            Self::Temp { group, .. } => Some(*group),
            _ => None,
        }
    }
}

impl fmt::Display for Conversation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Friend { id } => write!(f, "friend:{id}"),
            Self::Group { id } => write!(f, "group:{id}"),
            Self::Temp { group, member } => write!(f, "temp:{group}/{member}"),
            Self::Stranger { id } => write!(f, "stranger:{id}"),
            Self::OtherClient { id } => write!(f, "client:{id}"),
        }
    }
}

/// Capability shared by every event that carries a message chain.
pub trait MessageEvent {
    /// The sender of a received message, or the subject of a sync message.
    fn sender_or_subject(&self) -> Identity<'_>;

    fn message_chain(&self) -> &MessageChain;

    /// Whether this is a copy of a message the bot sent from another client.
    fn is_sync(&self) -> bool;

    fn conversation(&self) -> Conversation;

    /// Message ID from the chain's `Source` element.
    fn message_id(&self) -> Option<i64> {
        self.message_chain().message_id()
    }

    fn plain_text(&self) -> String {
        self.message_chain().plain_text()
    }
}

macro_rules! message_event {
    ($ty:ty, $who:ident, sync = $sync:literal, |$party:ident| $conversation:expr) => {
        impl MessageEvent for $ty {
            fn sender_or_subject(&self) -> Identity<'_> {
                Identity::from(&self.$who)
            }

            fn message_chain(&self) -> &MessageChain {
                &self.message_chain
            }

            fn is_sync(&self) -> bool {
                $sync
            }

            fn conversation(&self) -> Conversation {
                let $party = &self.$who;
                $conversation
            }
        }
    };
}

message_event!(FriendMessage, sender, sync = false, |s| Conversation::Friend { id: s.id });
message_event!(GroupMessage, sender, sync = false, |s| Conversation::Group { id: s.group.id });
message_event!(TempMessage, sender, sync = false, |s| Conversation::Temp {
    group: s.group.id,
    member: s.id,
});
message_event!(StrangerMessage, sender, sync = false, |s| Conversation::Stranger { id: s.id });
message_event!(OtherClientMessage, sender, sync = false, |s| Conversation::OtherClient {
    id: s.id
});
message_event!(FriendSyncMessage, subject, sync = true, |s| Conversation::Friend { id: s.id });
message_event!(GroupSyncMessage, subject, sync = true, |s| Conversation::Group { id: s.id });
message_event!(TempSyncMessage, subject, sync = true, |s| Conversation::Temp {
    group: s.group.id,
    member: s.id,
});
message_event!(StrangerSyncMessage, subject, sync = true, |s| Conversation::Stranger {
    id: s.id
});

impl Event {
    /// View this event as a message event, if it carries one.
    pub fn as_message(&self) -> Option<&dyn MessageEvent> {
        match self {
            Self::FriendMessage(e) => Some(e),
            Self::GroupMessage(e) => Some(e),
            Self::TempMessage(e) => Some(e),
            Self::StrangerMessage(e) => Some(e),
            Self::OtherClientMessage(e) => Some(e),
            Self::FriendSyncMessage(e) => Some(e),
            Self::GroupSyncMessage(e) => Some(e),
            Self::TempSyncMessage(e) => Some(e),
            Self::StrangerSyncMessage(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_message(&self) -> bool {
        self.as_message().is_some()
    }

    /// Chain of a message event.
    pub fn message_chain(&self) -> Option<&MessageChain> {
        self.as_message().map(|m| m.message_chain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{BotOnlineEvent, GroupPermission};
    use crate::message::{Message, Plain};

    fn member() -> GroupMember {
        GroupMember {
            id: 20,
            member_name: "alice".to_string(),
            permission: GroupPermission::Administrator,
            group: Group {
                id: 300,
                name: "team".to_string(),
                permission: GroupPermission::Member,
            },
            ..Default::default()
        }
    }

    fn chain(text: &str) -> MessageChain {
        MessageChain::from(vec![Message::Plain(Plain::new(text))])
    }

    #[test]
    fn test_group_message_view() {
        let event = Event::from(GroupMessage {
            sender: member(),
            message_chain: chain("hello"),
        });

        let view = event.as_message().unwrap();
        let sender = view.sender_or_subject();
        assert_eq!(sender.id, 20);
        assert_eq!(sender.name, "alice");
        assert!(matches!(sender.origin, Origin::Member(m) if m.group.id == 300));
        assert!(!view.is_sync());
        assert_eq!(view.conversation(), Conversation::Group { id: 300 });
        assert_eq!(view.plain_text(), "hello");
    }

    #[test]
    fn test_temp_and_sync_views() {
        let event = Event::from(TempSyncMessage {
            subject: member(),
            message_chain: chain("x"),
        });
        let view = event.as_message().unwrap();
        assert!(view.is_sync());
        assert_eq!(view.conversation(), Conversation::Temp { group: 300, member: 20 });
        assert_eq!(view.conversation().group_id(), Some(300));
        assert_eq!(view.conversation().to_string(), "temp:300/20");

        let event = Event::from(GroupSyncMessage {
            subject: member().group,
            message_chain: MessageChain::new(),
        });
        let subject = event.as_message().unwrap().sender_or_subject();
        assert_eq!(subject.id, 300);
        assert_eq!(subject.name, "team");
    }

    #[test]
    fn test_stranger_and_client_views() {
        let event = Event::from(StrangerMessage {
            sender: Stranger {
                id: 5,
                nickname: "s".to_string(),
                remark: String::new(),
            },
            message_chain: MessageChain::new(),
        });
        assert_eq!(
            event.as_message().unwrap().conversation(),
            Conversation::Stranger { id: 5 }
        );

        let event = Event::from(OtherClientMessage {
            sender: OtherClient {
                id: 6,
                platform: "MOBILE".to_string(),
            },
            message_chain: MessageChain::new(),
        });
        assert_eq!(event.as_message().unwrap().sender_or_subject().name, "MOBILE");
    }

    #[test]
    fn test_control_event_has_no_view() {
        let event = Event::from(BotOnlineEvent { qq: 1 });
        assert!(!event.is_message());
        assert!(event.message_chain().is_none());
    }
}
