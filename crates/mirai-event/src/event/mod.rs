//! Top-level webhook events.
//!
//! Every event is one variant of [`Event`], selected by the wire `type`
//! field. The variant table below is the single source for the enum, its
//! discriminators and the default event registry.

mod bot;
mod client;
mod contact;
mod decode;
mod friend;
mod group;
mod message;
mod request;

use serde::Serialize;

pub use bot::{
    BotOfflineEventActive, BotOfflineEventDropped, BotOfflineEventForce, BotOnlineEvent,
    BotReloginEvent,
};
pub use client::{CommandExecutedEvent, OtherClientOfflineEvent, OtherClientOnlineEvent};
pub use contact::{Friend, Group, GroupMember, GroupPermission, OtherClient, Stranger};
pub use decode::EventDecoder;
pub use friend::{
    FriendAddEvent, FriendDeleteEvent, FriendInputStatusChangedEvent, FriendNickChangedEvent,
};
pub use group::{
    BotGroupPermissionChangeEvent, BotJoinGroupEvent, BotLeaveEventActive, BotLeaveEventDisband,
    BotLeaveEventKick, BotMuteEvent, BotUnmuteEvent, FriendRecallEvent,
    GroupAllowAnonymousChatEvent, GroupAllowConfessTalkEvent, GroupAllowMemberInviteEvent,
    GroupEntranceAnnouncementChangeEvent, GroupMuteAllEvent, GroupNameChangeEvent,
    GroupRecallEvent, MemberCardChangeEvent, MemberHonorChangeEvent, MemberJoinEvent,
    MemberLeaveEventKick, MemberLeaveEventQuit, MemberMuteEvent, MemberPermissionChangeEvent,
    MemberSpecialTitleChangeEvent, MemberUnmuteEvent, NudgeEvent, NudgeSubject,
};
pub use message::{
    FriendMessage, FriendSyncMessage, GroupMessage, GroupSyncMessage, OtherClientMessage,
    StrangerMessage, StrangerSyncMessage, TempMessage, TempSyncMessage,
};
pub use request::{BotInvitedJoinGroupRequestEvent, MemberJoinRequestEvent, NewFriendRequestEvent};

use crate::error::Result;
use crate::message::ChainDecoder;
use crate::payload::Payload;
use crate::registry::EventRule;

/// How an event struct is built from its payload.
///
/// The default decodes the fields directly. Events carrying a message chain
/// override it to run the chain through the element registry.
pub(crate) trait EventPayload: serde::de::DeserializeOwned {
    fn from_payload(payload: Payload, _chains: &ChainDecoder<'_>) -> Result<Self> {
        payload.decode()
    }
}

macro_rules! event_variants {
    ( $( $category:literal => { $( $variant:ident ),+ $(,)? } )+ ) => {
        /// A decoded webhook event.
        ///
        /// Serializes back to the wire shape, `type` field included.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "type")]
        pub enum Event {
            $( $( $variant($variant), )+ )+
        }

        impl Event {
            /// Wire discriminator of this event.
            pub fn discriminator(&self) -> &'static str {
                match self {
                    $( $( Self::$variant(_) => stringify!($variant), )+ )+
                }
            }

            /// Coarse grouping of the event, e.g. `"group"` or `"request"`.
            pub fn category(&self) -> &'static str {
                match self {
                    $( $( Self::$variant(_) => $category, )+ )+
                }
            }
        }

        $( $(
            impl From<$variant> for Event {
                fn from(event: $variant) -> Self {
                    Self::$variant(event)
                }
            }
        )+ )+

        // Built-in event table.
        pub(crate) static EVENT_RULES: &[(&str, EventRule)] = &[
            $( $(
                (
                    stringify!($variant),
                    |payload, chains| {
                        <$variant as EventPayload>::from_payload(payload, chains).map(Event::$variant)
                    },
                ),
            )+ )+
        ];
    };
}

event_variants! {
    "message" => {
        FriendMessage,
        GroupMessage,
        TempMessage,
        StrangerMessage,
        OtherClientMessage,
    }
    "sync" => {
        FriendSyncMessage,
        GroupSyncMessage,
        TempSyncMessage,
        StrangerSyncMessage,
    }
    "bot" => {
        BotOnlineEvent,
        BotOfflineEventActive,
        BotOfflineEventForce,
        BotOfflineEventDropped,
        BotReloginEvent,
    }
    "friend" => {
        FriendInputStatusChangedEvent,
        FriendNickChangedEvent,
        FriendAddEvent,
        FriendDeleteEvent,
    }
    "group" => {
        BotGroupPermissionChangeEvent,
        BotMuteEvent,
        BotUnmuteEvent,
        BotJoinGroupEvent,
        BotLeaveEventActive,
        BotLeaveEventKick,
        BotLeaveEventDisband,
        GroupRecallEvent,
        FriendRecallEvent,
        NudgeEvent,
        GroupNameChangeEvent,
        GroupEntranceAnnouncementChangeEvent,
        GroupMuteAllEvent,
        GroupAllowAnonymousChatEvent,
        GroupAllowConfessTalkEvent,
        GroupAllowMemberInviteEvent,
        MemberJoinEvent,
        MemberLeaveEventKick,
        MemberLeaveEventQuit,
        MemberCardChangeEvent,
        MemberSpecialTitleChangeEvent,
        MemberPermissionChangeEvent,
        MemberMuteEvent,
        MemberUnmuteEvent,
        MemberHonorChangeEvent,
    }
    "request" => {
        NewFriendRequestEvent,
        MemberJoinRequestEvent,
        BotInvitedJoinGroupRequestEvent,
    }
    "client" => {
        OtherClientOnlineEvent,
        OtherClientOfflineEvent,
    }
    "command" => {
        CommandExecutedEvent,
    }
}
