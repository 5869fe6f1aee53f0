//! Friend relationship events.

use serde::{Deserialize, Serialize};

use super::EventPayload;
use super::contact::Friend;

/// A friend started or stopped typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendInputStatusChangedEvent {
    pub friend: Friend,
    pub inputting: bool,
}

/// A friend changed nickname. `friend.nickname` may hold either name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendNickChangedEvent {
    pub friend: Friend,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendAddEvent {
    pub friend: Friend,
    /// Whether an existing stranger became a friend.
    pub stranger: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendDeleteEvent {
    pub friend: Friend,
}

impl EventPayload for FriendInputStatusChangedEvent {}
impl EventPayload for FriendNickChangedEvent {}
impl EventPayload for FriendAddEvent {}
impl EventPayload for FriendDeleteEvent {}
