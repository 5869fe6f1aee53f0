//! Requests awaiting an answer from the bot.
//!
//! `event_id` identifies the request when responding to it.

use serde::{Deserialize, Serialize};

use super::EventPayload;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFriendRequestEvent {
    pub event_id: i64,
    pub from_id: i64,
    /// Group the request came through, 0 if none.
    pub group_id: i64,
    pub nick: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberJoinRequestEvent {
    pub event_id: i64,
    pub from_id: i64,
    pub group_id: i64,
    pub group_name: String,
    pub nick: String,
    pub message: String,
    pub invitor_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotInvitedJoinGroupRequestEvent {
    pub event_id: i64,
    pub from_id: i64,
    pub group_id: i64,
    pub group_name: String,
    pub nick: String,
    pub message: String,
}

impl EventPayload for NewFriendRequestEvent {}
impl EventPayload for MemberJoinRequestEvent {}
impl EventPayload for BotInvitedJoinGroupRequestEvent {}
