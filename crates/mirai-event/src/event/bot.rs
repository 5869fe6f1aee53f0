//! Bot status events.

use serde::{Deserialize, Serialize};

use super::EventPayload;

/// The bot logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotOnlineEvent {
    pub qq: i64,
}

/// The bot went offline on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotOfflineEventActive {
    pub qq: i64,
}

/// The bot was pushed offline by a login elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotOfflineEventForce {
    pub qq: i64,
}

/// The bot lost its connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotOfflineEventDropped {
    pub qq: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReloginEvent {
    pub qq: i64,
}

impl EventPayload for BotOnlineEvent {}
impl EventPayload for BotOfflineEventActive {}
impl EventPayload for BotOfflineEventForce {}
impl EventPayload for BotOfflineEventDropped {}
impl EventPayload for BotReloginEvent {}
