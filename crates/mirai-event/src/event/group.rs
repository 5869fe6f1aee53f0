//! Group administration events.
//!
//! An `operator` of `None` means the bot itself performed the action.

use serde::{Deserialize, Serialize};

use super::EventPayload;
use super::contact::{Group, GroupMember, GroupPermission};

/// The bot's permission in a group changed. Only the owner can do this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotGroupPermissionChangeEvent {
    pub origin: GroupPermission,
    pub current: GroupPermission,
    pub group: Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotMuteEvent {
    #[serde(alias = "durationSecond")]
    pub duration_seconds: i64,
    pub operator: GroupMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotUnmuteEvent {
    pub operator: GroupMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotJoinGroupEvent {
    pub group: Group,
    /// Member who invited the bot, if it was invited.
    pub invitor: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotLeaveEventActive {
    pub group: Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotLeaveEventKick {
    pub group: Group,
    pub operator: GroupMember,
}

/// The group the bot was in was disbanded by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotLeaveEventDisband {
    pub group: Group,
    pub operator: GroupMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecallEvent {
    #[serde(alias = "authorID")]
    pub author_id: i64,
    #[serde(alias = "messageID")]
    pub message_id: i64,
    /// Send time of the recalled message.
    pub time: i64,
    pub group: Group,
    pub operator: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRecallEvent {
    #[serde(alias = "authorID")]
    pub author_id: i64,
    #[serde(alias = "messageID")]
    pub message_id: i64,
    pub time: i64,
    /// QQ number of whoever recalled the message, friend or bot.
    pub operator: i64,
}

/// Where a nudge happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NudgeSubject {
    /// Friend QQ number or group number, depending on `kind`.
    pub id: i64,
    /// `"Friend"` or `"Group"`.
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NudgeEvent {
    #[serde(alias = "fromID")]
    pub from_id: i64,
    pub subject: NudgeSubject,
    pub action: String,
    pub suffix: String,
    pub target: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNameChangeEvent {
    pub origin: String,
    pub current: String,
    pub group: Group,
    pub operator: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntranceAnnouncementChangeEvent {
    pub origin: String,
    pub current: String,
    pub group: Group,
    pub operator: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMuteAllEvent {
    pub origin: bool,
    pub current: bool,
    pub group: Group,
    pub operator: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAllowAnonymousChatEvent {
    pub origin: bool,
    pub current: bool,
    pub group: Group,
    pub operator: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAllowConfessTalkEvent {
    pub origin: bool,
    pub current: bool,
    pub group: Group,
    pub is_by_bot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAllowMemberInviteEvent {
    pub origin: bool,
    pub current: bool,
    pub group: Group,
    pub operator: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberJoinEvent {
    pub member: GroupMember,
    pub invitor: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLeaveEventKick {
    pub member: GroupMember,
    pub operator: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLeaveEventQuit {
    pub member: GroupMember,
}

/// A member's in-group nickname changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCardChangeEvent {
    pub origin: String,
    pub current: String,
    pub member: GroupMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSpecialTitleChangeEvent {
    pub origin: String,
    pub current: String,
    pub member: GroupMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPermissionChangeEvent {
    pub origin: GroupPermission,
    pub current: GroupPermission,
    pub member: GroupMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberMuteEvent {
    pub duration_seconds: i64,
    pub member: GroupMember,
    #[serde(alias = "operation")]
    pub operator: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberUnmuteEvent {
    pub member: GroupMember,
    pub operator: Option<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberHonorChangeEvent {
    pub member: GroupMember,
    /// `"achieve"` or `"lose"`.
    pub action: String,
    pub honor: String,
}

impl EventPayload for BotGroupPermissionChangeEvent {}
impl EventPayload for BotMuteEvent {}
impl EventPayload for BotUnmuteEvent {}
impl EventPayload for BotJoinGroupEvent {}
impl EventPayload for BotLeaveEventActive {}
impl EventPayload for BotLeaveEventKick {}
impl EventPayload for BotLeaveEventDisband {}
impl EventPayload for GroupRecallEvent {}
impl EventPayload for FriendRecallEvent {}
impl EventPayload for NudgeEvent {}
impl EventPayload for GroupNameChangeEvent {}
impl EventPayload for GroupEntranceAnnouncementChangeEvent {}
impl EventPayload for GroupMuteAllEvent {}
impl EventPayload for GroupAllowAnonymousChatEvent {}
impl EventPayload for GroupAllowConfessTalkEvent {}
impl EventPayload for GroupAllowMemberInviteEvent {}
impl EventPayload for MemberJoinEvent {}
impl EventPayload for MemberLeaveEventKick {}
impl EventPayload for MemberLeaveEventQuit {}
impl EventPayload for MemberCardChangeEvent {}
impl EventPayload for MemberSpecialTitleChangeEvent {}
impl EventPayload for MemberPermissionChangeEvent {}
impl EventPayload for MemberMuteEvent {}
impl EventPayload for MemberUnmuteEvent {}
impl EventPayload for MemberHonorChangeEvent {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn member() -> serde_json::Value {
        json!({
            "id": 2,
            "memberName": "op",
            "permission": "OWNER",
            "group": {"id": 9, "name": "g", "permission": "MEMBER"}
        })
    }

    #[test]
    fn test_operator_null_or_absent_is_bot() {
        let event: GroupMuteAllEvent = serde_json::from_value(json!({
            "origin": false,
            "current": true,
            "group": {"id": 9},
            "operator": null
        }))
        .unwrap();
        assert!(event.operator.is_none());

        let event: GroupNameChangeEvent = serde_json::from_value(json!({
            "origin": "a",
            "current": "b",
            "group": {"id": 9}
        }))
        .unwrap();
        assert!(event.operator.is_none());
    }

    #[test]
    fn test_mute_duration_spellings() {
        let event: BotMuteEvent = serde_json::from_value(json!({
            "durationSecond": 60,
            "operator": member()
        }))
        .unwrap();
        assert_eq!(event.duration_seconds, 60);

        let event: MemberMuteEvent = serde_json::from_value(json!({
            "durationSeconds": 30,
            "member": member(),
            "operation": member()
        }))
        .unwrap();
        assert_eq!(event.duration_seconds, 30);
        assert_eq!(event.operator.unwrap().permission, GroupPermission::Owner);
    }

    #[test]
    fn test_nudge_subject() {
        let event: NudgeEvent = serde_json::from_value(json!({
            "fromId": 1,
            "subject": {"id": 9, "kind": "Group"},
            "action": "poke",
            "suffix": "",
            "target": 2
        }))
        .unwrap();
        assert_eq!(event.subject.kind, "Group");
        assert_eq!(event.target, 2);
    }

    #[test]
    fn test_required_operator() {
        let result: Result<BotLeaveEventKick, _> = serde_json::from_value(json!({
            "group": {"id": 9}
        }));
        assert!(result.is_err());
    }
}
