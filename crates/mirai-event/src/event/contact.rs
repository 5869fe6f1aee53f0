//! Identity shapes shared by many events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Permission level of a member within a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupPermission {
    Owner,
    Administrator,
    #[default]
    Member,
}

impl GroupPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Administrator => "ADMINISTRATOR",
            Self::Member => "MEMBER",
        }
    }

    /// Owners and administrators.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Owner | Self::Administrator)
    }
}

impl fmt::Display for GroupPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A friend of the bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub remark: String,
}

/// A group chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// The bot's own permission in this group.
    #[serde(default)]
    pub permission: GroupPermission,
}

/// A member of a group.
///
/// Some events send only `id`, `memberName`, `permission` and `group`; the
/// remaining fields then keep their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: i64,
    /// In-group nickname.
    #[serde(default)]
    pub member_name: String,
    #[serde(default)]
    pub special_title: String,
    #[serde(default)]
    pub permission: GroupPermission,
    #[serde(default)]
    pub join_timestamp: i64,
    #[serde(default)]
    pub last_speak_timestamp: i64,
    #[serde(default)]
    pub mute_time_remaining: i64,
    pub group: Group,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stranger {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub remark: String,
}

/// Another client logged in to the bot's own account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherClient {
    pub id: i64,
    #[serde(default)]
    pub platform: String,
}
