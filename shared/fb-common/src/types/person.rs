//! Person Types

use serde::{Deserialize, Deserializer, Serialize};

use super::null_as_default;
use crate::format;

/// Stable numeric identifier of a directory member.
pub type PersonId = i64;

/// Activity status reported by the matching service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Active within the last week.
    Active,
    /// Active within the last few weeks.
    Recent,
    /// Inactive, unknown, or unset.
    #[default]
    Offline,
}

impl ActivityStatus {
    /// Map a wire value to a status. Anything unrecognised is `Offline`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "recent" => Self::Recent,
            _ => Self::Offline,
        }
    }
}

fn deserialize_activity<'de, D>(deserializer: D) -> Result<ActivityStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.as_deref().map_or(ActivityStatus::Offline, ActivityStatus::from_wire))
}

/// A conversation snippet attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub text: String,
    pub timestamp: String,
}

/// Profile fields shared by directory entries and search results.
///
/// The role, experience, intent and remote-preference strings are free-form
/// values from the service and are not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Free-text biography.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_activity")]
    pub activity_status: ActivityStatus,
    /// Expertise tags, unordered.
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain_expertise: Vec<String>,
    #[serde(default)]
    pub current_role: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub networking_intent: Option<String>,
    #[serde(default)]
    pub remote_preference: Option<String>,
    /// Conversation snippets, most relevant first as delivered.
    #[serde(default, deserialize_with = "null_as_default")]
    pub conversations: Vec<Conversation>,
    /// Last activity date (`YYYY-MM-DD`).
    #[serde(default)]
    pub last_active: Option<String>,
    #[serde(default)]
    pub conversation_count: Option<u32>,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        format::first_name(&self.name)
    }

    pub fn initials(&self) -> String {
        format::initials(&self.name)
    }

    /// "Role • Experience" line shown on cards.
    pub fn role_line(&self) -> String {
        format::role_line(
            self.current_role.as_deref(),
            self.experience_level.as_deref(),
        )
    }

    /// Number of conversations, preferring the service's count when the
    /// snippets themselves were omitted.
    pub fn conversation_total(&self) -> u32 {
        self.conversation_count
            .unwrap_or(self.conversations.len() as u32)
    }
}

/// A directory member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique, stable identifier.
    pub id: PersonId,
    #[serde(flatten)]
    pub profile: Profile,
}
