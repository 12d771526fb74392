//! # Core Domain Entities
//!
//! Defines the client-side entities for the group/team/channel graph.
//!
//! ## Clusters
//!
//! - **Groups**: `Group`, `GroupMemberSummary`, `GroupSyncables`
//! - **Owners**: `Team`, `Channel`
//! - **Associations**: `AssociatedIds` (owner id -> ordered group ids)

use serde::{Deserialize, Serialize};

/// Opaque server-assigned identifier for a group.
pub type GroupId = String;

/// Opaque server-assigned identifier for a team.
pub type TeamId = String;

/// Opaque server-assigned identifier for a channel.
pub type ChannelId = String;

/// Opaque server-assigned identifier for a user.
pub type UserId = String;

/// Where a group's membership is mastered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupSource {
    /// Synced from an LDAP directory.
    Ldap,
    /// Created and managed in-app.
    Custom,
}

/// A user group as pushed by the server.
///
/// `name` is the mention name: lowercase, hyphen-joined (`board-group`),
/// unique server-wide. `display_name` is free text shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    pub source: GroupSource,
    /// Identifier of the group in the remote directory, if any.
    #[serde(default)]
    pub remote_id: Option<String>,
    pub create_at: u64,
    pub update_at: u64,
    pub delete_at: u64,
    #[serde(default)]
    pub has_syncables: bool,
    #[serde(default)]
    pub member_count: u64,
    /// Eligible for @-mention style autocomplete.
    #[serde(default)]
    pub allow_reference: bool,
}

/// Per-group membership summary kept alongside the group table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMemberSummary {
    pub members: Vec<UserId>,
    pub total_member_count: u64,
}

/// A team the group is synced into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTeam {
    pub team_id: TeamId,
    /// Members of the group are auto-added to the team.
    #[serde(default)]
    pub auto_add: bool,
}

/// A channel the group is synced into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupChannel {
    pub channel_id: ChannelId,
    /// Members of the group are auto-added to the channel.
    #[serde(default)]
    pub auto_add: bool,
}

/// The teams and channels a group is synced into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSyncables {
    pub teams: Vec<GroupTeam>,
    pub channels: Vec<GroupChannel>,
}

/// A team record, reduced to the fields the group subsystem reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub display_name: String,
    /// Membership is restricted to explicitly associated groups.
    #[serde(default)]
    pub group_constrained: bool,
}

/// A channel record, reduced to the fields the group subsystem reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub display_name: String,
    pub team_id: TeamId,
    /// Membership is restricted to explicitly associated groups.
    #[serde(default)]
    pub group_constrained: bool,
}

/// Ordered group ids associated to one owning team or channel.
///
/// `total_count` is the server-side total, which may exceed `ids.len()`
/// when the association list is paginated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedIds {
    pub ids: std::sync::Arc<Vec<GroupId>>,
    pub total_count: u64,
}
