//! # Normalized Store Snapshot
//!
//! The client's normalized entity graph as one immutable snapshot.
//!
//! ## Copy-on-Write Discipline
//!
//! Every sub-tree lives behind an `Arc`. Writers (the external reducer
//! layer) never mutate a snapshot: they clone `GlobalState` (cheap, only
//! `Arc` bumps) and swap in a rebuilt sub-tree via the `with_*` builders.
//! A sub-tree that did not change keeps its `Arc` identity across
//! versions, which is what lets the derivation engine invalidate by
//! pointer comparison instead of deep equality.
//!
//! ## Absence Policy
//!
//! Unknown ids are never an error. Lookups of absent keys resolve to
//! `None`, an empty slice, a zero count, or a shared empty sentinel.
//! The sentinels are process-wide statics so that repeated absent
//! lookups return the *same* reference and never perturb the memo layer.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use shared_types::{
    AssociatedIds, Channel, ChannelId, Group, GroupChannel, GroupId, GroupMemberSummary,
    GroupSyncables, GroupTeam, Team, TeamId, UserId,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Entity table for groups. Insertion-ordered: derived group lists follow
/// this enumeration order, not the association index order.
pub type GroupTable = IndexMap<GroupId, Arc<Group>>;

/// Entity table for teams.
pub type TeamTable = HashMap<TeamId, Arc<Team>>;

/// Entity table for channels.
pub type ChannelTable = HashMap<ChannelId, Arc<Channel>>;

/// Association index: owning team id -> ordered associated group ids.
pub type TeamAssociationIndex = HashMap<TeamId, AssociatedIds>;

/// Association index: owning channel id -> ordered associated group ids.
pub type ChannelAssociationIndex = HashMap<ChannelId, AssociatedIds>;

/// Member summaries keyed by group id.
pub type MemberIndex = HashMap<GroupId, GroupMemberSummary>;

/// Syncables keyed by group id.
pub type SyncableIndex = HashMap<GroupId, Arc<GroupSyncables>>;

/// Shared sentinel for "no known associated ids".
static EMPTY_GROUP_IDS: Lazy<Arc<Vec<GroupId>>> = Lazy::new(|| Arc::new(Vec::new()));

/// Shared sentinel for "no known syncables".
static EMPTY_SYNCABLES: Lazy<Arc<GroupSyncables>> = Lazy::new(|| Arc::new(GroupSyncables::default()));

/// One immutable version of the normalized store.
#[derive(Debug, Clone, Default)]
pub struct GlobalState {
    pub entities: Entities,
}

#[derive(Debug, Clone, Default)]
pub struct Entities {
    pub groups: GroupsState,
    pub teams: TeamsState,
    pub channels: ChannelsState,
}

#[derive(Debug, Clone, Default)]
pub struct GroupsState {
    pub groups: Arc<GroupTable>,
    pub members: Arc<MemberIndex>,
    pub syncables: Arc<SyncableIndex>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamsState {
    pub teams: Arc<TeamTable>,
    pub groups_associated_to_team: Arc<TeamAssociationIndex>,
}

#[derive(Debug, Clone, Default)]
pub struct ChannelsState {
    pub channels: Arc<ChannelTable>,
    pub groups_associated_to_channel: Arc<ChannelAssociationIndex>,
}

impl GlobalState {
    // === Plain accessors (unmemoized reads) ===

    pub fn all_groups(&self) -> &Arc<GroupTable> {
        &self.entities.groups.groups
    }

    pub fn group(&self, id: &str) -> Option<&Arc<Group>> {
        self.entities.groups.groups.get(id)
    }

    pub fn group_member_count(&self, id: &str) -> u64 {
        self.entities
            .groups
            .members
            .get(id)
            .map(|summary| summary.total_member_count)
            .unwrap_or(0)
    }

    pub fn group_members(&self, id: &str) -> &[UserId] {
        self.entities
            .groups
            .members
            .get(id)
            .map(|summary| summary.members.as_slice())
            .unwrap_or(&[])
    }

    /// Syncables for a group; the shared empty sentinel when absent.
    pub fn group_syncables(&self, id: &str) -> Arc<GroupSyncables> {
        self.entities
            .groups
            .syncables
            .get(id)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&EMPTY_SYNCABLES))
    }

    pub fn group_teams(&self, id: &str) -> &[GroupTeam] {
        self.entities
            .groups
            .syncables
            .get(id)
            .map(|syncables| syncables.teams.as_slice())
            .unwrap_or(&[])
    }

    pub fn group_channels(&self, id: &str) -> &[GroupChannel] {
        self.entities
            .groups
            .syncables
            .get(id)
            .map(|syncables| syncables.channels.as_slice())
            .unwrap_or(&[])
    }

    pub fn team(&self, id: &str) -> Option<Arc<Team>> {
        self.entities.teams.teams.get(id).cloned()
    }

    pub fn channel(&self, id: &str) -> Option<Arc<Channel>> {
        self.entities.channels.channels.get(id).cloned()
    }

    /// Ordered group ids associated to a team. Absent teams (or teams with
    /// no recorded associations) resolve to the shared empty sentinel, so
    /// the returned `Arc` identity is stable across repeated misses.
    pub fn team_group_ids(&self, team_id: &str) -> Arc<Vec<GroupId>> {
        self.entities
            .teams
            .groups_associated_to_team
            .get(team_id)
            .map(|assoc| Arc::clone(&assoc.ids))
            .unwrap_or_else(|| Arc::clone(&EMPTY_GROUP_IDS))
    }

    /// Ordered group ids associated to a channel; sentinel when absent.
    pub fn channel_group_ids(&self, channel_id: &str) -> Arc<Vec<GroupId>> {
        self.entities
            .channels
            .groups_associated_to_channel
            .get(channel_id)
            .map(|assoc| Arc::clone(&assoc.ids))
            .unwrap_or_else(|| Arc::clone(&EMPTY_GROUP_IDS))
    }

    // === Writer boundary (used by the external reducer layer) ===
    //
    // Each builder replaces exactly one sub-tree; every other sub-tree
    // keeps its Arc identity.

    pub fn with_groups(mut self, groups: Arc<GroupTable>) -> Self {
        self.entities.groups.groups = groups;
        self
    }

    pub fn with_members(mut self, members: Arc<MemberIndex>) -> Self {
        self.entities.groups.members = members;
        self
    }

    pub fn with_syncables(mut self, syncables: Arc<SyncableIndex>) -> Self {
        self.entities.groups.syncables = syncables;
        self
    }

    pub fn with_teams(mut self, teams: Arc<TeamTable>) -> Self {
        self.entities.teams.teams = teams;
        self
    }

    pub fn with_team_associations(mut self, index: Arc<TeamAssociationIndex>) -> Self {
        self.entities.teams.groups_associated_to_team = index;
        self
    }

    pub fn with_channels(mut self, channels: Arc<ChannelTable>) -> Self {
        self.entities.channels.channels = channels;
        self
    }

    pub fn with_channel_associations(mut self, index: Arc<ChannelAssociationIndex>) -> Self {
        self.entities.channels.groups_associated_to_channel = index;
        self
    }
}
