use crate::domain::{GroupList, StateError};
use shared_types::{Group, GroupChannel, GroupTeam, UserId};
use std::sync::Arc;

/// Primary read-side API for group state, consumed by UI code.
///
/// Derived-list methods return `Arc`-shared lists: for a fixed store
/// version and fixed parameters, repeated calls return pointer-identical
/// results, so consumers may skip re-rendering on `Arc::ptr_eq`.
pub trait GroupQueryApi: Send + Sync {
    // === Plain reads ===

    fn get_group(&self, id: &str) -> Result<Option<Arc<Group>>, StateError>;

    fn get_group_member_count(&self, id: &str) -> Result<u64, StateError>;

    fn get_group_members(&self, id: &str) -> Result<Vec<UserId>, StateError>;

    fn get_group_teams(&self, id: &str) -> Result<Vec<GroupTeam>, StateError>;

    fn get_group_channels(&self, id: &str) -> Result<Vec<GroupChannel>, StateError>;

    // === Derived lists (memoized) ===

    fn get_groups_associated_to_team(&self, team_id: &str) -> Result<Arc<GroupList>, StateError>;

    fn get_groups_not_associated_to_team(&self, team_id: &str)
        -> Result<Arc<GroupList>, StateError>;

    fn get_groups_associated_to_channel(
        &self,
        channel_id: &str,
    ) -> Result<Arc<GroupList>, StateError>;

    fn get_groups_not_associated_to_channel(
        &self,
        channel_id: &str,
    ) -> Result<Arc<GroupList>, StateError>;

    fn get_groups_associated_to_team_for_reference(
        &self,
        team_id: &str,
    ) -> Result<Arc<GroupList>, StateError>;

    fn get_groups_associated_to_channel_for_reference(
        &self,
        channel_id: &str,
    ) -> Result<Arc<GroupList>, StateError>;

    fn get_all_associated_groups_for_reference(&self) -> Result<Arc<GroupList>, StateError>;

    fn get_associated_groups_for_reference(
        &self,
        team_id: &str,
        channel_id: &str,
    ) -> Result<Arc<GroupList>, StateError>;

    // === Search ===

    fn search_associated_groups_for_reference(
        &self,
        term: &str,
        team_id: &str,
        channel_id: &str,
    ) -> Result<Arc<GroupList>, StateError>;
}
