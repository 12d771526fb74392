//! # In-Memory Store Handle
//!
//! Thread-safe handle pairing the current snapshot with its per-session
//! derivation cache.
//!
//! The write side is the reducer boundary: the external reducer layer
//! folds server events into a rebuilt sub-tree and installs it here.
//! Installation swaps the snapshot `Arc` under a short write lock;
//! readers running against the previous snapshot are unaffected, and the
//! next read picks up the new version. The derivation cache needs no
//! explicit flush on write: stale entries are detected by input identity
//! on the next read.

use crate::domain::{GlobalState, GroupList, GroupSelectors, StateError};
use crate::domain::store::{
    ChannelAssociationIndex, ChannelTable, GroupTable, MemberIndex, SyncableIndex,
    TeamAssociationIndex, TeamTable,
};
use crate::ports::GroupQueryApi;
use shared_types::{Group, GroupChannel, GroupTeam, UserId};
use std::sync::{Arc, Mutex, RwLock};

/// In-memory implementation of [`GroupQueryApi`].
pub struct InMemoryGroupStore {
    state: RwLock<Arc<GlobalState>>,
    selectors: Mutex<GroupSelectors>,
}

impl InMemoryGroupStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Arc::new(GlobalState::default())),
            selectors: Mutex::new(GroupSelectors::new()),
        }
    }

    /// Current snapshot. Holders read a consistent version even while
    /// writers install newer ones.
    pub fn snapshot(&self) -> Result<Arc<GlobalState>, StateError> {
        let state = self.state.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(Arc::clone(&state))
    }

    // === Writer boundary (external reducer layer) ===

    /// Installs a fully-formed snapshot wholesale.
    pub fn install(&self, next: GlobalState) -> Result<(), StateError> {
        let mut state = self.state.write().map_err(|_| StateError::LockPoisoned)?;
        *state = Arc::new(next);
        Ok(())
    }

    /// Builds the next version from the current one and installs it.
    /// The rebuild runs outside any derivation; writers replace sub-trees,
    /// never mutate them.
    pub fn update(
        &self,
        rebuild: impl FnOnce(GlobalState) -> GlobalState,
    ) -> Result<(), StateError> {
        let mut state = self.state.write().map_err(|_| StateError::LockPoisoned)?;
        let next = rebuild(GlobalState::clone(&state));
        *state = Arc::new(next);
        Ok(())
    }

    pub fn receive_groups(&self, groups: Arc<GroupTable>) -> Result<(), StateError> {
        self.update(|state| state.with_groups(groups))
    }

    pub fn receive_members(&self, members: Arc<MemberIndex>) -> Result<(), StateError> {
        self.update(|state| state.with_members(members))
    }

    pub fn receive_syncables(&self, syncables: Arc<SyncableIndex>) -> Result<(), StateError> {
        self.update(|state| state.with_syncables(syncables))
    }

    pub fn receive_teams(&self, teams: Arc<TeamTable>) -> Result<(), StateError> {
        self.update(|state| state.with_teams(teams))
    }

    pub fn receive_team_associations(
        &self,
        index: Arc<TeamAssociationIndex>,
    ) -> Result<(), StateError> {
        self.update(|state| state.with_team_associations(index))
    }

    pub fn receive_channels(&self, channels: Arc<ChannelTable>) -> Result<(), StateError> {
        self.update(|state| state.with_channels(channels))
    }

    pub fn receive_channel_associations(
        &self,
        index: Arc<ChannelAssociationIndex>,
    ) -> Result<(), StateError> {
        self.update(|state| state.with_channel_associations(index))
    }

    /// Runs a derivation against the current snapshot.
    fn derive<O>(
        &self,
        derive: impl FnOnce(&mut GroupSelectors, &GlobalState) -> O,
    ) -> Result<O, StateError> {
        let state = self.snapshot()?;
        let mut selectors = self.selectors.lock().map_err(|_| StateError::LockPoisoned)?;
        Ok(derive(&mut selectors, &state))
    }
}

impl Default for InMemoryGroupStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupQueryApi for InMemoryGroupStore {
    fn get_group(&self, id: &str) -> Result<Option<Arc<Group>>, StateError> {
        Ok(self.snapshot()?.group(id).cloned())
    }

    fn get_group_member_count(&self, id: &str) -> Result<u64, StateError> {
        Ok(self.snapshot()?.group_member_count(id))
    }

    fn get_group_members(&self, id: &str) -> Result<Vec<UserId>, StateError> {
        Ok(self.snapshot()?.group_members(id).to_vec())
    }

    fn get_group_teams(&self, id: &str) -> Result<Vec<GroupTeam>, StateError> {
        Ok(self.snapshot()?.group_teams(id).to_vec())
    }

    fn get_group_channels(&self, id: &str) -> Result<Vec<GroupChannel>, StateError> {
        Ok(self.snapshot()?.group_channels(id).to_vec())
    }

    fn get_groups_associated_to_team(&self, team_id: &str) -> Result<Arc<GroupList>, StateError> {
        self.derive(|selectors, state| selectors.groups_associated_to_team(state, team_id))
    }

    fn get_groups_not_associated_to_team(
        &self,
        team_id: &str,
    ) -> Result<Arc<GroupList>, StateError> {
        self.derive(|selectors, state| selectors.groups_not_associated_to_team(state, team_id))
    }

    fn get_groups_associated_to_channel(
        &self,
        channel_id: &str,
    ) -> Result<Arc<GroupList>, StateError> {
        self.derive(|selectors, state| selectors.groups_associated_to_channel(state, channel_id))
    }

    fn get_groups_not_associated_to_channel(
        &self,
        channel_id: &str,
    ) -> Result<Arc<GroupList>, StateError> {
        self.derive(|selectors, state| {
            selectors.groups_not_associated_to_channel(state, channel_id)
        })
    }

    fn get_groups_associated_to_team_for_reference(
        &self,
        team_id: &str,
    ) -> Result<Arc<GroupList>, StateError> {
        self.derive(|selectors, state| {
            selectors.groups_associated_to_team_for_reference(state, team_id)
        })
    }

    fn get_groups_associated_to_channel_for_reference(
        &self,
        channel_id: &str,
    ) -> Result<Arc<GroupList>, StateError> {
        self.derive(|selectors, state| {
            selectors.groups_associated_to_channel_for_reference(state, channel_id)
        })
    }

    fn get_all_associated_groups_for_reference(&self) -> Result<Arc<GroupList>, StateError> {
        self.derive(|selectors, state| selectors.all_associated_groups_for_reference(state))
    }

    fn get_associated_groups_for_reference(
        &self,
        team_id: &str,
        channel_id: &str,
    ) -> Result<Arc<GroupList>, StateError> {
        self.derive(|selectors, state| {
            selectors.associated_groups_for_reference(state, team_id, channel_id)
        })
    }

    fn search_associated_groups_for_reference(
        &self,
        term: &str,
        team_id: &str,
        channel_id: &str,
    ) -> Result<Arc<GroupList>, StateError> {
        self.derive(|selectors, state| {
            selectors.search_associated_groups_for_reference(state, term, team_id, channel_id)
        })
    }
}
