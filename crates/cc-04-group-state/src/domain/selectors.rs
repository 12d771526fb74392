//! # Memoized Group Derivations
//!
//! One [`GroupSelectors`] instance is the derivation cache for one store
//! session; construct it next to the store handle and pass it explicitly.
//! There is no global registry.
//!
//! ## Derivation graph
//!
//! ```text
//! team_group_ids ──→ team_group_id_set ──┐
//!                                        ├─→ groups_associated_to_team ──→ …_for_reference ──┐
//! all_groups ────────────────────────────┤                                                   │
//!                                        ├─→ groups_not_associated_to_team                   │
//! channel_group_ids → channel_id_set ────┘                                                   ↓
//!                                          associated_groups_for_reference ──→ search_…_for_reference
//! ```
//!
//! Each derivation declares its inputs; a call re-evaluates the inputs
//! against the current snapshot and recomputes only when one of them
//! changed identity. Hits return the previously cached `Arc`, so
//! stability propagates transitively through the graph: if
//! `team_group_id_set` returns its cached set, every list derived from
//! it also returns its cached reference.

use crate::domain::memo::{KeyedMemo, MemoSlot};
use crate::domain::search::filter_groups_matching_term;
use crate::domain::sets::{self, GroupList};
use crate::domain::store::{GlobalState, GroupTable};
use shared_types::{Channel, ChannelId, GroupId, Team, TeamId};
use std::collections::HashSet;
use std::sync::Arc;

/// Parameter tuples kept per derivation before LRU eviction. The UI only
/// queries the currently visible team/channel, so this is generous.
const DEFAULT_SLOT_CAPACITY: usize = 128;

type IdSet = Arc<HashSet<GroupId>>;
type Output = Arc<GroupList>;

/// Inputs of a table x id-set list derivation.
type TableAndSet = (Arc<GroupTable>, IdSet);

/// Inputs of the composite reference resolution: the two owner records
/// (their `group_constrained` flags pick the branch) and the three
/// upstream lists any branch may return.
type CompositeInputs = (
    Option<Arc<Team>>,
    Option<Arc<Channel>>,
    Output,
    Output,
    Output,
);

/// Per-session memoization cache for every named group derivation.
pub struct GroupSelectors {
    team_id_sets: KeyedMemo<TeamId, Arc<Vec<GroupId>>, IdSet>,
    channel_id_sets: KeyedMemo<ChannelId, Arc<Vec<GroupId>>, IdSet>,
    team_associated: KeyedMemo<TeamId, TableAndSet, Output>,
    team_not_associated: KeyedMemo<TeamId, TableAndSet, Output>,
    team_reference: KeyedMemo<TeamId, TableAndSet, Output>,
    channel_associated: KeyedMemo<ChannelId, TableAndSet, Output>,
    channel_not_associated: KeyedMemo<ChannelId, TableAndSet, Output>,
    channel_reference: KeyedMemo<ChannelId, TableAndSet, Output>,
    all_reference: MemoSlot<Arc<GroupTable>, Output>,
    composite_reference: KeyedMemo<(TeamId, ChannelId), CompositeInputs, Output>,
    search: KeyedMemo<(TeamId, ChannelId, String), Output, Output>,
}

impl Default for GroupSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupSelectors {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SLOT_CAPACITY)
    }

    /// `capacity` bounds the parameter tuples remembered per derivation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            team_id_sets: KeyedMemo::new(capacity),
            channel_id_sets: KeyedMemo::new(capacity),
            team_associated: KeyedMemo::new(capacity),
            team_not_associated: KeyedMemo::new(capacity),
            team_reference: KeyedMemo::new(capacity),
            channel_associated: KeyedMemo::new(capacity),
            channel_not_associated: KeyedMemo::new(capacity),
            channel_reference: KeyedMemo::new(capacity),
            all_reference: MemoSlot::new(),
            composite_reference: KeyedMemo::new(capacity),
            search: KeyedMemo::new(capacity),
        }
    }

    // === Id-set layer ===

    /// O(1)-membership set of group ids associated to a team.
    pub fn team_group_id_set(&mut self, state: &GlobalState, team_id: &str) -> IdSet {
        let ids = state.team_group_ids(team_id);
        self.team_id_sets
            .get_or_compute(team_id.to_string(), ids, |ids| {
                tracing::debug!("[cc-04] recompute team_group_id_set team={}", team_id);
                Arc::new(sets::id_set(ids))
            })
    }

    /// O(1)-membership set of group ids associated to a channel.
    pub fn channel_group_id_set(&mut self, state: &GlobalState, channel_id: &str) -> IdSet {
        let ids = state.channel_group_ids(channel_id);
        self.channel_id_sets
            .get_or_compute(channel_id.to_string(), ids, |ids| {
                tracing::debug!("[cc-04] recompute channel_group_id_set channel={}", channel_id);
                Arc::new(sets::id_set(ids))
            })
    }

    // === Team lists ===

    pub fn groups_associated_to_team(&mut self, state: &GlobalState, team_id: &str) -> Output {
        let set = self.team_group_id_set(state, team_id);
        let table = Arc::clone(state.all_groups());
        self.team_associated
            .get_or_compute(team_id.to_string(), (table, set), |(table, set)| {
                tracing::debug!("[cc-04] recompute groups_associated_to_team team={}", team_id);
                Arc::new(sets::groups_associated(table, set))
            })
    }

    pub fn groups_not_associated_to_team(&mut self, state: &GlobalState, team_id: &str) -> Output {
        let set = self.team_group_id_set(state, team_id);
        let table = Arc::clone(state.all_groups());
        self.team_not_associated
            .get_or_compute(team_id.to_string(), (table, set), |(table, set)| {
                Arc::new(sets::groups_not_associated(table, set))
            })
    }

    pub fn groups_associated_to_team_for_reference(
        &mut self,
        state: &GlobalState,
        team_id: &str,
    ) -> Output {
        let set = self.team_group_id_set(state, team_id);
        let table = Arc::clone(state.all_groups());
        self.team_reference
            .get_or_compute(team_id.to_string(), (table, set), |(table, set)| {
                Arc::new(sets::groups_for_reference(table, set))
            })
    }

    // === Channel lists ===

    pub fn groups_associated_to_channel(&mut self, state: &GlobalState, channel_id: &str) -> Output {
        let set = self.channel_group_id_set(state, channel_id);
        let table = Arc::clone(state.all_groups());
        self.channel_associated
            .get_or_compute(channel_id.to_string(), (table, set), |(table, set)| {
                tracing::debug!(
                    "[cc-04] recompute groups_associated_to_channel channel={}",
                    channel_id
                );
                Arc::new(sets::groups_associated(table, set))
            })
    }

    pub fn groups_not_associated_to_channel(
        &mut self,
        state: &GlobalState,
        channel_id: &str,
    ) -> Output {
        let set = self.channel_group_id_set(state, channel_id);
        let table = Arc::clone(state.all_groups());
        self.channel_not_associated
            .get_or_compute(channel_id.to_string(), (table, set), |(table, set)| {
                Arc::new(sets::groups_not_associated(table, set))
            })
    }

    pub fn groups_associated_to_channel_for_reference(
        &mut self,
        state: &GlobalState,
        channel_id: &str,
    ) -> Output {
        let set = self.channel_group_id_set(state, channel_id);
        let table = Arc::clone(state.all_groups());
        self.channel_reference
            .get_or_compute(channel_id.to_string(), (table, set), |(table, set)| {
                Arc::new(sets::groups_for_reference(table, set))
            })
    }

    // === Reference resolution ===

    /// Every referenceable group in the table.
    pub fn all_associated_groups_for_reference(&mut self, state: &GlobalState) -> Output {
        let table = Arc::clone(state.all_groups());
        self.all_reference.get_or_compute(table, |table| {
            tracing::debug!("[cc-04] recompute all_associated_groups_for_reference");
            Arc::new(sets::all_groups_for_reference(table))
        })
    }

    /// Referenceable groups for an @-mention picker scoped to a team and
    /// channel. Branches on the owners' `group_constrained` flags; both
    /// constrained merges channel-first with de-duplication; neither
    /// constrained (including absent owners) falls back to every
    /// referenceable group.
    pub fn associated_groups_for_reference(
        &mut self,
        state: &GlobalState,
        team_id: &str,
        channel_id: &str,
    ) -> Output {
        let team = state.team(team_id);
        let channel = state.channel(channel_id);
        let channel_reference = self.groups_associated_to_channel_for_reference(state, channel_id);
        let team_reference = self.groups_associated_to_team_for_reference(state, team_id);
        let all_reference = self.all_associated_groups_for_reference(state);

        let inputs = (team, channel, channel_reference, team_reference, all_reference);
        self.composite_reference.get_or_compute(
            (team_id.to_string(), channel_id.to_string()),
            inputs,
            |inputs| {
                let (team, channel, channel_reference, team_reference, all_reference) = inputs;
                let team_constrained = team.as_ref().is_some_and(|team| team.group_constrained);
                let channel_constrained =
                    channel.as_ref().is_some_and(|channel| channel.group_constrained);

                match (team_constrained, channel_constrained) {
                    (true, true) => Arc::new(sets::merge_reference_groups(
                        channel_reference,
                        team_reference,
                    )),
                    (true, false) => Arc::clone(team_reference),
                    (false, true) => Arc::clone(channel_reference),
                    (false, false) => Arc::clone(all_reference),
                }
            },
        )
    }

    /// The scoped reference list filtered by a free-text term.
    pub fn search_associated_groups_for_reference(
        &mut self,
        state: &GlobalState,
        term: &str,
        team_id: &str,
        channel_id: &str,
    ) -> Output {
        let candidates = self.associated_groups_for_reference(state, team_id, channel_id);
        self.search.get_or_compute(
            (team_id.to_string(), channel_id.to_string(), term.to_string()),
            candidates,
            |candidates| Arc::new(filter_groups_matching_term(candidates, term)),
        )
    }
}
