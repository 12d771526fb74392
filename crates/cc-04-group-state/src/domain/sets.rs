//! # Set Algebra over Group Associations
//!
//! Pure functions deriving membership / non-membership group lists for an
//! owning team or channel. All outputs follow the group table's
//! enumeration order (insertion order), not the association index order:
//! that keeps derived lists stable for identical inputs regardless of how
//! the server ordered the association ids.
//!
//! Everything here is infallible; unknown owners and dangling ids degrade
//! to empty results.

use crate::domain::store::GroupTable;
use shared_types::{Group, GroupId};
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered list of group records, shared by reference with the table.
pub type GroupList = Vec<Arc<Group>>;

/// Builds an O(1)-membership set from an ordered id list.
pub fn id_set(ids: &[GroupId]) -> HashSet<GroupId> {
    ids.iter().cloned().collect()
}

/// Groups present in `set`, in table enumeration order.
pub fn groups_associated(table: &GroupTable, set: &HashSet<GroupId>) -> GroupList {
    table
        .iter()
        .filter(|(id, _)| set.contains(*id))
        .map(|(_, group)| Arc::clone(group))
        .collect()
}

/// Groups absent from `set`, in table enumeration order.
pub fn groups_not_associated(table: &GroupTable, set: &HashSet<GroupId>) -> GroupList {
    table
        .iter()
        .filter(|(id, _)| !set.contains(*id))
        .map(|(_, group)| Arc::clone(group))
        .collect()
}

/// Associated groups further filtered to those eligible for @-mention
/// autocomplete (`allow_reference`).
pub fn groups_for_reference(table: &GroupTable, set: &HashSet<GroupId>) -> GroupList {
    table
        .iter()
        .filter(|(id, group)| set.contains(*id) && group.allow_reference)
        .map(|(_, group)| Arc::clone(group))
        .collect()
}

/// Every referenceable group in the table, in enumeration order.
pub fn all_groups_for_reference(table: &GroupTable) -> GroupList {
    table
        .values()
        .filter(|group| group.allow_reference)
        .map(Arc::clone)
        .collect()
}

/// Combines channel-derived and team-derived reference groups: the
/// channel's list first, then team-only extras in team order,
/// de-duplicated by id. Channel-before-team precedence is a fixed
/// contract of the composite resolution.
pub fn merge_reference_groups(channel_groups: &[Arc<Group>], team_groups: &[Arc<Group>]) -> GroupList {
    let seen: HashSet<&str> = channel_groups.iter().map(|group| group.id.as_str()).collect();
    channel_groups
        .iter()
        .cloned()
        .chain(
            team_groups
                .iter()
                .filter(|group| !seen.contains(group.id.as_str()))
                .cloned(),
        )
        .collect()
}
