//! # Integration: Store Writes vs. Derivation Freshness
//!
//! Exercises cc-04-group-state end to end through the thread-safe store
//! handle: writers replace sub-trees wholesale, and derived reads must
//! stay pointer-stable exactly until one of their inputs changes.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{assoc, group, ids, picker_state, table};
    use cc_04_group_state::domain::store::TeamAssociationIndex;
    use cc_04_group_state::{GlobalState, GroupQueryApi, GroupSelectors, InMemoryGroupStore};
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_fixed_version_reads_are_pointer_stable() {
        crate::integration::fixtures::init_tracing();
        let store = InMemoryGroupStore::new();
        store.install(picker_state()).unwrap();

        let first = store.get_groups_associated_to_team("t1").unwrap();
        let second = store.get_groups_associated_to_team("t1").unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let composite_a = store.get_associated_groups_for_reference("t1", "c1").unwrap();
        let composite_b = store.get_associated_groups_for_reference("t1", "c1").unwrap();
        assert!(Arc::ptr_eq(&composite_a, &composite_b));
    }

    #[test]
    fn test_group_table_write_invalidates_lists_not_id_sets() {
        let state = picker_state();
        let mut selectors = GroupSelectors::new();

        let set_before = selectors.team_group_id_set(&state, "t1");
        let list_before = selectors.groups_associated_to_team(&state, "t1");

        let next = state.clone().with_groups(table(&[
            group("board", "board-group", "board-group", true),
            group("dev", "developers-group", "developers-group", true),
        ]));

        // Association index untouched: the id-set keeps its reference.
        let set_after = selectors.team_group_id_set(&next, "t1");
        assert!(Arc::ptr_eq(&set_before, &set_after));

        // Entity table replaced: the list does not.
        let list_after = selectors.groups_associated_to_team(&next, "t1");
        assert!(!Arc::ptr_eq(&list_before, &list_after));
        assert_eq!(ids(&list_after), ["board", "dev"]);
    }

    #[test]
    fn test_association_write_invalidates_id_sets_not_table_derivations() {
        let state = picker_state();
        let mut selectors = GroupSelectors::new();

        let all_before = selectors.all_associated_groups_for_reference(&state);
        let set_before = selectors.team_group_id_set(&state, "t1");

        let mut index = TeamAssociationIndex::default();
        index.insert("t1".to_string(), assoc(&["board"]));
        let next = state.clone().with_team_associations(Arc::new(index));

        let set_after = selectors.team_group_id_set(&next, "t1");
        assert!(!Arc::ptr_eq(&set_before, &set_after));

        let all_after = selectors.all_associated_groups_for_reference(&next);
        assert!(Arc::ptr_eq(&all_before, &all_after));
    }

    #[test]
    fn test_per_team_writes_do_not_cross_invalidate() {
        let state = picker_state();
        let mut selectors = GroupSelectors::new();

        let t1_before = selectors.groups_associated_to_team(&state, "t1");
        let t2_before = selectors.groups_associated_to_team(&state, "t2");

        // Rebuild the index map but reuse t1's ids Arc, as a reducer
        // receiving data for t2 would.
        let mut index = TeamAssociationIndex::default();
        let t1_assoc = state.entities.teams.groups_associated_to_team["t1"].clone();
        index.insert("t1".to_string(), t1_assoc);
        index.insert("t2".to_string(), assoc(&["eng"]));
        let next = state.clone().with_team_associations(Arc::new(index));

        let t1_after = selectors.groups_associated_to_team(&next, "t1");
        let t2_after = selectors.groups_associated_to_team(&next, "t2");

        assert!(Arc::ptr_eq(&t1_before, &t1_after));
        assert!(!Arc::ptr_eq(&t2_before, &t2_after));
        assert_eq!(ids(&t2_after), ["eng"]);
    }

    #[test]
    fn test_associated_union_complement_is_all_groups_disjoint() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x4242);
        let all: Vec<_> = (0..32)
            .map(|n| {
                group(
                    &format!("g{n}"),
                    &format!("name-{n}"),
                    &format!("display {n}"),
                    rng.gen_bool(0.5),
                )
            })
            .collect();

        for _ in 0..20 {
            let sample_len = rng.gen_range(0..=all.len());
            let sample: Vec<&str> = all
                .choose_multiple(&mut rng, sample_len)
                .map(|group| group.id.as_str())
                .collect();

            let mut index = TeamAssociationIndex::default();
            index.insert("t".to_string(), assoc(&sample));
            let state = GlobalState::default()
                .with_groups(table(&all))
                .with_team_associations(Arc::new(index));

            let mut selectors = GroupSelectors::new();
            let associated = selectors.groups_associated_to_team(&state, "t");
            let complement = selectors.groups_not_associated_to_team(&state, "t");

            assert_eq!(associated.len() + complement.len(), all.len());
            let assoc_ids: HashSet<&str> =
                associated.iter().map(|group| group.id.as_str()).collect();
            assert!(complement
                .iter()
                .all(|group| !assoc_ids.contains(group.id.as_str())));

            // Union, in table order, is exactly the table.
            let mut union: Vec<&str> = ids(&associated);
            union.extend(ids(&complement));
            union.sort_unstable();
            let mut expected: Vec<&str> = all.iter().map(|group| group.id.as_str()).collect();
            expected.sort_unstable();
            assert_eq!(union, expected);
        }
    }

    #[test]
    fn test_reference_filter_is_idempotent() {
        let state = picker_state();
        let mut selectors = GroupSelectors::new();

        let reference = selectors.groups_associated_to_team_for_reference(&state, "t1");
        assert_eq!(ids(&reference), ["board", "dev"]);

        // Filtering an already-filtered list changes nothing.
        let refiltered: Vec<_> = reference
            .iter()
            .filter(|group| group.allow_reference)
            .cloned()
            .collect();
        assert_eq!(ids(&refiltered), ids(&reference));
    }

    #[test]
    fn test_reinstalling_an_identical_snapshot_keeps_caches() {
        let store = InMemoryGroupStore::new();
        store.install(picker_state()).unwrap();

        let before = store.get_groups_associated_to_team("t1").unwrap();

        // A no-op reducer pass: same sub-tree Arcs, new snapshot value.
        store.update(|state| state).unwrap();

        let after = store.get_groups_associated_to_team("t1").unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }
}
