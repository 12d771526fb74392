//! # Integration: @-Mention Picker Flow
//!
//! Drives the composite reference resolution and text search the way the
//! mention autocomplete UI does: resolve the scoped candidate list for
//! the visible team/channel, then narrow it as the user types.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{ids, picker_state};
    use cc_04_group_state::{GroupQueryApi, InMemoryGroupStore};
    use std::sync::Arc;

    fn store() -> InMemoryGroupStore {
        let store = InMemoryGroupStore::new();
        store.install(picker_state()).unwrap();
        store
    }

    #[test]
    fn test_both_constrained_merges_channel_first() {
        let store = store();
        // Channel c1 reference groups {dev, eng}; team t1 {board, dev}.
        let list = store.get_associated_groups_for_reference("t1", "c1").unwrap();
        assert_eq!(ids(&list), ["dev", "eng", "board"]);
    }

    #[test]
    fn test_single_constrained_owner_scopes_the_list() {
        let store = store();

        let team_scoped = store.get_associated_groups_for_reference("t1", "c2").unwrap();
        assert_eq!(ids(&team_scoped), ["board", "dev"]);

        let channel_scoped = store.get_associated_groups_for_reference("t2", "c1").unwrap();
        assert_eq!(ids(&channel_scoped), ["dev", "eng"]);
    }

    #[test]
    fn test_unconstrained_scope_offers_every_referenceable_group() {
        let store = store();
        let list = store.get_associated_groups_for_reference("t2", "c2").unwrap();
        // `hidden` has allow_reference = false and never appears.
        assert_eq!(ids(&list), ["board", "dev", "eng"]);
    }

    #[test]
    fn test_typing_narrows_the_candidate_list() {
        let store = store();

        let all = store
            .search_associated_groups_for_reference("", "t2", "c2")
            .unwrap();
        assert_eq!(ids(&all), ["board", "dev", "eng"]);

        let by_token = store
            .search_associated_groups_for_reference("group", "t2", "c2")
            .unwrap();
        assert_eq!(ids(&by_token), ["board", "dev"]);

        let by_mention = store
            .search_associated_groups_for_reference("@software", "t2", "c2")
            .unwrap();
        assert_eq!(ids(&by_mention), ["eng"]);

        let no_hits = store
            .search_associated_groups_for_reference("testBad", "t2", "c2")
            .unwrap();
        assert!(no_hits.is_empty());
    }

    #[test]
    fn test_search_results_are_stable_per_term() {
        let store = store();

        let first = store
            .search_associated_groups_for_reference("dev", "t1", "c1")
            .unwrap();
        let second = store
            .search_associated_groups_for_reference("dev", "t1", "c1")
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(ids(&first), ["dev"]);
    }
}
