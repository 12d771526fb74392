pub mod derivations;
pub mod mention_picker;

#[cfg(test)]
pub(crate) mod fixtures {
    use cc_04_group_state::domain::store::{
        ChannelAssociationIndex, ChannelTable, GroupTable, TeamAssociationIndex, TeamTable,
    };
    use cc_04_group_state::GlobalState;
    use shared_types::{AssociatedIds, Channel, Group, GroupSource, Team};
    use std::sync::Arc;

    /// Opt-in cache hit/miss diagnostics: `RUST_LOG=cc_04_group_state=debug`.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    pub fn group(id: &str, name: &str, display_name: &str, allow_reference: bool) -> Arc<Group> {
        Arc::new(Group {
            id: id.to_string(),
            name: name.to_string(),
            display_name: display_name.to_string(),
            description: format!("{id} description"),
            source: GroupSource::Ldap,
            remote_id: Some(id.to_string()),
            create_at: 1,
            update_at: 2,
            delete_at: 0,
            has_syncables: true,
            member_count: 3,
            allow_reference,
        })
    }

    pub fn table(groups: &[Arc<Group>]) -> Arc<GroupTable> {
        Arc::new(
            groups
                .iter()
                .map(|group| (group.id.clone(), Arc::clone(group)))
                .collect(),
        )
    }

    pub fn assoc(ids: &[&str]) -> AssociatedIds {
        AssociatedIds {
            ids: Arc::new(ids.iter().map(|id| id.to_string()).collect()),
            total_count: ids.len() as u64,
        }
    }

    pub fn ids(list: &[Arc<Group>]) -> Vec<&str> {
        list.iter().map(|group| group.id.as_str()).collect()
    }

    /// Store with the three autocomplete fixture groups plus one
    /// non-referenceable group, a constrained team `t1` = {board, dev,
    /// hidden} and a constrained channel `c1` = {dev, eng}.
    pub fn picker_state() -> GlobalState {
        let board = group("board", "board-group", "board-group", true);
        let dev = group("dev", "developers-group", "developers-group", true);
        let eng = group("eng", "software-engineers", "software engineers", true);
        let hidden = group("hidden", "hidden-group", "hidden group", false);

        let mut teams = TeamTable::default();
        teams.insert(
            "t1".to_string(),
            Arc::new(Team {
                id: "t1".to_string(),
                display_name: "Team One".to_string(),
                group_constrained: true,
            }),
        );
        teams.insert(
            "t2".to_string(),
            Arc::new(Team {
                id: "t2".to_string(),
                display_name: "Team Two".to_string(),
                group_constrained: false,
            }),
        );

        let mut channels = ChannelTable::default();
        channels.insert(
            "c1".to_string(),
            Arc::new(Channel {
                id: "c1".to_string(),
                display_name: "General".to_string(),
                team_id: "t1".to_string(),
                group_constrained: true,
            }),
        );
        channels.insert(
            "c2".to_string(),
            Arc::new(Channel {
                id: "c2".to_string(),
                display_name: "Random".to_string(),
                team_id: "t1".to_string(),
                group_constrained: false,
            }),
        );

        let mut team_index = TeamAssociationIndex::default();
        team_index.insert("t1".to_string(), assoc(&["board", "dev", "hidden"]));

        let mut channel_index = ChannelAssociationIndex::default();
        channel_index.insert("c1".to_string(), assoc(&["dev", "eng"]));

        GlobalState::default()
            .with_groups(table(&[board, dev, eng, hidden]))
            .with_teams(Arc::new(teams))
            .with_channels(Arc::new(channels))
            .with_team_associations(Arc::new(team_index))
            .with_channel_associations(Arc::new(channel_index))
    }
}
