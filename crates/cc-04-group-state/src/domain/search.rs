//! # Group Text Matching
//!
//! Filters group lists against free-text autocomplete terms.
//!
//! A candidate matches when the term is a prefix of any token-boundary
//! suffix of its mention name (`board-group` yields `board-group`,
//! `group`), or a substring of its display name. Matching is
//! case-insensitive and a leading `@` on the term is ignored, so typing
//! `@devel` in a mention box behaves like `devel`.

use shared_types::Group;
use std::sync::Arc;

/// Characters that delimit tokens inside a mention name.
const MENTION_SPLIT_CHARS: [char; 4] = ['.', '-', '_', ' '];

/// Returns the groups matching `term`, preserving input order.
///
/// An empty term matches everything. No match is never an error, just an
/// empty list.
pub fn filter_groups_matching_term(groups: &[Arc<Group>], term: &str) -> Vec<Arc<Group>> {
    let lowered = term.to_lowercase();
    let needle = lowered.strip_prefix('@').unwrap_or(&lowered);

    groups
        .iter()
        .filter(|group| group_matches_term(group, needle))
        .cloned()
        .collect()
}

fn group_matches_term(group: &Group, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let name = group.name.to_lowercase();
    if token_suffixes(&name).any(|suffix| suffix.starts_with(needle)) {
        return true;
    }
    group.display_name.to_lowercase().contains(needle)
}

/// Suffixes of `name` starting at the name itself and after each token
/// delimiter: `board-group` -> [`board-group`, `group`].
fn token_suffixes(name: &str) -> impl Iterator<Item = &str> {
    std::iter::once(name).chain(
        name.char_indices()
            .filter(|(_, c)| MENTION_SPLIT_CHARS.contains(c))
            .map(|(i, c)| &name[i + c.len_utf8()..]),
    )
}
