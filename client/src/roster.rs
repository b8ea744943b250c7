//! Roster search

use arena_battle::CreatureSummary;

/// Entries whose name contains `term`, ignoring case
///
/// A blank term matches everything.
pub fn filter_roster<'a>(roster: &'a [CreatureSummary], term: &str) -> Vec<&'a CreatureSummary> {
    let needle = term.trim().to_lowercase();
    roster
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}
