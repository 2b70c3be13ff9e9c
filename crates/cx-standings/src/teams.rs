//! Cross-category team standings.

use std::collections::BTreeMap;

use tracing::debug;

use cx_model::{CategoryStandings, TeamStandingEntry};

/// Sum each team's ranking points across all category tables.
///
/// Riders without a team contribute nothing. The figure summed is the
/// discard-adjusted one, matching what the category tables rank by.
pub fn calculate_team_standings(standings: &[CategoryStandings]) -> Vec<TeamStandingEntry> {
    let mut teams: BTreeMap<String, TeamStandingEntry> = BTreeMap::new();

    for category_standings in standings {
        for entry in &category_standings.entries {
            if entry.team.is_empty() {
                continue;
            }
            teams
                .entry(entry.team.clone())
                .or_insert_with(|| TeamStandingEntry::new(entry.team.clone()))
                .add_points(category_standings.category, entry.points_excl_lowest);
        }
    }

    let mut entries: Vec<TeamStandingEntry> = teams.into_values().collect();
    entries.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.team.cmp(&b.team)));

    debug!(team_count = entries.len(), "team standings aggregated");
    entries
}
