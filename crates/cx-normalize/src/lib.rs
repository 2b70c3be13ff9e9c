//! Rider and team identity normalization.
//!
//! Result sheets spell the same rider and team many ways across a season.
//! Four passes build normalization maps (case-insensitive duplicates,
//! similar rider names, similar team names, predefined abbreviations), then
//! every row is rewritten to its canonical spelling.

pub mod passes;
pub mod resolve;
pub mod similar;
mod target;
mod variations;

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use cx_model::{ResultRow, RiderIdentity};

pub use resolve::resolve;
pub use similar::names_similar;

/// The maps built by a normalization run, plus merge counts for reporting.
#[derive(Debug, Default)]
pub struct NormalizationOutcome {
    /// Rider spellings mapped to their chosen canonical spelling.
    pub rider_map: BTreeMap<RiderIdentity, RiderIdentity>,
    /// Team spellings mapped to their chosen canonical spelling.
    pub team_map: BTreeMap<String, String>,
}

impl NormalizationOutcome {
    /// Number of rider spellings that were rewritten.
    pub fn rider_merges(&self) -> usize {
        self.rider_map.len()
    }

    /// Number of team spellings that were rewritten.
    pub fn team_merges(&self) -> usize {
        self.team_map.len()
    }
}

/// Normalize rider and team names across a whole season in place.
///
/// Running this on already-normalized rows is a no-op: every spelling is
/// already canonical, so the passes find nothing to merge.
pub fn normalize_identities(rows: &mut [ResultRow]) -> NormalizationOutcome {
    let mut riders: BTreeSet<RiderIdentity> = BTreeSet::new();
    let mut teams: BTreeSet<String> = BTreeSet::new();
    let mut rider_counts: BTreeMap<RiderIdentity, usize> = BTreeMap::new();
    let mut team_counts: BTreeMap<String, usize> = BTreeMap::new();

    for row in rows.iter() {
        let rider = row.rider();
        *rider_counts.entry(rider.clone()).or_insert(0) += 1;
        riders.insert(rider);
        if !row.team.is_empty() {
            *team_counts.entry(row.team.clone()).or_insert(0) += 1;
            teams.insert(row.team.clone());
        }
    }

    let rider_map = passes::exact_rider_pass(&riders, &rider_counts);
    let rider_map = passes::similar_rider_pass(&riders, &rider_counts, rider_map);
    let team_map = passes::similar_team_pass(&teams, &team_counts);
    let team_map = passes::predefined_team_pass(&teams, team_map);

    for row in rows.iter_mut() {
        let rider = row.rider();
        let canonical = resolve(&rider, &rider_map);
        if canonical != rider {
            row.last_name = canonical.last_name;
            row.first_name = canonical.first_name;
        }

        if !row.team.is_empty() {
            let canonical_team = resolve(&row.team, &team_map);
            if canonical_team != row.team {
                row.team = canonical_team;
            }
        }
    }

    debug!(
        rider_merges = rider_map.len(),
        team_merges = team_map.len(),
        "normalization complete"
    );

    NormalizationOutcome {
        rider_map,
        team_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cx_model::{Category, points_for_position};

    fn row(round: u32, position: u32, last: &str, first: &str, team: &str) -> ResultRow {
        ResultRow {
            round,
            position,
            points: points_for_position(position),
            last_name: last.to_string(),
            first_name: first.to_string(),
            team: team.to_string(),
            category: Category::Mens,
            category_label: "Senior".to_string(),
            gender: "Male".to_string(),
        }
    }

    #[test]
    fn test_nickname_rows_merge_to_one_rider() {
        let mut rows = vec![
            row(1, 1, "SMITH", "Michael", "Team A"),
            row(2, 1, "SMITH", "Mike", "Team A"),
        ];

        let outcome = normalize_identities(&mut rows);

        assert_eq!(outcome.rider_merges(), 1);
        assert!(rows.iter().all(|r| r.first_name == "Michael"));
    }

    #[test]
    fn test_predefined_team_abbreviation_is_expanded() {
        let mut rows = vec![row(1, 1, "JONES", "Sarah", "LEC")];

        normalize_identities(&mut rows);

        assert_eq!(rows[0].team, "Limited Edition Cycling");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let mut rows = vec![
            row(1, 1, "SMITH", "Michael", "Velo Club Racing"),
            row(2, 1, "SMITH", "Mike", "Velo Club Racin"),
        ];

        normalize_identities(&mut rows);
        let snapshot = rows.clone();
        let second = normalize_identities(&mut rows);

        assert_eq!(rows, snapshot);
        assert_eq!(second.rider_merges(), 0);
        assert_eq!(second.team_merges(), 0);
    }

    #[test]
    fn test_empty_teams_are_left_alone() {
        let mut rows = vec![row(1, 1, "JONES", "Sarah", "")];
        let outcome = normalize_identities(&mut rows);

        assert_eq!(outcome.team_merges(), 0);
        assert_eq!(rows[0].team, "");
    }
}
