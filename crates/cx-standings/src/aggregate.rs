//! Per-category rider standings.

use std::collections::BTreeMap;

use tracing::debug;

use cx_model::{Category, CategoryStandingEntry, CategoryStandings, ResultRow, RiderIdentity};

struct RiderTally {
    entry: CategoryStandingEntry,
    points: Vec<u32>,
}

/// Aggregate result rows into standings, one table per category.
///
/// Categories with no rows are omitted. A rider's team, category label and
/// gender come from their earliest result in the category. With three or
/// more rounds run, a discard kicks in: only the best `max_round - 1`
/// scores count towards the ranking figure.
pub fn calculate_standings(rows: &[ResultRow]) -> Vec<CategoryStandings> {
    let mut standings = Vec::new();

    for category in Category::ALL {
        let mut category_rows: Vec<&ResultRow> =
            rows.iter().filter(|row| row.category == category).collect();
        if category_rows.is_empty() {
            continue;
        }
        category_rows.sort_by_key(|row| row.round);

        let max_round = category_rows
            .iter()
            .map(|row| row.round)
            .max()
            .unwrap_or(0);

        let mut tallies: BTreeMap<RiderIdentity, RiderTally> = BTreeMap::new();
        for row in &category_rows {
            let tally = tallies
                .entry(row.rider())
                .or_insert_with(|| RiderTally {
                    entry: CategoryStandingEntry {
                        last_name: row.last_name.clone(),
                        first_name: row.first_name.clone(),
                        team: row.team.clone(),
                        category_label: row.category_label.clone(),
                        gender: row.gender.clone(),
                        points_by_round: BTreeMap::new(),
                        total_points: 0,
                        points_excl_lowest: 0,
                    },
                    points: Vec::new(),
                });
            tally.entry.points_by_round.insert(row.round, row.points);
            tally.points.push(row.points);
        }

        let mut entries: Vec<CategoryStandingEntry> = tallies
            .into_values()
            .map(|mut tally| {
                tally.entry.total_points = tally.points.iter().sum();
                tally.entry.points_excl_lowest =
                    discard_adjusted_total(&tally.points, max_round, tally.entry.total_points);
                tally.entry
            })
            .collect();

        entries.sort_by(|a, b| {
            b.points_excl_lowest
                .cmp(&a.points_excl_lowest)
                .then_with(|| b.total_points.cmp(&a.total_points))
                .then_with(|| a.last_name.cmp(&b.last_name))
                .then_with(|| a.first_name.cmp(&b.first_name))
        });

        debug!(
            category = %category,
            max_round,
            rider_count = entries.len(),
            "category aggregated"
        );

        standings.push(CategoryStandings {
            category,
            max_round,
            entries,
        });
    }

    standings
}

fn discard_adjusted_total(points: &[u32], max_round: u32, total: u32) -> u32 {
    if max_round < 3 {
        return total;
    }
    let mut sorted: Vec<u32> = points.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let count = sorted.len().min(max_round as usize - 1);
    sorted[..count].iter().sum()
}
