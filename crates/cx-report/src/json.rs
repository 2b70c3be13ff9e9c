//! Machine-readable standings export.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use cx_model::{CategoryStandings, TeamStandingEntry};

/// The whole season in one JSON document.
#[derive(Debug, Serialize)]
pub struct SeasonReport {
    /// Category slug to that category's standings.
    pub categories: BTreeMap<String, CategoryReport>,
    /// Team standings in rank order.
    pub teams: Vec<TeamStandingEntry>,
}

/// One category's standings as exported.
#[derive(Debug, Serialize)]
pub struct CategoryReport {
    pub title: String,
    pub max_round: u32,
    /// Riders in rank order.
    pub riders: Vec<cx_model::CategoryStandingEntry>,
}

impl SeasonReport {
    pub fn new(standings: &[CategoryStandings], teams: &[TeamStandingEntry]) -> Self {
        let categories = standings
            .iter()
            .map(|table| {
                (
                    table.category.slug().to_string(),
                    CategoryReport {
                        title: table.category.title().to_string(),
                        max_round: table.max_round,
                        riders: table.entries.clone(),
                    },
                )
            })
            .collect();

        Self {
            categories,
            teams: teams.to_vec(),
        }
    }
}

/// Serialize the season report as pretty-printed JSON.
pub fn season_report_json(
    standings: &[CategoryStandings],
    teams: &[TeamStandingEntry],
) -> Result<String> {
    let report = SeasonReport::new(standings, teams);
    serde_json::to_string_pretty(&report).context("serialize season report")
}
