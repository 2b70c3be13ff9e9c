//! Report file writing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use cx_model::{CategoryStandings, TeamStandingEntry};

use crate::html::{render_category_table, render_teams_table};
use crate::json::season_report_json;

/// Write one HTML file per category plus the teams table.
///
/// Returns the paths written, categories first in table order.
pub fn write_html_reports(
    output_dir: &Path,
    standings: &[CategoryStandings],
    teams: &[TeamStandingEntry],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).with_context(|| format!("create {}", output_dir.display()))?;

    let mut written = Vec::new();
    for table in standings {
        let path = output_dir.join(format!("{}.html", table.category.slug()));
        fs::write(&path, render_category_table(table))
            .with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), "category table written");
        written.push(path);
    }

    let teams_path = output_dir.join("teams.html");
    fs::write(&teams_path, render_teams_table(teams))
        .with_context(|| format!("write {}", teams_path.display()))?;
    debug!(path = %teams_path.display(), "teams table written");
    written.push(teams_path);

    Ok(written)
}

/// Write the season standings as one JSON document.
pub fn write_json_report(
    output_dir: &Path,
    standings: &[CategoryStandings],
    teams: &[TeamStandingEntry],
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| format!("create {}", output_dir.display()))?;

    let path = output_dir.join("standings.json");
    let json = season_report_json(standings, teams)?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), "season report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use cx_model::Category;

    #[test]
    fn test_html_reports_land_in_output_dir() {
        let dir = TempDir::new().unwrap();
        let standings = vec![CategoryStandings {
            category: Category::Mens,
            max_round: 1,
            entries: Vec::new(),
        }];

        let written = write_html_reports(dir.path(), &standings, &[]).unwrap();

        assert_eq!(written.len(), 2);
        assert!(dir.path().join("mens.html").is_file());
        assert!(dir.path().join("teams.html").is_file());
    }

    #[test]
    fn test_json_report_is_parseable() {
        let dir = TempDir::new().unwrap();
        let path = write_json_report(dir.path(), &[], &[]).unwrap();

        let raw = fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["categories"].is_object());
    }

    #[test]
    fn test_output_dir_is_created() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        write_json_report(&nested, &[], &[]).unwrap();
        assert!(nested.join("standings.json").is_file());
    }
}
