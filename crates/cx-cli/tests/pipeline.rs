//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use cx_cli::pipeline::{RenderConfig, ReportFormat, aggregate, ingest, normalize, render};

const BANNER: &str = "Cross League,,,,,,\n,,,,,,\nRound results,,,,,,\n,,,,,,\n";
const HEADER: &str = "Pos,Bib,Last Name,First Name,Team,Category,Gender\n";

fn write_sheet(round_dir: &Path, name: &str, data_rows: &str) {
    let content = format!("{BANNER}{HEADER}{data_rows}");
    fs::write(round_dir.join(name), content).unwrap();
}

/// Two rounds with a nickname respelling, a predefined team abbreviation,
/// and one sheet whose filename matches no category.
fn build_season() -> TempDir {
    let season = TempDir::new().unwrap();

    let round1 = season.path().join("1");
    fs::create_dir(&round1).unwrap();
    write_sheet(
        &round1,
        "Elite Open.csv",
        "1,12,SMITH,Michael,LEC,Senior,Male\n2,15,JONES,David,Valley Wheelers,Senior,Male\n",
    );
    write_sheet(
        &round1,
        "Elite Female.csv",
        "1,7,BROWN,Lucy,Valley Wheelers,Women,Female\n",
    );

    let round2 = season.path().join("2");
    fs::create_dir(&round2).unwrap();
    write_sheet(
        &round2,
        "Senior Open.csv",
        "1,12,SMITH,Mike,LEC,Senior,Male\n2,15,JONES,David,Valley Wheelers,Senior,Male\n",
    );
    write_sheet(&round2, "Mystery Race.csv", "1,9,DOE,Jane,Somewhere,Open,F\n");

    season
}

#[test]
fn test_ingest_reads_recognized_sheets() {
    let season = build_season();

    let result = ingest(season.path()).unwrap();

    assert_eq!(result.rounds, 2);
    assert_eq!(result.files_read, 3);
    assert_eq!(result.files_skipped, 1);
    assert!(result.errors.is_empty());
    assert_eq!(result.rows.len(), 5);
}

#[test]
fn test_missing_season_dir_is_a_clean_noop() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no-such-season");

    let result = ingest(&missing).unwrap();

    assert_eq!(result.rounds, 0);
    assert!(result.rows.is_empty());
    assert!(result.errors.is_empty());
}

#[test]
fn test_full_season_end_to_end() {
    let season = build_season();
    let output_dir = season.path().join("standings");

    let mut ingested = ingest(season.path()).unwrap();
    let normalized = normalize(&mut ingested.rows);
    assert_eq!(normalized.rider_merges, 1);
    assert_eq!(normalized.team_merges, 1);

    let tables = aggregate(&ingested.rows);
    let rendered = render(&RenderConfig {
        output_dir: &output_dir,
        standings: &tables.standings,
        teams: &tables.teams,
        format: ReportFormat::Both,
        dry_run: false,
    });
    assert!(rendered.errors.is_empty());
    assert_eq!(rendered.written.len(), 4);
    assert!(output_dir.join("womens.html").is_file());
    assert!(output_dir.join("mens.html").is_file());
    assert!(output_dir.join("teams.html").is_file());

    let raw = fs::read_to_string(output_dir.join("standings.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // Mike's round 2 result lands under Michael, riding for the expanded team
    let leader = &report["categories"]["mens"]["riders"][0];
    assert_eq!(leader["last_name"], "SMITH");
    assert_eq!(leader["first_name"], "Michael");
    assert_eq!(leader["team"], "Limited Edition Cycling");
    assert_eq!(leader["total_points"], 200);
    assert_eq!(leader["points_by_round"]["1"], 100);
    assert_eq!(leader["points_by_round"]["2"], 100);

    assert_eq!(report["teams"][0]["team"], "Valley Wheelers");
    assert_eq!(report["teams"][0]["total"], 288);
    assert_eq!(report["teams"][1]["team"], "Limited Edition Cycling");
    assert_eq!(report["teams"][1]["total"], 200);
}

#[test]
fn test_dry_run_writes_nothing() {
    let season = build_season();
    let output_dir = season.path().join("standings");

    let mut ingested = ingest(season.path()).unwrap();
    normalize(&mut ingested.rows);
    let tables = aggregate(&ingested.rows);

    let rendered = render(&RenderConfig {
        output_dir: &output_dir,
        standings: &tables.standings,
        teams: &tables.teams,
        format: ReportFormat::Both,
        dry_run: true,
    });

    assert!(rendered.written.is_empty());
    assert!(rendered.errors.is_empty());
    assert!(!output_dir.exists());
}

#[test]
fn test_html_only_format_skips_json() {
    let season = build_season();
    let output_dir = season.path().join("standings");

    let mut ingested = ingest(season.path()).unwrap();
    normalize(&mut ingested.rows);
    let tables = aggregate(&ingested.rows);

    let rendered = render(&RenderConfig {
        output_dir: &output_dir,
        standings: &tables.standings,
        teams: &tables.teams,
        format: ReportFormat::Html,
        dry_run: false,
    });

    assert!(rendered.errors.is_empty());
    assert!(output_dir.join("mens.html").is_file());
    assert!(!output_dir.join("standings.json").exists());
}
