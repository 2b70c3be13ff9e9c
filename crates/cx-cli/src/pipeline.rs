//! Season processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Discover round directories and read result sheets
//! 2. **Normalize**: Unify rider and team spellings across rounds
//! 3. **Aggregate**: Build category and team points tables
//! 4. **Render**: Write HTML and JSON standings files
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, warn};

use cx_ingest::{IngestError, list_result_sheets, list_round_dirs, read_result_sheet};
use cx_model::{CategoryStandings, ResultRow, TeamStandingEntry};
use cx_normalize::normalize_identities;
use cx_report::{write_html_reports, write_json_report};
use cx_standings::{calculate_standings, calculate_team_standings};

/// Which report files the render stage writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    Json,
    Both,
}

impl ReportFormat {
    fn want_html(self) -> bool {
        matches!(self, ReportFormat::Html | ReportFormat::Both)
    }

    fn want_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug, Default)]
pub struct IngestResult {
    /// All result rows across rounds, in discovery order.
    pub rows: Vec<ResultRow>,
    /// Number of round directories found.
    pub rounds: usize,
    /// Result sheets read successfully.
    pub files_read: usize,
    /// Sheets skipped because no category keyword matched the filename.
    pub files_skipped: usize,
    /// Errors encountered during ingestion.
    pub errors: Vec<String>,
}

/// Discover round directories and read every recognizable result sheet.
///
/// A missing season directory is a clean no-op run: there is nothing to
/// process, not a failure. Unreadable sheets are collected as errors and
/// the remaining sheets still contribute rows.
pub fn ingest(season_dir: &Path) -> Result<IngestResult> {
    let ingest_span = info_span!("ingest", season_dir = %season_dir.display());
    let _ingest_guard = ingest_span.enter();
    let ingest_start = Instant::now();
    let mut errors = Vec::new();
    let mut rows = Vec::new();
    let mut files_read = 0usize;
    let mut files_skipped = 0usize;

    let round_dirs = match list_round_dirs(season_dir) {
        Ok(dirs) => dirs,
        Err(IngestError::DirectoryNotFound { path }) => {
            warn!(path = %path.display(), "season directory not found, nothing to do");
            Vec::new()
        }
        Err(error) => return Err(error.into()),
    };
    let rounds = round_dirs.len();

    for round_dir in &round_dirs {
        let sheets = match list_result_sheets(round_dir) {
            Ok(sheets) => sheets,
            Err(error) => {
                errors.push(format!("{}: {error}", round_dir.path.display()));
                continue;
            }
        };

        for sheet in sheets {
            let Some(category) = sheet.category else {
                warn!(
                    round = sheet.round,
                    path = %sheet.path.display(),
                    "no category keyword matched, skipping sheet"
                );
                files_skipped += 1;
                continue;
            };
            match read_result_sheet(&sheet.path, sheet.round, category) {
                Ok(sheet_rows) => {
                    files_read += 1;
                    rows.extend(sheet_rows);
                }
                Err(error) => {
                    errors.push(format!("{}: {error}", sheet.path.display()));
                }
            }
        }
    }

    info!(
        rounds,
        files_read,
        files_skipped,
        row_count = rows.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    Ok(IngestResult {
        rows,
        rounds,
        files_read,
        files_skipped,
        errors,
    })
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

/// Result of the normalize stage.
#[derive(Debug)]
pub struct NormalizeResult {
    /// Rider spellings rewritten to a canonical spelling.
    pub rider_merges: usize,
    /// Team spellings rewritten to a canonical spelling.
    pub team_merges: usize,
}

/// Unify rider and team spellings in place across the whole season.
pub fn normalize(rows: &mut [ResultRow]) -> NormalizeResult {
    let normalize_span = info_span!("normalize", row_count = rows.len());
    let _normalize_guard = normalize_span.enter();
    let normalize_start = Instant::now();

    let outcome = normalize_identities(rows);
    let result = NormalizeResult {
        rider_merges: outcome.rider_merges(),
        team_merges: outcome.team_merges(),
    };
    info!(
        rider_merges = result.rider_merges,
        team_merges = result.team_merges,
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalize complete"
    );
    result
}

// ============================================================================
// Stage 3: Aggregate
// ============================================================================

/// Result of the aggregate stage.
#[derive(Debug)]
pub struct StandingsResult {
    /// Per-category standings in table order.
    pub standings: Vec<CategoryStandings>,
    /// Team standings in rank order.
    pub teams: Vec<TeamStandingEntry>,
}

/// Aggregate normalized rows into category and team standings.
pub fn aggregate(rows: &[ResultRow]) -> StandingsResult {
    let aggregate_span = info_span!("aggregate", row_count = rows.len());
    let _aggregate_guard = aggregate_span.enter();
    let aggregate_start = Instant::now();

    let standings = calculate_standings(rows);
    let teams = calculate_team_standings(&standings);
    info!(
        category_count = standings.len(),
        team_count = teams.len(),
        duration_ms = aggregate_start.elapsed().as_millis(),
        "aggregate complete"
    );

    StandingsResult { standings, teams }
}

// ============================================================================
// Stage 4: Render
// ============================================================================

/// Render configuration.
pub struct RenderConfig<'a> {
    pub output_dir: &'a Path,
    pub standings: &'a [CategoryStandings],
    pub teams: &'a [TeamStandingEntry],
    pub format: ReportFormat,
    pub dry_run: bool,
}

/// Result of the render stage.
#[derive(Debug, Default)]
pub struct RenderResult {
    /// Paths of all files written.
    pub written: Vec<PathBuf>,
    /// Errors encountered while writing.
    pub errors: Vec<String>,
}

/// Write the requested report files.
pub fn render(config: &RenderConfig<'_>) -> RenderResult {
    let render_span = info_span!("render", output_dir = %config.output_dir.display());
    let _render_guard = render_span.enter();
    let render_start = Instant::now();
    let mut written = Vec::new();
    let mut errors = Vec::new();

    if config.dry_run {
        info!(
            category_count = config.standings.len(),
            duration_ms = render_start.elapsed().as_millis(),
            "render skipped (dry run)"
        );
        return RenderResult::default();
    }

    if config.format.want_html() {
        match write_html_reports(config.output_dir, config.standings, config.teams) {
            Ok(paths) => written.extend(paths),
            Err(error) => errors.push(format!("html: {error}")),
        }
    }

    if config.format.want_json() {
        match write_json_report(config.output_dir, config.standings, config.teams) {
            Ok(path) => written.push(path),
            Err(error) => errors.push(format!("json: {error}")),
        }
    }

    info!(
        file_count = written.len(),
        duration_ms = render_start.elapsed().as_millis(),
        "render complete"
    );

    RenderResult { written, errors }
}
