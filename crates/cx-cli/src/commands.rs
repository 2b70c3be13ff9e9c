use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use cx_model::Category;

use crate::cli::{OutputFormatArg, StandingsArgs};
use crate::pipeline::{self, IngestResult, RenderConfig, ReportFormat};
use crate::summary::apply_table_style;
use crate::types::{CategorySummary, SeasonResult};

pub fn run_categories() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Title", "Filename keywords"]);
    apply_table_style(&mut table);
    for category in Category::ALL {
        table.add_row(vec![
            category.slug().to_string(),
            category.title().to_string(),
            category.keywords().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_standings(args: &StandingsArgs) -> Result<SeasonResult> {
    let season_dir = &args.season_dir;
    let season_span = info_span!("season", season_dir = %season_dir.display());
    let _season_guard = season_span.enter();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| season_dir.join("standings"));

    let IngestResult {
        mut rows,
        rounds,
        files_read,
        files_skipped,
        errors: ingest_errors,
    } = pipeline::ingest(season_dir)?;
    let mut errors = ingest_errors;
    let row_count = rows.len();

    let normalize = pipeline::normalize(&mut rows);
    let standings = pipeline::aggregate(&rows);

    let render = pipeline::render(&RenderConfig {
        output_dir: &output_dir,
        standings: &standings.standings,
        teams: &standings.teams,
        format: report_format(args.format),
        dry_run: args.dry_run,
    });
    errors.extend(render.errors);

    let categories = standings
        .standings
        .iter()
        .map(|table| CategorySummary {
            category: table.category,
            riders: table.entries.len(),
            max_round: table.max_round,
        })
        .collect();

    let has_errors = !errors.is_empty();
    Ok(SeasonResult {
        season_dir: season_dir.clone(),
        output_dir,
        rounds,
        files_read,
        files_skipped,
        row_count,
        rider_merges: normalize.rider_merges,
        team_merges: normalize.team_merges,
        categories,
        team_count: standings.teams.len(),
        written: render.written,
        errors,
        has_errors,
    })
}

fn report_format(format: OutputFormatArg) -> ReportFormat {
    match format {
        OutputFormatArg::Html => ReportFormat::Html,
        OutputFormatArg::Json => ReportFormat::Json,
        OutputFormatArg::Both => ReportFormat::Both,
    }
}
