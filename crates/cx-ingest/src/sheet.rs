//! Race result sheet reading.
//!
//! Result sheets are spreadsheet exports with a fixed layout: four banner
//! rows, a header row, then data. Some timing systems emit the header row
//! blank, in which case columns are mapped by ordinal position.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use cx_model::{Category, ResultRow, points_for_position};

use crate::error::{IngestError, Result};
use crate::text::{collapse_whitespace, shape_first_name, shape_last_name};

/// Row index of the header row (0-based); data starts on the next row.
const HEADER_ROW_INDEX: usize = 4;

/// Expected column names when the header row is populated.
const EXPECTED_COLUMNS: [&str; 7] = [
    "Pos",
    "Bib",
    "Last Name",
    "First Name",
    "Team",
    "Category",
    "Gender",
];

#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    pos: usize,
    last_name: usize,
    first_name: usize,
    team: usize,
    category: usize,
    gender: usize,
}

impl ColumnMap {
    /// The fixed ordinal layout used when header cells are blank.
    fn ordinal() -> Self {
        Self {
            pos: 0,
            last_name: 2,
            first_name: 3,
            team: 4,
            category: 5,
            gender: 6,
        }
    }

    fn from_named_header(header: &[String], path: &Path) -> Option<Self> {
        let index_of = |name: &str| header.iter().position(|cell| cell == name);
        let missing: Vec<&str> = EXPECTED_COLUMNS
            .iter()
            .copied()
            .filter(|name| index_of(name).is_none())
            .collect();
        if !missing.is_empty() {
            warn!(
                path = %path.display(),
                missing = %missing.join(", "),
                "missing columns, skipping sheet"
            );
            return None;
        }
        Some(Self {
            pos: index_of("Pos")?,
            last_name: index_of("Last Name")?,
            first_name: index_of("First Name")?,
            team: index_of("Team")?,
            category: index_of("Category")?,
            gender: index_of("Gender")?,
        })
    }
}

/// Read one result sheet into result rows.
///
/// Round and category come from directory/filename context, not from the
/// sheet. Rows whose position is missing or not a whole number (DNF, DNS,
/// blank markers) are dropped. Read failures are returned as errors for the
/// caller to log and skip.
pub fn read_result_sheet(path: &Path, round: u32, category: Category) -> Result<Vec<ResultRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::SheetRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::SheetRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }

    if rows.len() <= HEADER_ROW_INDEX + 1 {
        debug!(path = %path.display(), "sheet has no data rows");
        return Ok(Vec::new());
    }

    let header = &rows[HEADER_ROW_INDEX];
    let columns = if header.first().is_none_or(|cell| cell.is_empty()) {
        ColumnMap::ordinal()
    } else {
        match ColumnMap::from_named_header(header, path) {
            Some(columns) => columns,
            None => return Ok(Vec::new()),
        }
    };

    let mut results = Vec::new();
    let mut dropped = 0usize;
    for row in &rows[HEADER_ROW_INDEX + 1..] {
        let cell = |index: usize| row.get(index).map(String::as_str).unwrap_or("");

        let Some(position) = parse_position(cell(columns.pos)) else {
            dropped += 1;
            continue;
        };

        results.push(ResultRow {
            round,
            position,
            points: points_for_position(position),
            last_name: shape_last_name(cell(columns.last_name)),
            first_name: shape_first_name(cell(columns.first_name)),
            team: collapse_whitespace(cell(columns.team)),
            category,
            category_label: collapse_whitespace(cell(columns.category)),
            gender: collapse_whitespace(cell(columns.gender)),
        });
    }

    debug!(
        path = %path.display(),
        row_count = results.len(),
        dropped,
        "sheet read"
    );
    Ok(results)
}

/// Parse a position cell as a whole number.
///
/// Accepts plain integers and float renderings with a zero fraction
/// ("3", "3.0"); anything else (DNF, DNS, blank) is not a position.
fn parse_position(cell: &str) -> Option<u32> {
    if cell.is_empty() {
        return None;
    }
    if let Ok(value) = cell.parse::<u32>() {
        return Some(value);
    }
    let value = cell.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}
