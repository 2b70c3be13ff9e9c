//! Season directory discovery.
//!
//! A season lives in one directory with one numeric subdirectory per round;
//! each round directory holds one result sheet per category, classified by
//! filename keywords.

use std::path::{Path, PathBuf};

use cx_model::Category;

use crate::error::{IngestError, Result};

/// A discovered round directory.
#[derive(Debug, Clone)]
pub struct RoundDir {
    /// Round number, parsed from the directory name.
    pub round: u32,
    /// Path to the round directory.
    pub path: PathBuf,
}

/// A result sheet discovered inside a round directory.
#[derive(Debug, Clone)]
pub struct DiscoveredSheet {
    /// Path to the CSV file.
    pub path: PathBuf,
    /// Round number from the containing directory.
    pub round: u32,
    /// Matched category, or `None` when no filename keyword matched.
    pub category: Option<Category>,
}

/// Lists round directories under a season directory.
///
/// Only subdirectories with purely numeric names count as rounds. Returns
/// them sorted by round number. A missing season directory is an error the
/// caller turns into a clean no-op run.
pub fn list_round_dirs(season_dir: &Path) -> Result<Vec<RoundDir>> {
    if !season_dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: season_dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(season_dir).map_err(|e| IngestError::DirectoryRead {
        path: season_dir.to_path_buf(),
        source: e,
    })?;

    let mut rounds = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: season_dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|v| v.to_str()) else {
            continue;
        };
        if let Ok(round) = name.parse::<u32>() {
            rounds.push(RoundDir { round, path });
        }
    }

    rounds.sort_by_key(|dir| dir.round);
    Ok(rounds)
}

/// Lists result sheets in a round directory, classified by category.
///
/// Returns CSV files sorted by filename. Files whose names match no
/// category keyword carry `category: None`; the caller decides how to
/// report them.
pub fn list_result_sheets(round_dir: &RoundDir) -> Result<Vec<DiscoveredSheet>> {
    let entries = std::fs::read_dir(&round_dir.path).map_err(|e| IngestError::DirectoryRead {
        path: round_dir.path.clone(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: round_dir.path.clone(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files
        .into_iter()
        .map(|path| {
            let category = path
                .file_name()
                .and_then(|v| v.to_str())
                .and_then(Category::from_filename);
            DiscoveredSheet {
                path,
                round: round_dir.round,
                category,
            }
        })
        .collect())
}
