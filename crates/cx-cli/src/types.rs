use std::path::PathBuf;

use cx_model::Category;

#[derive(Debug)]
pub struct SeasonResult {
    pub season_dir: PathBuf,
    pub output_dir: PathBuf,
    pub rounds: usize,
    pub files_read: usize,
    pub files_skipped: usize,
    pub row_count: usize,
    pub rider_merges: usize,
    pub team_merges: usize,
    pub categories: Vec<CategorySummary>,
    pub team_count: usize,
    pub written: Vec<PathBuf>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct CategorySummary {
    pub category: Category,
    pub riders: usize,
    pub max_round: u32,
}
