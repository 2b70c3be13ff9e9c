//! HTML and JSON standings report generation.

pub mod html;
pub mod json;
pub mod label;
pub mod output;

pub use html::{render_category_table, render_teams_table};
pub use json::{SeasonReport, season_report_json};
pub use label::compact_category_label;
pub use output::{write_html_reports, write_json_report};
