//! Season directory discovery and race result sheet reading.
//!
//! A season is a directory of numbered round subdirectories, each holding
//! one CSV result sheet per category. This crate finds those sheets,
//! classifies them by filename, and reads them into result rows with
//! name shaping applied.

pub mod discovery;
pub mod error;
pub mod sheet;
pub mod text;

pub use discovery::{DiscoveredSheet, RoundDir, list_result_sheets, list_round_dirs};
pub use error::{IngestError, Result};
pub use sheet::read_result_sheet;
pub use text::{collapse_whitespace, shape_first_name, shape_last_name};
