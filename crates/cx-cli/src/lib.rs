//! CLI library components for the league standings generator.

pub mod logging;
pub mod pipeline;
