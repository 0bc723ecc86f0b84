//! CLI library components for the study plan extractor.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
