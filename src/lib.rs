//! Building blocks for command-line test reports: a result model, pass/fail
//! statistics, console status lines and separators, an indexed string cache
//! and a compact JSON report model.

pub mod config;
pub mod data;
pub mod logger;
pub mod report;
pub mod stats;
