//! CLI library components for drivemap.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
