//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `rows` - Number of input rows
pub fn log_operation_start(operation: &str, rows: usize) {
    log::info!("{operation} over {rows} rows");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `items` - Number of result rows produced
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, items: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Finished {operation}: {items} result rows in {duration:?}");
    } else {
        log::info!("Finished {operation}: {items} result rows");
    }
}

/// Log a warning about rows dropped from an aggregate
///
/// Nothing is logged when `count` is zero.
pub fn log_warning(message: &str, count: usize) {
    if count > 0 {
        log::warn!("{message}: {count}");
    }
}
