//! Logging utilities
//!
//! Consistent start/complete/warning messages through the `log` facade.

pub mod log;

pub use log::{log_operation_complete, log_operation_start, log_warning};
