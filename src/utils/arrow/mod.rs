//! Arrow data handling utilities
//!
//! Column lookup, safe numeric coercion and whole-column extraction for the
//! input record batches.

pub mod array_utils;
pub mod extractors;

pub use array_utils::{coerce_to_float64, coerce_to_utf8, get_column};
pub use extractors::{extract_float64_column, extract_integer_column, extract_string_column};
