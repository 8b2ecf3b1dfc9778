//! Utilities for working with Arrow arrays.
//!
//! Numeric coercion goes through Arrow's safe cast: a value that cannot be
//! converted (for example the string `"N/A"` in an income column) becomes a
//! null instead of failing the whole column.

use arrow::array::{Array, ArrayRef};
use arrow::compute::kernels::cast::{CastOptions, cast_with_options};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::{IndicatorError, Result};
use crate::schema::{is_numeric_coercible, is_text};

/// Get a column from a record batch by name
///
/// # Errors
/// Returns [`IndicatorError::ColumnNotFound`] if the column does not exist
pub fn get_column(batch: &RecordBatch, column_name: &str) -> Result<ArrayRef> {
    let idx = batch
        .schema()
        .index_of(column_name)
        .map_err(|_| IndicatorError::column_not_found(column_name))?;
    Ok(batch.column(idx).clone())
}

/// Cast a column to `Float64`, turning unconvertible values into nulls
///
/// # Errors
/// Returns [`IndicatorError::InvalidDataType`] if the column type has no
/// numeric reading at all (dates, lists, structs)
pub fn coerce_to_float64(array: &ArrayRef, column_name: &str) -> Result<ArrayRef> {
    let actual_type = array.data_type();
    if actual_type == &DataType::Float64 {
        return Ok(array.clone());
    }
    if !is_numeric_coercible(actual_type) {
        return Err(invalid_type(column_name, "a number", actual_type));
    }

    debug!("Coercing column '{column_name}' from {actual_type:?} to Float64");
    Ok(cast_with_options(array, &DataType::Float64, &safe_cast())?)
}

/// Cast a column to `Utf8`
///
/// # Errors
/// Returns [`IndicatorError::InvalidDataType`] for types that are neither text nor numbers
pub fn coerce_to_utf8(array: &ArrayRef, column_name: &str) -> Result<ArrayRef> {
    let actual_type = array.data_type();
    if actual_type == &DataType::Utf8 {
        return Ok(array.clone());
    }
    if !is_text(actual_type) && !is_numeric_coercible(actual_type) {
        return Err(invalid_type(column_name, "text", actual_type));
    }

    debug!("Coercing column '{column_name}' from {actual_type:?} to Utf8");
    Ok(cast_with_options(array, &DataType::Utf8, &safe_cast())?)
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Errors
/// Returns [`IndicatorError::InvalidDataType`] if the downcast fails
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| invalid_type(column_name, expected_type_name, array.data_type()))
}

fn safe_cast() -> CastOptions<'static> {
    CastOptions {
        safe: true,
        ..CastOptions::default()
    }
}

fn invalid_type(column_name: &str, expected: &str, found: &DataType) -> IndicatorError {
    IndicatorError::InvalidDataType {
        column: column_name.to_string(),
        expected: expected.to_string(),
        found: format!("{found:?}"),
    }
}
