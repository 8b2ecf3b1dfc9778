//! Column extraction for Arrow record batches
//!
//! Each extractor reads a whole column into a vector of optional values,
//! coercing it to the wanted kind first. Nulls, unparsable strings and
//! non-finite floats all come back as `None`.

use arrow::array::{Array, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::utils::arrow::array_utils::{
    coerce_to_float64, coerce_to_utf8, downcast_array, get_column,
};

/// Extract a column as floats
///
/// # Errors
/// Returns an error if the column is missing or has no numeric reading
pub fn extract_float64_column(batch: &RecordBatch, column_name: &str) -> Result<Vec<Option<f64>>> {
    let column = get_column(batch, column_name)?;
    let coerced = coerce_to_float64(&column, column_name)?;
    let values = downcast_array::<Float64Array>(&coerced, column_name, "Float64")?;

    Ok((0..values.len())
        .map(|i| {
            if values.is_null(i) {
                None
            } else {
                Some(values.value(i)).filter(|v| v.is_finite())
            }
        })
        .collect())
}

/// Extract a column as integers
///
/// Values are read as floats first so that `"3"`, `3` and `3.0` all give 3.
/// A value with a fractional part is a coercion failure.
///
/// # Errors
/// Returns an error if the column is missing or has no numeric reading
pub fn extract_integer_column(batch: &RecordBatch, column_name: &str) -> Result<Vec<Option<i64>>> {
    Ok(extract_float64_column(batch, column_name)?
        .into_iter()
        .map(|value| value.and_then(float_to_integer))
        .collect())
}

/// Extract a column as strings
///
/// # Errors
/// Returns an error if the column is missing or cannot be read as text
pub fn extract_string_column(
    batch: &RecordBatch,
    column_name: &str,
) -> Result<Vec<Option<String>>> {
    let column = get_column(batch, column_name)?;
    let coerced = coerce_to_utf8(&column, column_name)?;
    let values = downcast_array::<StringArray>(&coerced, column_name, "Utf8")?;

    Ok((0..values.len())
        .map(|i| (!values.is_null(i)).then(|| values.value(i).to_string()))
        .collect())
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_integer(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value <= i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}
