//! Input table layout and required-column checks.

use arrow::datatypes::{DataType, Schema};

use crate::error::{IndicatorError, Result};

pub mod columns;

pub use columns::{PriceIndexColumns, SurveyColumns};

/// Check if an Arrow type holds numbers
#[must_use]
pub fn is_numeric(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float16
            | DataType::Float32
            | DataType::Float64
            | DataType::Decimal128(_, _)
            | DataType::Decimal256(_, _)
    )
}

/// Check if an Arrow type can be coerced to a number value by value
///
/// Strings are parsed; values that do not parse become null.
#[must_use]
pub fn is_numeric_coercible(data_type: &DataType) -> bool {
    is_numeric(data_type)
        || matches!(
            data_type,
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View | DataType::Null
        )
}

/// Check if an Arrow type can be read as text
#[must_use]
pub fn is_text(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View | DataType::Null
    )
}

/// Fail with [`IndicatorError::ColumnNotFound`] on the first required column
/// missing from `schema`
pub fn require_columns(schema: &Schema, required: &[&str]) -> Result<()> {
    match required
        .iter()
        .find(|name| schema.index_of(name).is_err())
    {
        Some(missing) => Err(IndicatorError::column_not_found(*missing)),
        None => Ok(()),
    }
}
