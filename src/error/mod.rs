//! Error handling for indicator computation.

use arrow::error::ArrowError;

/// Errors raised while adapting input tables or computing indicators
///
/// Coercion failures on individual values are never errors: they become
/// missing fields on the adapted rows. Everything here stops a computation.
#[derive(Debug, thiserror::Error)]
pub enum IndicatorError {
    /// A required column is absent from an input table
    #[error("Column '{column}' not found in input table")]
    ColumnNotFound {
        /// Name of the missing column
        column: String,
    },

    /// A column exists but its type cannot be read as the expected kind
    #[error("Column '{column}' cannot be read as {expected} (found {found})")]
    InvalidDataType {
        /// Name of the column
        column: String,
        /// Human-readable expected kind
        expected: String,
        /// Arrow type actually present
        found: String,
    },

    /// The configured base period is absent from the price-index series
    #[error(
        "Base period {year}-Q{quarter} is not present in the price-index series; \
         the deflator cannot be normalized"
    )]
    MissingBasePeriod {
        /// Base year
        year: i32,
        /// Base quarter
        quarter: u8,
    },

    /// The household weights of a period are all zero or missing, so mean income is undefined
    #[error(
        "Household weight sum is zero or missing for {year}-Q{quarter} area {area_code}; \
         mean real income is undefined"
    )]
    ZeroIncomeWeight {
        /// Year of the offending period
        year: i32,
        /// Quarter of the offending period
        quarter: u8,
        /// Area of the offending period
        area_code: i32,
    },

    /// Two price-index readings share the same year and month
    #[error("Duplicate price-index observation for {month} {year}")]
    DuplicateObservation {
        /// Year of the duplicated reading
        year: i32,
        /// Month token of the duplicated reading
        month: String,
    },

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error converting results to an Arrow table
    #[error("Arrow serialization error: {0}")]
    ArrowSerialization(#[from] serde_arrow::Error),

    /// Error reading or writing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IndicatorError {
    /// Shorthand for a missing column
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Whether the error stems from bad input data rather than a bad table layout
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::MissingBasePeriod { .. }
                | Self::ZeroIncomeWeight { .. }
                | Self::DuplicateObservation { .. }
        )
    }
}

/// Result type for indicator operations
pub type Result<T> = std::result::Result<T, IndicatorError>;
