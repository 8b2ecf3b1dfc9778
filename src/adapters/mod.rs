//! Table-to-model adapters
//!
//! Adapters turn the Arrow tables handed over by the loader into typed rows.
//! Required columns are checked up front; individual values that fail numeric
//! coercion become missing fields on the row instead of errors.

use arrow::record_batch::RecordBatch;

use crate::error::Result;

pub mod price_index;
pub mod survey;

pub use price_index::PriceIndexAdapter;
pub use survey::SurveyAdapter;

/// Converts Arrow record batches into domain rows
pub trait TableAdapter<T>: std::fmt::Debug + Send + Sync {
    /// Convert one `RecordBatch` into rows
    fn convert_batch(&self, batch: &RecordBatch) -> Result<Vec<T>>;

    /// Convert several batches of the same table, keeping their order
    fn convert_batches(&self, batches: &[RecordBatch]) -> Result<Vec<T>> {
        let mut rows = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
        for batch in batches {
            rows.extend(self.convert_batch(batch)?);
        }
        Ok(rows)
    }
}
