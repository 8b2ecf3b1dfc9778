//! Price-index table adapter

use arrow::record_batch::RecordBatch;
use itertools::izip;

use crate::adapters::TableAdapter;
use crate::error::Result;
use crate::models::PriceIndexObservation;
use crate::schema::{PriceIndexColumns, require_columns};
use crate::utils::arrow::{extract_float64_column, extract_integer_column, extract_string_column};
use crate::utils::logging::log_warning;

/// Adapter from the monthly price-index table to [`PriceIndexObservation`]s
///
/// Rows whose year, month or index value is missing cannot be used and are
/// skipped with a warning. Index values are checked when the series is built.
#[derive(Debug, Clone, Default)]
pub struct PriceIndexAdapter {
    columns: PriceIndexColumns,
}

impl PriceIndexAdapter {
    #[must_use]
    pub fn new(columns: PriceIndexColumns) -> Self {
        Self { columns }
    }
}

impl TableAdapter<PriceIndexObservation> for PriceIndexAdapter {
    fn convert_batch(&self, batch: &RecordBatch) -> Result<Vec<PriceIndexObservation>> {
        let columns = &self.columns;
        require_columns(&batch.schema(), &columns.required())?;

        let years = extract_integer_column(batch, &columns.year)?;
        let months = extract_string_column(batch, &columns.month)?;
        let values = extract_float64_column(batch, &columns.index_value)?;

        let observations: Vec<PriceIndexObservation> = izip!(years, months, values)
            .filter_map(|(year, month, value)| {
                let year = i32::try_from(year?).ok()?;
                Some(PriceIndexObservation::new(year, month?, value?))
            })
            .collect();

        log_warning(
            "Skipped unusable price-index rows",
            batch.num_rows() - observations.len(),
        );
        Ok(observations)
    }
}
