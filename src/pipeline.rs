//! Record-batch entry points
//!
//! Wire the table adapters to the calculators so callers holding the loader's
//! Arrow tables get result tables back in one call.

use arrow::record_batch::RecordBatch;
use log::info;

use crate::adapters::{PriceIndexAdapter, SurveyAdapter, TableAdapter};
use crate::algorithm::deflator::{DeflatorSeries, compute_deflator_series, compute_real_income};
use crate::algorithm::rates::compute_rates;
use crate::config::IndicatorConfig;
use crate::error::Result;
use crate::models::{ArrowTable, IncomeResult, PriceIndexObservation, RateResult, SurveyRow};

/// Adapt survey batches using the configured column names
pub fn survey_rows(batches: &[RecordBatch], config: &IndicatorConfig) -> Result<Vec<SurveyRow>> {
    SurveyAdapter::new(config.survey_columns.clone()).convert_batches(batches)
}

/// Adapt price-index batches using the configured column names
pub fn price_observations(
    batches: &[RecordBatch],
    config: &IndicatorConfig,
) -> Result<Vec<PriceIndexObservation>> {
    PriceIndexAdapter::new(config.price_columns.clone()).convert_batches(batches)
}

/// Rates per period and area, straight from survey batches
pub fn rates_from_batches(
    batches: &[RecordBatch],
    config: &IndicatorConfig,
) -> Result<Vec<RateResult>> {
    let rows = survey_rows(batches, config)?;
    Ok(compute_rates(&rows, config))
}

/// Deflator series and real income, straight from survey and price-index batches
pub fn real_income_from_batches(
    survey: &[RecordBatch],
    prices: &[RecordBatch],
    config: &IndicatorConfig,
) -> Result<(DeflatorSeries, Vec<IncomeResult>)> {
    let observations = price_observations(prices, config)?;
    let series = compute_deflator_series(&observations, config)?;
    let rows = survey_rows(survey, config)?;
    let income = compute_real_income(&rows, &series, config)?;
    Ok((series, income))
}

/// Rates as an Arrow table for the rendering layer
pub fn rates_table(batches: &[RecordBatch], config: &IndicatorConfig) -> Result<RecordBatch> {
    let results = rates_from_batches(batches, config)?;
    info!("Exporting {} rate rows", results.len());
    RateResult::to_record_batch(&results)
}
