//! Real household income: survey rows joined to the deflator series

use std::borrow::Cow;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use crate::algorithm::deflator::series::DeflatorSeries;
use crate::algorithm::grouping::{Merge, accumulate_groups};
use crate::config::IndicatorConfig;
use crate::error::{IndicatorError, Result};
use crate::models::{IncomeResult, PeriodKey, SurveyRow};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// A survey row after the inner join with the deflator series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeflatedRow {
    pub key: PeriodKey,
    pub nominal_income: f64,
    pub deflator: f64,
    /// `nominal_income / deflator`
    pub real_income: f64,
    /// Missing weights stay in the join so their period still reports a zero weight sum
    pub household_weight: Option<f64>,
}

impl DeflatedRow {
    /// `real_income * household_weight`, or `None` without a weight
    #[must_use]
    pub fn weighted_real_income(&self) -> Option<f64> {
        self.household_weight.map(|weight| self.real_income * weight)
    }
}

/// Weighted income sums of one period and area
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IncomeAccumulator {
    pub weighted_real_income: f64,
    pub household_weight: f64,
    pub rows: u64,
}

impl IncomeAccumulator {
    /// Count the row; only a weighted row moves the sums
    pub fn add(&mut self, row: &DeflatedRow) {
        if let Some(weighted) = row.weighted_real_income() {
            self.weighted_real_income += weighted;
        }
        self.household_weight += row.household_weight.unwrap_or(0.0);
        self.rows += 1;
    }

    /// # Errors
    /// Returns [`IndicatorError::ZeroIncomeWeight`] if every household weight is zero
    /// or missing
    pub fn finish(&self, key: PeriodKey) -> Result<IncomeResult> {
        if self.household_weight <= 0.0 {
            return Err(IndicatorError::ZeroIncomeWeight {
                year: key.year,
                quarter: key.quarter,
                area_code: key.area_code,
            });
        }
        Ok(IncomeResult {
            year: key.year,
            quarter: key.quarter,
            area_code: key.area_code,
            period_index: key.period_index(),
            weighted_real_income: self.weighted_real_income,
            household_weight: self.household_weight,
            mean_real_income: self.weighted_real_income / self.household_weight,
            rows: self.rows,
        })
    }
}

impl Merge for IncomeAccumulator {
    fn merge(&mut self, other: Self) {
        self.weighted_real_income += other.weighted_real_income;
        self.household_weight += other.household_weight;
        self.rows += other.rows;
    }
}

/// The series normalized against `config.base_period`, re-based only when needed
fn aligned_series<'s>(
    series: &'s DeflatorSeries,
    config: &IndicatorConfig,
) -> Result<Cow<'s, DeflatorSeries>> {
    if series.base() == config.base_period {
        Ok(Cow::Borrowed(series))
    } else {
        debug!(
            "Re-basing deflator series from {} to {}",
            series.base(),
            config.base_period
        );
        Ok(Cow::Owned(series.rebased(config.base_period)?))
    }
}

/// Period key and income of a row that can take part in the join
fn income_key(row: &SurveyRow, config: &IndicatorConfig) -> Option<(PeriodKey, f64)> {
    let key = row.period_key()?;
    let income = row.household_income?;
    config.includes_area(key.area_code).then_some((key, income))
}

fn deflate(
    row: &SurveyRow,
    series: &DeflatorSeries,
    config: &IndicatorConfig,
) -> Option<DeflatedRow> {
    let (key, nominal_income) = income_key(row, config)?;
    let deflator = series.normalized(key.quarter_key())?;
    Some(DeflatedRow {
        key,
        nominal_income,
        deflator,
        real_income: nominal_income / deflator,
        household_weight: row.household_weight,
    })
}

/// Inner join of survey rows with the deflator series
///
/// Rows whose quarter has no deflator, whose area is not selected, or that
/// lack household income are dropped. Rows without a household weight are
/// kept and contribute to no sum. The output keeps the input order.
///
/// # Errors
/// Returns [`IndicatorError::MissingBasePeriod`] if the series has to be
/// re-based onto a quarter it does not contain
pub fn join_deflator(
    rows: &[SurveyRow],
    series: &DeflatorSeries,
    config: &IndicatorConfig,
) -> Result<Vec<DeflatedRow>> {
    let aligned = aligned_series(series, config)?;
    let series: &DeflatorSeries = &aligned;

    let joined: Vec<DeflatedRow> = if config.use_parallel(rows.len()) {
        rows.par_iter()
            .filter_map(|row| deflate(row, series, config))
            .collect()
    } else {
        rows.iter()
            .filter_map(|row| deflate(row, series, config))
            .collect()
    };

    debug!(
        "Deflator join kept {} of {} survey rows",
        joined.len(),
        rows.len()
    );
    log_warning(
        "Survey rows with income but no deflator for their quarter",
        unmatched_quarters(rows, series, config),
    );
    Ok(joined)
}

/// Rows that would join but for a quarter missing from the series
fn unmatched_quarters(
    rows: &[SurveyRow],
    series: &DeflatorSeries,
    config: &IndicatorConfig,
) -> usize {
    rows.iter()
        .filter_map(|row| income_key(row, config))
        .filter(|(key, _)| series.normalized(key.quarter_key()).is_none())
        .count()
}

/// Weighted mean real household income per (year, quarter, area)
///
/// # Errors
/// Returns [`IndicatorError::ZeroIncomeWeight`] if the household weights of a
/// period sum to zero, or [`IndicatorError::MissingBasePeriod`] if the
/// series cannot be re-based onto `config.base_period`
pub fn compute_real_income(
    rows: &[SurveyRow],
    series: &DeflatorSeries,
    config: &IndicatorConfig,
) -> Result<Vec<IncomeResult>> {
    let start = Instant::now();
    log_operation_start("Computing real household income", rows.len());

    let joined = join_deflator(rows, series, config)?;
    let groups = accumulate_groups(
        &joined,
        config.use_parallel(joined.len()),
        |row| Some(row.key),
        IncomeAccumulator::add,
    );

    let results = groups
        .into_iter()
        .sorted_by_key(|(key, _)| *key)
        .map(|(key, acc)| acc.finish(key))
        .collect::<Result<Vec<_>>>()?;

    log_operation_complete("real household income", results.len(), Some(start.elapsed()));
    Ok(results)
}

/// Weighted mean real income over every joined row, regardless of period
///
/// Returns `None` when the rows carry no household weight.
#[must_use]
pub fn overall_mean_real_income(rows: &[DeflatedRow]) -> Option<f64> {
    let total = rows.iter().fold(IncomeAccumulator::default(), |mut acc, row| {
        acc.add(row);
        acc
    });
    let mean = (total.household_weight > 0.0)
        .then(|| total.weighted_real_income / total.household_weight);
    if let Some(mean) = mean {
        info!("Overall mean real income over {} rows: {:.2}", total.rows, mean);
    }
    mean
}
