//! Employment, activity and unemployment rates per period and area

use std::collections::BTreeMap;
use std::time::Instant;

use itertools::Itertools;
use log::debug;

use crate::algorithm::grouping::accumulate_groups;
use crate::algorithm::population::{FilterCriteria, Population, RowFilter};
use crate::algorithm::rates::accumulator::RateAccumulator;
use crate::config::IndicatorConfig;
use crate::models::{PeriodKey, RateResult, Sex, SurveyRow};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Computes weighted labor-market rates from survey rows
///
/// Rows are grouped by [`PeriodKey`]. A period appears in the output as soon
/// as one row of the reference population falls in it; rows below the
/// reference age never create or move a period.
#[derive(Debug, Clone)]
pub struct RateCalculator<'a> {
    config: &'a IndicatorConfig,
    filter: Option<RowFilter>,
}

impl<'a> RateCalculator<'a> {
    #[must_use]
    pub fn new(config: &'a IndicatorConfig) -> Self {
        Self {
            config,
            filter: None,
        }
    }

    /// Only aggregate rows meeting `filter`
    #[must_use]
    pub fn with_filter(mut self, filter: RowFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Group key of a row, or `None` if the row takes no part in any rate
    fn key_of(&self, row: &SurveyRow) -> Option<PeriodKey> {
        if !Population::Reference.contains(row, self.config.reference_age) {
            return None;
        }
        if let Some(filter) = &self.filter {
            if !filter.meets_criteria(row) {
                return None;
            }
        }
        row.period_key()
            .filter(|key| self.config.includes_area(key.area_code))
    }

    /// Weighted population sums per period, before rates are derived
    #[must_use]
    pub fn accumulate(&self, rows: &[SurveyRow]) -> BTreeMap<PeriodKey, RateAccumulator> {
        let reference_age = self.config.reference_age;
        accumulate_groups(
            rows,
            self.config.use_parallel(rows.len()),
            |row| self.key_of(row),
            |acc: &mut RateAccumulator, row| acc.add(row, reference_age),
        )
        .into_iter()
        .collect()
    }

    /// Compute one [`RateResult`] per period, sorted by period key
    #[must_use]
    pub fn compute(&self, rows: &[SurveyRow]) -> Vec<RateResult> {
        let start = Instant::now();
        log_operation_start("Computing labor-market rates", rows.len());

        let groups = self.accumulate(rows);
        let used: u64 = groups.values().map(|acc| acc.rows).sum();
        debug!(
            "{} of {} rows fell in the reference population of an included period",
            used,
            rows.len()
        );

        let results = groups
            .into_iter()
            .map(|(key, acc)| acc.finish(key))
            .collect_vec();

        log_operation_complete("labor-market rates", results.len(), Some(start.elapsed()));
        results
    }
}

/// Compute rates per (year, quarter, area) over all rows
#[must_use]
pub fn compute_rates(rows: &[SurveyRow], config: &IndicatorConfig) -> Vec<RateResult> {
    RateCalculator::new(config).compute(rows)
}

/// Compute rates over the rows that meet `filter`
#[must_use]
pub fn compute_rates_with_filter(
    rows: &[SurveyRow],
    config: &IndicatorConfig,
    filter: RowFilter,
) -> Vec<RateResult> {
    RateCalculator::new(config).with_filter(filter).compute(rows)
}

/// Compute a separate rate table for every sex present in the data
#[must_use]
pub fn compute_rates_by_sex(
    rows: &[SurveyRow],
    config: &IndicatorConfig,
) -> BTreeMap<Sex, Vec<RateResult>> {
    rows.iter()
        .filter_map(|row| row.sex)
        .unique()
        .map(|sex| (sex, compute_rates_with_filter(rows, config, RowFilter::Sex(sex))))
        .filter(|(_, results)| !results.is_empty())
        .collect()
}
