//! Quarterly deflator series from monthly price-index readings
//!
//! Monthly readings are averaged per quarter and every quarter is divided by
//! the base quarter's average, so the base quarter's deflator is exactly 1.0.

use std::collections::BTreeMap;

use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::config::IndicatorConfig;
use crate::error::{IndicatorError, Result};
use crate::models::{DeflatorResult, PriceIndexObservation, QuarterKey};
use crate::utils::logging::log_warning;

/// Average price index of one quarter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterlyIndex {
    pub key: QuarterKey,
    pub index_value: f64,
    pub observations: u64,
}

/// A deflator series normalized against one base quarter
#[derive(Debug, Clone, PartialEq)]
pub struct DeflatorSeries {
    base: QuarterKey,
    entries: BTreeMap<QuarterKey, DeflatorResult>,
}

impl DeflatorSeries {
    /// Normalize quarterly indexes against `base`
    ///
    /// # Errors
    /// Returns [`IndicatorError::MissingBasePeriod`] if `base` is not among the quarters
    pub fn from_quarterly(quarterly: &[QuarterlyIndex], base: QuarterKey) -> Result<Self> {
        let base_index = quarterly
            .iter()
            .find(|q| q.key == base)
            .map(|q| q.index_value)
            .ok_or(IndicatorError::MissingBasePeriod {
                year: base.year,
                quarter: base.quarter,
            })?;

        let entries = quarterly
            .iter()
            .map(|q| {
                (
                    q.key,
                    DeflatorResult {
                        year: q.key.year,
                        quarter: q.key.quarter,
                        quarterly_index: q.index_value,
                        normalized_deflator: q.index_value / base_index,
                        observations: q.observations,
                    },
                )
            })
            .collect();

        Ok(Self { base, entries })
    }

    /// Quarter whose deflator is 1.0
    #[must_use]
    pub fn base(&self) -> QuarterKey {
        self.base
    }

    #[must_use]
    pub fn get(&self, key: QuarterKey) -> Option<&DeflatorResult> {
        self.entries.get(&key)
    }

    /// Normalized deflator of a quarter, if the quarter is in the series
    #[must_use]
    pub fn normalized(&self, key: QuarterKey) -> Option<f64> {
        self.get(key).map(|entry| entry.normalized_deflator)
    }

    /// Entries in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &DeflatorResult> {
        self.entries.values()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<DeflatorResult> {
        self.entries.values().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The same series normalized against another base quarter
    ///
    /// # Errors
    /// Returns [`IndicatorError::MissingBasePeriod`] if `base` is not in the series
    pub fn rebased(&self, base: QuarterKey) -> Result<Self> {
        let quarterly: Vec<QuarterlyIndex> = self
            .entries
            .values()
            .map(|entry| QuarterlyIndex {
                key: entry.key(),
                index_value: entry.quarterly_index,
                observations: entry.observations,
            })
            .collect();
        Self::from_quarterly(&quarterly, base)
    }
}

/// Average monthly readings per quarter
///
/// Readings with an unrecognized month token, or an index value that is not a
/// positive number, are skipped.
///
/// # Errors
/// Returns [`IndicatorError::DuplicateObservation`] if a (year, month) appears twice
pub fn quarterly_index(observations: &[PriceIndexObservation]) -> Result<Vec<QuarterlyIndex>> {
    let mut seen = FxHashSet::default();
    let mut sums: BTreeMap<QuarterKey, (f64, u64)> = BTreeMap::new();
    let mut skipped = 0;

    for observation in observations {
        let Some(month) = observation.parsed_month() else {
            debug!(
                "Unrecognized month token '{}' for {}",
                observation.month, observation.year
            );
            skipped += 1;
            continue;
        };
        if !(observation.index_value.is_finite() && observation.index_value > 0.0) {
            skipped += 1;
            continue;
        }
        if !seen.insert((observation.year, month)) {
            return Err(IndicatorError::DuplicateObservation {
                year: observation.year,
                month: month.to_string(),
            });
        }

        let key = QuarterKey {
            year: observation.year,
            quarter: month.quarter(),
        };
        let (sum, count) = sums.entry(key).or_insert((0.0, 0));
        *sum += observation.index_value;
        *count += 1;
    }

    log_warning("Skipped price-index readings", skipped);

    Ok(sums
        .into_iter()
        .map(|(key, (sum, count))| QuarterlyIndex {
            key,
            index_value: sum / count as f64,
            observations: count,
        })
        .collect())
}

/// Build the deflator series normalized against `config.base_period`
///
/// # Errors
/// Returns [`IndicatorError::MissingBasePeriod`] if the base quarter has no
/// readings, or [`IndicatorError::DuplicateObservation`] for a repeated month
pub fn compute_deflator_series(
    observations: &[PriceIndexObservation],
    config: &IndicatorConfig,
) -> Result<DeflatorSeries> {
    let quarterly = quarterly_index(observations)?;
    let series = DeflatorSeries::from_quarterly(&quarterly, config.base_period)?;
    info!(
        "Built deflator series of {} quarters based on {}",
        series.len(),
        series.base()
    );
    Ok(series)
}
