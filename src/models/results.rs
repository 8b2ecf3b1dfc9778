//! Result tables produced by the rate calculator and the income deflator
//!
//! All result types are flat so they map one-to-one onto Arrow columns.

use serde::{Deserialize, Serialize};

use crate::models::period::{PeriodKey, QuarterKey};
use crate::models::traits::ArrowTable;

/// Weighted labor-market indicators for one period and area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateResult {
    pub year: i32,
    pub quarter: u8,
    pub area_code: i32,
    /// `year + (quarter - 1) / 4`, for chronological plotting
    pub period_index: f64,
    /// Weighted population aged at or above the reference age
    pub reference_population: f64,
    /// Weighted employed plus unemployed population
    pub active_population: f64,
    pub employed_population: f64,
    pub unemployed_population: f64,
    /// Employed over reference population, in percent; `None` when the reference weight is zero
    pub employment_rate: Option<f64>,
    /// Active over reference population, in percent; `None` when the reference weight is zero
    pub activity_rate: Option<f64>,
    /// Unemployed over active population, in percent; 0 when the active weight is zero
    pub unemployment_rate: f64,
    /// Number of reference-population survey rows behind the sums
    pub sample_rows: u64,
}

impl RateResult {
    #[must_use]
    pub fn key(&self) -> PeriodKey {
        PeriodKey::new(self.year, self.quarter, self.area_code)
    }

    /// Weighted population outside the labor force
    #[must_use]
    pub fn inactive_population(&self) -> f64 {
        self.reference_population - self.active_population
    }
}

impl ArrowTable for RateResult {}

/// Quarterly price index and its normalization against the base quarter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflatorResult {
    pub year: i32,
    pub quarter: u8,
    /// Arithmetic mean of the monthly readings in the quarter
    pub quarterly_index: f64,
    /// `quarterly_index / base_index`
    pub normalized_deflator: f64,
    /// Number of monthly readings averaged
    pub observations: u64,
}

impl DeflatorResult {
    #[must_use]
    pub fn key(&self) -> QuarterKey {
        QuarterKey {
            year: self.year,
            quarter: self.quarter,
        }
    }
}

impl ArrowTable for DeflatorResult {}

/// Weighted real household income for one period and area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeResult {
    pub year: i32,
    pub quarter: u8,
    pub area_code: i32,
    pub period_index: f64,
    /// Sum of `real_income * household_weight`
    pub weighted_real_income: f64,
    /// Sum of household weights of the contributing rows
    pub household_weight: f64,
    /// `weighted_real_income / household_weight`
    pub mean_real_income: f64,
    /// Number of survey rows that contributed
    pub rows: u64,
}

impl IncomeResult {
    #[must_use]
    pub fn key(&self) -> PeriodKey {
        PeriodKey::new(self.year, self.quarter, self.area_code)
    }
}

impl ArrowTable for IncomeResult {}
