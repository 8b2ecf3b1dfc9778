//! Income deflator
//!
//! A quarterly deflator series built from monthly price-index readings, and
//! the weighted real household income obtained by joining survey rows to it.

pub mod real_income;
pub mod series;

pub use real_income::{
    DeflatedRow, IncomeAccumulator, compute_real_income, join_deflator, overall_mean_real_income,
};
pub use series::{DeflatorSeries, QuarterlyIndex, compute_deflator_series, quarterly_index};
