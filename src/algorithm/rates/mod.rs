//! Rate calculator
//!
//! Employment, activity and unemployment rates from weighted survey rows.

pub mod accumulator;
pub mod calculator;

pub use accumulator::RateAccumulator;
pub use calculator::{
    RateCalculator, compute_rates, compute_rates_by_sex, compute_rates_with_filter,
};
