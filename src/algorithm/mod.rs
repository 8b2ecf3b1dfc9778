//! Indicator algorithms
//!
//! The rate calculator and the income deflator, plus the keyed accumulation
//! and population filters they share.

pub mod deflator;
pub mod grouping;
pub mod population;
pub mod rates;
pub mod statistics;
