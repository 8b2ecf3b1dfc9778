//! Labor-force survey indicators
//!
//! Computes weighted employment, activity and unemployment rates per
//! (year, quarter, area) from household-survey microdata, and weighted real
//! household income by deflating nominal income with a quarterly series built
//! from a monthly price index.
//!
//! Inputs arrive as Arrow record batches and are adapted into typed rows;
//! results come back as typed values, Arrow record batches or JSON.

pub mod adapters;
pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod schema;
pub mod utils;

// Core types
pub use config::IndicatorConfig;
pub use error::{IndicatorError, Result};
pub use models::{
    ArrowTable, DeflatorResult, EmploymentStatus, IncomeResult, Month, PeriodKey,
    PriceIndexObservation, QuarterKey, RateResult, Sex, SurveyRow,
};

// Arrow types
pub use arrow::record_batch::RecordBatch;

// Adapters
pub use adapters::{PriceIndexAdapter, SurveyAdapter, TableAdapter};
pub use schema::{PriceIndexColumns, SurveyColumns};

// Calculators
pub use algorithm::deflator::{
    DeflatedRow, DeflatorSeries, compute_deflator_series, compute_real_income, join_deflator,
    overall_mean_real_income,
};
pub use algorithm::population::{FilterCriteria, Population, RowFilter};
pub use algorithm::rates::{
    RateCalculator, compute_rates, compute_rates_by_sex, compute_rates_with_filter,
};
pub use algorithm::statistics::IndicatorStatistics;
pub use pipeline::{rates_from_batches, real_income_from_batches};
