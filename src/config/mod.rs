//! Configuration for indicator computation.
//!
//! A single [`IndicatorConfig`] is passed into every computation: which areas
//! to keep, which quarter the deflator is normalized against, the reference
//! age, and the column names of the input tables.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::models::QuarterKey;
use crate::schema::{PriceIndexColumns, SurveyColumns};

/// Area code of Ushuaia - Río Grande
pub const USHUAIA: i32 = 31;
/// Area code of Ciudad Autónoma de Buenos Aires
pub const CABA: i32 = 32;

/// Configuration for indicator computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Areas to aggregate; empty keeps every area
    pub area_codes: Vec<i32>,
    /// Display names of areas
    pub area_names: BTreeMap<i32, String>,
    /// Quarter whose price index normalizes the deflator to 1.0
    pub base_period: QuarterKey,
    /// Minimum age (inclusive) of the reference population
    pub reference_age: i64,
    /// Row count from which grouping runs on the rayon pool
    pub parallel_threshold: usize,
    /// Column names of the survey table
    pub survey_columns: SurveyColumns,
    /// Column names of the price-index table
    pub price_columns: PriceIndexColumns,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            area_codes: vec![USHUAIA, CABA],
            area_names: BTreeMap::from([
                (USHUAIA, "Ushuaia".to_string()),
                (CABA, "CABA".to_string()),
            ]),
            base_period: QuarterKey {
                year: 2025,
                quarter: 1,
            },
            reference_age: 14,
            parallel_threshold: 100_000,
            survey_columns: SurveyColumns::default(),
            price_columns: PriceIndexColumns::default(),
        }
    }
}

impl IndicatorConfig {
    /// Parse a configuration from JSON; absent keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in range
    pub fn validate(&self) -> Result<()> {
        QuarterKey::new(self.base_period.year, self.base_period.quarter)?;
        if self.reference_age < 0 {
            return Err(IndicatorError::InvalidConfig(format!(
                "reference age must not be negative, got {}",
                self.reference_age
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_area_codes(mut self, area_codes: impl IntoIterator<Item = i32>) -> Self {
        self.area_codes = area_codes.into_iter().collect();
        self
    }

    /// Keep every area found in the data
    #[must_use]
    pub fn with_all_areas(mut self) -> Self {
        self.area_codes.clear();
        self
    }

    #[must_use]
    pub fn with_area_name(mut self, area_code: i32, name: impl Into<String>) -> Self {
        self.area_names.insert(area_code, name.into());
        self
    }

    /// Set the deflator base quarter
    pub fn with_base_period(mut self, year: i32, quarter: u8) -> Result<Self> {
        self.base_period = QuarterKey::new(year, quarter)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_reference_age(mut self, reference_age: i64) -> Self {
        self.reference_age = reference_age;
        self
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    #[must_use]
    pub fn with_survey_columns(mut self, columns: SurveyColumns) -> Self {
        self.survey_columns = columns;
        self
    }

    #[must_use]
    pub fn with_price_columns(mut self, columns: PriceIndexColumns) -> Self {
        self.price_columns = columns;
        self
    }

    /// Whether rows of this area are aggregated
    #[must_use]
    pub fn includes_area(&self, area_code: i32) -> bool {
        self.area_codes.is_empty() || self.area_codes.contains(&area_code)
    }

    /// Display name of an area, falling back to its code
    #[must_use]
    pub fn area_name(&self, area_code: i32) -> String {
        self.area_names
            .get(&area_code)
            .cloned()
            .unwrap_or_else(|| area_code.to_string())
    }

    /// Whether `rows` is large enough to group on the rayon pool
    #[must_use]
    pub fn use_parallel(&self, rows: usize) -> bool {
        rows >= self.parallel_threshold
    }
}

impl fmt::Display for IndicatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Indicator Configuration:")?;
        if self.area_codes.is_empty() {
            writeln!(f, "  Areas: all")?;
        } else {
            let areas: Vec<String> = self
                .area_codes
                .iter()
                .map(|code| format!("{} ({code})", self.area_name(*code)))
                .collect();
            writeln!(f, "  Areas: {}", areas.join(", "))?;
        }
        writeln!(f, "  Base Period: {}", self.base_period)?;
        writeln!(f, "  Reference Age: {}+", self.reference_age)?;
        writeln!(f, "  Parallel Threshold: {} rows", self.parallel_threshold)?;
        Ok(())
    }
}
