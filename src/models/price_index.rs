//! Monthly consumer price index readings

use serde::{Deserialize, Serialize};

use crate::models::period::{Month, QuarterKey};

/// One monthly price-index reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceIndexObservation {
    pub year: i32,
    /// Month token as found in the source table
    pub month: String,
    pub index_value: f64,
}

impl PriceIndexObservation {
    #[must_use]
    pub fn new(year: i32, month: impl Into<String>, index_value: f64) -> Self {
        Self {
            year,
            month: month.into(),
            index_value,
        }
    }

    /// Parsed month, or `None` if the token is not recognized
    #[must_use]
    pub fn parsed_month(&self) -> Option<Month> {
        Month::from_token(&self.month)
    }

    /// Quarter this reading falls in, or `None` for an unrecognized month token
    #[must_use]
    pub fn quarter_key(&self) -> Option<QuarterKey> {
        self.parsed_month().map(|month| QuarterKey {
            year: self.year,
            quarter: month.quarter(),
        })
    }
}
