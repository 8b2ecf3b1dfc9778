//! Period keys and the month-to-quarter partition
//!
//! Every aggregate is grouped by a [`PeriodKey`] (year, quarter, area). The
//! deflator series is keyed by the coarser [`QuarterKey`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// A (year, quarter) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuarterKey {
    /// Calendar year
    pub year: i32,
    /// Quarter, 1 to 4
    pub quarter: u8,
}

impl QuarterKey {
    /// Create a quarter key, rejecting quarters outside 1..=4
    pub fn new(year: i32, quarter: u8) -> Result<Self> {
        if !(1..=4).contains(&quarter) {
            return Err(IndicatorError::InvalidConfig(format!(
                "quarter must be between 1 and 4, got {quarter}"
            )));
        }
        Ok(Self { year, quarter })
    }

    /// Continuous time coordinate, `year + (quarter - 1) / 4`
    #[must_use]
    pub fn period_index(&self) -> f64 {
        f64::from(self.year) + f64::from(self.quarter - 1) / 4.0
    }
}

impl fmt::Display for QuarterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter)
    }
}

/// The (year, quarter, area) grouping used by every survey aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeriodKey {
    /// Calendar year
    pub year: i32,
    /// Quarter, 1 to 4
    pub quarter: u8,
    /// Geographic area code
    pub area_code: i32,
}

impl PeriodKey {
    #[must_use]
    pub fn new(year: i32, quarter: u8, area_code: i32) -> Self {
        Self {
            year,
            quarter,
            area_code,
        }
    }

    /// The (year, quarter) part of the key
    #[must_use]
    pub fn quarter_key(&self) -> QuarterKey {
        QuarterKey {
            year: self.year,
            quarter: self.quarter,
        }
    }

    #[must_use]
    pub fn period_index(&self) -> f64 {
        self.quarter_key().period_index()
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{} area {}", self.year, self.quarter, self.area_code)
    }
}

/// Calendar month as it appears in the price-index table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Parse a three-letter month token, ignoring case
    ///
    /// Returns `None` for anything that is not one of the twelve tokens.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|month| month.token().eq_ignore_ascii_case(token))
    }

    /// Lowercase three-letter token
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Jan => "jan",
            Self::Feb => "feb",
            Self::Mar => "mar",
            Self::Apr => "apr",
            Self::May => "may",
            Self::Jun => "jun",
            Self::Jul => "jul",
            Self::Aug => "aug",
            Self::Sep => "sep",
            Self::Oct => "oct",
            Self::Nov => "nov",
            Self::Dec => "dec",
        }
    }

    /// Quarter this month belongs to (three consecutive months per quarter)
    #[must_use]
    pub fn quarter(self) -> u8 {
        self as u8 / 3 + 1
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Month {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s).ok_or_else(|| {
            IndicatorError::InvalidConfig(format!("unrecognized month token '{s}'"))
        })
    }
}
