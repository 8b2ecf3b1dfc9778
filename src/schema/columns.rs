//! Column names of the input tables
//!
//! Defaults are the survey's own column names. They can be overridden per
//! call through [`SurveyColumns`] and [`PriceIndexColumns`] when the loader
//! renames columns.

use serde::{Deserialize, Serialize};

pub const YEAR: &str = "ANO4";
pub const QUARTER: &str = "TRIMESTRE";
pub const AREA: &str = "AGLOMERADO";
pub const AGE: &str = "CH06";
pub const SEX: &str = "CH04";
pub const EMPLOYMENT_STATUS: &str = "ESTADO";
pub const INDIVIDUAL_WEIGHT: &str = "PONDERA";
pub const HOUSEHOLD_WEIGHT: &str = "PONDIH";
pub const HOUSEHOLD_INCOME: &str = "ITF";

pub const PRICE_YEAR: &str = "ANIO";
pub const PRICE_MONTH: &str = "MES";
pub const PRICE_INDEX: &str = "INDICE";

/// Column names of the unified survey table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyColumns {
    pub year: String,
    pub quarter: String,
    pub area: String,
    pub age: String,
    pub sex: String,
    pub employment_status: String,
    pub individual_weight: String,
    pub household_weight: String,
    pub household_income: String,
}

impl Default for SurveyColumns {
    fn default() -> Self {
        Self {
            year: YEAR.to_string(),
            quarter: QUARTER.to_string(),
            area: AREA.to_string(),
            age: AGE.to_string(),
            sex: SEX.to_string(),
            employment_status: EMPLOYMENT_STATUS.to_string(),
            individual_weight: INDIVIDUAL_WEIGHT.to_string(),
            household_weight: HOUSEHOLD_WEIGHT.to_string(),
            household_income: HOUSEHOLD_INCOME.to_string(),
        }
    }
}

impl SurveyColumns {
    /// Columns every survey table must carry
    #[must_use]
    pub fn required(&self) -> [&str; 9] {
        [
            self.year.as_str(),
            self.quarter.as_str(),
            self.area.as_str(),
            self.age.as_str(),
            self.sex.as_str(),
            self.employment_status.as_str(),
            self.individual_weight.as_str(),
            self.household_weight.as_str(),
            self.household_income.as_str(),
        ]
    }
}

/// Column names of the monthly price-index table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceIndexColumns {
    pub year: String,
    pub month: String,
    pub index_value: String,
}

impl Default for PriceIndexColumns {
    fn default() -> Self {
        Self {
            year: PRICE_YEAR.to_string(),
            month: PRICE_MONTH.to_string(),
            index_value: PRICE_INDEX.to_string(),
        }
    }
}

impl PriceIndexColumns {
    #[must_use]
    pub fn required(&self) -> [&str; 3] {
        [
            self.year.as_str(),
            self.month.as_str(),
            self.index_value.as_str(),
        ]
    }
}
