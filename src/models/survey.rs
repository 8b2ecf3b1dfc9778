//! Survey microdata model
//!
//! One [`SurveyRow`] is one sampled person in one quarter. Every numeric field
//! is optional: a value that failed numeric coercion is carried as `None` and
//! only drops out of the aggregates that need it.

use serde::{Deserialize, Serialize};

use crate::models::period::PeriodKey;

/// Labor-force condition of a surveyed person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    /// Code 1
    Employed,
    /// Code 2
    Unemployed,
    /// Any other code (no response, inactive, under working age)
    Other(i64),
}

impl EmploymentStatus {
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Employed,
            2 => Self::Unemployed,
            other => Self::Other(other),
        }
    }

    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Employed => 1,
            Self::Unemployed => 2,
            Self::Other(code) => code,
        }
    }

    /// Employed or unemployed
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Employed | Self::Unemployed)
    }
}

/// Sex as coded by the survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other(i64),
}

impl Sex {
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Male,
            2 => Self::Female,
            other => Self::Other(other),
        }
    }

    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
            Self::Other(code) => code,
        }
    }
}

/// A single individual-quarter observation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyRow {
    pub year: Option<i32>,
    pub quarter: Option<u8>,
    pub area_code: Option<i32>,
    pub age: Option<i64>,
    pub employment_status: Option<EmploymentStatus>,
    pub sex: Option<Sex>,
    /// Expansion weight for person-level aggregates
    pub individual_weight: Option<f64>,
    /// Expansion weight for household-income aggregates
    pub household_weight: Option<f64>,
    /// Total household income as reported
    pub household_income: Option<f64>,
}

impl SurveyRow {
    /// Create a row with the grouping fields set and everything else missing
    #[must_use]
    pub fn new(year: i32, quarter: u8, area_code: i32) -> Self {
        Self {
            year: Some(year),
            quarter: Some(quarter),
            area_code: Some(area_code),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: EmploymentStatus) -> Self {
        self.employment_status = Some(status);
        self
    }

    #[must_use]
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    /// Set the individual weight; negative weights are treated as missing
    #[must_use]
    pub fn with_individual_weight(mut self, weight: f64) -> Self {
        self.individual_weight = non_negative(weight);
        self
    }

    /// Set the household weight; negative weights are treated as missing
    #[must_use]
    pub fn with_household_weight(mut self, weight: f64) -> Self {
        self.household_weight = non_negative(weight);
        self
    }

    #[must_use]
    pub fn with_household_income(mut self, income: f64) -> Self {
        self.household_income = income.is_finite().then_some(income);
        self
    }

    /// Grouping key, if year, a valid quarter and area are all present
    #[must_use]
    pub fn period_key(&self) -> Option<PeriodKey> {
        let quarter = self.quarter.filter(|q| (1..=4).contains(q))?;
        Some(PeriodKey::new(self.year?, quarter, self.area_code?))
    }
}

/// Keep a weight only if it is a finite, non-negative number
#[must_use]
pub fn non_negative(weight: f64) -> Option<f64> {
    (weight.is_finite() && weight >= 0.0).then_some(weight)
}
