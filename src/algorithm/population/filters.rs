//! Population subsets and row filters
//!
//! The four labor-force populations are nested: every active person belongs
//! to the reference population, and every employed or unemployed person is
//! active. Extra [`RowFilter`]s narrow the rows before any population is
//! formed (for example to one sex).

use crate::models::{EmploymentStatus, Sex, SurveyRow};

/// Defines a criterion for filtering survey rows
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// The populations whose weights are summed per period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Population {
    /// Aged at or above the reference age
    Reference,
    /// Reference population that is employed or unemployed
    Active,
    /// Reference population that is employed
    Employed,
    /// Reference population that is unemployed
    Unemployed,
}

impl Population {
    pub const ALL: [Self; 4] = [
        Self::Reference,
        Self::Active,
        Self::Employed,
        Self::Unemployed,
    ];

    /// Whether `row` belongs to this population
    ///
    /// A row with a missing age is never in the reference population; a row
    /// with a missing status is in the reference population only.
    #[must_use]
    pub fn contains(self, row: &SurveyRow, reference_age: i64) -> bool {
        let in_reference = row.age.is_some_and(|age| age >= reference_age);
        if !in_reference {
            return false;
        }
        match self {
            Self::Reference => true,
            Self::Active => row.employment_status.is_some_and(EmploymentStatus::is_active),
            Self::Employed => row.employment_status == Some(EmploymentStatus::Employed),
            Self::Unemployed => row.employment_status == Some(EmploymentStatus::Unemployed),
        }
    }
}

/// A filter that can be applied to a survey row
#[derive(Debug, Clone, PartialEq)]
pub enum RowFilter {
    /// Filter by age range
    AgeRange {
        /// Minimum age (inclusive)
        min_age: Option<i64>,
        /// Maximum age (inclusive)
        max_age: Option<i64>,
    },
    /// Filter by sex
    Sex(Sex),
    /// Filter by area code
    Areas(Vec<i32>),
    /// Filter by employment status
    Status(EmploymentStatus),
    /// Combined filter that requires all criteria to be met
    All(Vec<RowFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<RowFilter>),
}

impl FilterCriteria<SurveyRow> for RowFilter {
    fn meets_criteria(&self, row: &SurveyRow) -> bool {
        match self {
            Self::AgeRange { min_age, max_age } => {
                let Some(age) = row.age else {
                    return false;
                };
                min_age.is_none_or(|min| age >= min) && max_age.is_none_or(|max| age <= max)
            }
            Self::Sex(sex) => row.sex == Some(*sex),
            Self::Areas(codes) => row.area_code.is_some_and(|code| codes.contains(&code)),
            Self::Status(status) => row.employment_status == Some(*status),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(row)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(row)),
        }
    }
}
