//! Domain models
//!
//! Survey rows and price-index readings coming in, result tables going out.

pub mod period;
pub mod price_index;
pub mod results;
pub mod survey;
pub mod traits;

pub use period::{Month, PeriodKey, QuarterKey};
pub use price_index::PriceIndexObservation;
pub use results::{DeflatorResult, IncomeResult, RateResult};
pub use survey::{EmploymentStatus, Sex, SurveyRow};
pub use traits::ArrowTable;
