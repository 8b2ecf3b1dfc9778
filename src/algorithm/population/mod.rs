//! Labor-force populations and row filters
//!
//! Survey rows are classified into the nested reference, active, employed and
//! unemployed populations, and can be narrowed further with a [`RowFilter`].

pub mod filters;

pub use filters::{FilterCriteria, Population, RowFilter};
