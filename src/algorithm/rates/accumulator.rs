//! Per-period weight sums for the four labor-force populations

use crate::algorithm::grouping::Merge;
use crate::algorithm::population::Population;
use crate::models::{PeriodKey, RateResult, SurveyRow};

/// Weighted population sums of one period and area
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateAccumulator {
    pub reference: f64,
    pub active: f64,
    pub employed: f64,
    pub unemployed: f64,
    /// Number of survey rows seen (reference population only)
    pub rows: u64,
}

impl RateAccumulator {
    /// Add one row's individual weight to every population it belongs to
    ///
    /// A missing weight counts as zero: the row still belongs to its period
    /// but moves none of the sums.
    pub fn add(&mut self, row: &SurveyRow, reference_age: i64) {
        let weight = row.individual_weight.unwrap_or(0.0);
        for population in Population::ALL {
            if population.contains(row, reference_age) {
                *self.sum_mut(population) += weight;
            }
        }
        self.rows += 1;
    }

    #[must_use]
    pub fn sum(&self, population: Population) -> f64 {
        match population {
            Population::Reference => self.reference,
            Population::Active => self.active,
            Population::Employed => self.employed,
            Population::Unemployed => self.unemployed,
        }
    }

    fn sum_mut(&mut self, population: Population) -> &mut f64 {
        match population {
            Population::Reference => &mut self.reference,
            Population::Active => &mut self.active,
            Population::Employed => &mut self.employed,
            Population::Unemployed => &mut self.unemployed,
        }
    }

    /// Turn the sums into rates
    #[must_use]
    pub fn finish(&self, key: PeriodKey) -> RateResult {
        RateResult {
            year: key.year,
            quarter: key.quarter,
            area_code: key.area_code,
            period_index: key.period_index(),
            reference_population: self.reference,
            active_population: self.active,
            employed_population: self.employed,
            unemployed_population: self.unemployed,
            employment_rate: percentage(self.employed, self.reference),
            activity_rate: percentage(self.active, self.reference),
            unemployment_rate: percentage(self.unemployed, self.active).unwrap_or(0.0),
            sample_rows: self.rows,
        }
    }
}

impl Merge for RateAccumulator {
    fn merge(&mut self, other: Self) {
        self.reference += other.reference;
        self.active += other.active;
        self.employed += other.employed;
        self.unemployed += other.unemployed;
        self.rows += other.rows;
    }
}

/// `100 * part / whole`, undefined for a zero whole
fn percentage(part: f64, whole: f64) -> Option<f64> {
    (whole > 0.0).then(|| 100.0 * part / whole)
}
