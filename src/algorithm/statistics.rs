//! Human-readable summaries of indicator runs
//!
//! Used for logging and for quick inspection of results; the rendering layer
//! works from the result tables instead.

use std::collections::BTreeMap;
use std::fmt::Write;

use itertools::Itertools;

use crate::config::IndicatorConfig;
use crate::models::{DeflatorResult, IncomeResult, RateResult};

/// Text summaries of rate, deflator and income results
pub struct IndicatorStatistics;

impl IndicatorStatistics {
    /// Summarize rate results, one block per area with its latest period
    #[must_use]
    pub fn rate_summary(results: &[RateResult], config: &IndicatorConfig) -> String {
        let mut summary = String::new();
        summary.push_str("Labor Market Summary:\n");
        summary.push_str(&format!("  Periods: {}\n", results.len()));
        if results.is_empty() {
            return summary;
        }

        let by_area: BTreeMap<i32, Vec<&RateResult>> = results
            .iter()
            .map(|result| (result.area_code, result))
            .into_group_map()
            .into_iter()
            .collect();

        for (area_code, area_results) in by_area {
            let Some(latest) = area_results.iter().max_by_key(|result| result.key()) else {
                continue;
            };
            let _ = writeln!(
                summary,
                "\n{} ({}): {} periods",
                config.area_name(area_code),
                area_code,
                area_results.len()
            );
            let _ = writeln!(
                summary,
                "  Latest Period: {}-Q{}",
                latest.year,
                latest.quarter
            );
            let _ = writeln!(
                summary,
                "  Employment Rate: {}",
                format_rate(latest.employment_rate)
            );
            let _ = writeln!(
                summary,
                "  Activity Rate: {}",
                format_rate(latest.activity_rate)
            );
            let _ = writeln!(
                summary,
                "  Unemployment Rate: {:.1}%",
                latest.unemployment_rate
            );
            let _ = writeln!(summary, "  Sample Rows: {}", latest.sample_rows);
        }

        summary
    }

    /// Summarize a deflator series and the real income derived from it
    #[must_use]
    pub fn income_summary(
        deflator: &[DeflatorResult],
        income: &[IncomeResult],
        config: &IndicatorConfig,
    ) -> String {
        let mut summary = String::new();
        summary.push_str("Real Income Summary:\n");
        let _ = writeln!(summary, "  Base Period: {}", config.base_period);
        let _ = writeln!(summary, "  Deflator Quarters: {}", deflator.len());
        if let (Some(first), Some(last)) = (deflator.first(), deflator.last()) {
            let _ = writeln!(
                summary,
                "  Deflator Range: {:.3} ({}-Q{}) to {:.3} ({}-Q{})",
                first.normalized_deflator,
                first.year,
                first.quarter,
                last.normalized_deflator,
                last.year,
                last.quarter
            );
        }

        let by_area: BTreeMap<i32, Vec<&IncomeResult>> = income
            .iter()
            .map(|result| (result.area_code, result))
            .into_group_map()
            .into_iter()
            .collect();

        for (area_code, group) in by_area {
            let rows: u64 = group.iter().map(|result| result.rows).sum();
            let weight: f64 = group.iter().map(|result| result.household_weight).sum();
            let weighted: f64 = group.iter().map(|result| result.weighted_real_income).sum();
            let _ = writeln!(
                summary,
                "\n{} ({}): {} periods, {} households",
                config.area_name(area_code),
                area_code,
                group.len(),
                rows
            );
            if weight > 0.0 {
                let _ = writeln!(summary, "  Mean Real Income: {:.2}", weighted / weight);
            }
        }

        summary
    }
}

fn format_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "undefined".to_string(), |rate| format!("{rate:.1}%"))
}
