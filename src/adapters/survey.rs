//! Survey table adapter

use arrow::record_batch::RecordBatch;
use itertools::izip;
use log::debug;

use crate::adapters::TableAdapter;
use crate::error::Result;
use crate::models::survey::non_negative;
use crate::models::{EmploymentStatus, Sex, SurveyRow};
use crate::schema::{SurveyColumns, require_columns};
use crate::utils::arrow::{extract_float64_column, extract_integer_column};

/// Adapter from the unified survey table to [`SurveyRow`]s
#[derive(Debug, Clone, Default)]
pub struct SurveyAdapter {
    columns: SurveyColumns,
}

impl SurveyAdapter {
    #[must_use]
    pub fn new(columns: SurveyColumns) -> Self {
        Self { columns }
    }

    #[must_use]
    pub fn columns(&self) -> &SurveyColumns {
        &self.columns
    }
}

impl TableAdapter<SurveyRow> for SurveyAdapter {
    fn convert_batch(&self, batch: &RecordBatch) -> Result<Vec<SurveyRow>> {
        let columns = &self.columns;
        require_columns(&batch.schema(), &columns.required())?;

        let years = extract_integer_column(batch, &columns.year)?;
        let quarters = extract_integer_column(batch, &columns.quarter)?;
        let areas = extract_integer_column(batch, &columns.area)?;
        let ages = extract_integer_column(batch, &columns.age)?;
        let sexes = extract_integer_column(batch, &columns.sex)?;
        let statuses = extract_integer_column(batch, &columns.employment_status)?;
        let individual_weights = extract_float64_column(batch, &columns.individual_weight)?;
        let household_weights = extract_float64_column(batch, &columns.household_weight)?;
        let incomes = extract_float64_column(batch, &columns.household_income)?;

        let rows: Vec<SurveyRow> = izip!(
            years,
            quarters,
            areas,
            ages,
            sexes,
            statuses,
            individual_weights,
            household_weights,
            incomes
        )
        .map(
            |(year, quarter, area, age, sex, status, individual_weight, household_weight, income)| {
                SurveyRow {
                    year: year.and_then(|v| i32::try_from(v).ok()),
                    quarter: quarter.and_then(|v| u8::try_from(v).ok()),
                    area_code: area.and_then(|v| i32::try_from(v).ok()),
                    age,
                    employment_status: status.map(EmploymentStatus::from_code),
                    sex: sex.map(Sex::from_code),
                    individual_weight: individual_weight.and_then(non_negative),
                    household_weight: household_weight.and_then(non_negative),
                    household_income: income,
                }
            },
        )
        .collect();

        debug!("Adapted {} survey rows", rows.len());
        Ok(rows)
    }
}
