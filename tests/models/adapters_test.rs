use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use eph_indicators::algorithm::deflator::quarterly_index;
use eph_indicators::{
    EmploymentStatus, IndicatorError, PriceIndexAdapter, PriceIndexColumns,
    PriceIndexObservation, Sex, SurveyAdapter, TableAdapter,
};

use crate::utils::{price_batch, survey_batch};

#[test]
fn test_survey_adapter_reads_native_columns() -> anyhow::Result<()> {
    let batch = survey_batch(&[
        (2020, 1, 32, 30, 2, 1, 100.0, 10.0, "25000"),
        (2020, 1, 32, 10, 1, 3, 50.0, 10.0, "N/A"),
    ])?;
    let rows = SurveyAdapter::default().convert_batch(&batch)?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].employment_status, Some(EmploymentStatus::Employed));
    assert_eq!(rows[0].sex, Some(Sex::Female));
    assert_eq!(rows[0].household_income, Some(25_000.0));
    assert_eq!(rows[1].household_income, None);
    assert_eq!(rows[1].employment_status, Some(EmploymentStatus::Other(3)));
    assert_eq!(rows[1].age, Some(10));
    Ok(())
}

#[test]
fn test_missing_column_is_reported_by_name() -> anyhow::Result<()> {
    let schema = Arc::new(Schema::new(vec![Field::new("ANO4", DataType::Float64, true)]));
    let batch = RecordBatch::try_new(
        schema,
        vec![Arc::new(Float64Array::from(vec![2020.0])) as ArrayRef],
    )?;
    let err = SurveyAdapter::default().convert_batch(&batch).unwrap_err();
    assert!(matches!(err, IndicatorError::ColumnNotFound { ref column } if column == "TRIMESTRE"));
    Ok(())
}

#[test]
fn test_convert_batches_keeps_order() -> anyhow::Result<()> {
    let first = survey_batch(&[(2020, 1, 32, 30, 1, 1, 1.0, 1.0, "1")])?;
    let second = survey_batch(&[(2021, 2, 31, 40, 2, 2, 2.0, 2.0, "2")])?;
    let rows = SurveyAdapter::default().convert_batches(&[first, second])?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].year, Some(2020));
    assert_eq!(rows[1].area_code, Some(31));
    assert_eq!(rows[1].employment_status, Some(EmploymentStatus::Unemployed));
    Ok(())
}

#[test]
fn test_price_adapter() -> anyhow::Result<()> {
    let batch = price_batch(&[(2025, "jan", 100.0), (2025, "feb", 0.0), (2025, "Mar", 102.0)])?;
    let observations = PriceIndexAdapter::default().convert_batch(&batch)?;
    assert_eq!(observations.len(), 3);
    assert_eq!(observations[2], PriceIndexObservation::new(2025, "Mar", 102.0));

    // the zero reading is dropped once, when the quarter is averaged
    let quarterly = quarterly_index(&observations)?;
    assert_eq!(quarterly.len(), 1);
    assert_eq!(quarterly[0].observations, 2);
    assert_eq!(quarterly[0].index_value, 101.0);
    Ok(())
}

#[test]
fn test_price_adapter_with_custom_columns() -> anyhow::Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("year", DataType::Utf8, true),
        Field::new("month", DataType::Utf8, true),
        Field::new("cpi", DataType::Utf8, true),
    ]));
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec!["2025"])) as ArrayRef,
            Arc::new(StringArray::from(vec!["jan"])) as ArrayRef,
            Arc::new(StringArray::from(vec!["8000.25"])) as ArrayRef,
        ],
    )?;
    let columns = PriceIndexColumns {
        year: "year".to_string(),
        month: "month".to_string(),
        index_value: "cpi".to_string(),
    };
    let observations = PriceIndexAdapter::new(columns).convert_batch(&batch)?;
    assert_eq!(observations[0].index_value, 8000.25);
    assert_eq!(observations[0].year, 2025);
    Ok(())
}
