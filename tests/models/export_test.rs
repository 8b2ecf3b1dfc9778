use arrow::datatypes::DataType;
use eph_indicators::{
    ArrowTable, DeflatorResult, IncomeResult, IndicatorConfig, RateResult,
    compute_deflator_series, compute_rates,
};

use crate::utils::{flat_quarter, synthetic_population};

#[test]
fn test_rate_schema_is_fixed() -> anyhow::Result<()> {
    let schema = RateResult::schema()?;
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(
        names,
        vec![
            "year",
            "quarter",
            "area_code",
            "period_index",
            "reference_population",
            "active_population",
            "employed_population",
            "unemployed_population",
            "employment_rate",
            "activity_rate",
            "unemployment_rate",
            "sample_rows",
        ]
    );
    assert_eq!(schema.field_with_name("year")?.data_type(), &DataType::Int32);
    assert_eq!(schema.field_with_name("quarter")?.data_type(), &DataType::UInt8);
    Ok(())
}

#[test]
fn test_rates_survive_arrow_export() -> anyhow::Result<()> {
    let results = compute_rates(&synthetic_population(500), &IndicatorConfig::default());
    let batch = RateResult::to_record_batch(&results)?;
    assert_eq!(batch.num_rows(), results.len());
    assert_eq!(RateResult::from_record_batch(&batch)?, results);
    Ok(())
}

#[test]
fn test_deflator_json_export() -> anyhow::Result<()> {
    let series =
        compute_deflator_series(&flat_quarter(2025, 1, 100.0), &IndicatorConfig::default())?;
    let json = DeflatorResult::to_json(&series.to_vec())?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value[0]["normalized_deflator"], 1.0);
    assert_eq!(value[0]["quarter"], 1);
    Ok(())
}

#[test]
fn test_empty_income_export() -> anyhow::Result<()> {
    let batch = IncomeResult::to_record_batch(&[])?;
    assert_eq!(batch.num_rows(), 0);
    assert_eq!(batch.num_columns(), 8);
    Ok(())
}
