use eph_indicators::{
    IndicatorConfig, IndicatorStatistics, PeriodKey, pipeline, rates_from_batches,
    real_income_from_batches,
};

use crate::utils::{init_logging, price_batch, survey_batch};

fn base_quarter_prices() -> anyhow::Result<arrow::record_batch::RecordBatch> {
    price_batch(&[(2025, "jan", 100.0), (2025, "feb", 100.0), (2025, "mar", 100.0)])
}

#[test]
fn test_unparseable_income_still_counts_for_rates() -> anyhow::Result<()> {
    init_logging();
    let survey = survey_batch(&[
        (2025, 1, 32, 30, 1, 1, 100.0, 10.0, "N/A"),
        (2025, 1, 32, 40, 2, 2, 100.0, 10.0, "30000"),
    ])?;
    let config = IndicatorConfig::default();

    let rates = rates_from_batches(&[survey.clone()], &config)?;
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].reference_population, 200.0);
    assert_eq!(rates[0].employed_population, 100.0);

    let (_, income) = real_income_from_batches(&[survey], &[base_quarter_prices()?], &config)?;
    assert_eq!(income.len(), 1);
    assert_eq!(income[0].rows, 1);
    assert_eq!(income[0].mean_real_income, 30_000.0);
    Ok(())
}

#[test]
fn test_quarter_without_prices_has_rates_but_no_income() -> anyhow::Result<()> {
    let survey = survey_batch(&[
        (2025, 1, 31, 30, 1, 1, 10.0, 5.0, "1000"),
        (2024, 3, 31, 30, 1, 1, 10.0, 5.0, "1000"),
    ])?;
    let config = IndicatorConfig::default();

    let rates = rates_from_batches(&[survey.clone()], &config)?;
    let rate_keys: Vec<PeriodKey> = rates.iter().map(|r| r.key()).collect();
    assert_eq!(
        rate_keys,
        vec![PeriodKey::new(2024, 3, 31), PeriodKey::new(2025, 1, 31)]
    );

    let (series, income) =
        real_income_from_batches(&[survey], &[base_quarter_prices()?], &config)?;
    assert_eq!(series.len(), 1);
    assert_eq!(income.len(), 1);
    assert_eq!(income[0].key(), PeriodKey::new(2025, 1, 31));
    Ok(())
}

#[test]
fn test_config_from_json_drives_the_run() -> anyhow::Result<()> {
    let config = IndicatorConfig::from_json_str(
        r#"{ "area_codes": [2], "base_period": { "year": 2024, "quarter": 4 } }"#,
    )?;
    let survey = survey_batch(&[
        (2024, 4, 2, 50, 1, 2, 20.0, 4.0, "800"),
        (2024, 4, 32, 50, 1, 1, 20.0, 4.0, "800"),
    ])?;
    let prices = price_batch(&[(2024, "oct", 50.0), (2024, "nov", 50.0), (2024, "dec", 50.0)])?;

    let rates = rates_from_batches(&[survey.clone()], &config)?;
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].area_code, 2);
    assert_eq!(rates[0].unemployment_rate, 100.0);

    let (series, income) = real_income_from_batches(&[survey], &[prices], &config)?;
    assert_eq!(series.base().year, 2024);
    assert_eq!(income[0].mean_real_income, 800.0);

    let summary = IndicatorStatistics::rate_summary(&rates, &config);
    assert!(summary.contains("2 (2): 1 periods"));
    Ok(())
}

#[test]
fn test_rates_table_export() -> anyhow::Result<()> {
    let survey = survey_batch(&[(2025, 1, 32, 30, 1, 1, 100.0, 10.0, "1")])?;
    let table = pipeline::rates_table(&[survey], &IndicatorConfig::default())?;
    assert_eq!(table.num_rows(), 1);
    assert!(table.schema().field_with_name("employment_rate").is_ok());
    Ok(())
}

#[test]
fn test_missing_base_period_is_reported() -> anyhow::Result<()> {
    let survey = survey_batch(&[(2025, 1, 32, 30, 1, 1, 100.0, 10.0, "1")])?;
    let prices = price_batch(&[(2024, "jan", 100.0)])?;
    let result = real_income_from_batches(&[survey], &[prices], &IndicatorConfig::default());
    assert!(result.is_err());
    Ok(())
}
