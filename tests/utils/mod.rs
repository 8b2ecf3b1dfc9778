use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use eph_indicators::{EmploymentStatus, PriceIndexObservation, Sex, SurveyRow};

/// Initialise logging once for the whole test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An individual survey row with the fields the rate calculator reads
#[must_use]
pub fn person(
    year: i32,
    quarter: u8,
    area: i32,
    age: i64,
    status: EmploymentStatus,
    weight: f64,
) -> SurveyRow {
    SurveyRow::new(year, quarter, area)
        .with_age(age)
        .with_status(status)
        .with_individual_weight(weight)
}

/// A survey row with the fields the income deflator reads
#[must_use]
pub fn household(year: i32, quarter: u8, area: i32, income: f64, weight: f64) -> SurveyRow {
    SurveyRow::new(year, quarter, area)
        .with_household_income(income)
        .with_household_weight(weight)
}

/// Three monthly readings per quarter, all equal to `value`
#[must_use]
pub fn flat_quarter(year: i32, quarter: u8, value: f64) -> Vec<PriceIndexObservation> {
    let months = match quarter {
        1 => ["jan", "feb", "mar"],
        2 => ["apr", "may", "jun"],
        3 => ["jul", "aug", "sep"],
        _ => ["oct", "nov", "dec"],
    };
    months
        .iter()
        .map(|month| PriceIndexObservation::new(year, *month, value))
        .collect()
}

/// A deterministic mixed population spread over several periods and areas
#[must_use]
pub fn synthetic_population(count: usize) -> Vec<SurveyRow> {
    (0..count)
        .map(|i| {
            let status = match i % 5 {
                0 | 1 => EmploymentStatus::Employed,
                2 => EmploymentStatus::Unemployed,
                _ => EmploymentStatus::Other(3),
            };
            let sex = if i % 2 == 0 { Sex::Male } else { Sex::Female };
            SurveyRow::new(2020 + (i % 3) as i32, (i % 4) as u8 + 1, [31, 32, 2][i % 3])
                .with_age((i % 80) as i64)
                .with_status(status)
                .with_sex(sex)
                .with_individual_weight(50.0 + (i % 17) as f64)
                .with_household_weight(10.0 + (i % 7) as f64)
                .with_household_income(1000.0 + (i % 101) as f64 * 10.0)
        })
        .collect()
}

/// Build a survey batch with the native column names
///
/// `income` is a string column so unparseable entries like `"N/A"` can be
/// expressed the way they arrive from the source files.
pub fn survey_batch(
    rows: &[(i64, i64, i64, i64, i64, i64, f64, f64, &str)],
) -> anyhow::Result<RecordBatch> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("ANO4", DataType::Int64, true),
        Field::new("TRIMESTRE", DataType::Int64, true),
        Field::new("AGLOMERADO", DataType::Int64, true),
        Field::new("CH06", DataType::Int64, true),
        Field::new("CH04", DataType::Int64, true),
        Field::new("ESTADO", DataType::Int64, true),
        Field::new("PONDERA", DataType::Float64, true),
        Field::new("PONDIH", DataType::Float64, true),
        Field::new("ITF", DataType::Utf8, true),
    ]));

    let ints = |values: Vec<i64>| -> ArrayRef { Arc::new(Int64Array::from(values)) };
    let columns: Vec<ArrayRef> = vec![
        ints(rows.iter().map(|r| r.0).collect()),
        ints(rows.iter().map(|r| r.1).collect()),
        ints(rows.iter().map(|r| r.2).collect()),
        ints(rows.iter().map(|r| r.3).collect()),
        ints(rows.iter().map(|r| r.4).collect()),
        ints(rows.iter().map(|r| r.5).collect()),
        Arc::new(Float64Array::from(rows.iter().map(|r| r.6).collect::<Vec<_>>())),
        Arc::new(Float64Array::from(rows.iter().map(|r| r.7).collect::<Vec<_>>())),
        Arc::new(StringArray::from(rows.iter().map(|r| r.8).collect::<Vec<_>>())),
    ];

    Ok(RecordBatch::try_new(schema, columns)?)
}

/// Build a price-index batch with the native column names
pub fn price_batch(rows: &[(i64, &str, f64)]) -> anyhow::Result<RecordBatch> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("ANIO", DataType::Int64, true),
        Field::new("MES", DataType::Utf8, true),
        Field::new("INDICE", DataType::Float64, true),
    ]));
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(rows.iter().map(|r| r.0).collect::<Vec<_>>())),
        Arc::new(StringArray::from(rows.iter().map(|r| r.1).collect::<Vec<_>>())),
        Arc::new(Float64Array::from(rows.iter().map(|r| r.2).collect::<Vec<_>>())),
    ];
    Ok(RecordBatch::try_new(schema, columns)?)
}
