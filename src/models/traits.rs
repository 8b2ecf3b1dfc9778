//! Conversions between result models and Arrow / JSON tables
//!
//! Result tables are handed to the rendering layer either as Arrow
//! `RecordBatch`es or as JSON arrays. The schema is traced from the model type
//! with `serde_arrow`, so an empty result set still produces a typed, empty
//! batch.

use arrow::datatypes::{FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::error::Result;

/// A flat model that can be exported as a table
pub trait ArrowTable: Serialize + DeserializeOwned + Sized {
    /// Arrow fields for this model
    fn fields() -> Result<Vec<FieldRef>> {
        Ok(Vec::<FieldRef>::from_type::<Self>(
            TracingOptions::default().allow_null_fields(true),
        )?)
    }

    /// Arrow schema for this model
    fn schema() -> Result<Schema> {
        Ok(Schema::new(Self::fields()?))
    }

    /// Convert a slice of models to a `RecordBatch`
    fn to_record_batch(models: &[Self]) -> Result<RecordBatch> {
        let fields = Self::fields()?;
        Ok(serde_arrow::to_record_batch(&fields, &models)?)
    }

    /// Convert a `RecordBatch` produced by [`ArrowTable::to_record_batch`] back to models
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }

    /// Serialize a slice of models as a JSON array
    fn to_json(models: &[Self]) -> Result<String> {
        Ok(serde_json::to_string_pretty(models)?)
    }
}
