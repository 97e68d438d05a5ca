use serde::Serialize;

use crate::config::PredictorConfig;
use crate::encoder::{derive, encode};
use crate::error::PredictorError;
use crate::model::{Regressor, TorchRegressor};
use crate::schema::FeatureSchema;
use crate::types::RawInput;

/// One completed estimation: the predicted price, the cosmetic confidence
/// figure, and an echo of what was asked.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    pub price: f64,
    pub confidence: f64,
    pub input: RawInput,
    pub age: i32,
    pub km_per_year: f32,
}

/// Immutable process-lifetime handle over the loaded artifacts.
///
/// Built once at startup and shared read-only; every request goes through
/// [`Predictor::estimate`] and touches no mutable state.
pub struct Predictor {
    model: Box<dyn Regressor>,
    schema: FeatureSchema,
    reference_year: i32,
}

impl Predictor {
    pub fn new(model: Box<dyn Regressor>, schema: FeatureSchema, reference_year: i32) -> Self {
        Self {
            model,
            schema,
            reference_year,
        }
    }

    /// Load both artifacts from disk. Any failure here disables the
    /// prediction feature for the whole process.
    pub fn load(cfg: &PredictorConfig) -> Result<Self, PredictorError> {
        let schema = FeatureSchema::load(&cfg.schema_path)?;
        let model = TorchRegressor::load(&cfg.model_path, schema.len())?;
        Ok(Self::new(Box::new(model), schema, cfg.reference_year))
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// One all-zero forward so the first real request pays no first-call
    /// initialization cost.
    pub fn warmup(&self) -> Result<(), PredictorError> {
        self.model
            .predict(&vec![0.0; self.schema.len()])
            .map_err(|e| PredictorError::PredictionFailed(e.to_string()))?;
        Ok(())
    }

    /// Validate, encode, and run one prediction. Stateless per request; a
    /// failure is terminal for this request only.
    pub fn estimate(&self, raw: &RawInput) -> Result<Estimate, PredictorError> {
        raw.validate()?;
        let derived = derive(raw, self.reference_year)?;
        let encoded = encode(raw, &self.schema, self.reference_year)?;

        let price = self
            .model
            .predict(encoded.as_slice())
            .map_err(|e| PredictorError::PredictionFailed(e.to_string()))?;

        Ok(Estimate {
            price,
            confidence: confidence(derived.age, raw.mileage),
            input: *raw,
            age: derived.age,
            km_per_year: derived.km_per_year,
        })
    }
}

/// Display-only confidence percentage: older, higher-mileage cars score
/// lower, clamped to [70, 95]. A presentation heuristic with no statistical
/// relation to the model; never treat it as calibrated uncertainty.
pub fn confidence(age: i32, mileage: i32) -> f64 {
    (100.0 - (age as f64 * 0.5 + mileage as f64 / 10_000.0)).clamp(70.0, 95.0)
}
