use std::path::PathBuf;

/// Epoch of the training data. `age` is measured against this year, not the
/// wall clock, so predictions stay consistent with what the model saw during
/// training. Override with REFERENCE_YEAR if the artifact is retrained.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2023;

pub const DEFAULT_MODEL_PATH: &str = "artifacts/price_model.pt";
pub const DEFAULT_SCHEMA_PATH: &str = "artifacts/feature_columns.json";

#[derive(Debug, Clone)]
pub struct PredictorConfig {
    pub model_path: PathBuf,
    pub schema_path: PathBuf,
    pub reference_year: i32,
    pub port: u16,
}

impl PredictorConfig {
    pub fn from_env() -> Self {
        let model_path = std::env::var("MODEL_PATH")
            .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
            .into();
        let schema_path = std::env::var("SCHEMA_PATH")
            .unwrap_or_else(|_| DEFAULT_SCHEMA_PATH.to_string())
            .into();
        let reference_year = std::env::var("REFERENCE_YEAR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_REFERENCE_YEAR);
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        Self {
            model_path,
            schema_path,
            reference_year,
            port,
        }
    }
}
