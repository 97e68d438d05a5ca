use std::path::Path;

use anyhow::{bail, Result};
use tch::{kind::Kind, CModule, Device, Tensor};

use crate::error::PredictorError;

/// Anything that turns an ordered feature vector into a price.
///
/// The production implementation is [`TorchRegressor`]; tests substitute a
/// stub so the encoding pipeline can be exercised without an artifact file.
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &[f32]) -> Result<f64>;
}

/// TorchScript regression model, CPU only, loaded once per process.
pub struct TorchRegressor {
    model: CModule,
    device: Device,
    in_dim: usize,
}

impl TorchRegressor {
    /// Load the serialized model and probe it with a dummy forward so a
    /// broken artifact fails at startup instead of on the first request.
    pub fn load(model_path: &Path, in_dim: usize) -> Result<Self, PredictorError> {
        let device = Device::Cpu;

        if !model_path.exists() {
            return Err(PredictorError::ArtifactNotFound {
                path: model_path.to_path_buf(),
                reason: "no such file".to_string(),
            });
        }

        let model = CModule::load_on_device(model_path, device).map_err(|e| {
            PredictorError::ArtifactNotFound {
                path: model_path.to_path_buf(),
                reason: format!("failed to load TorchScript: {}", e),
            }
        })?;

        let regressor = Self {
            model,
            device,
            in_dim,
        };

        regressor
            .forward(&vec![0.0; in_dim])
            .map_err(|e| PredictorError::ArtifactNotFound {
                path: model_path.to_path_buf(),
                reason: format!("model probe failed: {}", e),
            })?;

        Ok(regressor)
    }

    fn forward(&self, features: &[f32]) -> Result<f64> {
        if features.len() != self.in_dim {
            bail!(
                "feature length mismatch: got {}, expected {}",
                features.len(),
                self.in_dim
            );
        }

        let input = Tensor::from_slice(features)
            .reshape([1, self.in_dim as i64])
            .to_device(self.device);

        // Forward: expect one scalar back, whatever the exact output rank.
        let out = self.model.forward_ts(&[input])?.squeeze();
        if out.numel() != 1 {
            bail!("unexpected model output shape: {:?}", out.size());
        }

        Ok(out.to_kind(Kind::Double).double_value(&[]))
    }
}

impl Regressor for TorchRegressor {
    fn predict(&self, features: &[f32]) -> Result<f64> {
        self.forward(features)
    }
}
