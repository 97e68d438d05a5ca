// Used-car resale price estimation over a pre-trained regression artifact.
// The core contract is feature-vector reconstruction: raw user attributes
// are re-encoded into the exact ordered, one-hot numeric vector the model
// was trained on, then run through a single forward pass.

pub mod config;
pub mod encoder;
pub mod error;
pub mod history;
pub mod model;
pub mod predict;
pub mod schema;
pub mod types;

pub use config::PredictorConfig;
pub use encoder::{derive, encode, DerivedFeatures, EncodedVector};
pub use error::PredictorError;
pub use model::{Regressor, TorchRegressor};
pub use predict::{Estimate, Predictor};
pub use schema::FeatureSchema;
pub use types::{BodyType, Brand, Fuel, RawInput, Transmission};
