use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PredictorError;
use crate::types::{BodyType, Brand, Fuel, Transmission};

/// Schema-defined names of the five numeric feature columns.
pub mod col {
    pub const YEAR: &str = "year";
    pub const MILEAGE: &str = "mileage";
    pub const HORSEPOWER: &str = "horsepower";
    pub const AGE: &str = "age";
    pub const KM_PER_YEAR: &str = "km_per_year";
}

pub const NUMERIC_COLUMNS: [&str; 5] = [
    col::YEAR,
    col::MILEAGE,
    col::HORSEPOWER,
    col::AGE,
    col::KM_PER_YEAR,
];

// On-disk layout of the schema artifact, written alongside the model at
// training time.
#[derive(Deserialize)]
struct SchemaJson {
    feature_columns: Vec<String>,
    in_dim: Option<usize>,
}

/// Ordered column-name contract the model was trained against, plus an
/// injective lookup from each category value to its indicator column.
///
/// The lookup replaces per-request substring scanning: it is built once at
/// load by matching each known category label against the non-numeric
/// columns, and construction fails if any label matches more than one column
/// or any column is claimed twice. For every non-colliding schema the encoded
/// output is identical to a naive substring scan; a colliding schema can
/// never set a spurious indicator because it is rejected up front.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    one_hot: HashMap<&'static str, usize>,
}

impl FeatureSchema {
    /// Read and parse the schema artifact. Missing or malformed files are
    /// both `ArtifactNotFound`: either way the contract is unusable.
    pub fn load(path: &Path) -> Result<Self, PredictorError> {
        let text = fs::read_to_string(path).map_err(|e| PredictorError::ArtifactNotFound {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let parsed: SchemaJson =
            serde_json::from_str(&text).map_err(|e| PredictorError::ArtifactNotFound {
                path: path.to_path_buf(),
                reason: format!("invalid schema JSON: {}", e),
            })?;

        if let Some(in_dim) = parsed.in_dim {
            if in_dim != parsed.feature_columns.len() {
                tracing::warn!(
                    "schema in_dim ({}) != feature_columns.len() ({}); using feature_columns.len()",
                    in_dim,
                    parsed.feature_columns.len()
                );
            }
        }

        Self::from_columns(parsed.feature_columns)
    }

    /// Build a schema from an ordered column list. An empty list is accepted
    /// here; encoding against it fails with `SchemaUnavailable`.
    pub fn from_columns(columns: Vec<String>) -> Result<Self, PredictorError> {
        let one_hot = build_one_hot_lookup(&columns)?;
        Ok(Self { columns, one_hot })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of a column by its schema name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Indicator column index for a category value label, if the training
    /// data encoded one. A missing entry means the whole group stays zero
    /// for that selection.
    pub fn one_hot_column(&self, label: &str) -> Option<usize> {
        self.one_hot.get(label).copied()
    }
}

fn known_labels() -> impl Iterator<Item = &'static str> {
    Brand::ALL
        .iter()
        .map(|v| v.label())
        .chain(Fuel::ALL.iter().map(|v| v.label()))
        .chain(Transmission::ALL.iter().map(|v| v.label()))
        .chain(BodyType::ALL.iter().map(|v| v.label()))
}

fn build_one_hot_lookup(
    columns: &[String],
) -> Result<HashMap<&'static str, usize>, PredictorError> {
    let mut lookup = HashMap::new();
    let mut claimed: HashMap<usize, &'static str> = HashMap::new();

    for label in known_labels() {
        let mut candidates = columns.iter().enumerate().filter_map(|(i, c)| {
            if NUMERIC_COLUMNS.contains(&c.as_str()) {
                return None;
            }
            c.contains(label).then_some(i)
        });

        let Some(idx) = candidates.next() else {
            continue;
        };
        if let Some(extra) = candidates.next() {
            return Err(PredictorError::AmbiguousColumn(format!(
                "value {:?} matches both {:?} and {:?}",
                label, columns[idx], columns[extra]
            )));
        }
        if let Some(prev) = claimed.insert(idx, label) {
            return Err(PredictorError::AmbiguousColumn(format!(
                "column {:?} is claimed by both {:?} and {:?}",
                columns[idx], prev, label
            )));
        }
        lookup.insert(label, idx);
    }

    Ok(lookup)
}
