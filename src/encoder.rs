use std::collections::HashMap;

use crate::error::PredictorError;
use crate::schema::{col, FeatureSchema};
use crate::types::RawInput;

/// Features computed from the submission rather than entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFeatures {
    pub age: i32,
    pub km_per_year: f32,
}

/// Compute vehicle age and average yearly mileage.
///
/// `km_per_year` divides by `max(age, 1)` so a current-year car (age 0) uses
/// a one-year denominator instead of dividing by zero.
pub fn derive(raw: &RawInput, reference_year: i32) -> Result<DerivedFeatures, PredictorError> {
    let age = reference_year - raw.year;
    let km_per_year = raw.mileage as f32 / age.max(1) as f32;
    if !km_per_year.is_finite() {
        return Err(PredictorError::ComputationError(format!(
            "km_per_year is not finite for mileage={} age={}",
            raw.mileage, age
        )));
    }
    Ok(DerivedFeatures { age, km_per_year })
}

/// Fully populated numeric input to the model, projected in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedVector {
    values: Vec<f32>,
}

impl EncodedVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Encode one submission against the trained column contract.
///
/// Seeds the five numeric entries under their schema names, sets the looked-up
/// indicator column of each categorical selection to 1 and every other column
/// to 0, then projects the result in exact schema order. The output always
/// has one value per schema column.
pub fn encode(
    raw: &RawInput,
    schema: &FeatureSchema,
    reference_year: i32,
) -> Result<EncodedVector, PredictorError> {
    if schema.is_empty() {
        return Err(PredictorError::SchemaUnavailable);
    }

    let derived = derive(raw, reference_year)?;

    let mut numeric: HashMap<&str, f32> = HashMap::with_capacity(5);
    numeric.insert(col::YEAR, raw.year as f32);
    numeric.insert(col::MILEAGE, raw.mileage as f32);
    numeric.insert(col::HORSEPOWER, raw.horsepower as f32);
    numeric.insert(col::AGE, derived.age as f32);
    numeric.insert(col::KM_PER_YEAR, derived.km_per_year);

    let selected = [
        schema.one_hot_column(raw.brand.label()),
        schema.one_hot_column(raw.fuel.label()),
        schema.one_hot_column(raw.transmission.label()),
        schema.one_hot_column(raw.body_type.label()),
    ];

    let mut values = Vec::with_capacity(schema.len());
    for (i, name) in schema.columns().iter().enumerate() {
        let v = match numeric.get(name.as_str()) {
            Some(&n) => n,
            None if selected.contains(&Some(i)) => 1.0,
            None => 0.0,
        };
        values.push(v);
    }

    Ok(EncodedVector { values })
}
