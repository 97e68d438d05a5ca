/// Integration tests for the feature encoder.
///
/// Run with: cargo test --test encoder_tests -- --nocapture
use car_price_predictor::{
    encode,
    schema::{col, NUMERIC_COLUMNS},
    BodyType, Brand, FeatureSchema, Fuel, PredictorError, RawInput, Transmission,
};

const REFERENCE_YEAR: i32 = 2023;

/// Full trained schema: the five numeric columns followed by one indicator
/// column per category value, prefixed by its group.
fn full_schema() -> FeatureSchema {
    let mut columns: Vec<String> = NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect();
    columns.extend(Brand::ALL.iter().map(|b| format!("brand_{}", b.label())));
    columns.extend(Fuel::ALL.iter().map(|f| format!("fuel_{}", f.label())));
    columns.extend(
        Transmission::ALL
            .iter()
            .map(|t| format!("transmission_{}", t.label())),
    );
    columns.extend(BodyType::ALL.iter().map(|b| format!("body_{}", b.label())));
    FeatureSchema::from_columns(columns).expect("full schema should have no collisions")
}

fn sample_input() -> RawInput {
    RawInput {
        brand: Brand::Toyota,
        year: 2018,
        mileage: 50_000,
        horsepower: 150,
        fuel: Fuel::Gasoline,
        transmission: Transmission::Automatic,
        body_type: BodyType::Sedan,
    }
}

fn value_of(schema: &FeatureSchema, values: &[f32], name: &str) -> f32 {
    let idx = schema
        .position(name)
        .unwrap_or_else(|| panic!("column {:?} missing from schema", name));
    values[idx]
}

#[test]
fn test_schema_conformance() {
    let schema = full_schema();
    let encoded = encode(&sample_input(), &schema, REFERENCE_YEAR).unwrap();

    // One value per schema column, projected in schema order.
    assert_eq!(encoded.len(), schema.len(), "vector/schema length mismatch");

    // The numeric entries land at the positions their schema names occupy.
    let values = encoded.as_slice();
    assert_eq!(value_of(&schema, values, col::YEAR), 2018.0);
    assert_eq!(value_of(&schema, values, col::MILEAGE), 50_000.0);
    assert_eq!(value_of(&schema, values, col::HORSEPOWER), 150.0);
}

#[test]
fn test_numeric_derivation() {
    let schema = full_schema();

    // Current-year car: age 0, guarded division uses a one-year denominator.
    let mut raw = sample_input();
    raw.year = 2023;
    raw.mileage = 12_000;
    let encoded = encode(&raw, &schema, REFERENCE_YEAR).unwrap();
    let values = encoded.as_slice();
    assert_eq!(value_of(&schema, values, col::AGE), 0.0);
    assert_eq!(value_of(&schema, values, col::KM_PER_YEAR), 12_000.0);

    // Oldest allowed car.
    raw.year = 2000;
    raw.mileage = 46_000;
    let encoded = encode(&raw, &schema, REFERENCE_YEAR).unwrap();
    let values = encoded.as_slice();
    assert_eq!(value_of(&schema, values, col::AGE), 23.0);
    assert_eq!(value_of(&schema, values, col::KM_PER_YEAR), 2_000.0);
}

#[test]
fn test_one_hot_exclusivity_full_grid() {
    let schema = full_schema();
    let categorical_start = NUMERIC_COLUMNS.len();

    for &brand in &Brand::ALL {
        for &fuel in &Fuel::ALL {
            for &transmission in &Transmission::ALL {
                for &body_type in &BodyType::ALL {
                    let raw = RawInput {
                        brand,
                        year: 2015,
                        mileage: 80_000,
                        horsepower: 120,
                        fuel,
                        transmission,
                        body_type,
                    };
                    let encoded = encode(&raw, &schema, REFERENCE_YEAR).unwrap();
                    let values = encoded.as_slice();

                    // Exactly the four selected indicator columns are hot.
                    let ones: Vec<&String> = schema.columns()[categorical_start..]
                        .iter()
                        .zip(&values[categorical_start..])
                        .filter(|(_, &v)| v != 0.0)
                        .map(|(c, _)| c)
                        .collect();
                    assert_eq!(
                        ones.len(),
                        4,
                        "expected 4 hot columns for {:?}, got {:?}",
                        raw,
                        ones
                    );

                    for expected in [
                        format!("brand_{}", brand.label()),
                        format!("fuel_{}", fuel.label()),
                        format!("transmission_{}", transmission.label()),
                        format!("body_{}", body_type.label()),
                    ] {
                        assert_eq!(
                            value_of(&schema, values, &expected),
                            1.0,
                            "column {:?} not set for {:?}",
                            expected,
                            raw
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_idempotence() {
    let schema = full_schema();
    let raw = sample_input();
    let first = encode(&raw, &schema, REFERENCE_YEAR).unwrap();
    let second = encode(&raw, &schema, REFERENCE_YEAR).unwrap();
    assert_eq!(first, second, "same input must encode bit-identically");
}

#[test]
fn test_zero_mileage_new_car_has_zero_km_per_year() {
    let schema = full_schema();
    let mut raw = sample_input();
    raw.year = 2023;
    raw.mileage = 0;
    let encoded = encode(&raw, &schema, REFERENCE_YEAR).unwrap();
    let values = encoded.as_slice();
    assert_eq!(value_of(&schema, values, col::AGE), 0.0);
    assert_eq!(value_of(&schema, values, col::KM_PER_YEAR), 0.0);
}

#[test]
fn test_empty_schema_is_unavailable() {
    let schema = FeatureSchema::from_columns(Vec::new()).unwrap();
    let err = encode(&sample_input(), &schema, REFERENCE_YEAR).unwrap_err();
    assert!(
        matches!(err, PredictorError::SchemaUnavailable),
        "expected SchemaUnavailable, got {:?}",
        err
    );
}

#[test]
fn test_untrained_value_encodes_all_zero_for_its_group() {
    // Schema trained without any Hybrid column: selecting Hybrid leaves the
    // whole fuel group at zero instead of failing.
    let columns = vec![
        col::YEAR.to_string(),
        "fuel_Gasoline".to_string(),
        "fuel_Diesel".to_string(),
        "brand_Toyota".to_string(),
    ];
    let schema = FeatureSchema::from_columns(columns).unwrap();

    let mut raw = sample_input();
    raw.fuel = Fuel::Hybrid;
    let encoded = encode(&raw, &schema, REFERENCE_YEAR).unwrap();
    let values = encoded.as_slice();

    assert_eq!(value_of(&schema, values, "fuel_Gasoline"), 0.0);
    assert_eq!(value_of(&schema, values, "fuel_Diesel"), 0.0);
    assert_eq!(value_of(&schema, values, "brand_Toyota"), 1.0);
}
