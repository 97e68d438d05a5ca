use serde::{Deserialize, Serialize};

use crate::error::PredictorError;

pub const YEAR_RANGE: (i32, i32) = (2000, 2023);
pub const MILEAGE_RANGE: (i32, i32) = (0, 200_000);
pub const HORSEPOWER_RANGE: (i32, i32) = (50, 500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Toyota,
    Honda,
    Ford,
    #[serde(rename = "BMW")]
    Bmw,
    Mercedes,
    Audi,
    Hyundai,
    Nissan,
}

impl Brand {
    pub const ALL: [Brand; 8] = [
        Brand::Toyota,
        Brand::Honda,
        Brand::Ford,
        Brand::Bmw,
        Brand::Mercedes,
        Brand::Audi,
        Brand::Hyundai,
        Brand::Nissan,
    ];

    /// Label as it appears inside trained indicator column names.
    pub fn label(self) -> &'static str {
        match self {
            Brand::Toyota => "Toyota",
            Brand::Honda => "Honda",
            Brand::Ford => "Ford",
            Brand::Bmw => "BMW",
            Brand::Mercedes => "Mercedes",
            Brand::Audi => "Audi",
            Brand::Hyundai => "Hyundai",
            Brand::Nissan => "Nissan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fuel {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

impl Fuel {
    pub const ALL: [Fuel; 4] = [Fuel::Gasoline, Fuel::Diesel, Fuel::Hybrid, Fuel::Electric];

    pub fn label(self) -> &'static str {
        match self {
            Fuel::Gasoline => "Gasoline",
            Fuel::Diesel => "Diesel",
            Fuel::Hybrid => "Hybrid",
            Fuel::Electric => "Electric",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub const ALL: [Transmission; 2] = [Transmission::Manual, Transmission::Automatic];

    pub fn label(self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Compact,
    Wagon,
    Coupe,
}

impl BodyType {
    pub const ALL: [BodyType; 5] = [
        BodyType::Sedan,
        BodyType::Suv,
        BodyType::Compact,
        BodyType::Wagon,
        BodyType::Coupe,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BodyType::Sedan => "Sedan",
            BodyType::Suv => "SUV",
            BodyType::Compact => "Compact",
            BodyType::Wagon => "Wagon",
            BodyType::Coupe => "Coupe",
        }
    }
}

/// One user submission. Ephemeral; a fresh value is built per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub brand: Brand,
    pub year: i32,
    pub mileage: i32,
    pub horsepower: i32,
    pub fuel: Fuel,
    pub transmission: Transmission,
    pub body_type: BodyType,
}

impl RawInput {
    /// Range check on the numeric fields. The enums are closed by
    /// construction, so only year/mileage/horsepower can be out of bounds.
    pub fn validate(&self) -> Result<(), PredictorError> {
        check_range("year", self.year, YEAR_RANGE)?;
        check_range("mileage", self.mileage, MILEAGE_RANGE)?;
        check_range("horsepower", self.horsepower, HORSEPOWER_RANGE)?;
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: i32,
    (min, max): (i32, i32),
) -> Result<(), PredictorError> {
    if value < min || value > max {
        return Err(PredictorError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
