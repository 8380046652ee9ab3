//! Vehicle domain models and parameters.

use crate::{
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    server::error::AppError,
};

/// Earliest model year accepted for a vehicle.
pub const MIN_YEAR: i32 = 1950;

const NAME_REQUIRED: &str = "The NAME field is required.";
const BRAND_REQUIRED: &str = "The BRAND field is required.";
const YEAR_INVALID: &str = "The YEAR field must be a positive number from 1950 onwards.";

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl Vehicle {
    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            brand: self.brand,
            year: self.year,
        }
    }

    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            brand: entity.brand,
            year: entity.year,
        }
    }
}

/// Optional substring filters applied to vehicle listings. Both are ANDed.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub name: Option<String>,
    pub brand: Option<String>,
}

impl VehicleFilter {
    /// Builds a filter, dropping empty strings so they match everything.
    pub fn new(name: Option<String>, brand: Option<String>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            brand: brand.filter(|b| !b.is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVehicleParam {
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl CreateVehicleParam {
    /// Validates a creation payload.
    ///
    /// # Returns
    /// - `Ok(CreateVehicleParam)` - Every field rule passed
    /// - `Err(AppError::Validation)` - One message per failed rule
    pub fn from_dto(dto: CreateVehicleDto) -> Result<Self, AppError> {
        validate_fields(&dto.name, &dto.brand, dto.year)?;

        Ok(Self {
            name: dto.name,
            brand: dto.brand,
            year: dto.year,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateVehicleParam {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl UpdateVehicleParam {
    pub fn from_dto(id: i32, dto: UpdateVehicleDto) -> Result<Self, AppError> {
        validate_fields(&dto.name, &dto.brand, dto.year)?;

        Ok(Self {
            id,
            name: dto.name,
            brand: dto.brand,
            year: dto.year,
        })
    }
}

fn validate_fields(name: &str, brand: &str, year: i32) -> Result<(), AppError> {
    let mut messages = Vec::new();

    if name.is_empty() {
        messages.push(NAME_REQUIRED.to_string());
    }
    if brand.is_empty() {
        messages.push(BRAND_REQUIRED.to_string());
    }
    if year <= 0 || year < MIN_YEAR {
        messages.push(YEAR_INVALID.to_string());
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(messages))
    }
}
