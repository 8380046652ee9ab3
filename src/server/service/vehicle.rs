use sea_orm::DatabaseConnection;

use crate::server::{
    data::vehicle::VehicleRepository,
    error::AppError,
    model::{
        page::Page,
        vehicle::{CreateVehicleParam, UpdateVehicleParam, Vehicle, VehicleFilter},
    },
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateVehicleParam) -> Result<Vehicle, AppError> {
        let vehicle = VehicleRepository::new(self.db).create(param).await?;

        Ok(vehicle)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = VehicleRepository::new(self.db).find_by_id(id).await?;

        Ok(vehicle)
    }

    /// Gets one page of vehicles matching the filter
    pub async fn list_page(
        &self,
        page: Page,
        filter: VehicleFilter,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = VehicleRepository::new(self.db)
            .list_page(page, filter)
            .await?;

        Ok(vehicles)
    }

    /// Replaces every field of a vehicle
    /// Returns None if the vehicle doesn't exist
    pub async fn update(&self, param: UpdateVehicleParam) -> Result<Option<Vehicle>, AppError> {
        let repo = VehicleRepository::new(self.db);

        if repo.find_by_id(param.id).await?.is_none() {
            return Ok(None);
        }

        let vehicle = repo
            .update(Vehicle {
                id: param.id,
                name: param.name,
                brand: param.brand,
                year: param.year,
            })
            .await?;

        Ok(Some(vehicle))
    }

    /// Deletes a vehicle
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = VehicleRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
