//! Vehicle data repository for database operations.

use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    page::{Page, PAGE_SIZE},
    vehicle::{CreateVehicleParam, Vehicle, VehicleFilter},
};

/// Repository providing database operations for vehicle management.
pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new vehicle.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle with its assigned id
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateVehicleParam) -> Result<Vehicle, DbErr> {
        let entity = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(param.name),
            brand: ActiveValue::Set(param.brand),
            year: ActiveValue::Set(param.year),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Vehicle::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Vehicle::from_entity))
    }

    /// Gets one page of vehicles ordered by id, after applying the filters.
    ///
    /// Name and brand filters are substring matches (`LIKE %value%`) and are
    /// combined with AND. Filtering happens before pagination.
    ///
    /// # Arguments
    /// - `page` - Normalized 1-indexed page; each page holds `PAGE_SIZE` records
    /// - `filter` - Optional name and brand substrings
    ///
    /// # Returns
    /// - `Ok(Vec<Vehicle>)` - Up to `PAGE_SIZE` vehicles, empty past the last page
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_page(&self, page: Page, filter: VehicleFilter) -> Result<Vec<Vehicle>, DbErr> {
        let mut query = entity::prelude::Vehicle::find();

        if let Some(name) = filter.name {
            query = query.filter(entity::vehicle::Column::Name.like(contains_pattern(&name)));
        }
        if let Some(brand) = filter.brand {
            query = query.filter(entity::vehicle::Column::Brand.like(contains_pattern(&brand)));
        }

        let entities = query
            .order_by_asc(entity::vehicle::Column::Id)
            .offset(page.offset())
            .limit(PAGE_SIZE)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Persists every field of an existing vehicle.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The stored vehicle after the update
    /// - `Err(DbErr::RecordNotFound)` - No vehicle exists with that id
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn update(&self, vehicle: Vehicle) -> Result<Vehicle, DbErr> {
        let existing = entity::prelude::Vehicle::find_by_id(vehicle.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Vehicle with id {} not found",
                vehicle.id
            )))?;

        let mut active_model: entity::vehicle::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(vehicle.name);
        active_model.brand = ActiveValue::Set(vehicle.brand);
        active_model.year = ActiveValue::Set(vehicle.year);

        let entity = active_model.update(self.db).await?;

        Ok(Vehicle::from_entity(entity))
    }

    /// Deletes a vehicle.
    ///
    /// # Returns
    /// - `Ok(())` - Vehicle deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Vehicle::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

const LIKE_ESCAPE: char = '\\';

/// `LIKE` pattern matching any value containing `value` literally.
fn contains_pattern(value: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }

    LikeExpr::new(format!("%{}%", escaped)).escape(LIKE_ESCAPE)
}
