use crate::server::{
    data::vehicle::VehicleRepository,
    model::{
        page::Page,
        vehicle::{CreateVehicleParam, Vehicle, VehicleFilter},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_id;
mod list_page;
mod update;

fn names(vehicles: &[Vehicle]) -> Vec<&str> {
    vehicles.iter().map(|v| v.name.as_str()).collect()
}
