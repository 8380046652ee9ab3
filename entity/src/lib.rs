//! SeaORM entities for the vehicle API.

pub mod prelude;

pub mod administrator;
pub mod vehicle;
