//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Operation parameters are only constructed through validating `from_dto` conversions,
//! so a parameter value always satisfies the field rules of its operation.

pub mod administrator;
pub mod page;
pub mod vehicle;
