//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules such as existence checks
//! - **Orchestration**: Coordinating repository calls with hashing and token issuance
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod administrator;
pub mod password;
pub mod token;
pub mod vehicle;
