//! Vehicle API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the vehicle
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting administrators and vehicles with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Vehicle;
//!
//! #[tokio::test]
//! async fn test_vehicle_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Vehicle)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
