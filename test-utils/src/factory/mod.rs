//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::create_administrator(&db).await?;
//! let vehicles = factory::create_vehicles(&db, 25).await?;
//! ```

pub mod administrator;
pub mod helpers;
pub mod vehicle;

pub use administrator::create_administrator;
pub use vehicle::{create_vehicle, create_vehicles};
