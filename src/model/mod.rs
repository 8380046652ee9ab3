//! Request and response shapes exchanged over the HTTP API.

pub mod administrator;
pub mod api;
pub mod profile;
pub mod vehicle;
