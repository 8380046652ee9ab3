pub mod administrator;
pub mod home;
pub mod param;
pub mod vehicle;
