pub use super::administrator::Entity as Administrator;
pub use super::vehicle::Entity as Vehicle;
