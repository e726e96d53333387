pub mod order;
pub mod product;
pub mod profile;
pub mod rider;
pub mod timestamp;
