pub mod applications;
pub mod availability;
pub mod booking;
pub mod catalog;
pub mod dashboard;
pub mod profiles;
