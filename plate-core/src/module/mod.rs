pub mod catalog;
pub mod plate;
