pub mod config;
pub mod dataset;
pub mod logging;
pub mod store;
pub mod view;
