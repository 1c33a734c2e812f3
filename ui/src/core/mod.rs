pub mod dataset;
pub mod error;
pub mod format;
pub mod platform;
pub mod query;
pub mod selection;
pub mod views;
