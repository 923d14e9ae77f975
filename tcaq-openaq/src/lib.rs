pub mod error;
pub mod inputs;
pub mod locations;
pub mod monthly;
pub mod payload;
pub mod summary;

#[cfg(feature = "api")]
pub mod api;
