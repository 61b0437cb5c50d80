//! Products

pub mod errors;
mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;
