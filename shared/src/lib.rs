//! Marketplace Shared Library
//!
//! This crate contains the domain models, request/response types, and
//! validation rules shared between the backend and any future clients.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;
