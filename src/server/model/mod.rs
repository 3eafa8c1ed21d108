//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! input from controllers into services.

pub mod data_source;
pub mod import;
pub mod pagination;
pub mod search;
pub mod species;
pub mod station;
pub mod user;
