//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They work with
//! domain models from `server::model`, enforce rules such as unique emails
//! and run the one-shot data import.

pub mod auth;
pub mod data_source;
pub mod import;
pub mod species;
pub mod station;
pub mod user;
