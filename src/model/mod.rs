//! Request and response DTOs shared by the HTTP API.
//!
//! These types describe the JSON wire format only. Domain conversions live in
//! `server::model`.

pub mod api;
pub mod data_source;
pub mod pagination;
pub mod search;
pub mod species;
pub mod station;
pub mod user;
