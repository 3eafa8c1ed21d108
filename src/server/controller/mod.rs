//! HTTP request handlers.
//!
//! Handlers parse query strings and bodies, check access through
//! [`AuthGuard`](crate::server::middleware::auth::AuthGuard), call a service
//! and convert the result into DTOs.

pub mod data_source;
pub mod docs;
pub mod login;
pub mod species;
pub mod station;
pub mod user;

#[cfg(test)]
mod test;
