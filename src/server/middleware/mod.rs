//! Request guards used by the controllers.

pub mod auth;
