//! Request parsing helpers shared by the controllers.

pub mod query;
