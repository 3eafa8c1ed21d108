//! Database repository layer.
//!
//! [`crud::CrudRepository`] provides get, paged listing, search, create, update
//! and remove for any entity. The entity specific repositories add upserts for
//! the import, eager loading for detail views and maintenance of the
//! station-species association. Repositories return domain models from
//! `server::model` except for the generic layer, which works on entity models.

pub mod crud;
pub mod data_source;
pub mod search;
pub mod species;
pub mod station;
pub mod user;

#[cfg(test)]
mod test;
