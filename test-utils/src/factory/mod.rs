//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need a parent row (species need a data
//! source, links need a station and a species) take the parent key as an argument.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let data_source = factory::create_data_source(&db).await?;
//!     let species = factory::create_species(&db, data_source.id).await?;
//!     let station = factory::create_station(&db).await?;
//!     factory::link_station_species(&db, &station.name, &species.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let species = factory::species::SpeciesFactory::new(&db, data_source.id)
//!     .matched_canonical_full_name("Aega psora")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `data_source` - Create data source entities
//! - `species` - Create species entities and their synonyms/common names
//! - `station` - Create station entities and station-species links
//! - `user` - Create user entities
//! - `helpers` - Unique id generation

pub mod data_source;
pub mod helpers;
pub mod species;
pub mod station;
pub mod user;

pub use data_source::create_data_source;
pub use species::{create_common_name, create_species, create_synonym};
pub use station::{create_station, link_station_species};
pub use user::create_user;
