//! SeaORM entity definitions for the expedition database.

pub mod prelude;

pub mod data_source;
pub mod species;
pub mod species_common_name;
pub mod species_extra;
pub mod species_synonym;
pub mod station;
pub mod station_species;
pub mod user;
