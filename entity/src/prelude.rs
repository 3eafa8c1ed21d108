pub use super::data_source::Entity as DataSource;
pub use super::species::Entity as Species;
pub use super::species_common_name::Entity as SpeciesCommonName;
pub use super::species_extra::Entity as SpeciesExtra;
pub use super::species_synonym::Entity as SpeciesSynonym;
pub use super::station::Entity as Station;
pub use super::station_species::Entity as StationSpecies;
pub use super::user::Entity as User;
