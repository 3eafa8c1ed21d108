//! Species factory for creating test name-resolution records.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test species with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let species = SpeciesFactory::new(&db, data_source.id)
///     .matched_canonical_full_name("Aega psora")
///     .current_canonical_simple_name("Aega psora")
///     .build()
///     .await?;
/// ```
pub struct SpeciesFactory<'a> {
    db: &'a DatabaseConnection,
    data_source_id: i32,
    id: String,
    record_id: String,
    matched_name: String,
    matched_canonical_full_name: Option<String>,
    current_name: Option<String>,
    current_canonical_simple_name: Option<String>,
    common_name: Option<String>,
}

impl<'a> SpeciesFactory<'a> {
    /// Creates a new SpeciesFactory with default values.
    ///
    /// Defaults:
    /// - id / record_id: `"species_{id}"` / `"record_{id}"`
    /// - matched_name, matched_canonical_full_name, current_name: `"Genus species{id}"`
    /// - current_canonical_simple_name: `"Genus species{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `data_source_id` - ID of an existing data source
    pub fn new(db: &'a DatabaseConnection, data_source_id: i32) -> Self {
        let id = next_id();
        let name = format!("Genus species{}", id);
        Self {
            db,
            data_source_id,
            id: format!("species_{}", id),
            record_id: format!("record_{}", id),
            matched_name: name.clone(),
            matched_canonical_full_name: Some(name.clone()),
            current_name: Some(name.clone()),
            current_canonical_simple_name: Some(name),
            common_name: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn record_id(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = record_id.into();
        self
    }

    pub fn matched_name(mut self, name: impl Into<String>) -> Self {
        self.matched_name = name.into();
        self
    }

    pub fn matched_canonical_full_name(mut self, name: impl Into<String>) -> Self {
        self.matched_canonical_full_name = Some(name.into());
        self
    }

    pub fn current_name(mut self, name: impl Into<String>) -> Self {
        self.current_name = Some(name.into());
        self
    }

    /// Sets the canonical simple name; `None` models an unresolved record.
    pub fn current_canonical_simple_name(mut self, name: Option<&str>) -> Self {
        self.current_canonical_simple_name = name.map(str::to_string);
        self
    }

    pub fn common_name(mut self, name: impl Into<String>) -> Self {
        self.common_name = Some(name.into());
        self
    }

    /// Builds and inserts the species entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::species::Model)` - Created species entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::species::Model, DbErr> {
        entity::species::ActiveModel {
            id: ActiveValue::Set(self.id),
            record_id: ActiveValue::Set(self.record_id.clone()),
            current_record_id: ActiveValue::Set(Some(self.record_id)),
            matched_name: ActiveValue::Set(self.matched_name),
            matched_canonical_simple_name: ActiveValue::Set(None),
            matched_canonical_full_name: ActiveValue::Set(self.matched_canonical_full_name),
            current_name: ActiveValue::Set(self.current_name),
            current_canonical_simple_name: ActiveValue::Set(self.current_canonical_simple_name),
            current_canonical_full_name: ActiveValue::Set(None),
            common_name: ActiveValue::Set(self.common_name),
            classification_path: ActiveValue::Set(None),
            classification_ranks: ActiveValue::Set(None),
            classification_ids: ActiveValue::Set(None),
            outlink: ActiveValue::Set(None),
            data_source_id: ActiveValue::Set(self.data_source_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a species with default values.
///
/// Shorthand for `SpeciesFactory::new(db, data_source_id).build().await`.
pub async fn create_species(
    db: &DatabaseConnection,
    data_source_id: i32,
) -> Result<entity::species::Model, DbErr> {
    SpeciesFactory::new(db, data_source_id).build().await
}

/// Creates a synonym for a species.
///
/// # Arguments
/// - `db` - Database connection
/// - `species_id` - ID of an existing species
/// - `scientific_name` - Synonymous scientific name
pub async fn create_synonym(
    db: &DatabaseConnection,
    species_id: &str,
    scientific_name: &str,
) -> Result<entity::species_synonym::Model, DbErr> {
    entity::species_synonym::ActiveModel {
        id: ActiveValue::Set(format!("synonym_{}", next_id())),
        scientific_name: ActiveValue::Set(Some(scientific_name.to_string())),
        outlink: ActiveValue::Set(None),
        species_id: ActiveValue::Set(species_id.to_string()),
    }
    .insert(db)
    .await
}

/// Creates a common name for a species.
///
/// # Arguments
/// - `db` - Database connection
/// - `species_id` - ID of an existing species
/// - `language` - Language of the common name
/// - `name` - The common name
pub async fn create_common_name(
    db: &DatabaseConnection,
    species_id: &str,
    language: &str,
    name: &str,
) -> Result<entity::species_common_name::Model, DbErr> {
    entity::species_common_name::ActiveModel {
        id: ActiveValue::Set(format!("common_name_{}", next_id())),
        language: ActiveValue::Set(language.to_string()),
        name: ActiveValue::Set(name.to_string()),
        species_id: ActiveValue::Set(species_id.to_string()),
    }
    .insert(db)
    .await
}
