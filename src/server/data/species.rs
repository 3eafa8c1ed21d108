//! Species repository.
//!
//! Listing and searching go through [`CrudRepository`](super::crud::CrudRepository).
//! This repository covers the detail view, which needs the satellite tables,
//! and the import upsert.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder};

use crate::server::model::species::{Species, SpeciesDetails, UpsertSpeciesParams};

pub struct SpeciesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a species with its extra status rows, synonyms and common names.
    ///
    /// # Arguments
    /// - `id` - Species id
    ///
    /// # Returns
    /// - `Ok(Some(SpeciesDetails))` - Species with satellite rows ordered by id
    /// - `Ok(None)` - No species with this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_details(&self, id: &str) -> Result<Option<SpeciesDetails>, DbErr> {
        let Some(species) = entity::prelude::Species::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let extra = species
            .find_related(entity::prelude::SpeciesExtra)
            .order_by_asc(entity::species_extra::Column::Id)
            .all(self.db)
            .await?;
        let synonyms = species
            .find_related(entity::prelude::SpeciesSynonym)
            .order_by_asc(entity::species_synonym::Column::Id)
            .all(self.db)
            .await?;
        let common_names = species
            .find_related(entity::prelude::SpeciesCommonName)
            .order_by_asc(entity::species_common_name::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(SpeciesDetails::from_with_relations(
            species,
            extra,
            synonyms,
            common_names,
        )))
    }

    /// Inserts a species or refreshes the resolver columns of an existing one.
    ///
    /// `common_name` is not part of the resolver output and keeps its stored
    /// value on conflict.
    pub async fn upsert(&self, params: UpsertSpeciesParams) -> Result<Species, DbErr> {
        use entity::species::Column;

        let entity = entity::prelude::Species::insert(entity::species::ActiveModel {
            id: ActiveValue::Set(params.id),
            record_id: ActiveValue::Set(params.record_id),
            current_record_id: ActiveValue::Set(params.current_record_id),
            matched_name: ActiveValue::Set(params.matched_name),
            matched_canonical_simple_name: ActiveValue::Set(params.matched_canonical_simple_name),
            matched_canonical_full_name: ActiveValue::Set(params.matched_canonical_full_name),
            current_name: ActiveValue::Set(params.current_name),
            current_canonical_simple_name: ActiveValue::Set(params.current_canonical_simple_name),
            current_canonical_full_name: ActiveValue::Set(params.current_canonical_full_name),
            common_name: ActiveValue::Set(None),
            classification_path: ActiveValue::Set(params.classification_path),
            classification_ranks: ActiveValue::Set(params.classification_ranks),
            classification_ids: ActiveValue::Set(params.classification_ids),
            outlink: ActiveValue::Set(params.outlink),
            data_source_id: ActiveValue::Set(params.data_source_id),
        })
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::RecordId,
                    Column::CurrentRecordId,
                    Column::MatchedName,
                    Column::MatchedCanonicalSimpleName,
                    Column::MatchedCanonicalFullName,
                    Column::CurrentName,
                    Column::CurrentCanonicalSimpleName,
                    Column::CurrentCanonicalFullName,
                    Column::ClassificationPath,
                    Column::ClassificationRanks,
                    Column::ClassificationIds,
                    Column::Outlink,
                    Column::DataSourceId,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Species::from_entity(entity))
    }
}
