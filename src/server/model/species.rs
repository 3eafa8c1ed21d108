//! Species domain models and parameters.
//!
//! A species record is the best match returned by the name resolver for a name
//! transcribed from the expedition report. Extra status, synonyms and common
//! names live in satellite tables and are only loaded for the detail view.

use crate::model::species::{
    SpeciesCommonNameDto, SpeciesDto, SpeciesExtraDto, SpeciesSummaryDto, SpeciesSynonymDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub id: String,
    pub record_id: String,
    pub current_record_id: Option<String>,
    pub matched_name: String,
    pub matched_canonical_simple_name: Option<String>,
    pub matched_canonical_full_name: Option<String>,
    pub current_name: Option<String>,
    pub current_canonical_simple_name: Option<String>,
    pub current_canonical_full_name: Option<String>,
    pub common_name: Option<String>,
    pub classification_path: Option<String>,
    pub classification_ranks: Option<String>,
    pub classification_ids: Option<String>,
    pub outlink: Option<String>,
    pub data_source_id: i32,
}

impl Species {
    pub fn from_entity(entity: entity::species::Model) -> Self {
        Self {
            id: entity.id,
            record_id: entity.record_id,
            current_record_id: entity.current_record_id,
            matched_name: entity.matched_name,
            matched_canonical_simple_name: entity.matched_canonical_simple_name,
            matched_canonical_full_name: entity.matched_canonical_full_name,
            current_name: entity.current_name,
            current_canonical_simple_name: entity.current_canonical_simple_name,
            current_canonical_full_name: entity.current_canonical_full_name,
            common_name: entity.common_name,
            classification_path: entity.classification_path,
            classification_ranks: entity.classification_ranks,
            classification_ids: entity.classification_ids,
            outlink: entity.outlink,
            data_source_id: entity.data_source_id,
        }
    }

    /// True when the canonical simple name has a genus and an epithet.
    ///
    /// The canonical simple name carries no authorship, so a bare genus has no
    /// space in it.
    pub fn is_binomial(&self) -> bool {
        self.current_canonical_simple_name
            .as_deref()
            .is_some_and(|name| name.contains(' '))
    }

    pub fn into_summary_dto(self) -> SpeciesSummaryDto {
        SpeciesSummaryDto {
            id: self.id,
            record_id: self.record_id,
            matched_canonical_full_name: self.matched_canonical_full_name,
            current_name: self.current_name,
        }
    }
}

/// Species with its satellite tables.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesDetails {
    pub species: Species,
    pub extra: Vec<entity::species_extra::Model>,
    pub synonyms: Vec<entity::species_synonym::Model>,
    pub common_names: Vec<entity::species_common_name::Model>,
}

impl SpeciesDetails {
    pub fn from_with_relations(
        species: entity::species::Model,
        extra: Vec<entity::species_extra::Model>,
        synonyms: Vec<entity::species_synonym::Model>,
        common_names: Vec<entity::species_common_name::Model>,
    ) -> Self {
        Self {
            species: Species::from_entity(species),
            extra,
            synonyms,
            common_names,
        }
    }

    pub fn into_dto(self) -> SpeciesDto {
        let species = self.species;

        SpeciesDto {
            id: species.id,
            record_id: species.record_id,
            current_record_id: species.current_record_id,
            matched_name: species.matched_name,
            matched_canonical_simple_name: species.matched_canonical_simple_name,
            matched_canonical_full_name: species.matched_canonical_full_name,
            current_name: species.current_name,
            current_canonical_simple_name: species.current_canonical_simple_name,
            current_canonical_full_name: species.current_canonical_full_name,
            common_name: species.common_name,
            classification_path: species.classification_path,
            classification_ranks: species.classification_ranks,
            classification_ids: species.classification_ids,
            outlink: species.outlink,
            data_source_id: species.data_source_id,
            species_extra: self
                .extra
                .into_iter()
                .map(|extra| SpeciesExtraDto {
                    id: extra.id,
                    scientific_name: extra.scientific_name,
                    status: extra.status,
                    unaccepted_reason: extra.unaccepted_reason,
                    valid_name: extra.valid_name,
                    lsid: extra.lsid,
                    is_brackish: extra.is_brackish,
                    is_extinct: extra.is_extinct,
                    is_freshwater: extra.is_freshwater,
                    is_marine: extra.is_marine,
                    is_terrestrial: extra.is_terrestrial,
                    species_id: extra.species_id,
                })
                .collect(),
            species_synonyms: self
                .synonyms
                .into_iter()
                .map(|synonym| SpeciesSynonymDto {
                    id: synonym.id,
                    scientific_name: synonym.scientific_name,
                    outlink: synonym.outlink,
                    species_id: synonym.species_id,
                })
                .collect(),
            species_common_names: self
                .common_names
                .into_iter()
                .map(|common| SpeciesCommonNameDto {
                    id: common.id,
                    language: common.language,
                    name: common.name,
                    species_id: common.species_id,
                })
                .collect(),
        }
    }
}

/// Values written when importing a resolved species name.
#[derive(Debug, Clone)]
pub struct UpsertSpeciesParams {
    pub id: String,
    pub record_id: String,
    pub current_record_id: Option<String>,
    pub matched_name: String,
    pub matched_canonical_simple_name: Option<String>,
    pub matched_canonical_full_name: Option<String>,
    pub current_name: Option<String>,
    pub current_canonical_simple_name: Option<String>,
    pub current_canonical_full_name: Option<String>,
    pub classification_path: Option<String>,
    pub classification_ranks: Option<String>,
    pub classification_ids: Option<String>,
    pub outlink: Option<String>,
    pub data_source_id: i32,
}

/// Query parameters of the fuzzy name match.
#[derive(Debug, Clone)]
pub struct FuzzyMatchParams {
    pub query: String,
    /// Restrict matches to species recorded at this station.
    pub station: Option<String>,
    pub min_string_similarity: f64,
    pub limit: u64,
    pub order_by: Vec<String>,
}
