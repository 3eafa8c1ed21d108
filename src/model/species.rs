use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SpeciesSummaryDto {
    pub id: String,
    pub record_id: String,
    pub matched_canonical_full_name: Option<String>,
    pub current_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SpeciesExtraDto {
    pub id: String,
    pub scientific_name: Option<String>,
    pub status: bool,
    pub unaccepted_reason: Option<String>,
    pub valid_name: String,
    pub lsid: Option<String>,
    #[serde(rename = "isBrackish")]
    pub is_brackish: bool,
    #[serde(rename = "isExtinct")]
    pub is_extinct: bool,
    #[serde(rename = "isFreshwater")]
    pub is_freshwater: bool,
    #[serde(rename = "isMarine")]
    pub is_marine: bool,
    #[serde(rename = "isTerrestrial")]
    pub is_terrestrial: bool,
    pub species_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SpeciesSynonymDto {
    pub id: String,
    pub scientific_name: Option<String>,
    pub outlink: Option<String>,
    pub species_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SpeciesCommonNameDto {
    pub id: String,
    pub language: String,
    pub name: String,
    pub species_id: String,
}

/// Full species record with its satellite tables.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SpeciesDto {
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
    pub species_extra: Vec<SpeciesExtraDto>,
    pub species_synonyms: Vec<SpeciesSynonymDto>,
    pub species_common_names: Vec<SpeciesCommonNameDto>,
}
