use crate::server::{data::species::SpeciesRepository, model::species::UpsertSpeciesParams};
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use test_utils::{
    builder::TestBuilder,
    factory::{self, species::SpeciesFactory},
};

mod get_details;
mod upsert;

fn upsert_params(id: &str, data_source_id: i32, current_name: &str) -> UpsertSpeciesParams {
    UpsertSpeciesParams {
        id: id.to_string(),
        record_id: format!("record-{}", id),
        current_record_id: None,
        matched_name: current_name.to_string(),
        matched_canonical_simple_name: Some(current_name.to_string()),
        matched_canonical_full_name: Some(current_name.to_string()),
        current_name: Some(current_name.to_string()),
        current_canonical_simple_name: Some(current_name.to_string()),
        current_canonical_full_name: Some(current_name.to_string()),
        classification_path: Some("Animalia|Arthropoda|Isopoda".to_string()),
        classification_ranks: Some("kingdom|phylum|order".to_string()),
        classification_ids: None,
        outlink: None,
        data_source_id,
    }
}
