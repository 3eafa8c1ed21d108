use std::collections::BTreeMap;

use crate::server::{data::station::StationRepository, model::station::UpsertStationParams};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, species::SpeciesFactory, station::StationFactory},
};

mod get_details;
mod link_species;
mod upsert;

fn upsert_params(name: &str, order: i32) -> UpsertStationParams {
    UpsertStationParams {
        name: name.to_string(),
        order,
        sediment_sample: Some("Globigerina ooze".to_string()),
        longitude: -20.5,
        latitude: 25.75,
        location: "Off Teneriffe".to_string(),
        water_body: "North Atlantic Ocean".to_string(),
        sea_area: None,
        place: None,
        date: NaiveDate::from_ymd_opt(1873, 2, 15).unwrap(),
        fao_area: 34,
        gear: Some("Dredge".to_string()),
        depth_fathoms: Some(1890),
        bottom_water_temp_c: Some(2.5),
        bottom_water_depth_fathoms: None,
        specific_gravity_at_bottom: None,
        surface_temp_c: Some(18.9),
        specific_gravity_at_surface: Some(1.0265),
        water_temp_c_at_depth_fathoms: BTreeMap::from([
            ("0".to_string(), Some(18.9)),
            ("100".to_string(), None),
        ]),
        text: "Sounded in 1890 fathoms.".to_string(),
        hathitrust_urls: vec!["https://babel.hathitrust.org/cgi/pt?id=abc?urlappend=%3Bseq=32".to_string()],
    }
}
