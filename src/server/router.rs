use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    config::Config,
    controller::{data_source, docs, login, species, station, user},
    state::AppState,
};

/// Builds the API routes nested under `API_V1_STR`.
///
/// Login and user management are only mounted when `ENABLE_AUTH` is set.
pub fn router(config: &Config) -> Router<AppState> {
    let mut api = Router::new()
        .route("/data_source/", get(data_source::get_data_sources))
        .route("/data_source/all/", get(data_source::get_all_data_sources))
        .route("/data_source/search/", post(data_source::search_data_sources))
        .route("/data_source/{id}", get(data_source::get_data_source_by_id))
        .route("/species/", get(species::get_species))
        .route("/species/all/", get(species::get_all_species))
        .route("/species/search/", post(species::search_species))
        .route("/species/fuzzymatch/", get(species::fuzzy_match_species))
        .route("/species/{id}", get(species::get_species_by_id))
        .route("/stations/", get(station::get_stations))
        .route("/stations/all/", get(station::get_all_stations))
        .route("/stations/search/", post(station::search_stations))
        .route("/stations/{name}", get(station::get_station_by_name))
        .route("/openapi.json", get(docs::openapi_json));

    if config.enable_auth {
        api = api
            .route("/login/access-token", post(login::login_access_token))
            .route("/login/test-token", post(login::test_token))
            .route("/users/", get(user::get_users).post(user::create_user))
            .route("/users/me", get(user::get_user_me).put(user::update_user_me))
            .route("/users/open", post(user::create_user_open))
            .route("/users/{id}", get(user::get_user_by_id).put(user::update_user));
    }

    Router::new().nest(&config.api_v1_str, api)
}
