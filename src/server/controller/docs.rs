use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::ErrorDto,
        data_source::{DataSourceDto, DataSourceSummaryDto},
        search::{ExpressionDto, ExpressionGroupDto, Join, Operator, SearchDto},
        species::{
            SpeciesCommonNameDto, SpeciesDto, SpeciesExtraDto, SpeciesSummaryDto,
            SpeciesSynonymDto,
        },
        station::{StationDto, StationSummaryDto},
        user::{
            CreateUserDto, LoginFormDto, OpenRegistrationDto, TokenDto, UpdateUserDto,
            UpdateUserMeDto, UserDto,
        },
    },
    server::controller::{
        data_source::{self, DATA_SOURCE_TAG},
        login::{self, LOGIN_TAG},
        species::{self, SPECIES_TAG},
        station::{self, STATION_TAG},
        user::{self, USER_TAG},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Oceans 1876",
        description = "Stations, species and data sources of the HMS Challenger expedition"
    ),
    paths(
        data_source::get_data_sources,
        data_source::get_all_data_sources,
        data_source::search_data_sources,
        data_source::get_data_source_by_id,
        species::get_species,
        species::get_all_species,
        species::search_species,
        species::fuzzy_match_species,
        species::get_species_by_id,
        station::get_stations,
        station::get_all_stations,
        station::search_stations,
        station::get_station_by_name,
        login::login_access_token,
        login::test_token,
        user::get_users,
        user::create_user,
        user::get_user_me,
        user::update_user_me,
        user::create_user_open,
        user::get_user_by_id,
        user::update_user,
    ),
    components(schemas(
        ErrorDto,
        DataSourceDto,
        DataSourceSummaryDto,
        ExpressionDto,
        ExpressionGroupDto,
        Join,
        Operator,
        SearchDto,
        SpeciesDto,
        SpeciesSummaryDto,
        SpeciesExtraDto,
        SpeciesSynonymDto,
        SpeciesCommonNameDto,
        StationDto,
        StationSummaryDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        UpdateUserMeDto,
        OpenRegistrationDto,
        LoginFormDto,
        TokenDto,
    )),
    tags(
        (name = DATA_SOURCE_TAG, description = "Taxonomic data sources"),
        (name = SPECIES_TAG, description = "Resolved species names"),
        (name = STATION_TAG, description = "Sampling stations"),
        (name = LOGIN_TAG, description = "Bearer token issue"),
        (name = USER_TAG, description = "User accounts")
    ),
    modifiers(&BearerSecurity)
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by the protected endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Serve the generated OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiDoc::openapi()))
}
