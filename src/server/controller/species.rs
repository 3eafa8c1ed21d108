use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pagination::PageDto,
        search::SearchDto,
        species::{SpeciesDto, SpeciesSummaryDto},
    },
    server::{
        error::AppError,
        model::{
            pagination::{PageLinks, DEFAULT_PAGE_LIMIT},
            search::{SearchExpression, DEFAULT_MIN_STRING_SIMILARITY},
            species::{FuzzyMatchParams, Species},
        },
        service::species::SpeciesService,
        state::AppState,
        util::query::{ListParams, QueryParams},
    },
};

/// Tag for grouping species endpoints in OpenAPI documentation
pub static SPECIES_TAG: &str = "species";

/// List species one page at a time.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - `skip`, `limit` (default 100) and repeated `order_by`
///
/// # Returns
/// - `200 OK` - Page of species summaries with navigation links
/// - `422 Unprocessable Entity` - Malformed paging parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/species/",
    tag = SPECIES_TAG,
    params(
        ("skip" = Option<u64>, Query, description = "Number of records to skip"),
        ("limit" = Option<u64>, Query, description = "Page size"),
        ("order_by" = Option<Vec<String>>, Query, description = "Column to order by, '-' prefix for descending")
    ),
    responses(
        (status = 200, description = "Page of species", body = PageDto<SpeciesSummaryDto>),
        (status = 422, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = ListParams::from_query(&QueryParams::parse(query.as_deref()), DEFAULT_PAGE_LIMIT)?;

    let page = SpeciesService::new(&state.db)
        .get_page(params.skip, params.limit, &params.order_by)
        .await?;

    let links = PageLinks::new(&state.config.server_host, &state.config.api_v1_str, "species");

    Ok((
        StatusCode::OK,
        Json(page.into_dto(&links, Species::into_summary_dto)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/species/all/",
    tag = SPECIES_TAG,
    params(
        ("order_by" = Option<Vec<String>>, Query, description = "Column to order by, '-' prefix for descending")
    ),
    responses(
        (status = 200, description = "All species", body = Vec<SpeciesSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_species(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let order_by = QueryParams::parse(query.as_deref()).get_all("order_by");

    let species = SpeciesService::new(&state.db).get_all(&order_by).await?;

    Ok((StatusCode::OK, Json(into_summaries(species))))
}

/// Search species with a search expression.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - `limit` (default 0, unlimited) and repeated `order_by`
/// - `payload` - Expression or expression group over species columns
///
/// # Returns
/// - `200 OK` - Matching species summaries
/// - `400 Bad Request` - Unknown column, unsupported operator or bad search term
/// - `422 Unprocessable Entity` - Malformed expression group
#[utoipa::path(
    post,
    path = "/api/v1/species/search/",
    tag = SPECIES_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum number of results, 0 for all"),
        ("order_by" = Option<Vec<String>>, Query, description = "Column to order by, '-' prefix for descending")
    ),
    request_body = SearchDto,
    responses(
        (status = 200, description = "Matching species", body = Vec<SpeciesSummaryDto>),
        (status = 400, description = "Invalid search expression", body = ErrorDto),
        (status = 422, description = "Malformed expression group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_species(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Json(payload): Json<SearchDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ListParams::from_query(&QueryParams::parse(query.as_deref()), 0)?;
    let expression = SearchExpression::from_dto(payload)?;

    let species = SpeciesService::new(&state.db)
        .search(&expression, &params.order_by, params.limit)
        .await?;

    Ok((StatusCode::OK, Json(into_summaries(species))))
}

/// Fuzzy match species names against free text.
///
/// Matches scientific names, common names and synonyms by trigram word
/// similarity, best match first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - `query_str` (required), `station`, `min_string_similarity_score`
///   (default 0.1), `limit` (default 0, unlimited) and repeated `order_by`
///
/// # Returns
/// - `200 OK` - Matching species summaries
/// - `422 Unprocessable Entity` - Missing `query_str` or malformed parameters
#[utoipa::path(
    get,
    path = "/api/v1/species/fuzzymatch/",
    tag = SPECIES_TAG,
    params(
        ("query_str" = String, Query, description = "Name to match"),
        ("station" = Option<String>, Query, description = "Only species recorded at this station"),
        ("min_string_similarity_score" = Option<f64>, Query, description = "Word similarity threshold"),
        ("limit" = Option<u64>, Query, description = "Maximum number of results, 0 for all"),
        ("order_by" = Option<Vec<String>>, Query, description = "Column to order by, '-' prefix for descending")
    ),
    responses(
        (status = 200, description = "Matching species", body = Vec<SpeciesSummaryDto>),
        (status = 422, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn fuzzy_match_species(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let query = QueryParams::parse(query.as_deref());
    let list = ListParams::from_query(&query, 0)?;

    let params = FuzzyMatchParams {
        query: query.require("query_str")?.to_string(),
        station: query
            .get("station")
            .filter(|station| !station.is_empty())
            .map(str::to_string),
        min_string_similarity: query
            .parse_or("min_string_similarity_score", DEFAULT_MIN_STRING_SIMILARITY)?,
        limit: list.limit,
        order_by: list.order_by,
    };

    let species = SpeciesService::new(&state.db).fuzzy_match(params).await?;

    Ok((StatusCode::OK, Json(into_summaries(species))))
}

/// Get a species with its extra data, synonyms and common names.
#[utoipa::path(
    get,
    path = "/api/v1/species/{id}",
    tag = SPECIES_TAG,
    params(
        ("id" = String, Path, description = "Species ID")
    ),
    responses(
        (status = 200, description = "Species details", body = SpeciesDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let species = SpeciesService::new(&state.db)
        .get_details(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Species not found: {}", id)))?;

    Ok((StatusCode::OK, Json(species.into_dto())))
}

fn into_summaries(species: Vec<Species>) -> Vec<SpeciesSummaryDto> {
    species.into_iter().map(Species::into_summary_dto).collect()
}
