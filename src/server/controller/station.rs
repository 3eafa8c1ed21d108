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
        station::{StationDto, StationSummaryDto},
    },
    server::{
        error::AppError,
        model::{
            pagination::{PageLinks, DEFAULT_PAGE_LIMIT},
            search::SearchExpression,
            station::Station,
        },
        service::station::StationService,
        state::AppState,
        util::query::{ListParams, QueryParams},
    },
};

/// Tag for grouping station endpoints in OpenAPI documentation
pub static STATION_TAG: &str = "stations";

#[utoipa::path(
    get,
    path = "/api/v1/stations/",
    tag = STATION_TAG,
    params(
        ("skip" = Option<u64>, Query, description = "Number of records to skip"),
        ("limit" = Option<u64>, Query, description = "Page size"),
        ("order_by" = Option<Vec<String>>, Query, description = "Column to order by, '-' prefix for descending")
    ),
    responses(
        (status = 200, description = "Page of stations", body = PageDto<StationSummaryDto>),
        (status = 422, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stations(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = ListParams::from_query(&QueryParams::parse(query.as_deref()), DEFAULT_PAGE_LIMIT)?;

    let page = StationService::new(&state.db)
        .get_page(params.skip, params.limit, &params.order_by)
        .await?;

    let links = PageLinks::new(&state.config.server_host, &state.config.api_v1_str, "stations");

    Ok((
        StatusCode::OK,
        Json(page.into_dto(&links, Station::into_summary_dto)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/all/",
    tag = STATION_TAG,
    params(
        ("order_by" = Option<Vec<String>>, Query, description = "Column to order by, '-' prefix for descending")
    ),
    responses(
        (status = 200, description = "All stations", body = Vec<StationSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_stations(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let order_by = QueryParams::parse(query.as_deref()).get_all("order_by");

    let stations = StationService::new(&state.db).get_all(&order_by).await?;

    Ok((StatusCode::OK, Json(into_summaries(stations))))
}

/// Search stations with a search expression.
///
/// Expressions may name `species_id` to find the stations where a species
/// was recorded.
///
/// # Returns
/// - `200 OK` - Matching station summaries
/// - `400 Bad Request` - Unknown column, unsupported operator or bad search term
/// - `422 Unprocessable Entity` - Malformed expression group
#[utoipa::path(
    post,
    path = "/api/v1/stations/search/",
    tag = STATION_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum number of results, 0 for all"),
        ("order_by" = Option<Vec<String>>, Query, description = "Column to order by, '-' prefix for descending")
    ),
    request_body = SearchDto,
    responses(
        (status = 200, description = "Matching stations", body = Vec<StationSummaryDto>),
        (status = 400, description = "Invalid search expression", body = ErrorDto),
        (status = 422, description = "Malformed expression group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_stations(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Json(payload): Json<SearchDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ListParams::from_query(&QueryParams::parse(query.as_deref()), 0)?;
    let expression = SearchExpression::from_dto(payload)?;

    let stations = StationService::new(&state.db)
        .search(&expression, &params.order_by, params.limit)
        .await?;

    Ok((StatusCode::OK, Json(into_summaries(stations))))
}

/// Get a station with the species recorded there.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `name` - Station name
/// - `query` - `binomial_only` (default false) drops species known only by genus
///
/// # Returns
/// - `200 OK` - Station details
/// - `404 Not Found` - No station with this name
#[utoipa::path(
    get,
    path = "/api/v1/stations/{name}",
    tag = STATION_TAG,
    params(
        ("name" = String, Path, description = "Station name"),
        ("binomial_only" = Option<bool>, Query, description = "Only species with a binomial name")
    ),
    responses(
        (status = 200, description = "Station details", body = StationDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 422, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_station_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let binomial_only = QueryParams::parse(query.as_deref()).flag_or("binomial_only", false)?;

    let station = StationService::new(&state.db)
        .get_details(&name, binomial_only)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Station not found: {}", name)))?;

    Ok((StatusCode::OK, Json(station.into_dto())))
}

fn into_summaries(stations: Vec<Station>) -> Vec<StationSummaryDto> {
    stations.into_iter().map(Station::into_summary_dto).collect()
}
