use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        data_source::{DataSourceDto, DataSourceSummaryDto},
        pagination::PageDto,
        search::SearchDto,
    },
    server::{
        error::AppError,
        model::{
            data_source::DataSource,
            pagination::{PageLinks, DEFAULT_PAGE_LIMIT},
            search::SearchExpression,
        },
        service::data_source::DataSourceService,
        state::AppState,
        util::query::{ListParams, QueryParams},
    },
};

/// Tag for grouping data source endpoints in OpenAPI documentation
pub static DATA_SOURCE_TAG: &str = "data_source";

/// List data sources one page at a time.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - `skip`, `limit` (default 100) and repeated `order_by`
///
/// # Returns
/// - `200 OK` - Page of data source summaries with navigation links
/// - `422 Unprocessable Entity` - Malformed paging parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/data_source/",
    tag = DATA_SOURCE_TAG,
    params(
        ("skip" = Option<u64>, Query, description = "Number of records to skip"),
        ("limit" = Option<u64>, Query, description = "Page size"),
        ("order_by" = Option<Vec<String>>, Query, description = "Column to order by, '-' prefix for descending")
    ),
    responses(
        (status = 200, description = "Page of data sources", body = PageDto<DataSourceSummaryDto>),
        (status = 422, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_data_sources(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = ListParams::from_query(&QueryParams::parse(query.as_deref()), DEFAULT_PAGE_LIMIT)?;

    let page = DataSourceService::new(&state.db)
        .get_page(params.skip, params.limit, &params.order_by)
        .await?;

    let links = PageLinks::new(
        &state.config.server_host,
        &state.config.api_v1_str,
        "data_source",
    );

    Ok((
        StatusCode::OK,
        Json(page.into_dto(&links, DataSource::into_summary_dto)),
    ))
}

/// List every data source.
#[utoipa::path(
    get,
    path = "/api/v1/data_source/all/",
    tag = DATA_SOURCE_TAG,
    params(
        ("order_by" = Option<Vec<String>>, Query, description = "Column to order by, '-' prefix for descending")
    ),
    responses(
        (status = 200, description = "All data sources", body = Vec<DataSourceSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_data_sources(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let order_by = QueryParams::parse(query.as_deref()).get_all("order_by");

    let data_sources = DataSourceService::new(&state.db).get_all(&order_by).await?;

    let data_sources: Vec<_> = data_sources
        .into_iter()
        .map(DataSource::into_summary_dto)
        .collect();

    Ok((StatusCode::OK, Json(data_sources)))
}

/// Search data sources with a search expression.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - `limit` (default 0, unlimited) and repeated `order_by`
/// - `payload` - Expression or expression group
///
/// # Returns
/// - `200 OK` - Matching data source summaries
/// - `400 Bad Request` - Unknown column, unsupported operator or bad search term
/// - `422 Unprocessable Entity` - Malformed expression group
#[utoipa::path(
    post,
    path = "/api/v1/data_source/search/",
    tag = DATA_SOURCE_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum number of results, 0 for all"),
        ("order_by" = Option<Vec<String>>, Query, description = "Column to order by, '-' prefix for descending")
    ),
    request_body = SearchDto,
    responses(
        (status = 200, description = "Matching data sources", body = Vec<DataSourceSummaryDto>),
        (status = 400, description = "Invalid search expression", body = ErrorDto),
        (status = 422, description = "Malformed expression group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_data_sources(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Json(payload): Json<SearchDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ListParams::from_query(&QueryParams::parse(query.as_deref()), 0)?;
    let expression = SearchExpression::from_dto(payload)?;

    let data_sources = DataSourceService::new(&state.db)
        .search(&expression, &params.order_by, params.limit)
        .await?;

    let data_sources: Vec<_> = data_sources
        .into_iter()
        .map(DataSource::into_summary_dto)
        .collect();

    Ok((StatusCode::OK, Json(data_sources)))
}

#[utoipa::path(
    get,
    path = "/api/v1/data_source/{id}",
    tag = DATA_SOURCE_TAG,
    params(
        ("id" = i32, Path, description = "Data source ID")
    ),
    responses(
        (status = 200, description = "Data source", body = DataSourceDto),
        (status = 404, description = "Data source not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_data_source_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let data_source = DataSourceService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Data source not found: {}", id)))?;

    Ok((StatusCode::OK, Json(data_source.into_dto())))
}
