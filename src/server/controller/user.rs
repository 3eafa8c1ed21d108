use axum::{
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pagination::PageDto,
        user::{CreateUserDto, OpenRegistrationDto, UpdateUserDto, UpdateUserMeDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::{
            pagination::{PageLinks, DEFAULT_PAGE_LIMIT},
            user::{CreateUserParams, UpdateUserParams, User},
        },
        service::user::UserService,
        state::AppState,
        util::query::{ListParams, QueryParams},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

const MISSING_USER: &str = "The user with this username does not exist in the system";

/// List user accounts one page at a time.
///
/// # Access Control
/// - `Superuser` - Only superusers can list accounts
///
/// # Returns
/// - `200 OK` - Page of users with navigation links
/// - `400 Bad Request` - Caller is not a superuser
/// - `401 Unauthorized` - No bearer token
#[utoipa::path(
    get,
    path = "/api/v1/users/",
    tag = USER_TAG,
    params(
        ("skip" = Option<u64>, Query, description = "Number of records to skip"),
        ("limit" = Option<u64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Page of users", body = PageDto<UserDto>),
        (status = 400, description = "The user doesn't have enough privileges", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.config, &headers)
        .require(&[Permission::Superuser])
        .await?;

    let params = ListParams::from_query(&QueryParams::parse(query.as_deref()), DEFAULT_PAGE_LIMIT)?;

    let page = UserService::new(&state.db)
        .get_page(params.skip, params.limit)
        .await?;

    let links = PageLinks::new(&state.config.server_host, &state.config.api_v1_str, "users");

    Ok((StatusCode::OK, Json(page.into_dto(&links, User::into_dto))))
}

/// Create a user account.
///
/// # Access Control
/// - `Superuser` - Only superusers can create accounts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Email, password and account flags
///
/// # Returns
/// - `200 OK` - The created user
/// - `400 Bad Request` - Email already registered, or caller is not a superuser
/// - `422 Unprocessable Entity` - Invalid email address
#[utoipa::path(
    post,
    path = "/api/v1/users/",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Created user", body = UserDto),
        (status = 400, description = "Email already registered or missing privileges", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid email address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.config, &headers)
        .require(&[Permission::Superuser])
        .await?;

    let params = CreateUserParams::from_dto(payload)?;
    let user = UserService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 400, description = "Inactive user", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require(&[Permission::ActiveUser])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the email, password or full name of the current user.
///
/// # Access Control
/// - `ActiveUser` - Any active account, for itself only
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Email belongs to another account, or inactive user
/// - `422 Unprocessable Entity` - Invalid email address
#[utoipa::path(
    put,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    request_body = UpdateUserMeDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Email already registered or inactive user", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid email address", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserMeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require(&[Permission::ActiveUser])
        .await?;

    let params = UpdateUserParams::from_me_dto(payload)?;
    let user = UserService::new(&state.db).update(user.id, params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Register without being logged in.
///
/// Only available when the server allows open registration. The account is
/// always an active, regular user.
///
/// # Returns
/// - `200 OK` - The created user
/// - `400 Bad Request` - Email already registered
/// - `403 Forbidden` - Open registration is disabled
/// - `422 Unprocessable Entity` - Invalid email address
#[utoipa::path(
    post,
    path = "/api/v1/users/open",
    tag = USER_TAG,
    request_body = OpenRegistrationDto,
    responses(
        (status = 200, description = "Created user", body = UserDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 403, description = "Open registration disabled", body = ErrorDto),
        (status = 422, description = "Invalid email address", body = ErrorDto)
    ),
)]
pub async fn create_user_open(
    State(state): State<AppState>,
    Json(payload): Json<OpenRegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    if !state.config.users_open_registration {
        return Err(AppError::Forbidden(
            "Open user registration is forbidden on this server".to_string(),
        ));
    }

    let params = CreateUserParams::from_open_registration(payload)?;
    let user = UserService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a user by id.
///
/// # Access Control
/// - `ActiveUser` - Any active account can read itself
/// - `Superuser` - Required to read other accounts
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Another account requested without superuser privileges
/// - `404 Not Found` - No user with this id
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 400, description = "The user doesn't have enough privileges", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let current_user = AuthGuard::new(&state.db, &state.config, &headers)
        .require(&[Permission::ActiveUser])
        .await?;

    if current_user.id == id {
        return Ok((StatusCode::OK, Json(current_user.into_dto())));
    }
    if !current_user.is_superuser {
        return Err(AuthError::NotSuperuser(current_user.id).into());
    }

    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(MISSING_USER.to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update any user account.
///
/// # Access Control
/// - `Superuser` - Only superusers can update other accounts
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Email belongs to another account, or missing privileges
/// - `404 Not Found` - No user with this id
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Email already registered or missing privileges", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Invalid email address", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.config, &headers)
        .require(&[Permission::Superuser])
        .await?;

    let params = UpdateUserParams::from_dto(payload)?;
    let user = UserService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
