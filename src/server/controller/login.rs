use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginFormDto, TokenDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping login endpoints in OpenAPI documentation
pub static LOGIN_TAG: &str = "login";

/// Exchange an email and password for a bearer token.
///
/// The form field is called `username` but carries the email address.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token settings
/// - `form` - `username` and `password` form fields
///
/// # Returns
/// - `200 OK` - Access token of type `bearer`
/// - `400 Bad Request` - Wrong credentials or inactive account
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/api/v1/login/access-token",
    tag = LOGIN_TAG,
    request_body(content = LoginFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token", body = TokenDto),
        (status = 400, description = "Incorrect email or password, or inactive user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_access_token(
    State(state): State<AppState>,
    Form(form): Form<LoginFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.config);

    let user = auth_service
        .authenticate(&form.username, &form.password)
        .await?;
    let access_token = auth_service.issue_token(user.id)?;

    tracing::info!(user_id = user.id, "Issued access token");

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            access_token,
            token_type: "bearer".to_string(),
        }),
    ))
}

/// Check a bearer token and return its owner.
///
/// # Returns
/// - `200 OK` - The user the token was issued to
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token does not validate
/// - `404 Not Found` - Token owner no longer exists
#[utoipa::path(
    post,
    path = "/api/v1/login/test-token",
    tag = LOGIN_TAG,
    responses(
        (status = 200, description = "Token owner", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Could not validate credentials", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn test_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
