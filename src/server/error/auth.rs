use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response with a `WWW-Authenticate: Bearer` challenge.
    #[error("Not authenticated")]
    MissingToken,

    /// Bearer token failed signature, expiry or claim validation.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Could not validate credentials: {0}")]
    InvalidToken(String),

    /// Token subject refers to a user that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from access token not found")]
    UserNotFound(i32),

    /// Login with an unknown email or a wrong password.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Incorrect email or password")]
    IncorrectCredentials,

    /// User account has been deactivated.
    ///
    /// Results in a 400 Bad Request response.
    #[error("User {0} is inactive")]
    InactiveUser(i32),

    /// User lacks the superuser flag required by the endpoint.
    ///
    /// Results in a 400 Bad Request response.
    #[error("User {0} doesn't have enough privileges")]
    NotSuperuser(i32),

    /// Hashing a password or signing a token failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Credential processing failed: {0}")]
    Crypto(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` → 401 Unauthorized with "Not authenticated"
/// - `InvalidToken` → 403 Forbidden with "Could not validate credentials"
/// - `UserNotFound` → 404 Not Found with "User not found"
/// - `IncorrectCredentials` → 400 Bad Request with "Incorrect email or password"
/// - `InactiveUser` → 400 Bad Request with "Inactive user"
/// - `NotSuperuser` → 400 Bad Request with "The user doesn't have enough privileges"
/// - `Crypto` → 500 Internal Server Error with generic message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => {
                let mut response = (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not authenticated".to_string(),
                    }),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                return response;
            }
            Self::InvalidToken(_) => (StatusCode::FORBIDDEN, "Could not validate credentials"),
            Self::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::IncorrectCredentials => (StatusCode::BAD_REQUEST, "Incorrect email or password"),
            Self::InactiveUser(_) => (StatusCode::BAD_REQUEST, "Inactive user"),
            Self::NotSuperuser(_) => (
                StatusCode::BAD_REQUEST,
                "The user doesn't have enough privileges",
            ),
            Self::Crypto(err) => {
                tracing::error!("Credential processing failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
