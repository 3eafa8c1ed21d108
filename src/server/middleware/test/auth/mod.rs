use axum::http::{header, HeaderMap, HeaderValue};

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::AuthService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

/// Headers carrying `Authorization: Bearer <token>`.
fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
