use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::AuthService,
};

pub enum Permission {
    /// The account must not be deactivated.
    ActiveUser,
    /// The account must carry the superuser flag.
    Superuser,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            config,
            headers,
        }
    }

    /// Resolves the bearer token of the request and checks `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user, satisfying every permission
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Token does not validate
    /// - `Err(AuthError::UserNotFound)` - Token subject no longer exists
    /// - `Err(AuthError::InactiveUser)` - `ActiveUser` required but the account is deactivated
    /// - `Err(AuthError::NotSuperuser)` - `Superuser` required but the flag is unset
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let user = AuthService::new(self.db, self.config)
            .user_from_token(token)
            .await?;

        for permission in permissions {
            match permission {
                Permission::ActiveUser => {
                    if !user.is_active {
                        return Err(AuthError::InactiveUser(user.id).into());
                    }
                }
                Permission::Superuser => {
                    if !user.is_superuser {
                        return Err(AuthError::NotSuperuser(user.id).into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Token of an `Authorization: Bearer <token>` header. The scheme is case
/// insensitive.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
