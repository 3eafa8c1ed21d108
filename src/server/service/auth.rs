//! Access tokens and password hashing.
//!
//! Tokens are HS256 JWTs signed with `SECRET_KEY`. The subject is the user id
//! and the expiry is `ACCESS_TOKEN_EXPIRE_MINUTES` after issuance. Passwords
//! are stored as Argon2 PHC strings with a random salt.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::server::{
    config::Config, data::user::UserRepository, error::auth::AuthError, error::AppError,
    model::user::User,
};

const SALT_LENGTH: usize = 16;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Checks an email and password pair.
    ///
    /// # Arguments
    /// - `email` - Login name
    /// - `password` - Plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - Active user owning these credentials
    /// - `Err(AuthError::IncorrectCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::InactiveUser)` - Credentials are valid but the account is deactivated
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(email.trim())
            .await?
            .ok_or(AuthError::IncorrectCredentials)?;

        if !verify_password(password, &user.hashed_password) {
            return Err(AuthError::IncorrectCredentials.into());
        }
        if !user.is_active {
            return Err(AuthError::InactiveUser(user.id).into());
        }

        tracing::debug!(user_id = user.id, "User authenticated");

        Ok(user)
    }

    pub fn issue_token(&self, user_id: i32) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (Utc::now() + Duration::minutes(self.config.access_token_expire_minutes))
                .timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_key.as_bytes()),
        )
        .map_err(|e| AuthError::Crypto(e.to_string()))
    }

    /// Validates a bearer token and returns the user id it was issued for.
    ///
    /// # Returns
    /// - `Ok(i32)` - Subject of a correctly signed, unexpired token
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or a non numeric subject
    pub fn verify_token(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_key.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        data.claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("subject '{}'", data.claims.sub)))
    }

    /// Resolves a bearer token to its user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user the token was issued for, active or not
    /// - `Err(AuthError::InvalidToken)` - Token does not validate
    /// - `Err(AuthError::UserNotFound)` - The user no longer exists
    pub async fn user_from_token(&self, token: &str) -> Result<User, AppError> {
        let user_id = self.verify_token(token)?;

        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))?;

        Ok(user)
    }
}

/// Hashes a password into an Argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let mut salt_bytes = [0u8; SALT_LENGTH];
    rand::rng().fill(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::Crypto(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Crypto(e.to_string()))
}

/// Checks a password against a stored PHC string. Unparseable hashes never match.
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    match PasswordHash::new(hashed_password) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash is not a PHC string: {}", e);
            false
        }
    }
}
