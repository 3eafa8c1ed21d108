//! User domain models and parameters.
//!
//! Users exist only for the authenticated part of the API. The password hash
//! never leaves the service layer; DTO conversion drops it.

use crate::{
    model::user::{CreateUserDto, OpenRegistrationDto, UpdateUserDto, UpdateUserMeDto, UserDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub full_name: Option<String>,
    pub hashed_password: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            full_name: entity.full_name,
            hashed_password: entity.hashed_password,
            is_active: entity.is_active,
            is_superuser: entity.is_superuser,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            is_active: self.is_active,
            is_superuser: self.is_superuser,
        }
    }
}

/// Parameters for creating a user. The password is still in plain text.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            email: validate_email(dto.email)?,
            password: dto.password,
            full_name: dto.full_name,
            is_active: dto.is_active,
            is_superuser: dto.is_superuser,
        })
    }

    /// Open registration always yields an active, regular user.
    pub fn from_open_registration(dto: OpenRegistrationDto) -> Result<Self, AppError> {
        Ok(Self {
            email: validate_email(dto.email)?,
            password: dto.password,
            full_name: dto.full_name,
            is_active: true,
            is_superuser: false,
        })
    }
}

/// Partial user update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            email: dto.email.map(validate_email).transpose()?,
            password: dto.password,
            full_name: dto.full_name,
            is_active: dto.is_active,
            is_superuser: dto.is_superuser,
        })
    }

    /// Self-service updates cannot change activation or privileges.
    pub fn from_me_dto(dto: UpdateUserMeDto) -> Result<Self, AppError> {
        Ok(Self {
            email: dto.email.map(validate_email).transpose()?,
            password: dto.password,
            full_name: dto.full_name,
            is_active: None,
            is_superuser: None,
        })
    }
}

/// Accepts `local@domain.tld` shaped addresses and normalises surrounding whitespace.
fn validate_email(email: String) -> Result<String, AppError> {
    let email = email.trim().to_string();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(email)
    } else {
        Err(AppError::Unprocessable(format!(
            "value is not a valid email address: {}",
            email
        )))
    }
}
