use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::Page,
        user::{CreateUserParams, UpdateUserParams, User},
    },
    service::auth::hash_password,
};

const DUPLICATE_EMAIL: &str = "The user with this username already exists in the system.";
const MISSING_USER: &str = "The user with this username does not exist in the system";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_page(&self, skip: u64, limit: u64) -> Result<Page<User>, AppError> {
        Ok(UserRepository::new(self.db).get_page(skip, limit).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).get(id).await?)
    }

    /// Creates a user account.
    ///
    /// # Arguments
    /// - `params` - Validated account values with the plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - The email is already registered
    /// - `Err(AppError::AuthErr)` - Password hashing failed
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(DUPLICATE_EMAIL.to_string()));
        }

        let hashed_password = hash_password(&params.password)?;
        let user = repo.create(params, hashed_password).await?;

        tracing::info!(user_id = user.id, "Created user {}", user.email);

        Ok(user)
    }

    /// Applies a partial update to a user.
    ///
    /// # Arguments
    /// - `id` - User to update
    /// - `params` - Changed values; a new password is hashed before storage
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with this id
    /// - `Err(AppError::BadRequest)` - The new email belongs to another user
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(email) = &params.email {
            if let Some(owner) = repo.find_by_email(email).await? {
                if owner.id != id {
                    return Err(AppError::BadRequest(DUPLICATE_EMAIL.to_string()));
                }
            }
        }

        let hashed_password = params.password.as_deref().map(hash_password).transpose()?;

        repo.update(id, params, hashed_password)
            .await?
            .ok_or_else(|| AppError::NotFound(MISSING_USER.to_string()))
    }

    /// Creates the initial superuser unless an account with that email exists.
    ///
    /// # Returns
    /// - `Ok(true)` - The superuser was created
    /// - `Ok(false)` - An account with this email already exists and was left alone
    pub async fn ensure_superuser(&self, email: &str, password: &str) -> Result<bool, AppError> {
        if UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        self.create(CreateUserParams {
            email: email.to_string(),
            password: password.to_string(),
            full_name: None,
            is_active: true,
            is_superuser: true,
        })
        .await?;

        Ok(true)
    }
}
