//! User data repository for database operations.
//!
//! Passwords arrive here already hashed. The repository never sees or
//! stores plain text passwords.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::{
    data::crud::CrudRepository,
    model::{
        pagination::Page,
        user::{CreateUserParams, UpdateUserParams, User},
    },
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn crud(&self) -> CrudRepository<'a, entity::prelude::User> {
        CrudRepository::new(self.db)
    }

    pub async fn get(&self, id: i32) -> Result<Option<User>, DbErr> {
        Ok(self.crud().get(id).await?.map(User::from_entity))
    }

    /// Finds a user by email address.
    ///
    /// # Arguments
    /// - `email` - Exact email address, as stored
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User with this email
    /// - `Ok(None)` - No user registered with this email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets one page of users ordered by id.
    pub async fn get_page(&self, skip: u64, limit: u64) -> Result<Page<User>, DbErr> {
        let page = self
            .crud()
            .get_multi(skip, limit, &["id".to_string()])
            .await?;

        Ok(page.map(User::from_entity))
    }

    /// Inserts a user.
    ///
    /// # Arguments
    /// - `params` - Account values; the plain text password is ignored
    /// - `hashed_password` - PHC string of the password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned id
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(
        &self,
        params: CreateUserParams,
        hashed_password: String,
    ) -> Result<User, DbErr> {
        let entity = self
            .crud()
            .create(entity::user::ActiveModel {
                email: ActiveValue::Set(params.email),
                full_name: ActiveValue::Set(params.full_name),
                hashed_password: ActiveValue::Set(hashed_password),
                is_active: ActiveValue::Set(params.is_active),
                is_superuser: ActiveValue::Set(params.is_superuser),
                ..Default::default()
            })
            .await?;

        Ok(User::from_entity(entity))
    }

    /// Writes the fields present in `params`; the rest keep their stored value.
    ///
    /// # Arguments
    /// - `id` - Id of the user to update
    /// - `params` - Changed values; the plain text password is ignored
    /// - `hashed_password` - New password hash, if the password changes
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with this id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserParams,
        hashed_password: Option<String>,
    ) -> Result<Option<User>, DbErr> {
        let crud = self.crud();
        let Some(existing) = crud.get(id).await? else {
            return Ok(None);
        };

        let mut changes = existing.clone().into_active_model();
        if let Some(email) = params.email {
            changes.email = ActiveValue::Set(email);
        }
        if let Some(full_name) = params.full_name {
            changes.full_name = ActiveValue::Set(Some(full_name));
        }
        if let Some(hashed_password) = hashed_password {
            changes.hashed_password = ActiveValue::Set(hashed_password);
        }
        if let Some(is_active) = params.is_active {
            changes.is_active = ActiveValue::Set(is_active);
        }
        if let Some(is_superuser) = params.is_superuser {
            changes.is_superuser = ActiveValue::Set(is_superuser);
        }

        if !changes.is_changed() {
            return Ok(Some(User::from_entity(existing)));
        }

        let entity = crud.update(changes).await?;

        Ok(Some(User::from_entity(entity)))
    }
}
