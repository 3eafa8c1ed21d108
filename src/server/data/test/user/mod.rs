use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, user::UserFactory},
};

mod create;
mod find_by_email;
mod get_page;
mod update;

fn create_params(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password: "changethis".to_string(),
        full_name: None,
        is_active: true,
        is_superuser: false,
    }
}
