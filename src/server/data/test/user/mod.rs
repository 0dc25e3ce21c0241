use crate::server::{
    data::user::UserRepository,
    error::{user::UserError, AppError},
    model::user::{CreateUserParam, Role, UpdateUserStatusParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_email;
mod get_all;
mod update_status;

fn create_param(id: &str, username: &str, email: &str, role: Role) -> CreateUserParam {
    CreateUserParam {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role,
    }
}
