use crate::server::{
    data::category::CategoryRepository,
    error::{category::CategoryError, AppError},
    model::category::{CategoryKind, CreateCategoryParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists_with_name;
mod find_by_user;
mod rename;
