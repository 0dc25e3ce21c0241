//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records in the database.
//! It handles user creation, lookups by id and email, uniqueness checks and the admin
//! status update, converting between entity models and domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::unique_violation,
    error::{user::UserError, AppError},
    model::user::{CreateUserParam, UpdateUserStatusParams, User},
};

/// Repository providing database operations for user management.
///
/// Generic over the connection so registration can run it inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// The account starts active with `created_at` set to now.
    ///
    /// # Arguments
    /// - `param` - Id, username, email, password hash and role of the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::UserErr(EmailAlreadyExists))` - Email taken
    /// - `Err(AppError::UserErr(UsernameAlreadyExists))` - Username taken
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let username = param.username.clone();
        let email = param.email.clone();

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(param.id),
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.into_entity()),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
        .map_err(|err| -> AppError {
            match unique_violation(&err) {
                Some(message) if message.contains("email") => {
                    UserError::EmailAlreadyExists(email).into()
                }
                Some(message) if message.contains("username") => {
                    UserError::UsernameAlreadyExists(username).into()
                }
                _ => err.into(),
            }
        })?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address, compared as stored (lower case).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during registration to decide whether a requested `ADMIN` role may be
    /// granted to bootstrap the first administrator.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(entity::user::UserRole::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users ordered alphabetically by username.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Sets the active flag and role of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(&self, params: UpdateUserStatusParams) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(params.user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.active = ActiveValue::Set(params.active);
        active_model.role = ActiveValue::Set(params.role.into_entity());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }
}
