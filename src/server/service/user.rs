//! User service for business logic.
//!
//! This module provides the `UserService` for profile lookups and the administrator
//! operations on accounts, working with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{user::UserError, AppError},
    model::user::{UpdateUserStatusParams, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every account ordered by username.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty when none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_all().await?)
    }

    /// Activates or deactivates an account and sets its role.
    ///
    /// A deactivated user is rejected on login and on every authenticated request,
    /// including with tokens issued before the change.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::UserErr(NotFound))` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_status(&self, params: UpdateUserStatusParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user_id = params.user_id.clone();

        let user = user_repo
            .update_status(params)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        tracing::info!(
            "Updated user {}: active={}, role={}",
            user.id,
            user.active,
            user.role.as_str()
        );

        Ok(user)
    }
}
