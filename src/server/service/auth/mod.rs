//! Registration and login.
//!
//! `AuthService` creates accounts together with their "Sem Categoria" fallback
//! categories and exchanges valid credentials for a signed token.

pub mod password;
pub mod token;

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{category::CategoryRepository, user::UserRepository},
    error::{auth::AuthError, user::UserError, AppError},
    model::{
        category::{CategoryKind, CreateCategoryParams},
        user::{CreateUserParam, LoginParams, RegisterUserParams, Role, User},
    },
    service::auth::{password::hash_password, password::verify_password, token::TokenService},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account.
    ///
    /// A requested `ADMIN` role is only honored while no administrator exists; later
    /// requests are downgraded to `USER`. The user row and both fallback categories
    /// are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::UserErr(EmailAlreadyExists))` - Email taken
    /// - `Err(AppError::UserErr(UsernameAlreadyExists))` - Username taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&params.email).await? {
            return Err(UserError::EmailAlreadyExists(params.email).into());
        }
        if user_repo.username_exists(&params.username).await? {
            return Err(UserError::UsernameAlreadyExists(params.username).into());
        }

        let role = match params.requested_role {
            Role::Admin if user_repo.admin_exists().await? => {
                tracing::info!(
                    "Administrator already exists, registering {} as USER",
                    params.username
                );
                Role::User
            }
            role => role,
        };

        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParam {
                id: Uuid::new_v4().to_string(),
                username: params.username,
                email: params.email,
                password_hash,
                role,
            })
            .await?;

        let category_repo = CategoryRepository::new(&txn);
        for kind in [CategoryKind::Income, CategoryKind::Expense] {
            category_repo
                .create(CreateCategoryParams::uncategorized(&user.id, kind))
                .await?;
        }

        txn.commit().await?;

        tracing::info!("Registered user {} with role {}", user.id, user.role.as_str());

        Ok(user)
    }

    /// Checks the credentials and issues a token.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::AuthErr(InactiveUser))` - Account deactivated
    pub async fn login(&self, params: LoginParams) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials(params.email).into());
        };

        if !verify_password(&params.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials(params.email).into());
        }

        if !user.active {
            return Err(AuthError::InactiveUser(user.id).into());
        }

        self.tokens.issue(&user)
    }
}
