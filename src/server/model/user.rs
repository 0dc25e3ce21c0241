//! User domain models and parameters.
//!
//! Provides the domain model for application accounts together with the parameter
//! types used by registration, login and the admin status update. Parameter types
//! are built from request DTOs and validated on construction.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::{LoginDto, RegisterUserDto},
        user::{UpdateUserStatusDto, UserDto},
    },
    server::{
        error::validation::ValidationError,
        util::validation::{is_valid_email, FieldErrors},
    },
};

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Access level of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Parses `ADMIN` or `USER`, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Self::Admin),
            "USER" => Some(Self::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    pub fn from_entity(role: entity::user::UserRole) -> Self {
        match role {
            entity::user::UserRole::Admin => Self::Admin,
            entity::user::UserRole::User => Self::User,
        }
    }

    pub fn into_entity(self) -> entity::user::UserRole {
        match self {
            Self::Admin => entity::user::UserRole::Admin,
            Self::User => entity::user::UserRole::User,
        }
    }
}

/// Application account with credentials, role and status.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string; never leaves the server.
    pub password_hash: String,
    pub role: Role,
    /// Inactive users can neither log in nor use existing tokens.
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            uuid: self.id,
            username: self.username,
            email: self.email,
            role: self.role.as_str().to_string(),
            esta_ativo: self.active,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::from_entity(entity.role),
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Validated registration request.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    /// Lower-cased email address.
    pub email: String,
    pub password: String,
    /// Role asked for by the client; the service may downgrade it.
    pub requested_role: Role,
}

impl RegisterUserParams {
    /// Validates the registration body.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - All fields valid
    /// - `Err(ValidationError::InvalidFields)` - Blank username, malformed email, short
    ///   password or unknown role
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, ValidationError> {
        let mut errors = FieldErrors::new();

        let username = errors.text("username", dto.username, "O username é obrigatório.");
        let email = errors
            .text("email", dto.email, "O email é obrigatório.")
            .to_lowercase();
        if !email.is_empty() && !is_valid_email(&email) {
            errors.add("email", "O email deve ser válido.");
        }

        let password = dto.password.unwrap_or_default();
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add(
                "password",
                format!(
                    "A senha deve ter pelo menos {} caracteres.",
                    MIN_PASSWORD_LENGTH
                ),
            );
        }

        let requested_role = match dto.role.as_deref().map(str::trim) {
            None | Some("") => Role::User,
            Some(raw) => Role::parse(raw).unwrap_or_else(|| {
                errors.add("role", "A Role deve ser ADMIN ou USER.");
                Role::User
            }),
        };

        errors.finish()?;

        Ok(Self {
            username,
            email,
            password,
            requested_role,
        })
    }
}

/// Data inserted for a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validated login request.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Result<Self, ValidationError> {
        let mut errors = FieldErrors::new();

        let email = errors
            .text("email", dto.email, "O email é obrigatório.")
            .to_lowercase();
        let password = errors.text("password", dto.password, "A senha é obrigatória.");

        errors.finish()?;

        Ok(Self { email, password })
    }
}

/// Admin change of a user's active flag and role.
#[derive(Debug, Clone)]
pub struct UpdateUserStatusParams {
    pub user_id: String,
    pub active: bool,
    pub role: Role,
}

impl UpdateUserStatusParams {
    pub fn from_dto(user_id: String, dto: UpdateUserStatusDto) -> Result<Self, ValidationError> {
        let mut errors = FieldErrors::new();

        if user_id.trim().is_empty() {
            errors.add("userID", "O UUID não pode ser nulo ou vazio.");
        }

        let active = dto.esta_ativo.unwrap_or_else(|| {
            errors.add("estaAtivo", "A estaAtivo é obrigatória.");
            false
        });

        let role = errors.text("role", dto.role, "A Role é obrigatória.");
        let role = if role.is_empty() {
            Role::User
        } else {
            Role::parse(&role).unwrap_or_else(|| {
                errors.add("role", "A Role deve ser ADMIN ou USER.");
                Role::User
            })
        };

        errors.finish()?;

        Ok(Self {
            user_id: user_id.trim().to_string(),
            active,
            role,
        })
    }
}
