//! JSON Web Token issuing and validation.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User UUID.
    pub sub: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub iat: u64,
    pub exp: u64,
}

/// Signs and verifies HS512 tokens with the configured secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Issues a token for the user expiring after the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed compact JWT
    /// - `Err(AppError::TokenErr)` - Signing failed
    /// - `Err(AppError::InternalError)` - System clock is before the UNIX epoch
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AppError::InternalError("System clock is before UNIX_EPOCH".into()))?;
        let claims = Claims {
            sub: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            iat: now.as_secs(),
            exp: (now + self.ttl).as_secs(),
        };

        Ok(encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Verifies signature, algorithm and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token valid
    /// - `Err(AuthError::InvalidToken)` - Token malformed, tampered with or expired
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| AuthError::InvalidToken(format!("{:?}", err.kind())))
    }
}
