//! Session service - Verifies access tokens issued by the auth provider.
//!
//! Sessions are Supabase access tokens: HS256 JWTs signed with the project's
//! JWT secret, audience `authenticated`.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    /// Auth-provider role (`authenticated`), not the application role
    #[serde(default)]
    pub role: Option<String>,
    pub aud: String,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub email: Option<String>,
}

/// Session verification trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SessionService: Send + Sync {
    /// Verify an access token and return the caller it belongs to
    fn verify(&self, token: &str) -> AppResult<Session>;
}

/// HS256 JWT verifier
pub struct JwtSessions {
    key: DecodingKey,
    validation: Validation,
}

impl JwtSessions {
    pub fn new(secret: &[u8], audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret_bytes(), &config.jwt_audience)
    }
}

impl SessionService for JwtSessions {
    fn verify(&self, token: &str) -> AppResult<Session> {
        let data = decode::<Claims>(token, &self.key, &self.validation)?;

        Ok(Session {
            user_id: data.claims.sub,
            email: data.claims.email,
        })
    }
}
