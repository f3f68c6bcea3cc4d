// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::user::{User, UserId, UserRole};
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    role: UserRole,
    iat: i64,
    exp: i64,
}

/// HS256 token manager keyed by the configured signing secret.
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validity: Duration,
}

impl JwtTokenManager {
    pub fn new(secret: &str, validity: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validity,
        }
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, user: &User) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            + chrono::Duration::from_std(self.validity)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.as_str().to_string(),
            role: user.role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            access_token,
            issued_at,
            expires_at,
            expires_in: (expires_at - issued_at).num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|_| ApplicationError::unauthorized("invalid or expired token"))?;

        let id = UserId::parse(&data.claims.sub)
            .map_err(|_| ApplicationError::unauthorized("invalid token subject"))?;

        Ok(AuthenticatedUser {
            id,
            email: data.claims.email,
            role: data.claims.role,
        })
    }
}
