// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Utc;

use inkpress::application::dto::{AuthTokenDto, AuthenticatedUser};
use inkpress::application::error::{ApplicationError, ApplicationResult};
use inkpress::application::ports::security::{PasswordHasher, TokenManager};
use inkpress::domain::user::{User, UserId};

/// Deterministic stand-in for the argon2 hasher.
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Issues `token-{user_id}` and accepts nothing else.
pub struct FakeTokenManager;

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, user: &User) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        let expires_at = issued_at + chrono::Duration::hours(1);
        Ok(AuthTokenDto {
            access_token: format!("token-{}", user.id),
            issued_at,
            expires_at,
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let raw = token
            .strip_prefix("token-")
            .ok_or_else(|| ApplicationError::unauthorized("invalid or expired token"))?;
        let id = UserId::parse(raw)
            .map_err(|_| ApplicationError::unauthorized("invalid token subject"))?;
        Ok(AuthenticatedUser {
            id,
            email: String::new(),
            role: inkpress::domain::user::UserRole::User,
        })
    }
}
