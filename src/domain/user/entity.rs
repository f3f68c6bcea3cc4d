// src/domain/user/entity.rs
use crate::domain::shared::Email;
use crate::domain::user::value_objects::{PasswordHash, UserId, UserRole};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: UserRole,
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// New accounts start unverified.
    pub fn create(
        email: Email,
        password_hash: PasswordHash,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            email,
            password_hash,
            role,
            is_email_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn reconstruct(
        id: UserId,
        email: Email,
        password_hash: PasswordHash,
        role: UserRole,
        is_email_verified: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            role,
            is_email_verified,
            created_at,
            updated_at,
        }
    }

    pub fn verify_email(self, now: DateTime<Utc>) -> Self {
        Self {
            is_email_verified: true,
            updated_at: now,
            ..self
        }
    }

    pub fn update_password(self, password_hash: PasswordHash, now: DateTime<Utc>) -> Self {
        Self {
            password_hash,
            updated_at: now,
            ..self
        }
    }
}
