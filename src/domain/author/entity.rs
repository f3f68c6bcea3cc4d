// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorId, FullName};
use crate::domain::shared::Email;
use chrono::{DateTime, Utc};

/// Immutable aggregate: every change constructs a new instance carrying the
/// original identity.
#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub full_name: FullName,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    pub fn create(full_name: FullName, email: Email, now: DateTime<Utc>) -> Self {
        Self {
            id: AuthorId::generate(),
            full_name,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn reconstruct(
        id: AuthorId,
        full_name: FullName,
        email: Email,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            full_name,
            email,
            created_at,
            updated_at,
        }
    }

    pub fn update_full_name(self, full_name: FullName, now: DateTime<Utc>) -> Self {
        Self {
            full_name,
            updated_at: now,
            ..self
        }
    }

    pub fn update_email(self, email: Email, now: DateTime<Utc>) -> Self {
        Self {
            email,
            updated_at: now,
            ..self
        }
    }
}
