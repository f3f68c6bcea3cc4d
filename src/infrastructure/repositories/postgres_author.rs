// src/infrastructure/repositories/postgres_author.rs
use super::map_sqlx;
use crate::domain::author::{Author, AuthorId, AuthorRepository, FullName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::Email;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_AUTHOR: &str =
    "SELECT id, first_name, last_name, email, created_at, updated_at FROM authors";

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author::reconstruct(
            AuthorId::from(row.id),
            FullName::new(row.first_name, row.last_name)?,
            Email::new(row.email)?,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn save(&self, author: &Author) -> DomainResult<Author> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (id, first_name, last_name, email, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (id) DO UPDATE SET
                 first_name = EXCLUDED.first_name,
                 last_name = EXCLUDED.last_name,
                 email = EXCLUDED.email,
                 updated_at = EXCLUDED.updated_at
             RETURNING id, first_name, last_name, email, created_at, updated_at",
        )
        .bind(author.id.as_uuid())
        .bind(author.full_name.first_name())
        .bind(author.full_name.last_name())
        .bind(author.email.as_str())
        .bind(author.created_at)
        .bind(author.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Author::try_from(row)
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!("{SELECT_AUTHOR} WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!("{SELECT_AUTHOR} WHERE email = $1"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Author>> {
        let rows =
            sqlx::query_as::<_, AuthorRow>(&format!("{SELECT_AUTHOR} ORDER BY created_at DESC"))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }
}
