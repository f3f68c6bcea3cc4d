// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleRepository, ArticleTitle, PageResult,
    PaginationOptions, SortField, SortOrder,
};
use crate::domain::author::{Author, AuthorId, FullName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::Email;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_ARTICLE: &str = "SELECT a.id, a.title, a.content, a.is_published, a.created_at, \
     a.updated_at, a.published_at, au.id AS author_id, au.first_name, au.last_name, \
     au.email AS author_email, au.created_at AS author_created_at, \
     au.updated_at AS author_updated_at \
     FROM articles a JOIN authors au ON au.id = a.author_id";

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    content: String,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    author_id: Uuid,
    first_name: String,
    last_name: String,
    author_email: String,
    author_created_at: DateTime<Utc>,
    author_updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let author = Author::reconstruct(
            AuthorId::from(row.author_id),
            FullName::new(row.first_name, row.last_name)?,
            Email::new(row.author_email)?,
            row.author_created_at,
            row.author_updated_at,
        );
        Ok(Article::reconstruct(
            ArticleId::from(row.id),
            ArticleTitle::new(row.title)?,
            ArticleContent::new(row.content)?,
            author,
            row.is_published,
            row.created_at,
            row.updated_at,
            row.published_at,
        ))
    }
}

impl PostgresArticleRepository {
    fn order_column(field: SortField) -> &'static str {
        match field {
            SortField::CreatedAt => "a.created_at",
            SortField::UpdatedAt => "a.updated_at",
            SortField::Title => "a.title",
            SortField::PublishedAt => "a.published_at",
        }
    }

    // Conditions are shared between the page query and its COUNT twin so the
    // total always matches the filter set.
    fn apply_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, options: &'a PaginationOptions) {
        let mut has_where = false;
        let mut push_clause = |builder: &mut QueryBuilder<'a, Postgres>| {
            if has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
                has_where = true;
            }
        };

        if let Some(published) = options.published {
            push_clause(builder);
            builder.push("a.is_published = ");
            builder.push_bind(published);
        }

        if let Some(author_id) = options.author_id {
            push_clause(builder);
            builder.push("a.author_id = ");
            builder.push_bind(author_id.as_uuid());
        }

        if let Some(search) = options.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                let pattern = format!("%{search}%");
                push_clause(builder);
                builder.push("(a.title ILIKE ");
                builder.push_bind(pattern.clone());
                builder.push(" OR a.content ILIKE ");
                builder.push_bind(pattern);
                builder.push(")");
            }
        }
    }

    async fn count(&self, options: &PaginationOptions) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::apply_filters(&mut builder, options);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(total.max(0) as u64)
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn save(&self, article: &Article) -> DomainResult<Article> {
        sqlx::query(
            "INSERT INTO articles (id, title, content, author_id, is_published, created_at, updated_at, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (id) DO UPDATE SET
                 title = EXCLUDED.title,
                 content = EXCLUDED.content,
                 is_published = EXCLUDED.is_published,
                 updated_at = EXCLUDED.updated_at,
                 published_at = EXCLUDED.published_at",
        )
        .bind(article.id.as_uuid())
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(article.author.id.as_uuid())
        .bind(article.is_published)
        .bind(article.created_at)
        .bind(article.updated_at)
        .bind(article.published_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        // Reload with the author relation hydrated.
        self.find_by_id(article.id).await?.ok_or_else(|| {
            DomainError::Persistence("failed to reload saved article".into())
        })
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{SELECT_ARTICLE} WHERE a.id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{SELECT_ARTICLE} ORDER BY a.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_page(&self, options: &PaginationOptions) -> DomainResult<PageResult<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_ARTICLE);
        Self::apply_filters(&mut builder, options);

        // Sort column and direction come from closed enums, not user input.
        builder.push(" ORDER BY ");
        builder.push(Self::order_column(options.sort_by));
        builder.push(match options.sort_order {
            SortOrder::Asc => " ASC",
            SortOrder::Desc => " DESC",
        });
        builder.push(", a.id DESC");

        builder.push(" LIMIT ");
        builder.push_bind(i64::from(options.limit));
        builder.push(" OFFSET ");
        builder.push_bind(options.offset() as i64);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let total = self.count(options).await?;

        Ok(PageResult::new(articles, total, options))
    }

    async fn find_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{SELECT_ARTICLE} WHERE a.author_id = $1 ORDER BY a.created_at DESC"
        ))
        .bind(author_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}
