// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::author::Author;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Article aggregate. Two states: draft (`is_published == false`,
/// `published_at == None`) and published (`is_published == true`,
/// `published_at == Some`). Instances are never mutated in place; every
/// transition hands back a new value carrying the old identity.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author: Author,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    /// New articles always start as drafts.
    pub fn create(
        title: ArticleTitle,
        content: ArticleContent,
        author: Author,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ArticleId::generate(),
            title,
            content,
            author,
            is_published: false,
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: ArticleId,
        title: ArticleTitle,
        content: ArticleContent,
        author: Author,
        is_published: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author,
            is_published,
            created_at,
            updated_at,
            published_at,
        }
    }

    pub fn update_title(self, title: ArticleTitle, now: DateTime<Utc>) -> Self {
        Self {
            title,
            updated_at: now,
            ..self
        }
    }

    pub fn update_content(self, content: ArticleContent, now: DateTime<Utc>) -> Self {
        Self {
            content,
            updated_at: now,
            ..self
        }
    }

    /// Draft -> published. Only valid from the draft state.
    pub fn publish(self, now: DateTime<Utc>) -> DomainResult<Self> {
        if self.is_published {
            return Err(DomainError::Validation(
                "Article is already published".into(),
            ));
        }
        Ok(Self {
            is_published: true,
            published_at: Some(now),
            updated_at: now,
            ..self
        })
    }

    /// Published -> draft. Only valid from the published state.
    pub fn unpublish(self, now: DateTime<Utc>) -> DomainResult<Self> {
        if !self.is_published {
            return Err(DomainError::Validation(
                "Article is already unpublished".into(),
            ));
        }
        Ok(Self {
            is_published: false,
            published_at: None,
            updated_at: now,
            ..self
        })
    }
}
