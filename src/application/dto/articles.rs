use crate::domain::article::{Article, PageResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub word_count: usize,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.to_string(),
            author_id: article.author.id.to_string(),
            author_name: article.author.full_name.full_name(),
            word_count: article.content.word_count(),
            title: article.title.into(),
            content: article.content.into(),
            is_published: article.is_published,
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
        }
    }
}

/// Listing outcome: the legacy path returns the bare collection, the
/// paginated path wraps it with the page envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleListDto {
    Full(Vec<ArticleDto>),
    Paginated(PageResult<ArticleDto>),
}
