use crate::domain::article::entity::Article;
use crate::domain::article::pagination::{PageResult, PaginationOptions};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Insert-or-update keyed on the article id; returns the stored state
    /// with the author relation hydrated.
    async fn save(&self, article: &Article) -> DomainResult<Article>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Legacy unpaginated listing, newest first.
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
    async fn find_page(&self, options: &PaginationOptions) -> DomainResult<PageResult<Article>>;
    async fn find_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
