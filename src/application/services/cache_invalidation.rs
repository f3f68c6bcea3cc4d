// src/application/services/cache_invalidation.rs
use crate::application::ApplicationResult;
use crate::application::ports::cache::CacheStore;
use crate::domain::article::ArticleId;
use crate::domain::author::AuthorId;
use std::sync::Arc;

pub const ALL_ARTICLES_PATTERN: &str = "articles:*";
pub const ARTICLES_BY_AUTHOR_PATTERN: &str = "articles_by_author:*";

/// Maps article write events to the cache entries they invalidate.
///
/// Paginated list entries are purged wholesale (any field change can move an
/// article across page, sort, or filter boundaries); the single-article key
/// and the author-scoped pattern are purged precisely. Individual purges are
/// independent and run concurrently; a failed purge fails the whole request
/// rather than leaving stale entries behind silently.
pub struct ArticleCacheInvalidation {
    cache: Arc<dyn CacheStore>,
}

impl ArticleCacheInvalidation {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    pub fn article_key(id: ArticleId) -> String {
        format!("article:{id}")
    }

    pub fn author_pattern(author_id: AuthorId) -> String {
        format!("articles_by_author:{author_id}:*")
    }

    async fn invalidate_lists(&self) -> ApplicationResult<()> {
        tokio::try_join!(
            self.cache.delete_by_pattern(ALL_ARTICLES_PATTERN),
            self.cache.delete_by_pattern(ARTICLES_BY_AUTHOR_PATTERN),
        )?;
        Ok(())
    }

    async fn invalidate_article(&self, id: ArticleId) -> ApplicationResult<()> {
        self.cache.delete(&Self::article_key(id)).await
    }

    async fn invalidate_author(&self, author_id: AuthorId) -> ApplicationResult<()> {
        self.cache
            .delete_by_pattern(&Self::author_pattern(author_id))
            .await
    }

    pub async fn on_article_created(&self, author_id: AuthorId) -> ApplicationResult<()> {
        tokio::try_join!(self.invalidate_lists(), self.invalidate_author(author_id))?;
        Ok(())
    }

    pub async fn on_article_updated(
        &self,
        id: ArticleId,
        author_id: Option<AuthorId>,
    ) -> ApplicationResult<()> {
        tokio::try_join!(
            self.invalidate_lists(),
            self.invalidate_article(id),
            async {
                match author_id {
                    Some(author_id) => self.invalidate_author(author_id).await,
                    None => Ok(()),
                }
            },
        )?;
        Ok(())
    }

    pub async fn on_article_deleted(
        &self,
        id: ArticleId,
        author_id: AuthorId,
    ) -> ApplicationResult<()> {
        tokio::try_join!(
            self.invalidate_lists(),
            self.invalidate_article(id),
            self.invalidate_author(author_id),
        )?;
        Ok(())
    }
}
