// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, services::ArticleCacheInvalidation},
    domain::{article::ArticleRepository, author::AuthorRepository},
};

pub struct ArticleCommandHandlers {
    pub(super) articles: Arc<dyn ArticleRepository>,
    pub(super) authors: Arc<dyn AuthorRepository>,
    pub(super) invalidation: Arc<ArticleCacheInvalidation>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandHandlers {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        authors: Arc<dyn AuthorRepository>,
        invalidation: Arc<ArticleCacheInvalidation>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            articles,
            authors,
            invalidation,
            clock,
        }
    }
}
