// src/application/queries/articles/service.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{application::ports::cache::CacheStore, domain::article::ArticleRepository};

pub struct ArticleQueryHandlers {
    pub(super) articles: Arc<dyn ArticleRepository>,
    pub(super) cache: Arc<dyn CacheStore>,
    pub(super) cache_ttl: Duration,
}

impl ArticleQueryHandlers {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        cache: Arc<dyn CacheStore>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            articles,
            cache,
            cache_ttl,
        }
    }
}
