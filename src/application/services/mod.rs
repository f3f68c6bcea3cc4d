// src/application/services/mod.rs
mod cache_invalidation;

pub use cache_invalidation::{
    ALL_ARTICLES_PATTERN, ARTICLES_BY_AUTHOR_PATTERN, ArticleCacheInvalidation,
};

use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandHandlers, auth::AuthCommandHandlers,
            authors::AuthorCommandHandlers,
        },
        ports::{
            cache::CacheStore,
            otp::OtpCodeGenerator,
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{articles::ArticleQueryHandlers, authors::AuthorQueryHandlers},
    },
    domain::{
        article::ArticleRepository, author::AuthorRepository, otp::OtpRepository,
        user::UserRepository,
    },
};

/// The composed object graph. Built once at bootstrap; controllers reach
/// handlers through this instead of a dispatch bus.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandHandlers>,
    pub article_queries: Arc<ArticleQueryHandlers>,
    pub author_commands: Arc<AuthorCommandHandlers>,
    pub author_queries: Arc<AuthorQueryHandlers>,
    pub auth_commands: Arc<AuthCommandHandlers>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        authors: Arc<dyn AuthorRepository>,
        users: Arc<dyn UserRepository>,
        otps: Arc<dyn OtpRepository>,
        cache: Arc<dyn CacheStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        otp_codes: Arc<dyn OtpCodeGenerator>,
        clock: Arc<dyn Clock>,
        cache_ttl: Duration,
        otp_validity: chrono::Duration,
    ) -> Self {
        let invalidation = Arc::new(ArticleCacheInvalidation::new(Arc::clone(&cache)));

        let article_commands = Arc::new(ArticleCommandHandlers::new(
            Arc::clone(&articles),
            Arc::clone(&authors),
            invalidation,
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryHandlers::new(
            Arc::clone(&articles),
            Arc::clone(&cache),
            cache_ttl,
        ));
        let author_commands = Arc::new(AuthorCommandHandlers::new(
            Arc::clone(&authors),
            Arc::clone(&clock),
        ));
        let author_queries = Arc::new(AuthorQueryHandlers::new(Arc::clone(&authors)));
        let auth_commands = Arc::new(AuthCommandHandlers::new(
            users,
            otps,
            password_hasher,
            Arc::clone(&token_manager),
            otp_codes,
            clock,
            otp_validity,
        ));

        Self {
            article_commands,
            article_queries,
            author_commands,
            author_queries,
            auth_commands,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
