// tests/support/mod.rs
#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;

use inkpress::application::commands::articles::ArticleCommandHandlers;
use inkpress::application::commands::auth::AuthCommandHandlers;
use inkpress::application::queries::articles::ArticleQueryHandlers;
use inkpress::application::services::ArticleCacheInvalidation;
use inkpress::domain::article::{Article, ArticleContent, ArticleTitle};
use inkpress::domain::author::{Author, FullName};
use inkpress::domain::shared::Email;
use mocks::cache::InMemoryCacheStore;
use mocks::repos::{InMemoryArticleRepo, InMemoryAuthorRepo, InMemoryOtpRepo, InMemoryUserRepo};
use mocks::security::{FakePasswordHasher, FakeTokenManager};
use mocks::time::{FixedClock, fixed_now};

pub struct ArticleFixture {
    pub articles: Arc<InMemoryArticleRepo>,
    pub authors: Arc<InMemoryAuthorRepo>,
    pub cache: Arc<InMemoryCacheStore>,
    pub clock: Arc<FixedClock>,
    pub commands: ArticleCommandHandlers,
    pub queries: ArticleQueryHandlers,
}

impl ArticleFixture {
    pub fn new() -> Self {
        let articles = Arc::new(InMemoryArticleRepo::new());
        let authors = Arc::new(InMemoryAuthorRepo::new());
        let cache = Arc::new(InMemoryCacheStore::new());
        let clock = Arc::new(FixedClock::at(fixed_now()));

        let invalidation = Arc::new(ArticleCacheInvalidation::new(cache.clone()));
        let commands = ArticleCommandHandlers::new(
            articles.clone(),
            authors.clone(),
            invalidation,
            clock.clone(),
        );
        let queries = ArticleQueryHandlers::new(
            articles.clone(),
            cache.clone(),
            std::time::Duration::from_secs(300),
        );

        Self {
            articles,
            authors,
            cache,
            clock,
            commands,
            queries,
        }
    }

    pub fn seed_author(&self, first: &str, last: &str, email: &str) -> Author {
        let author = Author::create(
            FullName::new(first, last).unwrap(),
            Email::new(email).unwrap(),
            fixed_now(),
        );
        self.authors.seed(author.clone());
        author
    }

    pub fn seed_article(&self, author: &Author, title: &str, content: &str) -> Article {
        let article = Article::create(
            ArticleTitle::new(title).unwrap(),
            ArticleContent::new(content).unwrap(),
            author.clone(),
            fixed_now(),
        );
        self.articles.seed(article.clone());
        article
    }
}

pub struct AuthFixture {
    pub users: Arc<InMemoryUserRepo>,
    pub otps: Arc<InMemoryOtpRepo>,
    pub clock: Arc<FixedClock>,
    pub handlers: AuthCommandHandlers,
}

impl AuthFixture {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepo::new());
        let otps = Arc::new(InMemoryOtpRepo::new());
        let clock = Arc::new(FixedClock::at(fixed_now()));

        let handlers = AuthCommandHandlers::new(
            users.clone(),
            otps.clone(),
            Arc::new(FakePasswordHasher),
            Arc::new(FakeTokenManager),
            Arc::new(inkpress::infrastructure::otp::RandomOtpGenerator::new(true)),
            clock.clone(),
            chrono::Duration::minutes(10),
        );

        Self {
            users,
            otps,
            clock,
            handlers,
        }
    }
}
