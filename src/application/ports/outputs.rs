// src/application/ports/outputs.rs
//
// One abstract output port per article use case. A handler reports its
// outcome through exactly one call on the port it was handed; the
// presentation layer decides what that outcome looks like on the wire.
use crate::application::dto::{ArticleDto, ArticleListDto};
use async_trait::async_trait;

#[async_trait]
pub trait CreateArticleOutput: Send + Sync {
    async fn present_success(&self, article: ArticleDto);
    async fn present_validation_error(&self, errors: Vec<String>);
    async fn present_not_found(&self, message: String);
    async fn present_server_error(&self, message: String);
}

#[async_trait]
pub trait UpdateArticleOutput: Send + Sync {
    async fn present_success(&self, article: ArticleDto);
    async fn present_validation_error(&self, errors: Vec<String>);
    async fn present_not_found(&self, message: String);
    async fn present_server_error(&self, message: String);
}

#[async_trait]
pub trait DeleteArticleOutput: Send + Sync {
    async fn present_success(&self);
    async fn present_not_found(&self, message: String);
    async fn present_server_error(&self, message: String);
}

/// Shared by publish and unpublish: both report the same outcome kinds.
#[async_trait]
pub trait PublishArticleOutput: Send + Sync {
    async fn present_success(&self, article: ArticleDto);
    async fn present_validation_error(&self, errors: Vec<String>);
    async fn present_not_found(&self, message: String);
    async fn present_server_error(&self, message: String);
}

#[async_trait]
pub trait GetArticleOutput: Send + Sync {
    async fn present_success(&self, article: ArticleDto);
    async fn present_not_found(&self, message: String);
    async fn present_server_error(&self, message: String);
}

#[async_trait]
pub trait ListArticlesOutput: Send + Sync {
    async fn present_success(&self, articles: ArticleListDto);
    async fn present_server_error(&self, message: String);
}

#[async_trait]
pub trait ArticlesByAuthorOutput: Send + Sync {
    async fn present_success(&self, articles: Vec<ArticleDto>);
    async fn present_server_error(&self, message: String);
}
