// tests/support/mocks/presenters.rs
use async_trait::async_trait;
use std::sync::Mutex;

use inkpress::application::dto::{ArticleDto, ArticleListDto};
use inkpress::application::ports::outputs::{
    ArticlesByAuthorOutput, CreateArticleOutput, DeleteArticleOutput, GetArticleOutput,
    ListArticlesOutput, PublishArticleOutput, UpdateArticleOutput,
};

/// Captures whichever single outcome a handler reports.
#[derive(Debug, Clone)]
pub enum Presented {
    Article(ArticleDto),
    ArticleList(ArticleListDto),
    Articles(Vec<ArticleDto>),
    Deleted,
    ValidationError(Vec<String>),
    NotFound(String),
    ServerError(String),
}

#[derive(Default)]
pub struct RecordingPresenter {
    outcome: Mutex<Option<Presented>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, outcome: Presented) {
        let mut slot = self.outcome.lock().unwrap();
        assert!(
            slot.is_none(),
            "handler reported more than one outcome: {slot:?} then {outcome:?}"
        );
        *slot = Some(outcome);
    }

    pub fn outcome(&self) -> Presented {
        self.outcome
            .lock()
            .unwrap()
            .clone()
            .expect("handler reported no outcome")
    }

    pub fn expect_article(&self) -> ArticleDto {
        match self.outcome() {
            Presented::Article(article) => article,
            other => panic!("expected article success, got {other:?}"),
        }
    }

    pub fn expect_list(&self) -> ArticleListDto {
        match self.outcome() {
            Presented::ArticleList(list) => list,
            other => panic!("expected list success, got {other:?}"),
        }
    }

    pub fn expect_validation_errors(&self) -> Vec<String> {
        match self.outcome() {
            Presented::ValidationError(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    pub fn expect_not_found(&self) -> String {
        match self.outcome() {
            Presented::NotFound(message) => message,
            other => panic!("expected not found, got {other:?}"),
        }
    }

    pub fn expect_deleted(&self) {
        match self.outcome() {
            Presented::Deleted => {}
            other => panic!("expected delete success, got {other:?}"),
        }
    }
}

#[async_trait]
impl CreateArticleOutput for RecordingPresenter {
    async fn present_success(&self, article: ArticleDto) {
        self.record(Presented::Article(article));
    }

    async fn present_validation_error(&self, errors: Vec<String>) {
        self.record(Presented::ValidationError(errors));
    }

    async fn present_not_found(&self, message: String) {
        self.record(Presented::NotFound(message));
    }

    async fn present_server_error(&self, message: String) {
        self.record(Presented::ServerError(message));
    }
}

#[async_trait]
impl UpdateArticleOutput for RecordingPresenter {
    async fn present_success(&self, article: ArticleDto) {
        self.record(Presented::Article(article));
    }

    async fn present_validation_error(&self, errors: Vec<String>) {
        self.record(Presented::ValidationError(errors));
    }

    async fn present_not_found(&self, message: String) {
        self.record(Presented::NotFound(message));
    }

    async fn present_server_error(&self, message: String) {
        self.record(Presented::ServerError(message));
    }
}

#[async_trait]
impl DeleteArticleOutput for RecordingPresenter {
    async fn present_success(&self) {
        self.record(Presented::Deleted);
    }

    async fn present_not_found(&self, message: String) {
        self.record(Presented::NotFound(message));
    }

    async fn present_server_error(&self, message: String) {
        self.record(Presented::ServerError(message));
    }
}

#[async_trait]
impl PublishArticleOutput for RecordingPresenter {
    async fn present_success(&self, article: ArticleDto) {
        self.record(Presented::Article(article));
    }

    async fn present_validation_error(&self, errors: Vec<String>) {
        self.record(Presented::ValidationError(errors));
    }

    async fn present_not_found(&self, message: String) {
        self.record(Presented::NotFound(message));
    }

    async fn present_server_error(&self, message: String) {
        self.record(Presented::ServerError(message));
    }
}

#[async_trait]
impl GetArticleOutput for RecordingPresenter {
    async fn present_success(&self, article: ArticleDto) {
        self.record(Presented::Article(article));
    }

    async fn present_not_found(&self, message: String) {
        self.record(Presented::NotFound(message));
    }

    async fn present_server_error(&self, message: String) {
        self.record(Presented::ServerError(message));
    }
}

#[async_trait]
impl ListArticlesOutput for RecordingPresenter {
    async fn present_success(&self, articles: ArticleListDto) {
        self.record(Presented::ArticleList(articles));
    }

    async fn present_server_error(&self, message: String) {
        self.record(Presented::ServerError(message));
    }
}

#[async_trait]
impl ArticlesByAuthorOutput for RecordingPresenter {
    async fn present_success(&self, articles: Vec<ArticleDto>) {
        self.record(Presented::Articles(articles));
    }

    async fn present_server_error(&self, message: String) {
        self.record(Presented::ServerError(message));
    }
}
