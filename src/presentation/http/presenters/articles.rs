// src/presentation/http/presenters/articles.rs
//
// REST implementation of the article output ports. A presenter lives for one
// request: the controller binds the in-flight response channel, dispatches
// the handler with the presenter as its output port, and awaits the channel.
use crate::application::{
    dto::{ArticleDto, ArticleListDto},
    ports::outputs::{
        ArticlesByAuthorOutput, CreateArticleOutput, DeleteArticleOutput, GetArticleOutput,
        ListArticlesOutput, PublishArticleOutput, UpdateArticleOutput,
    },
};
use crate::presentation::http::error::{ErrorBody, HttpError};
use async_trait::async_trait;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use std::sync::Mutex;
use tokio::sync::oneshot;

pub struct ArticleRestPresenter {
    channel: Mutex<Option<oneshot::Sender<Response>>>,
}

impl ArticleRestPresenter {
    pub fn new() -> Self {
        Self {
            channel: Mutex::new(None),
        }
    }

    /// Binds the response channel for the request in flight and returns the
    /// half the controller awaits. Must run before dispatch.
    pub fn bind(&self) -> oneshot::Receiver<Response> {
        let (tx, rx) = oneshot::channel();
        *self
            .channel
            .lock()
            .expect("presenter channel lock poisoned") = Some(tx);
        rx
    }

    fn send<T: Serialize>(&self, status: StatusCode, body: T) {
        let tx = self
            .channel
            .lock()
            .expect("presenter channel lock poisoned")
            .take();
        let Some(tx) = tx else {
            // A present call with no bound channel is a wiring bug in the
            // controller, not a runtime condition to recover from.
            panic!("presenter response channel not bound or already consumed");
        };
        // The receiver only disappears if the client went away; nothing
        // left to deliver to in that case.
        let _ = tx.send((status, Json(body)).into_response());
    }

    fn send_error(&self, status: StatusCode, message: String) {
        self.send(
            status,
            ErrorBody {
                message,
                errors: None,
            },
        );
    }

    fn send_validation(&self, errors: Vec<String>) {
        self.send(
            StatusCode::BAD_REQUEST,
            ErrorBody {
                message: "Validation failed".into(),
                errors: Some(errors),
            },
        );
    }
}

impl Default for ArticleRestPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Awaits the presented response; a dropped channel means the handler ended
/// without a single port call, which is reported rather than hung on.
pub async fn presented(rx: oneshot::Receiver<Response>) -> Response {
    match rx.await {
        Ok(response) => response,
        Err(_) => HttpError::internal("handler finished without presenting a response")
            .into_response(),
    }
}

#[async_trait]
impl CreateArticleOutput for ArticleRestPresenter {
    async fn present_success(&self, article: ArticleDto) {
        self.send(StatusCode::CREATED, article);
    }

    async fn present_validation_error(&self, errors: Vec<String>) {
        self.send_validation(errors);
    }

    async fn present_not_found(&self, message: String) {
        self.send_error(StatusCode::NOT_FOUND, message);
    }

    async fn present_server_error(&self, message: String) {
        self.send_error(StatusCode::INTERNAL_SERVER_ERROR, message);
    }
}

#[async_trait]
impl UpdateArticleOutput for ArticleRestPresenter {
    async fn present_success(&self, article: ArticleDto) {
        self.send(StatusCode::OK, article);
    }

    async fn present_validation_error(&self, errors: Vec<String>) {
        self.send_validation(errors);
    }

    async fn present_not_found(&self, message: String) {
        self.send_error(StatusCode::NOT_FOUND, message);
    }

    async fn present_server_error(&self, message: String) {
        self.send_error(StatusCode::INTERNAL_SERVER_ERROR, message);
    }
}

#[async_trait]
impl DeleteArticleOutput for ArticleRestPresenter {
    async fn present_success(&self) {
        self.send(
            StatusCode::OK,
            json!({ "message": "Article deleted successfully" }),
        );
    }

    async fn present_not_found(&self, message: String) {
        self.send_error(StatusCode::NOT_FOUND, message);
    }

    async fn present_server_error(&self, message: String) {
        self.send_error(StatusCode::INTERNAL_SERVER_ERROR, message);
    }
}

#[async_trait]
impl PublishArticleOutput for ArticleRestPresenter {
    async fn present_success(&self, article: ArticleDto) {
        self.send(StatusCode::OK, article);
    }

    async fn present_validation_error(&self, errors: Vec<String>) {
        self.send_validation(errors);
    }

    async fn present_not_found(&self, message: String) {
        self.send_error(StatusCode::NOT_FOUND, message);
    }

    async fn present_server_error(&self, message: String) {
        self.send_error(StatusCode::INTERNAL_SERVER_ERROR, message);
    }
}

#[async_trait]
impl GetArticleOutput for ArticleRestPresenter {
    async fn present_success(&self, article: ArticleDto) {
        self.send(StatusCode::OK, article);
    }

    async fn present_not_found(&self, message: String) {
        self.send_error(StatusCode::NOT_FOUND, message);
    }

    async fn present_server_error(&self, message: String) {
        self.send_error(StatusCode::INTERNAL_SERVER_ERROR, message);
    }
}

#[async_trait]
impl ListArticlesOutput for ArticleRestPresenter {
    async fn present_success(&self, articles: ArticleListDto) {
        self.send(StatusCode::OK, articles);
    }

    async fn present_server_error(&self, message: String) {
        self.send_error(StatusCode::INTERNAL_SERVER_ERROR, message);
    }
}

#[async_trait]
impl ArticlesByAuthorOutput for ArticleRestPresenter {
    async fn present_success(&self, articles: Vec<ArticleDto>) {
        self.send(StatusCode::OK, articles);
    }

    async fn present_server_error(&self, message: String) {
        self.send_error(StatusCode::INTERNAL_SERVER_ERROR, message);
    }
}
