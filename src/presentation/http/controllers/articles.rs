// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, PublishArticleCommand, UnpublishArticleCommand,
        UpdateArticleCommand,
    },
    queries::articles::{GetAllArticlesQuery, GetArticleQuery, GetArticlesByAuthorQuery},
};
use crate::domain::article::{PaginationOptions, SortField, SortOrder};
use crate::domain::author::AuthorId;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::presenters::{ArticleRestPresenter, presented};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::{Json, Path, Query},
    response::Response,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub search: Option<String>,
    pub author_id: Option<String>,
    pub published: Option<bool>,
}

impl ArticleListParams {
    fn is_empty(&self) -> bool {
        self.page.is_none()
            && self.limit.is_none()
            && self.sort_by.is_none()
            && self.sort_order.is_none()
            && self.search.is_none()
            && self.author_id.is_none()
            && self.published.is_none()
    }

    /// No parameters selects the legacy full listing; anything else builds a
    /// validated option set with the original defaults filled in.
    fn into_options(self) -> Result<Option<PaginationOptions>, HttpError> {
        if self.is_empty() {
            return Ok(None);
        }

        let build = || -> crate::domain::errors::DomainResult<PaginationOptions> {
            let mut options =
                PaginationOptions::new(self.page.unwrap_or(1), self.limit.unwrap_or(10))?;
            let sort_by = match self.sort_by.as_deref() {
                Some(raw) => SortField::parse(raw)?,
                None => SortField::CreatedAt,
            };
            let sort_order = match self.sort_order.as_deref() {
                Some(raw) => SortOrder::parse(raw)?,
                None => SortOrder::Desc,
            };
            options = options.with_sort(sort_by, sort_order);
            if let Some(search) = self.search {
                options = options.with_search(search);
            }
            if let Some(author_id) = self.author_id.as_deref() {
                options = options.with_author(AuthorId::parse(author_id)?);
            }
            if let Some(published) = self.published {
                options = options.with_published(published);
            }
            Ok(options)
        };

        build()
            .map(Some)
            .map_err(|err| HttpError::validation(vec![err.to_string()]))
    }
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> Response {
    let presenter = ArticleRestPresenter::new();
    let response = presenter.bind();

    state
        .services
        .article_commands
        .create_article(
            CreateArticleCommand {
                title: payload.title,
                content: payload.content,
                author_id: payload.author_id,
            },
            &presenter,
        )
        .await;

    presented(response).await
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> Result<Response, HttpError> {
    let options = params.into_options()?;

    let presenter = ArticleRestPresenter::new();
    let response = presenter.bind();

    state
        .services
        .article_queries
        .get_all_articles(GetAllArticlesQuery { options }, &presenter)
        .await;

    Ok(presented(response).await)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> Response {
    let presenter = ArticleRestPresenter::new();
    let response = presenter.bind();

    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id }, &presenter)
        .await;

    presented(response).await
}

pub async fn get_articles_by_author(
    Extension(state): Extension<HttpState>,
    Path(author_id): Path<String>,
) -> Response {
    let presenter = ArticleRestPresenter::new();
    let response = presenter.bind();

    state
        .services
        .article_queries
        .get_articles_by_author(GetArticlesByAuthorQuery { author_id }, &presenter)
        .await;

    presented(response).await
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> Response {
    let presenter = ArticleRestPresenter::new();
    let response = presenter.bind();

    state
        .services
        .article_commands
        .update_article(
            UpdateArticleCommand {
                id,
                title: payload.title,
                content: payload.content,
            },
            &presenter,
        )
        .await;

    presented(response).await
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(id): Path<String>,
) -> Response {
    let presenter = ArticleRestPresenter::new();
    let response = presenter.bind();

    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id }, &presenter)
        .await;

    presented(response).await
}

pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(id): Path<String>,
) -> Response {
    let presenter = ArticleRestPresenter::new();
    let response = presenter.bind();

    state
        .services
        .article_commands
        .publish_article(PublishArticleCommand { id }, &presenter)
        .await;

    presented(response).await
}

pub async fn unpublish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(id): Path<String>,
) -> Response {
    let presenter = ArticleRestPresenter::new();
    let response = presenter.bind();

    state
        .services
        .article_commands
        .unpublish_article(UnpublishArticleCommand { id }, &presenter)
        .await;

    presented(response).await
}
