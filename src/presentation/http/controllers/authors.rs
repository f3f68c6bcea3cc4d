// src/presentation/http/controllers/authors.rs
use crate::application::{commands::authors::CreateAuthorCommand, dto::AuthorDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::{Json, Path},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub async fn create_author(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Json(payload): Json<CreateAuthorRequest>,
) -> HttpResult<(StatusCode, Json<AuthorDto>)> {
    let author = state
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(author)))
}

pub async fn list_authors(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AuthorDto>>> {
    state
        .services
        .author_queries
        .get_all_authors()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<AuthorDto>> {
    state
        .services
        .author_queries
        .get_author_by_id(&id)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_author_by_email(
    Extension(state): Extension<HttpState>,
    Path(email): Path<String>,
) -> HttpResult<Json<AuthorDto>> {
    state
        .services
        .author_queries
        .get_author_by_email(&email)
        .await
        .into_http()
        .map(Json)
}
