// src/application/queries/authors.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        author::{AuthorId, AuthorRepository},
        shared::Email,
    },
};

pub struct AuthorQueryHandlers {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorQueryHandlers {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    pub async fn get_all_authors(&self) -> ApplicationResult<Vec<AuthorDto>> {
        let authors = self.authors.find_all().await?;
        Ok(authors.into_iter().map(Into::into).collect())
    }

    pub async fn get_author_by_id(&self, id: &str) -> ApplicationResult<AuthorDto> {
        let author = match AuthorId::parse(id) {
            Ok(author_id) => self.authors.find_by_id(author_id).await?,
            Err(_) => None,
        };
        author
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Author not found"))
    }

    pub async fn get_author_by_email(&self, email: &str) -> ApplicationResult<AuthorDto> {
        let email = Email::new(email)?;
        self.authors
            .find_by_email(&email)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Author not found"))
    }
}
