// src/application/commands/authors/create.rs
use super::AuthorCommandHandlers;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        author::{Author, FullName},
        shared::Email,
    },
};

pub struct CreateAuthorCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl AuthorCommandHandlers {
    pub async fn create_author(&self, command: CreateAuthorCommand) -> ApplicationResult<AuthorDto> {
        let (full_name, email) = match (
            FullName::new(command.first_name, command.last_name),
            Email::new(command.email),
        ) {
            (Ok(full_name), Ok(email)) => (full_name, email),
            (full_name, email) => {
                let errors = [full_name.err(), email.err()]
                    .into_iter()
                    .flatten()
                    .map(|err| err.to_string())
                    .collect();
                return Err(ApplicationError::validation_many(errors));
            }
        };

        if self.authors.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "Author with email '{email}' already exists"
            )));
        }

        let author = Author::create(full_name, email, self.clock.now());
        let saved = self.authors.save(&author).await?;
        Ok(saved.into())
    }
}
