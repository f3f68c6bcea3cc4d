// src/application/commands/articles/create.rs
use super::ArticleCommandHandlers;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::outputs::CreateArticleOutput,
    },
    domain::{
        article::{Article, ArticleContent, ArticleTitle},
        author::AuthorId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

impl ArticleCommandHandlers {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
        output: &dyn CreateArticleOutput,
    ) {
        match self.try_create(command).await {
            Ok(article) => output.present_success(article).await,
            Err(err) => match err.field_errors() {
                Some(errors) => output.present_validation_error(errors).await,
                None => match err {
                    ApplicationError::NotFound(message) => output.present_not_found(message).await,
                    other => {
                        tracing::error!(error = %other, "create article failed");
                        output
                            .present_server_error(format!("Failed to create article: {other}"))
                            .await;
                    }
                },
            },
        }
    }

    async fn try_create(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        // Both fields are checked before reporting so the caller sees every
        // complaint at once.
        let (title, content) = match (
            ArticleTitle::new(command.title),
            ArticleContent::new(command.content),
        ) {
            (Ok(title), Ok(content)) => (title, content),
            (title, content) => {
                let errors = [title.err(), content.err()]
                    .into_iter()
                    .flatten()
                    .map(|err| err.to_string())
                    .collect();
                return Err(ApplicationError::validation_many(errors));
            }
        };

        // A malformed author id cannot reference anything, so it reads as an
        // unknown author rather than a validation failure.
        let author = match AuthorId::parse(&command.author_id) {
            Ok(author_id) => self.authors.find_by_id(author_id).await?,
            Err(_) => None,
        };
        let author = author.ok_or_else(|| ApplicationError::not_found("Author not found"))?;
        let author_id = author.id;

        let article = Article::create(title, content, author, self.clock.now());
        let saved = self.articles.save(&article).await?;
        self.invalidation.on_article_created(author_id).await?;
        Ok(saved.into())
    }
}
