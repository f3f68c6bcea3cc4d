// src/application/commands/articles/update.rs
use super::ArticleCommandHandlers;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::outputs::UpdateArticleOutput,
    },
    domain::article::{ArticleContent, ArticleId, ArticleTitle},
};

pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleCommandHandlers {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
        output: &dyn UpdateArticleOutput,
    ) {
        match self.try_update(command).await {
            Ok(article) => output.present_success(article).await,
            Err(err) => match err.field_errors() {
                Some(errors) => output.present_validation_error(errors).await,
                None => match err {
                    ApplicationError::NotFound(message) => output.present_not_found(message).await,
                    other => {
                        tracing::error!(error = %other, "update article failed");
                        output
                            .present_server_error(format!("Failed to update article: {other}"))
                            .await;
                    }
                },
            },
        }
    }

    async fn try_update(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        // Checked before any lookup.
        if command.title.is_none() && command.content.is_none() {
            return Err(ApplicationError::validation(
                "At least one field must be provided for update",
            ));
        }

        let article = match ArticleId::parse(&command.id) {
            Ok(id) => self.articles.find_by_id(id).await?,
            Err(_) => None,
        };
        let mut article =
            article.ok_or_else(|| ApplicationError::not_found("Article not found"))?;

        let (title, content) = match (
            command.title.map(ArticleTitle::new).transpose(),
            command.content.map(ArticleContent::new).transpose(),
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

        let now = self.clock.now();
        if let Some(title) = title {
            article = article.update_title(title, now);
        }
        if let Some(content) = content {
            article = article.update_content(content, now);
        }

        let saved = self.articles.save(&article).await?;
        self.invalidation
            .on_article_updated(saved.id, Some(saved.author.id))
            .await?;
        Ok(saved.into())
    }
}
