// src/application/commands/articles/publish.rs
use super::ArticleCommandHandlers;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::outputs::PublishArticleOutput,
    },
    domain::article::{Article, ArticleId},
};
use chrono::{DateTime, Utc};

pub struct PublishArticleCommand {
    pub id: String,
}

pub struct UnpublishArticleCommand {
    pub id: String,
}

impl ArticleCommandHandlers {
    pub async fn publish_article(
        &self,
        command: PublishArticleCommand,
        output: &dyn PublishArticleOutput,
    ) {
        self.transition(command.id, Article::publish, "publish", output)
            .await;
    }

    pub async fn unpublish_article(
        &self,
        command: UnpublishArticleCommand,
        output: &dyn PublishArticleOutput,
    ) {
        self.transition(command.id, Article::unpublish, "unpublish", output)
            .await;
    }

    async fn transition(
        &self,
        id: String,
        apply: fn(Article, DateTime<Utc>) -> crate::domain::errors::DomainResult<Article>,
        verb: &str,
        output: &dyn PublishArticleOutput,
    ) {
        match self.try_transition(id, apply).await {
            Ok(article) => output.present_success(article).await,
            Err(err) => match err.field_errors() {
                // "already in that state" surfaces here, as a validation
                // error rather than a server error
                Some(errors) => output.present_validation_error(errors).await,
                None => match err {
                    ApplicationError::NotFound(message) => output.present_not_found(message).await,
                    other => {
                        tracing::error!(error = %other, "{verb} article failed");
                        output
                            .present_server_error(format!("Failed to {verb} article: {other}"))
                            .await;
                    }
                },
            },
        }
    }

    async fn try_transition(
        &self,
        id: String,
        apply: fn(Article, DateTime<Utc>) -> crate::domain::errors::DomainResult<Article>,
    ) -> ApplicationResult<ArticleDto> {
        let article = match ArticleId::parse(&id) {
            Ok(id) => self.articles.find_by_id(id).await?,
            Err(_) => None,
        };
        let article = article.ok_or_else(|| ApplicationError::not_found("Article not found"))?;

        let transitioned = apply(article, self.clock.now())?;
        let saved = self.articles.save(&transitioned).await?;
        self.invalidation
            .on_article_updated(saved.id, Some(saved.author.id))
            .await?;
        Ok(saved.into())
    }
}
