// src/application/commands/articles/delete.rs
use super::ArticleCommandHandlers;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::outputs::DeleteArticleOutput,
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandHandlers {
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
        output: &dyn DeleteArticleOutput,
    ) {
        match self.try_delete(command).await {
            Ok(()) => output.present_success().await,
            Err(ApplicationError::NotFound(message)) => output.present_not_found(message).await,
            Err(other) => {
                tracing::error!(error = %other, "delete article failed");
                output
                    .present_server_error(format!("Failed to delete article: {other}"))
                    .await;
            }
        }
    }

    async fn try_delete(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let article = match ArticleId::parse(&command.id) {
            Ok(id) => self.articles.find_by_id(id).await?,
            Err(_) => None,
        };
        let article = article.ok_or_else(|| ApplicationError::not_found("Article not found"))?;

        self.articles.delete(article.id).await?;
        self.invalidation
            .on_article_deleted(article.id, article.author.id)
            .await?;
        Ok(())
    }
}
