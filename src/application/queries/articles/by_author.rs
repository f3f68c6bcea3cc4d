use super::ArticleQueryHandlers;
use crate::{
    application::{
        dto::ArticleDto, error::ApplicationResult, ports::outputs::ArticlesByAuthorOutput,
    },
    domain::author::AuthorId,
};

pub struct GetArticlesByAuthorQuery {
    pub author_id: String,
}

impl ArticleQueryHandlers {
    /// Uncached on purpose; the author-scoped listing is low-traffic.
    pub async fn get_articles_by_author(
        &self,
        query: GetArticlesByAuthorQuery,
        output: &dyn ArticlesByAuthorOutput,
    ) {
        match self.try_by_author(query).await {
            Ok(articles) => output.present_success(articles).await,
            Err(err) => {
                tracing::error!(error = %err, "list articles by author failed");
                output
                    .present_server_error(format!("Failed to get articles by author: {err}"))
                    .await;
            }
        }
    }

    async fn try_by_author(
        &self,
        query: GetArticlesByAuthorQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let Ok(author_id) = AuthorId::parse(&query.author_id) else {
            return Ok(Vec::new());
        };
        let articles = self.articles.find_by_author(author_id).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
