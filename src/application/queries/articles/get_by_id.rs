use super::ArticleQueryHandlers;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::outputs::GetArticleOutput,
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: String,
}

impl ArticleQueryHandlers {
    pub async fn get_article(&self, query: GetArticleQuery, output: &dyn GetArticleOutput) {
        match self.try_get(query).await {
            Ok(article) => output.present_success(article).await,
            Err(ApplicationError::NotFound(message)) => output.present_not_found(message).await,
            Err(other) => {
                tracing::error!(error = %other, "get article failed");
                output
                    .present_server_error(format!("Failed to get article: {other}"))
                    .await;
            }
        }
    }

    async fn try_get(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let article = match ArticleId::parse(&query.id) {
            Ok(id) => self.articles.find_by_id(id).await?,
            Err(_) => None,
        };
        article
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Article not found"))
    }
}
