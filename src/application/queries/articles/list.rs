// src/application/queries/articles/list.rs
use super::ArticleQueryHandlers;
use crate::{
    application::{
        dto::{ArticleDto, ArticleListDto},
        error::ApplicationResult,
        ports::{cache, outputs::ListArticlesOutput},
    },
    domain::article::{PageResult, PaginationOptions},
};

pub struct GetAllArticlesQuery {
    pub options: Option<PaginationOptions>,
}

impl ArticleQueryHandlers {
    pub async fn get_all_articles(
        &self,
        query: GetAllArticlesQuery,
        output: &dyn ListArticlesOutput,
    ) {
        match self.try_list(query).await {
            Ok(articles) => output.present_success(articles).await,
            Err(err) => {
                tracing::error!(error = %err, "list articles failed");
                output
                    .present_server_error(format!("Failed to get articles: {err}"))
                    .await;
            }
        }
    }

    async fn try_list(&self, query: GetAllArticlesQuery) -> ApplicationResult<ArticleListDto> {
        // Legacy path: no options means the full list, straight from the
        // repository. Kept separate from the cached path on purpose.
        let Some(options) = query.options else {
            let articles = self.articles.find_all().await?;
            return Ok(ArticleListDto::Full(
                articles.into_iter().map(Into::into).collect(),
            ));
        };

        let key = Self::cache_key(&options);
        if let Some(page) =
            cache::get_json::<PageResult<ArticleDto>>(self.cache.as_ref(), &key).await?
        {
            tracing::debug!(%key, "article page served from cache");
            return Ok(ArticleListDto::Paginated(page));
        }

        let page = self.articles.find_page(&options).await?.map(ArticleDto::from);
        cache::set_json(self.cache.as_ref(), &key, &page, self.cache_ttl).await?;
        Ok(ArticleListDto::Paginated(page))
    }

    /// Same option set -> same key, whatever order the parameters were
    /// assembled in.
    pub fn cache_key(options: &PaginationOptions) -> String {
        cache::generate_key(
            "articles",
            &[
                ("page", Some(options.page.to_string())),
                ("limit", Some(options.limit.to_string())),
                ("sortBy", Some(options.sort_by.as_str().to_string())),
                ("sortOrder", Some(options.sort_order.as_str().to_string())),
                ("search", options.search.clone()),
                ("authorId", options.author_id.map(|id| id.to_string())),
                ("published", options.published.map(|p| p.to_string())),
            ],
        )
    }
}
