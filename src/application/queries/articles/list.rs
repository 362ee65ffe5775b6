use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, ArticleListDto},
    error::ApplicationResult,
    identity::CallerIdentity,
};
use crate::domain::article::ArticleFilter;

pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub author: Option<String>,
    /// Username whose favorites to list. Unknown names drop the filter
    /// instead of failing the query.
    pub favorited: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        caller: Option<CallerIdentity>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleListDto> {
        let favorited_by = match &query.favorited {
            Some(username) => self
                .users
                .find_by_username(username)
                .await
                .ok()
                .flatten()
                .map(|user| user.id),
            None => None,
        };

        let filter = ArticleFilter {
            tag: query.tag,
            author: query.author,
            favorited_by,
        };

        let limit = normalize_limit(query.limit);
        let articles = self.articles_read.list(&filter, limit, query.offset).await?;

        let viewer = self.optional_viewer(caller).await?;

        let mut items = Vec::with_capacity(articles.len());
        for article in articles {
            let (favorited, following) = self.viewer_flags(viewer.as_ref(), &article).await?;
            items.push(ArticleDto::from_article(article, favorited, following));
        }

        Ok(ArticleListDto::new(items))
    }
}

pub(super) fn normalize_limit(limit: u32) -> u32 {
    const DEFAULT_LIMIT: u32 = 20;

    if limit == 0 { DEFAULT_LIMIT } else { limit }
}
