use super::{ArticleQueryService, list::normalize_limit};
use crate::application::{
    dto::{ArticleDto, ArticleListDto},
    error::ApplicationResult,
    identity::{CallerIdentity, require_caller},
    lookup,
};

pub struct FeedArticlesQuery {
    pub limit: u32,
    pub offset: u32,
}

impl ArticleQueryService {
    /// Articles authored by accounts the caller follows, newest first.
    /// Following nobody yields an empty page rather than an error, and every
    /// author in the result is by construction a followee.
    pub async fn feed_articles(
        &self,
        caller: Option<CallerIdentity>,
        query: FeedArticlesQuery,
    ) -> ApplicationResult<ArticleListDto> {
        let caller = require_caller(caller)?;
        let viewer = lookup::caller_user(self.users.as_ref(), caller).await?;

        let authors = self.users.following_ids(viewer.id).await?;
        if authors.is_empty() {
            return Ok(ArticleListDto::new(Vec::new()));
        }

        let limit = normalize_limit(query.limit);
        let articles = self
            .articles_read
            .list_feed(&authors, limit, query.offset)
            .await?;

        let mut items = Vec::with_capacity(articles.len());
        for article in articles {
            let favorited = self
                .articles_read
                .is_favorited(article.id, viewer.id)
                .await?;
            items.push(ArticleDto::from_article(article, favorited, true));
        }

        Ok(ArticleListDto::new(items))
    }
}
