use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto, error::ApplicationResult, identity::CallerIdentity, lookup,
};

pub struct GetArticleQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Single-article read, open to anonymous callers. A malformed slug and
    /// a missing article answer identically.
    pub async fn get_article(
        &self,
        caller: Option<CallerIdentity>,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let article = lookup::article_by_slug(self.articles_read.as_ref(), &query.slug).await?;

        let viewer = self.optional_viewer(caller).await?;
        let (favorited, following) = self.viewer_flags(viewer.as_ref(), &article).await?;

        Ok(ArticleDto::from_article(article, favorited, following))
    }
}
