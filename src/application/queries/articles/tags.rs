use super::ArticleQueryService;
use crate::application::error::ApplicationResult;

impl ArticleQueryService {
    /// Every distinct tag in the content store. Anonymous; no paging.
    pub async fn get_tags(&self) -> ApplicationResult<Vec<String>> {
        let tags = self.articles_read.tags().await?;
        Ok(tags)
    }
}
