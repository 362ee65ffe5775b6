// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{
    error::ApplicationResult,
    guard::ensure_article_author,
    identity::{CallerIdentity, require_caller},
    lookup,
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        caller: Option<CallerIdentity>,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let caller = require_caller(caller)?;
        let viewer = lookup::caller_user(self.users.as_ref(), caller).await?;
        let article = lookup::article_by_slug(self.articles_read.as_ref(), &command.slug).await?;

        ensure_article_author(&article, viewer.id)?;

        self.articles_write.delete(article.id).await?;
        Ok(())
    }
}
