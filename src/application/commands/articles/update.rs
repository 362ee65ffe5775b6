use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::ApplicationResult,
        guard::ensure_article_author,
        identity::{CallerIdentity, require_caller},
        lookup,
    },
    domain::article::{ArticleBody, ArticleTitle, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    /// Partial update by the article's author. Present fields are validated
    /// and replace the stored values; absent fields are untouched. The store
    /// re-stamps `updated_at` from our clock either way.
    pub async fn update_article(
        &self,
        caller: Option<CallerIdentity>,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let caller = require_caller(caller)?;
        let viewer = lookup::caller_user(self.users.as_ref(), caller).await?;
        let article = lookup::article_by_slug(self.articles_read.as_ref(), &command.slug).await?;

        ensure_article_author(&article, viewer.id)?;

        let mut update = ArticleUpdate::new(article.id, self.clock.now());

        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }

        if let Some(description) = command.description {
            update = update.with_description(description);
        }

        if let Some(body) = command.body {
            update = update.with_body(ArticleBody::new(body)?);
        }

        let updated = self.articles_write.update(update).await?;

        let favorited = self
            .articles_read
            .is_favorited(updated.id, viewer.id)
            .await?;

        // The caller is the author; no one follows themselves.
        Ok(ArticleDto::from_article(updated, favorited, false))
    }
}
