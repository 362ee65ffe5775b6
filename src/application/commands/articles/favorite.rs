// src/application/commands/articles/favorite.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        identity::{CallerIdentity, require_caller},
        lookup,
    },
    domain::article::Article,
    domain::user::User,
};

pub struct FavoriteArticleCommand {
    pub slug: String,
}

pub struct UnfavoriteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Marks the article as favorited by the caller and returns the updated
    /// view. A repeated mark is a store-level no-op.
    pub async fn favorite_article(
        &self,
        caller: Option<CallerIdentity>,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let caller = require_caller(caller)?;
        let viewer = lookup::caller_user(self.users.as_ref(), caller).await?;
        let article = lookup::article_by_slug(self.articles_read.as_ref(), &command.slug).await?;

        let updated = self.articles_write.add_favorite(article.id, viewer.id).await?;

        let following = self.author_following(&viewer, &updated).await?;
        Ok(ArticleDto::from_article(updated, true, following))
    }

    pub async fn unfavorite_article(
        &self,
        caller: Option<CallerIdentity>,
        command: UnfavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let caller = require_caller(caller)?;
        let viewer = lookup::caller_user(self.users.as_ref(), caller).await?;
        let article = lookup::article_by_slug(self.articles_read.as_ref(), &command.slug).await?;

        let updated = self
            .articles_write
            .remove_favorite(article.id, viewer.id)
            .await?;

        let following = self.author_following(&viewer, &updated).await?;
        Ok(ArticleDto::from_article(updated, false, following))
    }

    async fn author_following(&self, viewer: &User, article: &Article) -> ApplicationResult<bool> {
        self.users
            .is_following(viewer.id, article.author.id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to get following status");
                ApplicationError::not_found("internal server error")
            })
    }
}
