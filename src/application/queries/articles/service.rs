use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        identity::CallerIdentity,
        lookup,
    },
    domain::{
        article::{Article, ArticleReadRepository},
        user::{User, UserRepository},
    },
};

pub struct ArticleQueryService {
    pub(super) articles_read: Arc<dyn ArticleReadRepository>,
    pub(super) users: Arc<dyn UserRepository>,
}

impl ArticleQueryService {
    pub fn new(articles_read: Arc<dyn ArticleReadRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            articles_read,
            users,
        }
    }

    /// Computes the two viewer-relative flags on an article view. Anonymous
    /// viewers get `(false, false)` without touching the stores.
    pub(super) async fn viewer_flags(
        &self,
        viewer: Option<&User>,
        article: &Article,
    ) -> ApplicationResult<(bool, bool)> {
        let Some(viewer) = viewer else {
            return Ok((false, false));
        };

        let favorited = self
            .articles_read
            .is_favorited(article.id, viewer.id)
            .await?;

        let following = self
            .users
            .is_following(viewer.id, article.author.id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to get following status");
                ApplicationError::not_found("internal server error")
            })?;

        Ok((favorited, following))
    }

    pub(super) async fn optional_viewer(
        &self,
        caller: Option<CallerIdentity>,
    ) -> ApplicationResult<Option<User>> {
        match caller {
            Some(caller) => Ok(Some(
                lookup::caller_user(self.users.as_ref(), caller).await?,
            )),
            None => Ok(None),
        }
    }
}
