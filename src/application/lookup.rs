// src/application/lookup.rs
//! Resolution steps shared by several services: the authenticated caller's
//! account row, and an article addressed by its outward slug.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::identity::CallerIdentity;
use crate::domain::article::{Article, ArticleId, ArticleReadRepository};
use crate::domain::user::{User, UserRepository};

/// Loads the account behind an authenticated caller. A valid token whose
/// account has disappeared is reported as not-found, not as an auth failure.
pub(crate) async fn caller_user(
    users: &dyn UserRepository,
    caller: CallerIdentity,
) -> ApplicationResult<User> {
    users
        .find_by_id(caller.user_id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("user not found"))
}

/// Resolves a slug to a stored article. Parse failures, lookup misses, and
/// store failures all collapse into the same invalid-argument answer.
pub(crate) async fn article_by_slug(
    articles: &dyn ArticleReadRepository,
    slug: &str,
) -> ApplicationResult<Article> {
    let id = ArticleId::from_slug(slug)?;
    articles
        .find_by_id(id)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, slug, "failed to load article");
            ApplicationError::validation("invalid article id")
        })?
        .ok_or_else(|| ApplicationError::validation("invalid article id"))
}
