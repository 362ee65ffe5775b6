// src/application/guard.rs
//! Authorization and containment checks shared by the command services.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{Article, ArticleId, Comment};
use crate::domain::user::UserId;

/// Only the author may mutate an article.
pub fn ensure_article_author(article: &Article, caller: UserId) -> ApplicationResult<()> {
    if article.author.id == caller {
        Ok(())
    } else {
        Err(ApplicationError::forbidden("forbidden"))
    }
}

/// Only the author may delete a comment.
pub fn ensure_comment_author(comment: &Comment, caller: UserId) -> ApplicationResult<()> {
    if comment.author.id == caller {
        Ok(())
    } else {
        Err(ApplicationError::forbidden("forbidden"))
    }
}

/// A comment addressed through an article's slug must actually live under
/// that article. The delete flow runs this before the ownership check.
pub fn ensure_comment_in_article(comment: &Comment, article_id: ArticleId) -> ApplicationResult<()> {
    if comment.belongs_to(article_id) {
        Ok(())
    } else {
        Err(ApplicationError::validation(
            "the comment is not in the article",
        ))
    }
}

/// Follow edges are between distinct accounts; `message` names the attempted
/// operation ("cannot follow yourself" / "cannot unfollow yourself").
pub fn ensure_distinct_users(
    caller: UserId,
    target: UserId,
    message: &str,
) -> ApplicationResult<()> {
    if caller == target {
        Err(ApplicationError::validation(message))
    } else {
        Ok(())
    }
}
