// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        guard::{ensure_comment_author, ensure_comment_in_article},
        identity::{CallerIdentity, require_caller},
        lookup,
    },
    domain::article::CommentId,
};

pub struct DeleteCommentCommand {
    pub slug: String,
    pub id: i64,
}

impl CommentCommandService {
    /// Deletion is addressed by (slug, comment id). The comment must exist,
    /// must live under the addressed article, and must belong to the caller;
    /// the checks run in that order.
    pub async fn delete_comment(
        &self,
        caller: Option<CallerIdentity>,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let caller = require_caller(caller)?;
        let viewer = lookup::caller_user(self.users.as_ref(), caller).await?;

        let comment_id = CommentId::new(command.id)?;
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, comment_id = command.id, "failed to load comment");
                ApplicationError::validation("failed to get comment")
            })?
            .ok_or_else(|| ApplicationError::validation("failed to get comment"))?;

        let article = lookup::article_by_slug(self.articles_read.as_ref(), &command.slug).await?;

        ensure_comment_in_article(&comment, article.id)?;
        ensure_comment_author(&comment, viewer.id)?;

        self.comments.delete(comment.id).await?;
        Ok(())
    }
}
