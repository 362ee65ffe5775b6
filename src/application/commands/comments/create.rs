// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::ApplicationResult,
        identity::{CallerIdentity, require_caller},
        lookup,
    },
    domain::article::{CommentBody, NewComment},
};

pub struct CreateCommentCommand {
    pub slug: String,
    pub body: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        caller: Option<CallerIdentity>,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let caller = require_caller(caller)?;
        let author = lookup::caller_user(self.users.as_ref(), caller).await?;
        let article = lookup::article_by_slug(self.articles_read.as_ref(), &command.slug).await?;

        let body = CommentBody::new(command.body)?;

        let new_comment = NewComment {
            body,
            article_id: article.id,
            author_id: author.id,
            created_at: self.clock.now(),
        };

        let created = self.comments.insert(new_comment).await?;

        // The commenter is the author of the returned snapshot.
        Ok(CommentDto::from_comment(created, false))
    }
}
