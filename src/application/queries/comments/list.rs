use super::CommentQueryService;
use crate::application::{
    dto::CommentDto, error::ApplicationResult, identity::CallerIdentity, lookup,
};

pub struct ListCommentsQuery {
    pub slug: String,
}

impl CommentQueryService {
    /// Comments under one article, oldest first, each author flagged with
    /// the caller's follow relation. Anonymous callers see `following:
    /// false` everywhere.
    pub async fn list_comments(
        &self,
        caller: Option<CallerIdentity>,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article = lookup::article_by_slug(self.articles_read.as_ref(), &query.slug).await?;

        let comments = self.comments.list_for_article(article.id).await?;

        let viewer = match caller {
            Some(caller) => Some(lookup::caller_user(self.users.as_ref(), caller).await?),
            None => None,
        };

        let mut items = Vec::with_capacity(comments.len());
        for comment in comments {
            let following = match &viewer {
                Some(viewer) => {
                    self.users
                        .is_following(viewer.id, comment.author.id)
                        .await?
                }
                None => false,
            };
            items.push(CommentDto::from_comment(comment, following));
        }

        Ok(items)
    }
}
