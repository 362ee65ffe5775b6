use crate::domain::article::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profiles::ProfileDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author: ProfileDto,
}

impl CommentDto {
    pub fn from_comment(comment: Comment, author_following: bool) -> Self {
        let author = ProfileDto::from_author(&comment.author, author_following);
        Self {
            id: comment.id.into(),
            body: comment.body.into(),
            created_at: comment.created_at,
            author,
        }
    }
}
