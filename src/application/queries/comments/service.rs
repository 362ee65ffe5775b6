use std::sync::Arc;

use crate::domain::{
    article::{ArticleReadRepository, CommentRepository},
    user::UserRepository,
};

pub struct CommentQueryService {
    pub(super) comments: Arc<dyn CommentRepository>,
    pub(super) articles_read: Arc<dyn ArticleReadRepository>,
    pub(super) users: Arc<dyn UserRepository>,
}

impl CommentQueryService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        articles_read: Arc<dyn ArticleReadRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            comments,
            articles_read,
            users,
        }
    }
}
