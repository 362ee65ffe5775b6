// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::{ArticleReadRepository, CommentRepository},
        user::UserRepository,
    },
};

pub struct CommentCommandService {
    pub(super) comments: Arc<dyn CommentRepository>,
    pub(super) articles_read: Arc<dyn ArticleReadRepository>,
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        articles_read: Arc<dyn ArticleReadRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comments,
            articles_read,
            users,
            clock,
        }
    }
}
