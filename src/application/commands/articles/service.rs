// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) articles_read: Arc<dyn ArticleReadRepository>,
    pub(super) articles_write: Arc<dyn ArticleWriteRepository>,
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        articles_read: Arc<dyn ArticleReadRepository>,
        articles_write: Arc<dyn ArticleWriteRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            articles_read,
            articles_write,
            users,
            clock,
        }
    }
}
