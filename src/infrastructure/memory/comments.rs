// src/infrastructure/memory/comments.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::db::{CommentRow, MemoryDb};
use crate::domain::{
    article::{ArticleId, Comment, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
};

pub struct MemoryCommentRepository {
    db: Arc<MemoryDb>,
}

impl MemoryCommentRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.db.tables();
        let article_id = i64::from(comment.article_id);
        let author_id = i64::from(comment.author_id);

        if !tables.articles.contains_key(&article_id) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        if !tables.users.contains_key(&author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }

        let id = tables.next_comment_id();
        let row = CommentRow {
            id,
            body: comment.body,
            article_id,
            author_id,
            created_at: comment.created_at,
        };
        let created = tables.join_comment(&row)?;
        tables.comments.insert(id, row);
        Ok(created)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let tables = self.db.tables();
        match tables.comments.get(&i64::from(id)) {
            Some(row) => Ok(Some(tables.join_comment(row)?)),
            None => Ok(None),
        }
    }

    async fn list_for_article(&self, article: ArticleId) -> DomainResult<Vec<Comment>> {
        let tables = self.db.tables();
        let article = i64::from(article);

        // Oldest first; map order is insertion order here because ids ascend.
        tables
            .comments
            .values()
            .filter(|row| row.article_id == article)
            .map(|row| tables.join_comment(row))
            .collect()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut tables = self.db.tables();
        tables
            .comments
            .remove(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        Ok(())
    }
}
