// src/infrastructure/memory/db.rs
use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::domain::{
    article::{Article, ArticleBody, ArticleId, ArticleTitle, Author, Comment, CommentBody, CommentId},
    errors::{DomainError, DomainResult},
    user::User,
};

/// Article row as stored: author and favorites are kept relationally and
/// joined back in on read, mirroring what the SQL adapters would do.
#[derive(Debug, Clone)]
pub(super) struct ArticleRow {
    pub id: i64,
    pub title: ArticleTitle,
    pub description: String,
    pub body: ArticleBody,
    pub tags: Vec<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub(super) struct CommentRow {
    pub id: i64,
    pub body: CommentBody,
    pub article_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub(super) struct Tables {
    pub users: BTreeMap<i64, User>,
    pub articles: BTreeMap<i64, ArticleRow>,
    pub comments: BTreeMap<i64, CommentRow>,
    /// (article id, user id)
    pub favorites: HashSet<(i64, i64)>,
    /// (follower id, followee id)
    pub follows: HashSet<(i64, i64)>,
    next_user_id: i64,
    next_article_id: i64,
    next_comment_id: i64,
}

impl Tables {
    pub fn next_user_id(&mut self) -> i64 {
        self.next_user_id += 1;
        self.next_user_id
    }

    pub fn next_article_id(&mut self) -> i64 {
        self.next_article_id += 1;
        self.next_article_id
    }

    pub fn next_comment_id(&mut self) -> i64 {
        self.next_comment_id += 1;
        self.next_comment_id
    }

    pub fn author(&self, author_id: i64) -> DomainResult<Author> {
        self.users
            .get(&author_id)
            .map(Author::from)
            .ok_or_else(|| DomainError::NotFound("author not found".into()))
    }

    pub fn join_article(&self, row: &ArticleRow) -> DomainResult<Article> {
        let author = self.author(row.author_id)?;
        let favorites_count = self
            .favorites
            .iter()
            .filter(|(article_id, _)| *article_id == row.id)
            .count() as i64;

        Ok(Article {
            id: ArticleId(row.id),
            title: row.title.clone(),
            description: row.description.clone(),
            body: row.body.clone(),
            tags: row.tags.clone(),
            author,
            favorites_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    pub fn join_comment(&self, row: &CommentRow) -> DomainResult<Comment> {
        let author = self.author(row.author_id)?;

        Ok(Comment {
            id: CommentId(row.id),
            body: row.body.clone(),
            article_id: ArticleId(row.article_id),
            author,
            created_at: row.created_at,
        })
    }
}

/// Process-local storage shared by the in-memory repository adapters. One
/// `MemoryDb` plays the role a connection pool does for the SQL adapters:
/// every repository clones the same `Arc` and sees the same tables.
#[derive(Default)]
pub struct MemoryDb {
    inner: Mutex<Tables>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn tables(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().unwrap()
    }
}
