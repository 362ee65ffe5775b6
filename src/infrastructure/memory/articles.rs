// src/infrastructure/memory/articles.rs
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use async_trait::async_trait;

use super::db::{ArticleRow, MemoryDb};
use crate::domain::{
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleUpdate,
        ArticleWriteRepository, NewArticle,
    },
    errors::{DomainError, DomainResult},
    user::UserId,
};

pub struct MemoryArticleReadRepository {
    db: Arc<MemoryDb>,
}

impl MemoryArticleReadRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

pub struct MemoryArticleWriteRepository {
    db: Arc<MemoryDb>,
}

impl MemoryArticleWriteRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

fn page(rows: Vec<&ArticleRow>, limit: u32, offset: u32) -> Vec<&ArticleRow> {
    rows.into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

#[async_trait]
impl ArticleReadRepository for MemoryArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let tables = self.db.tables();
        match tables.articles.get(&i64::from(id)) {
            Some(row) => Ok(Some(tables.join_article(row)?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        let tables = self.db.tables();
        let favorited_by = filter.favorited_by.map(i64::from);

        // Newest first; filters are conjunctive.
        let mut rows: Vec<&ArticleRow> = Vec::new();
        for row in tables.articles.values().rev() {
            if let Some(tag) = &filter.tag {
                if !row.tags.iter().any(|t| t == tag) {
                    continue;
                }
            }
            if let Some(author) = &filter.author {
                if tables.author(row.author_id)?.username != *author {
                    continue;
                }
            }
            if let Some(user_id) = favorited_by {
                if !tables.favorites.contains(&(row.id, user_id)) {
                    continue;
                }
            }
            rows.push(row);
        }

        page(rows, limit, offset)
            .into_iter()
            .map(|row| tables.join_article(row))
            .collect()
    }

    async fn list_feed(
        &self,
        authors: &[UserId],
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        let tables = self.db.tables();
        let authors: HashSet<i64> = authors.iter().copied().map(i64::from).collect();

        let rows: Vec<&ArticleRow> = tables
            .articles
            .values()
            .rev()
            .filter(|row| authors.contains(&row.author_id))
            .collect();

        page(rows, limit, offset)
            .into_iter()
            .map(|row| tables.join_article(row))
            .collect()
    }

    async fn is_favorited(&self, article: ArticleId, user: UserId) -> DomainResult<bool> {
        let tables = self.db.tables();
        Ok(tables
            .favorites
            .contains(&(i64::from(article), i64::from(user))))
    }

    async fn tags(&self) -> DomainResult<Vec<String>> {
        let tables = self.db.tables();
        let tags: BTreeSet<String> = tables
            .articles
            .values()
            .flat_map(|row| row.tags.iter().cloned())
            .collect();
        Ok(tags.into_iter().collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for MemoryArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut tables = self.db.tables();
        let author_id = i64::from(article.author_id);
        if !tables.users.contains_key(&author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }

        let id = tables.next_article_id();
        let row = ArticleRow {
            id,
            title: article.title,
            description: article.description,
            body: article.body,
            tags: article.tags,
            author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        let created = tables.join_article(&row)?;
        tables.articles.insert(id, row);
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut tables = self.db.tables();
        let id = i64::from(update.id);

        let row = tables
            .articles
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(description) = update.description {
            row.description = description;
        }
        if let Some(body) = update.body {
            row.body = body;
        }
        row.updated_at = update.updated_at;

        let row = row.clone();
        tables.join_article(&row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut tables = self.db.tables();
        let id = i64::from(id);

        tables
            .articles
            .remove(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        // Dependent rows go with the article.
        tables.comments.retain(|_, row| row.article_id != id);
        tables.favorites.retain(|(article_id, _)| *article_id != id);
        Ok(())
    }

    async fn add_favorite(&self, article: ArticleId, user: UserId) -> DomainResult<Article> {
        let mut tables = self.db.tables();
        let article_id = i64::from(article);
        let user_id = i64::from(user);

        let row = tables
            .articles
            .get(&article_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if !tables.users.contains_key(&user_id) {
            return Err(DomainError::NotFound("user not found".into()));
        }

        tables.favorites.insert((article_id, user_id));
        tables.join_article(&row)
    }

    async fn remove_favorite(&self, article: ArticleId, user: UserId) -> DomainResult<Article> {
        let mut tables = self.db.tables();
        let article_id = i64::from(article);

        let row = tables
            .articles
            .get(&article_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        tables.favorites.remove(&(article_id, i64::from(user)));
        tables.join_article(&row)
    }
}
