// tests/support/mocks/stores.rs
use std::sync::Arc;

use async_trait::async_trait;

use byline_core::domain::article::{Article, ArticleFilter, ArticleId, ArticleReadRepository};
use byline_core::domain::errors::{DomainError, DomainResult};
use byline_core::domain::user::{NewUser, User, UserId, UserRepository, UserUpdate};
use byline_core::infrastructure::memory::{MemoryArticleReadRepository, MemoryUserRepository};

/// Wraps the in-memory user store and fails every follow lookup while the
/// rest of the trait keeps working. For exercising paths that hit the
/// follow graph mid-read.
pub struct FailingFollows {
    pub inner: Arc<MemoryUserRepository>,
}

#[async_trait]
impl UserRepository for FailingFollows {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        self.inner.insert(new_user).await
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        self.inner.update(update).await
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        self.inner.find_by_username(username).await
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.inner.find_by_email(email).await
    }

    async fn is_following(&self, _follower: UserId, _followee: UserId) -> DomainResult<bool> {
        Err(DomainError::persistence("follows relation unavailable"))
    }

    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.inner.follow(follower, followee).await
    }

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.inner.unfollow(follower, followee).await
    }

    async fn following_ids(&self, follower: UserId) -> DomainResult<Vec<UserId>> {
        self.inner.following_ids(follower).await
    }
}

/// Wraps the in-memory article read store and fails every favorite lookup.
pub struct FailingFavorites {
    pub inner: Arc<MemoryArticleReadRepository>,
}

#[async_trait]
impl ArticleReadRepository for FailingFavorites {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.inner.find_by_id(id).await
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        self.inner.list(filter, limit, offset).await
    }

    async fn list_feed(
        &self,
        authors: &[UserId],
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        self.inner.list_feed(authors, limit, offset).await
    }

    async fn is_favorited(&self, _article: ArticleId, _user: UserId) -> DomainResult<bool> {
        Err(DomainError::persistence("favorites relation unavailable"))
    }

    async fn tags(&self) -> DomainResult<Vec<String>> {
        self.inner.tags().await
    }
}
