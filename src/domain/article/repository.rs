use crate::domain::article::comment::{Comment, NewComment};
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, CommentId};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Optional conjunctive filters for article listings.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited_by: Option<UserId>,
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Newest-first page of articles matching every present filter.
    async fn list(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>>;

    /// Newest-first page of articles authored by any of `authors`.
    async fn list_feed(
        &self,
        authors: &[UserId],
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>>;

    async fn is_favorited(&self, article: ArticleId, user: UserId) -> DomainResult<bool>;

    async fn tags(&self) -> DomainResult<Vec<String>>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;

    /// Marking twice is a no-op; both calls return the current article.
    async fn add_favorite(&self, article: ArticleId, user: UserId) -> DomainResult<Article>;

    async fn remove_favorite(&self, article: ArticleId, user: UserId) -> DomainResult<Article>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    /// Comments for one article, oldest first.
    async fn list_for_article(&self, article: ArticleId) -> DomainResult<Vec<Comment>>;

    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
