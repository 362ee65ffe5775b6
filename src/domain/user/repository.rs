use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::UserId,
};
use async_trait::async_trait;

/// Identity store plus the follow graph between accounts.
///
/// Lookups by username/email take raw strings on purpose: those keys arrive
/// from the outside world and a miss must read as "not found", not as a
/// malformed value.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    async fn is_following(&self, follower: UserId, followee: UserId) -> DomainResult<bool>;

    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()>;

    /// Removing an absent edge is a no-op, not an error.
    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()>;

    async fn following_ids(&self, follower: UserId) -> DomainResult<Vec<UserId>>;
}
