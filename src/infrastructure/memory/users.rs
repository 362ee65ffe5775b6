// src/infrastructure/memory/users.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::db::MemoryDb;
use crate::domain::{
    errors::{DomainError, DomainResult},
    user::{NewUser, User, UserId, UserRepository, UserUpdate},
};

pub struct MemoryUserRepository {
    db: Arc<MemoryDb>,
}

impl MemoryUserRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.db.tables();

        let username_taken = tables
            .users
            .values()
            .any(|user| user.username == new_user.username);
        if username_taken {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        let email_taken = tables
            .users
            .values()
            .any(|user| user.email == new_user.email);
        if email_taken {
            return Err(DomainError::Conflict("email already exists".into()));
        }

        let id = tables.next_user_id();
        let user = User {
            id: UserId(id),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            bio: new_user.bio,
            image: new_user.image,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut tables = self.db.tables();
        let id = i64::from(update.id);

        let current = tables
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(username) = &update.username {
            let taken = tables
                .users
                .values()
                .any(|user| user.username == *username && i64::from(user.id) != id);
            if taken {
                return Err(DomainError::Conflict("username already exists".into()));
            }
        }

        if let Some(email) = &update.email {
            let taken = tables
                .users
                .values()
                .any(|user| user.email == *email && i64::from(user.id) != id);
            if taken {
                return Err(DomainError::Conflict("email already exists".into()));
            }
        }

        let updated = User {
            id: current.id,
            username: update.username.unwrap_or(current.username),
            email: update.email.unwrap_or(current.email),
            password_hash: update.password_hash.unwrap_or(current.password_hash),
            bio: update.bio.unwrap_or(current.bio),
            image: update.image.unwrap_or(current.image),
        };
        tables.users.insert(id, updated.clone());
        Ok(updated)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let tables = self.db.tables();
        Ok(tables.users.get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let tables = self.db.tables();
        Ok(tables
            .users
            .values()
            .find(|user| user.username.as_str() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let tables = self.db.tables();
        Ok(tables
            .users
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn is_following(&self, follower: UserId, followee: UserId) -> DomainResult<bool> {
        let tables = self.db.tables();
        Ok(tables
            .follows
            .contains(&(i64::from(follower), i64::from(followee))))
    }

    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        let mut tables = self.db.tables();
        tables
            .follows
            .insert((i64::from(follower), i64::from(followee)));
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        let mut tables = self.db.tables();
        tables
            .follows
            .remove(&(i64::from(follower), i64::from(followee)));
        Ok(())
    }

    async fn following_ids(&self, follower: UserId) -> DomainResult<Vec<UserId>> {
        let tables = self.db.tables();
        let follower = i64::from(follower);
        let mut ids: Vec<i64> = tables
            .follows
            .iter()
            .filter(|(from, _)| *from == follower)
            .map(|(_, to)| *to)
            .collect();
        ids.sort_unstable();
        Ok(ids.into_iter().map(UserId).collect())
    }
}
