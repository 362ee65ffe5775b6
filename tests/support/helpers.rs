// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use byline_core::application::commands::articles::CreateArticleCommand;
use byline_core::application::commands::users::RegisterUserCommand;
use byline_core::application::dto::{ArticleDto, UserDto};
use byline_core::application::services::ApplicationServices;
use byline_core::application::CallerIdentity;
use byline_core::domain::user::UserId;
use byline_core::infrastructure::memory::{
    MemoryArticleReadRepository, MemoryArticleWriteRepository, MemoryCommentRepository, MemoryDb,
    MemoryUserRepository,
};

/// Full service graph over a fresh in-memory store, wired with the
/// deterministic security and clock doubles. Every call is an isolated
/// world; nothing leaks between tests.
pub fn build_services() -> ApplicationServices {
    let db = Arc::new(MemoryDb::new());
    ApplicationServices::new(
        Arc::new(MemoryUserRepository::new(Arc::clone(&db))),
        Arc::new(MemoryArticleReadRepository::new(Arc::clone(&db))),
        Arc::new(MemoryArticleWriteRepository::new(Arc::clone(&db))),
        Arc::new(MemoryCommentRepository::new(Arc::clone(&db))),
        Arc::new(mocks::DummyPasswordHasher),
        Arc::new(mocks::DummyTokenManager),
        Arc::new(mocks::FixedClock),
    )
}

/// Registers `name` with a derived email and the password "secret". The
/// store assigns ids sequentially from 1, in registration order.
pub async fn register_user(services: &ApplicationServices, name: &str) -> UserDto {
    services
        .user_commands
        .register(RegisterUserCommand {
            username: name.to_owned(),
            email: format!("{name}@example.com"),
            password: "secret".to_owned(),
        })
        .await
        .expect("register user")
}

pub fn caller(id: i64) -> Option<CallerIdentity> {
    Some(CallerIdentity::new(UserId::new(id).expect("positive id")))
}

/// Publishes an article as `author_id` and returns its view. Description
/// and body are derived from the title.
pub async fn create_article(
    services: &ApplicationServices,
    author_id: i64,
    title: &str,
    tags: &[&str],
) -> ArticleDto {
    services
        .article_commands
        .create_article(
            caller(author_id),
            CreateArticleCommand {
                title: title.to_owned(),
                description: format!("about {title}"),
                body: format!("{title} body"),
                tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
            },
        )
        .await
        .expect("create article")
}
