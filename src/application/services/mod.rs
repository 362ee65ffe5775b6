// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            profiles::ProfileCommandService, users::UserCommandService,
        },
        identity::CallerIdentity,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            profiles::ProfileQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, CommentRepository},
        user::UserRepository,
    },
};

/// One value owning every command/query service, wired over shared store and
/// port handles. Transports keep a single `ApplicationServices` and never
/// touch the stores directly.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserRepository>,
        articles_read: Arc<dyn ArticleReadRepository>,
        articles_write: Arc<dyn ArticleWriteRepository>,
        comments: Arc<dyn CommentRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&articles_read),
            Arc::clone(&articles_write),
            Arc::clone(&users),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&articles_read),
            Arc::clone(&users),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comments),
            Arc::clone(&articles_read),
            Arc::clone(&users),
            Arc::clone(&clock),
        ));

        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comments),
            Arc::clone(&articles_read),
            Arc::clone(&users),
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(Arc::clone(&users)));
        let profile_queries = Arc::new(ProfileQueryService::new(Arc::clone(&users)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&users),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
        ));

        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&users),
            Arc::clone(&token_manager),
        ));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            profile_commands,
            profile_queries,
            user_commands,
            user_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolves a raw bearer token to a caller identity. Transports call
    /// this once per request and hand the result to whichever operation
    /// they invoke.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> crate::application::ApplicationResult<CallerIdentity> {
        self.token_manager.authenticate(token).await
    }
}
