// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::ApplicationResult,
        identity::{CallerIdentity, require_caller},
        lookup,
    },
    domain::article::{ArticleBody, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        caller: Option<CallerIdentity>,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let caller = require_caller(caller)?;
        let author = lookup::caller_user(self.users.as_ref(), caller).await?;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            description: command.description,
            body,
            tags: command.tags,
            author_id: author.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.articles_write.insert(new_article).await?;

        // The creator is the author: never favorited yet, never self-following.
        Ok(ArticleDto::from_article(created, false, false))
    }
}
