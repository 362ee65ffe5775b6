use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profiles::ProfileDto;

/// Viewer-relative article view. `favorited` and the author's `following`
/// flag are computed against the caller at assembly time; anonymous callers
/// always see both as `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: ProfileDto,
}

impl ArticleDto {
    pub fn from_article(article: Article, favorited: bool, author_following: bool) -> Self {
        let author = ProfileDto::from_author(&article.author, author_following);
        Self {
            slug: article.id.slug(),
            title: article.title.into(),
            description: article.description,
            body: article.body.into(),
            tag_list: article.tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited,
            favorites_count: article.favorites_count,
            author,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
    pub articles_count: i64,
}

impl ArticleListDto {
    /// The count reflects the returned page, not the unpaged total.
    pub fn new(articles: Vec<ArticleDto>) -> Self {
        let articles_count = articles.len() as i64;
        Self {
            articles,
            articles_count,
        }
    }
}
