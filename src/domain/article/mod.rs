pub mod comment;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use comment::{Comment, NewComment};
pub use entity::{Article, ArticleUpdate, Author, NewArticle};
pub use repository::{
    ArticleFilter, ArticleReadRepository, ArticleWriteRepository, CommentRepository,
};
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle, CommentBody, CommentId};
