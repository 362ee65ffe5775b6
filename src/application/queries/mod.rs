pub mod articles;
pub mod comments;
pub mod profiles;
pub mod users;

pub use articles::{ArticleQueryService, FeedArticlesQuery, GetArticleQuery, ListArticlesQuery};
pub use comments::{CommentQueryService, ListCommentsQuery};
pub use profiles::{ProfileQueryService, ShowProfileQuery};
pub use users::UserQueryService;
