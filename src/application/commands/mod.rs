pub mod articles;
pub mod comments;
pub mod profiles;
pub mod users;

pub use articles::{
    ArticleCommandService, CreateArticleCommand, DeleteArticleCommand, FavoriteArticleCommand,
    UnfavoriteArticleCommand, UpdateArticleCommand,
};
pub use comments::{CommentCommandService, CreateCommentCommand, DeleteCommentCommand};
pub use profiles::{FollowUserCommand, ProfileCommandService, UnfollowUserCommand};
pub use users::{LoginUserCommand, RegisterUserCommand, UpdateUserCommand, UserCommandService};
