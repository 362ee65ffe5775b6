// tests/article_services.rs
mod support;

use std::sync::Arc;

use support::helpers::{build_services, caller, create_article, register_user};
use support::mocks::{
    fixed_now, DummyPasswordHasher, DummyTokenManager, FailingFavorites, FailingFollows,
    FixedClock,
};

use byline_core::application::commands::articles::{
    CreateArticleCommand, DeleteArticleCommand, FavoriteArticleCommand, UnfavoriteArticleCommand,
    UpdateArticleCommand,
};
use byline_core::application::commands::profiles::FollowUserCommand;
use byline_core::application::queries::articles::{
    FeedArticlesQuery, GetArticleQuery, ListArticlesQuery,
};
use byline_core::application::services::ApplicationServices;
use byline_core::infrastructure::memory::{
    MemoryArticleReadRepository, MemoryArticleWriteRepository, MemoryCommentRepository, MemoryDb,
    MemoryUserRepository,
};
use byline_core::presentation::{Code, IntoStatusResult};

#[tokio::test]
async fn create_article_fills_viewer_defaults() {
    let services = build_services();
    register_user(&services, "alice").await;

    let article = create_article(&services, 1, "Postgres at scale", &["db", "ops"]).await;

    assert_eq!(article.slug, "1");
    assert_eq!(article.title, "Postgres at scale");
    assert_eq!(article.tag_list, vec!["db", "ops"]);
    assert_eq!(article.created_at, fixed_now());
    assert_eq!(article.updated_at, fixed_now());
    assert!(!article.favorited);
    assert_eq!(article.favorites_count, 0);
    assert_eq!(article.author.username, "alice");
    assert!(!article.author.following);
}

#[tokio::test]
async fn create_article_requires_identity() {
    let services = build_services();

    let status = services
        .article_commands
        .create_article(
            None,
            CreateArticleCommand {
                title: "Untitled".into(),
                description: String::new(),
                body: "text".into(),
                tags: Vec::new(),
            },
        )
        .await
        .into_status()
        .unwrap_err();
    assert_eq!(status.code(), Code::Unauthenticated);
    assert_eq!(status.message(), "unauthenticated");
}

#[tokio::test]
async fn create_article_rejects_a_blank_title() {
    let services = build_services();
    register_user(&services, "alice").await;

    let status = services
        .article_commands
        .create_article(
            caller(1),
            CreateArticleCommand {
                title: "   ".into(),
                description: String::new(),
                body: "text".into(),
                tags: Vec::new(),
            },
        )
        .await
        .into_status()
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "title cannot be empty");
}

#[tokio::test]
async fn get_article_is_open_to_anonymous_readers() {
    let services = build_services();
    register_user(&services, "alice").await;
    create_article(&services, 1, "Hello", &[]).await;

    let article = services
        .article_queries
        .get_article(None, GetArticleQuery { slug: "1".into() })
        .await
        .expect("get article");
    assert_eq!(article.title, "Hello");
    assert!(!article.favorited);
    assert!(!article.author.following);
}

#[tokio::test]
async fn get_article_treats_bad_and_missing_slugs_alike() {
    let services = build_services();

    for slug in ["abc", "0", "-3", "12junk", "7"] {
        let status = services
            .article_queries
            .get_article(None, GetArticleQuery { slug: slug.into() })
            .await
            .into_status()
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument, "slug {slug:?}");
        assert_eq!(status.message(), "invalid article id", "slug {slug:?}");
    }
}

#[tokio::test]
async fn list_articles_defaults_the_page_size() {
    let services = build_services();
    register_user(&services, "alice").await;
    for n in 1..=25 {
        create_article(&services, 1, &format!("post {n}"), &[]).await;
    }

    let page = services
        .article_queries
        .list_articles(
            None,
            ListArticlesQuery {
                tag: None,
                author: None,
                favorited: None,
                limit: 0,
                offset: 0,
            },
        )
        .await
        .expect("list articles");
    assert_eq!(page.articles_count, 20);
    assert_eq!(page.articles[0].title, "post 25");
    assert_eq!(page.articles[19].title, "post 6");

    let rest = services
        .article_queries
        .list_articles(
            None,
            ListArticlesQuery {
                tag: None,
                author: None,
                favorited: None,
                limit: 0,
                offset: 20,
            },
        )
        .await
        .expect("list articles");
    assert_eq!(rest.articles_count, 5);
    assert_eq!(rest.articles[0].title, "post 5");
}

#[tokio::test]
async fn list_articles_applies_filters_conjunctively() {
    let services = build_services();
    register_user(&services, "alice").await;
    register_user(&services, "bob").await;
    create_article(&services, 1, "rust tips", &["rust"]).await;
    create_article(&services, 1, "go tips", &["go"]).await;
    create_article(&services, 2, "rust tricks", &["rust"]).await;

    let page = services
        .article_queries
        .list_articles(
            None,
            ListArticlesQuery {
                tag: Some("rust".into()),
                author: Some("alice".into()),
                favorited: None,
                limit: 0,
                offset: 0,
            },
        )
        .await
        .expect("list articles");
    assert_eq!(page.articles_count, 1);
    assert_eq!(page.articles[0].title, "rust tips");
}

#[tokio::test]
async fn list_articles_by_favoriting_user() {
    let services = build_services();
    register_user(&services, "alice").await;
    register_user(&services, "bob").await;
    create_article(&services, 1, "first", &[]).await;
    create_article(&services, 1, "second", &[]).await;

    services
        .article_commands
        .favorite_article(caller(2), FavoriteArticleCommand { slug: "2".into() })
        .await
        .expect("favorite");

    let page = services
        .article_queries
        .list_articles(
            None,
            ListArticlesQuery {
                tag: None,
                author: None,
                favorited: Some("bob".into()),
                limit: 0,
                offset: 0,
            },
        )
        .await
        .expect("list articles");
    assert_eq!(page.articles_count, 1);
    assert_eq!(page.articles[0].title, "second");

    // An unknown username drops the filter instead of failing the query.
    let page = services
        .article_queries
        .list_articles(
            None,
            ListArticlesQuery {
                tag: None,
                author: None,
                favorited: Some("ghost".into()),
                limit: 0,
                offset: 0,
            },
        )
        .await
        .expect("list articles");
    assert_eq!(page.articles_count, 2);
}

#[tokio::test]
async fn feed_requires_identity() {
    let services = build_services();

    let status = services
        .article_queries
        .feed_articles(None, FeedArticlesQuery { limit: 0, offset: 0 })
        .await
        .into_status()
        .unwrap_err();
    assert_eq!(status.code(), Code::Unauthenticated);
}

#[tokio::test]
async fn feed_is_scoped_to_followed_authors() {
    let services = build_services();
    register_user(&services, "alice").await;
    register_user(&services, "bob").await;
    register_user(&services, "carol").await;
    create_article(&services, 2, "bob one", &[]).await;
    create_article(&services, 3, "carol one", &[]).await;
    create_article(&services, 2, "bob two", &[]).await;

    // Following nobody yields an empty page, not an error.
    let page = services
        .article_queries
        .feed_articles(caller(1), FeedArticlesQuery { limit: 0, offset: 0 })
        .await
        .expect("feed");
    assert_eq!(page.articles_count, 0);

    services
        .profile_commands
        .follow_user(
            caller(1),
            FollowUserCommand {
                username: "bob".into(),
            },
        )
        .await
        .expect("follow");

    let page = services
        .article_queries
        .feed_articles(caller(1), FeedArticlesQuery { limit: 0, offset: 0 })
        .await
        .expect("feed");
    assert_eq!(page.articles_count, 2);
    assert_eq!(page.articles[0].title, "bob two");
    assert_eq!(page.articles[1].title, "bob one");
    assert!(page.articles.iter().all(|article| article.author.following));
}

#[tokio::test]
async fn update_article_replaces_only_present_fields() {
    let services = build_services();
    register_user(&services, "alice").await;
    create_article(&services, 1, "Draft", &["draft"]).await;

    let updated = services
        .article_commands
        .update_article(
            caller(1),
            UpdateArticleCommand {
                slug: "1".into(),
                title: None,
                description: None,
                body: Some("revised body".into()),
            },
        )
        .await
        .expect("update article");

    assert_eq!(updated.title, "Draft");
    assert_eq!(updated.description, "about Draft");
    assert_eq!(updated.body, "revised body");
    assert_eq!(updated.tag_list, vec!["draft"]);
}

#[tokio::test]
async fn update_article_is_restricted_to_the_author() {
    let services = build_services();
    register_user(&services, "alice").await;
    register_user(&services, "bob").await;
    create_article(&services, 1, "Mine", &[]).await;

    let status = services
        .article_commands
        .update_article(
            caller(2),
            UpdateArticleCommand {
                slug: "1".into(),
                title: Some("Hijacked".into()),
                description: None,
                body: None,
            },
        )
        .await
        .into_status()
        .unwrap_err();
    assert_eq!(status.code(), Code::PermissionDenied);
    assert_eq!(status.message(), "forbidden");

    // Nothing was written.
    let article = services
        .article_queries
        .get_article(None, GetArticleQuery { slug: "1".into() })
        .await
        .expect("get article");
    assert_eq!(article.title, "Mine");
}

#[tokio::test]
async fn delete_article_is_restricted_to_the_author() {
    let services = build_services();
    register_user(&services, "alice").await;
    register_user(&services, "bob").await;
    create_article(&services, 1, "Ephemeral", &[]).await;

    let status = services
        .article_commands
        .delete_article(caller(2), DeleteArticleCommand { slug: "1".into() })
        .await
        .into_status()
        .unwrap_err();
    assert_eq!(status.code(), Code::PermissionDenied);

    services
        .article_commands
        .delete_article(caller(1), DeleteArticleCommand { slug: "1".into() })
        .await
        .expect("delete article");

    let status = services
        .article_queries
        .get_article(None, GetArticleQuery { slug: "1".into() })
        .await
        .into_status()
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "invalid article id");
}

#[tokio::test]
async fn favorite_round_trip_updates_count_and_flag() {
    let services = build_services();
    register_user(&services, "alice").await;
    register_user(&services, "bob").await;
    create_article(&services, 1, "Popular", &[]).await;

    let favorited = services
        .article_commands
        .favorite_article(caller(2), FavoriteArticleCommand { slug: "1".into() })
        .await
        .expect("favorite");
    assert!(favorited.favorited);
    assert_eq!(favorited.favorites_count, 1);

    // Repeating the mark does not double-count.
    let again = services
        .article_commands
        .favorite_article(caller(2), FavoriteArticleCommand { slug: "1".into() })
        .await
        .expect("favorite again");
    assert_eq!(again.favorites_count, 1);

    // Another viewer sees the count but not the flag.
    let seen = services
        .article_queries
        .get_article(caller(1), GetArticleQuery { slug: "1".into() })
        .await
        .expect("get article");
    assert!(!seen.favorited);
    assert_eq!(seen.favorites_count, 1);

    let unfavorited = services
        .article_commands
        .unfavorite_article(caller(2), UnfavoriteArticleCommand { slug: "1".into() })
        .await
        .expect("unfavorite");
    assert!(!unfavorited.favorited);
    assert_eq!(unfavorited.favorites_count, 0);
}

#[tokio::test]
async fn favorite_requires_identity() {
    let services = build_services();
    register_user(&services, "alice").await;
    create_article(&services, 1, "Popular", &[]).await;

    let status = services
        .article_commands
        .favorite_article(None, FavoriteArticleCommand { slug: "1".into() })
        .await
        .into_status()
        .unwrap_err();
    assert_eq!(status.code(), Code::Unauthenticated);
}

#[tokio::test]
async fn tags_are_collected_across_articles() {
    let services = build_services();
    register_user(&services, "alice").await;
    create_article(&services, 1, "one", &["rust", "db"]).await;
    create_article(&services, 1, "two", &["db", "async"]).await;

    let tags = services.article_queries.get_tags().await.expect("tags");
    assert_eq!(tags, vec!["async", "db", "rust"]);
}

#[tokio::test]
async fn favorite_lookup_failure_is_reported_generically() {
    let db = Arc::new(MemoryDb::new());
    let reads = Arc::new(MemoryArticleReadRepository::new(Arc::clone(&db)));
    let services = ApplicationServices::new(
        Arc::new(MemoryUserRepository::new(Arc::clone(&db))),
        Arc::new(FailingFavorites { inner: reads }),
        Arc::new(MemoryArticleWriteRepository::new(Arc::clone(&db))),
        Arc::new(MemoryCommentRepository::new(Arc::clone(&db))),
        Arc::new(DummyPasswordHasher),
        Arc::new(DummyTokenManager),
        Arc::new(FixedClock),
    );
    register_user(&services, "alice").await;
    create_article(&services, 1, "Fragile", &[]).await;

    // Anonymous reads never touch the favorites relation.
    services
        .article_queries
        .get_article(None, GetArticleQuery { slug: "1".into() })
        .await
        .expect("anonymous read");

    let status = services
        .article_queries
        .get_article(caller(1), GetArticleQuery { slug: "1".into() })
        .await
        .into_status()
        .unwrap_err();
    assert_eq!(status.code(), Code::Aborted);
    assert_eq!(status.message(), "internal server error");
}

#[tokio::test]
async fn follow_lookup_failure_on_article_reads_maps_to_not_found() {
    let db = Arc::new(MemoryDb::new());
    let users = Arc::new(MemoryUserRepository::new(Arc::clone(&db)));
    let services = ApplicationServices::new(
        Arc::new(FailingFollows { inner: users }),
        Arc::new(MemoryArticleReadRepository::new(Arc::clone(&db))),
        Arc::new(MemoryArticleWriteRepository::new(Arc::clone(&db))),
        Arc::new(MemoryCommentRepository::new(Arc::clone(&db))),
        Arc::new(DummyPasswordHasher),
        Arc::new(DummyTokenManager),
        Arc::new(FixedClock),
    );
    register_user(&services, "alice").await;
    create_article(&services, 1, "Fragile", &[]).await;

    let status = services
        .article_queries
        .get_article(caller(1), GetArticleQuery { slug: "1".into() })
        .await
        .into_status()
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "internal server error");
}
