// tests/blog_lifecycle.rs
use chrono::Duration;
use showroom_cms::{
    application::{
        commands::{
            blog::{
                CreateBlogPostCommand, DeleteBlogPostCommand, SetBlogStatusCommand,
                UpdateBlogPostCommand,
            },
            team::{CreateTeamMemberCommand, DeleteTeamMemberCommand, UpdateTeamMemberCommand},
        },
        error::ApplicationError,
        queries::blog::{GetBlogPostBySlugQuery, ListBlogPostsQuery},
    },
    domain::{blog::BlogListOrder, content::PublicationStatus, errors::DomainError},
};

mod support;

use support::{TestApp, admin_actor, editor_actor, fixed_now};

fn draft(title: &str) -> CreateBlogPostCommand {
    CreateBlogPostCommand {
        title: title.into(),
        content: "<p>body</p>".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn new_posts_are_drafts_with_derived_slug() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());

    let post = app
        .services
        .blog_commands
        .create_post(&admin, draft("Hello, World! 2024"))
        .await
        .unwrap();

    assert_eq!(post.slug, "hello-world-2024");
    assert_eq!(post.status, PublicationStatus::Draft);
    assert!(post.published_at.is_none());
    assert_eq!(post.created_at, fixed_now());
}

#[tokio::test]
async fn publish_restamps_and_unpublish_keeps_marker() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());
    let blog = &app.services.blog_commands;

    blog.create_post(&admin, draft("Launch week")).await.unwrap();

    app.clock.advance(Duration::hours(1));
    let first_publish = fixed_now() + Duration::hours(1);
    let published = blog
        .set_status(
            &admin,
            SetBlogStatusCommand {
                slug: "launch-week".into(),
                status: PublicationStatus::Published,
                published_at: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(published.published_at, Some(first_publish));

    app.clock.advance(Duration::hours(1));
    let unpublished = blog
        .set_status(
            &admin,
            SetBlogStatusCommand {
                slug: "launch-week".into(),
                status: PublicationStatus::Draft,
                published_at: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(unpublished.status, PublicationStatus::Draft);
    assert_eq!(unpublished.published_at, Some(first_publish));

    app.clock.advance(Duration::hours(1));
    let republished = blog
        .set_status(
            &admin,
            SetBlogStatusCommand {
                slug: "launch-week".into(),
                status: PublicationStatus::Published,
                published_at: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(
        republished.published_at,
        Some(fixed_now() + Duration::hours(3))
    );
}

#[tokio::test]
async fn explicit_publish_time_is_kept() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());
    let backdated = fixed_now() - Duration::days(30);

    let post = app
        .services
        .blog_commands
        .create_post(
            &admin,
            CreateBlogPostCommand {
                status: Some(PublicationStatus::Published),
                published_at: Some(backdated),
                ..draft("Archive import")
            },
        )
        .await
        .unwrap();

    assert_eq!(post.status, PublicationStatus::Published);
    assert_eq!(post.published_at, Some(backdated));
}

#[tokio::test]
async fn editors_cannot_publish_or_delete() {
    let app = TestApp::new();
    let editor = editor_actor(fixed_now());
    let blog = &app.services.blog_commands;

    let err = blog
        .create_post(
            &editor,
            CreateBlogPostCommand {
                status: Some(PublicationStatus::Published),
                ..draft("Sneaky")
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    blog.create_post(&editor, draft("Honest draft")).await.unwrap();

    let err = blog
        .set_status(
            &editor,
            SetBlogStatusCommand {
                slug: "honest-draft".into(),
                status: PublicationStatus::Published,
                published_at: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = blog
        .delete_post(
            &editor,
            DeleteBlogPostCommand {
                slug: "honest-draft".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert!(app.content.post_by_slug("honest-draft").is_some());
}

#[tokio::test]
async fn rename_keeps_slug_unless_one_is_given() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());
    let blog = &app.services.blog_commands;

    blog.create_post(&admin, draft("Spring sale")).await.unwrap();

    let renamed = blog
        .update_post(
            &admin,
            UpdateBlogPostCommand {
                slug: "spring-sale".into(),
                title: Some("Spring sale, extended".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.title, "Spring sale, extended");
    assert_eq!(renamed.slug, "spring-sale");

    let moved = blog
        .update_post(
            &admin,
            UpdateBlogPostCommand {
                slug: "spring-sale".into(),
                new_slug: Some("spring-sale-extended".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.slug, "spring-sale-extended");
    assert!(app.content.post_by_slug("spring-sale").is_none());
}

#[tokio::test]
async fn duplicate_slug_is_a_conflict() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());
    let blog = &app.services.blog_commands;

    blog.create_post(&admin, draft("Same title")).await.unwrap();
    let err = blog
        .create_post(&admin, draft("Same title"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));
}

#[tokio::test]
async fn anonymous_readers_only_see_published_posts() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());
    let blog = &app.services.blog_commands;
    let queries = &app.services.blog_queries;

    blog.create_post(&admin, draft("Work in progress")).await.unwrap();
    blog.create_post(
        &admin,
        CreateBlogPostCommand {
            status: Some(PublicationStatus::Published),
            ..draft("Live now")
        },
    )
    .await
    .unwrap();

    let public = queries
        .list_posts(
            None,
            ListBlogPostsQuery {
                status: Some(PublicationStatus::Draft),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let slugs: Vec<_> = public.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["live-now"]);

    let err = queries
        .get_by_slug(
            None,
            GetBlogPostBySlugQuery {
                slug: "work-in-progress".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let all = queries
        .list_posts(Some(&admin), ListBlogPostsQuery::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn public_feed_orders_by_publish_time() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());
    let blog = &app.services.blog_commands;

    for (title, days_ago) in [("Older", 10), ("Newest", 1), ("Middle", 5)] {
        blog.create_post(
            &admin,
            CreateBlogPostCommand {
                status: Some(PublicationStatus::Published),
                published_at: Some(fixed_now() - Duration::days(days_ago)),
                ..draft(title)
            },
        )
        .await
        .unwrap();
    }

    let feed = app
        .services
        .blog_queries
        .list_posts(
            None,
            ListBlogPostsQuery {
                order: BlogListOrder::RecentlyPublished,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let slugs: Vec<_> = feed.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["newest", "middle", "older"]);
}

#[tokio::test]
async fn author_is_embedded_and_cleared_when_member_leaves() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());

    let author = app
        .services
        .team_commands
        .create_member(
            &admin,
            CreateTeamMemberCommand {
                full_name: "Jane Q. Doe".into(),
                job_title: Some("Editor in chief".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(author.slug, "jane-q-doe");

    let post = app
        .services
        .blog_commands
        .create_post(
            &admin,
            CreateBlogPostCommand {
                author_id: Some(author.id),
                ..draft("Meet the team")
            },
        )
        .await
        .unwrap();
    let byline = post.author.expect("author embedded");
    assert_eq!(byline.full_name, "Jane Q. Doe");

    let renamed = app
        .services
        .team_commands
        .update_member(
            &admin,
            UpdateTeamMemberCommand {
                id: author.id,
                full_name: Some("Jane Q. Smith".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug, "jane-q-doe");

    app.services
        .team_commands
        .delete_member(&admin, DeleteTeamMemberCommand { id: author.id })
        .await
        .unwrap();

    let post = app
        .services
        .blog_queries
        .get_by_slug(
            Some(&admin),
            GetBlogPostBySlugQuery {
                slug: "meet-the-team".into(),
            },
        )
        .await
        .unwrap();
    assert!(post.author_id.is_none());
    assert!(post.author.is_none());
}

#[tokio::test]
async fn unknown_author_is_rejected() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());

    let err = app
        .services
        .blog_commands
        .create_post(
            &admin,
            CreateBlogPostCommand {
                author_id: Some(404),
                ..draft("Ghost written")
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
    assert!(app.content.post_by_slug("ghost-written").is_none());
}

#[tokio::test]
async fn republishing_through_edit_form_restamps() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());
    let blog = &app.services.blog_commands;

    blog.create_post(
        &admin,
        CreateBlogPostCommand {
            status: Some(PublicationStatus::Published),
            ..draft("Quarterly numbers")
        },
    )
    .await
    .unwrap();
    assert_eq!(
        app.content.post_by_slug("quarterly-numbers").unwrap().published_at(),
        Some(fixed_now())
    );

    app.clock.advance(Duration::days(2));
    let updated = blog
        .update_post(
            &admin,
            UpdateBlogPostCommand {
                slug: "quarterly-numbers".into(),
                status: Some(PublicationStatus::Published),
                published_at: None,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, PublicationStatus::Published);
    assert_eq!(updated.published_at, Some(fixed_now() + Duration::days(2)));
}

#[tokio::test]
async fn editor_can_save_a_live_post_that_resubmits_its_status() {
    let app = TestApp::new();
    let admin = admin_actor(fixed_now());
    let editor = editor_actor(fixed_now());
    let blog = &app.services.blog_commands;

    blog.create_post(
        &admin,
        CreateBlogPostCommand {
            status: Some(PublicationStatus::Published),
            ..draft("Case study")
        },
    )
    .await
    .unwrap();

    app.clock.advance(Duration::hours(6));
    let edited = blog
        .update_post(
            &editor,
            UpdateBlogPostCommand {
                slug: "case-study".into(),
                title: Some("Case study: Acme".into()),
                status: Some(PublicationStatus::Published),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.title, "Case study: Acme");
    assert_eq!(edited.status, PublicationStatus::Published);
    assert_eq!(edited.published_at, Some(fixed_now()));

    let err = blog
        .update_post(
            &editor,
            UpdateBlogPostCommand {
                slug: "case-study".into(),
                status: Some(PublicationStatus::Draft),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}
