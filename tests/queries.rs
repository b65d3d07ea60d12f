// tests/queries.rs
use chrono::{TimeZone, Utc};
use uuid::Uuid;

mod support;

use support::{CommentBuilder, PostBuilder, in_memory_harness};
use tanzaku_core::application::dto::PostDto;
use tanzaku_core::application::error::ApplicationError;
use tanzaku_core::application::queries::comments::{GetCommentQuery, GetPostCommentsQuery};
use tanzaku_core::application::queries::posts::GetPostQuery;
use tanzaku_core::domain::post::PostStatus;

#[tokio::test]
async fn absent_post_reads_as_none() {
    let harness = in_memory_harness();
    let found = harness
        .services
        .post_queries
        .get_post(GetPostQuery { id: Uuid::new_v4() })
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn absent_comment_reads_as_none() {
    let harness = in_memory_harness();
    let found = harness
        .services
        .comment_queries
        .get_comment(GetCommentQuery { id: Uuid::new_v4() })
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn list_returns_every_post_in_creation_order() {
    let harness = in_memory_harness();
    let first = PostBuilder::new()
        .title("First")
        .created_at(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap())
        .build();
    let second = PostBuilder::new()
        .title("Second")
        .published()
        .created_at(Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap())
        .build();
    harness.store.seed_post(second.clone());
    harness.store.seed_post(first.clone());

    let posts = harness.services.post_queries.list_posts().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "First");
    assert_eq!(posts[0].status, PostStatus::Draft);
    assert_eq!(posts[1].title, "Second");
    assert_eq!(posts[1].status, PostStatus::Published);
}

#[tokio::test]
async fn comments_of_a_missing_post_are_not_found() {
    let harness = in_memory_harness();
    let err = harness
        .services
        .comment_queries
        .get_post_comments(GetPostCommentsQuery {
            post_id: Uuid::new_v4(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn commentless_post_yields_an_empty_list() {
    let harness = in_memory_harness();
    let post = PostBuilder::new().build();
    harness.store.seed_post(post.clone());

    let comments = harness
        .services
        .comment_queries
        .get_post_comments(GetPostCommentsQuery {
            post_id: post.id.into(),
        })
        .await
        .unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn post_comments_exclude_other_posts() {
    let harness = in_memory_harness();
    let ours = PostBuilder::new().build();
    let theirs = PostBuilder::new().build();
    harness.store.seed_post(ours.clone());
    harness.store.seed_post(theirs.clone());

    let early = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    harness.store.seed_comment(
        CommentBuilder::for_post(ours.id)
            .content("second")
            .created_at(late)
            .build(),
    );
    harness.store.seed_comment(
        CommentBuilder::for_post(ours.id)
            .content("first")
            .created_at(early)
            .build(),
    );
    harness
        .store
        .seed_comment(CommentBuilder::for_post(theirs.id).content("noise").build());

    let comments = harness
        .services
        .comment_queries
        .get_post_comments(GetPostCommentsQuery {
            post_id: ours.id.into(),
        })
        .await
        .unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "first");
    assert_eq!(comments[1].content, "second");
    assert!(
        comments
            .iter()
            .all(|comment| comment.post_id == ours.id.to_string())
    );
}

#[test]
fn post_dto_serializes_status_lowercase() {
    let dto = PostDto::from(PostBuilder::new().published().build());
    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(value["status"], "published");
    assert_eq!(value["updated_at"], serde_json::Value::Null);
}
