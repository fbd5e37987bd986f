mod common;

use shortlink::domain::entities::Resolution;
use shortlink::error::AppError;
use sqlx::PgPool;
use std::collections::HashSet;
use std::time::Duration;

#[sqlx::test]
async fn test_numeric_link_counts_each_resolution(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let link = common::create_test_link(&state, "https://example.com", None).await;

    let key = link.id.to_string();

    let Resolution::Link(first) = state.resolution_service.resolve(&key).await.unwrap() else {
        panic!("expected a link");
    };
    let Resolution::Link(second) = state.resolution_service.resolve(&key).await.unwrap() else {
        panic!("expected a link");
    };

    assert_eq!(first.visit_count, 1);
    assert_eq!(second.visit_count, 2);
    assert_eq!(second.target_url, "https://example.com/");
}

#[sqlx::test]
async fn test_file_resolves_by_alias_and_id(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let file = common::create_test_file(&state, "report.pdf", Some("q3-report")).await;

    let by_alias = state.resolution_service.resolve("q3-report").await.unwrap();
    let by_id = state
        .resolution_service
        .resolve(&file.id.to_string())
        .await
        .unwrap();

    assert!(matches!(by_alias, Resolution::File(ref f) if f.download_count == 1));
    assert!(matches!(by_id, Resolution::File(ref f) if f.download_count == 2));
}

#[sqlx::test]
async fn test_link_alias_blocks_file_alias(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    common::create_test_link(&state, "https://example.com", Some("promo")).await;

    let result = state
        .resource_service
        .create_file_asset(common::file_input("promo.pdf", Some("promo")))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::AliasTaken { .. }));
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM file_assets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_file_alias_blocks_link_alias(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    common::create_test_file(&state, "promo.pdf", Some("promo")).await;

    let result = state
        .resource_service
        .create_link("https://example.com".to_string(), Some("promo".to_string()))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::AliasTaken { .. }));
    assert_eq!(
        common::alias_owner(&pool, "promo").await.map(|(kind, _)| kind),
        Some("file".to_string())
    );
}

#[sqlx::test]
async fn test_unknown_alias_is_not_found_without_side_effects(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    common::create_test_link(&state, "https://example.com", Some("promo")).await;
    common::create_test_file(&state, "a.pdf", None).await;

    let before = common::total_counters(&pool).await;
    let resolution = state
        .resolution_service
        .resolve("doesnotexist")
        .await
        .unwrap();

    assert_eq!(resolution, Resolution::NotFound);
    assert_eq!(common::total_counters(&pool).await, before);
}

#[sqlx::test]
async fn test_unknown_numeric_id_is_not_found(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    common::create_test_link(&state, "https://example.com", None).await;

    let before = common::total_counters(&pool).await;
    let resolution = state.resolution_service.resolve("999999").await.unwrap();

    assert_eq!(resolution, Resolution::NotFound);
    assert_eq!(common::total_counters(&pool).await, before);
}

#[sqlx::test]
async fn test_overflowing_numeric_id_is_not_found(pool: PgPool) {
    let state = common::create_test_state(pool);

    let resolution = state
        .resolution_service
        .resolve("99999999999999999999999")
        .await
        .unwrap();

    assert_eq!(resolution, Resolution::NotFound);
}

#[sqlx::test]
async fn test_links_and_files_share_one_id_space(pool: PgPool) {
    let state = common::create_test_state(pool);

    let mut ids = HashSet::new();
    for i in 0..5 {
        let link = common::create_test_link(&state, "https://example.com", None).await;
        let file = common::create_test_file(&state, &format!("{i}.bin"), None).await;
        assert!(ids.insert(link.id));
        assert!(ids.insert(file.id));
    }

    assert_eq!(ids.len(), 10);
}

#[sqlx::test]
async fn test_concurrent_creations_get_distinct_ids(pool: PgPool) {
    let state = common::create_test_state(pool);

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..20 {
        let state = state.clone();
        tasks.spawn(async move {
            if i % 2 == 0 {
                common::create_test_link(&state, "https://example.com", None)
                    .await
                    .id
            } else {
                common::create_test_file(&state, "x.bin", None).await.id
            }
        });
    }

    let mut ids = HashSet::new();
    while let Some(id) = tasks.join_next().await {
        assert!(ids.insert(id.unwrap()));
    }
    assert_eq!(ids.len(), 20);
}

#[sqlx::test]
async fn test_failed_creation_leaves_alias_free(pool: PgPool) {
    let state = common::create_test_state(pool.clone());

    // A row already sitting on the next id makes the insert fail after the
    // alias claim in the same transaction.
    let next: i64 = sqlx::query_scalar(
        "SELECT CASE WHEN is_called THEN last_value + 1 ELSE last_value END FROM resource_id_seq",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO links (id, target_url) VALUES ($1, 'https://squatter.test/')")
        .bind(next)
        .execute(&pool)
        .await
        .unwrap();

    let result = state
        .resource_service
        .create_link("https://example.com".to_string(), Some("retry-me".to_string()))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    assert_eq!(common::alias_owner(&pool, "retry-me").await, None);

    let link = common::create_test_link(&state, "https://example.com", Some("retry-me")).await;
    assert_eq!(link.alias.as_deref(), Some("retry-me"));
}

#[sqlx::test]
async fn test_abandoned_creation_leaves_alias_free(pool: PgPool) {
    let state = common::create_test_state(pool.clone());

    // Holding the table lock parks the insert after the alias claim has run.
    let mut blocker = pool.begin().await.unwrap();
    sqlx::query("LOCK TABLE links IN ACCESS EXCLUSIVE MODE")
        .execute(&mut *blocker)
        .await
        .unwrap();

    let abandoned = tokio::time::timeout(
        Duration::from_millis(500),
        state
            .resource_service
            .create_link("https://example.com".to_string(), Some("promo".to_string())),
    )
    .await;
    assert!(abandoned.is_err(), "creation should still be waiting on the lock");

    blocker.rollback().await.unwrap();

    assert_eq!(common::alias_owner(&pool, "promo").await, None);

    let retry = tokio::time::timeout(
        Duration::from_secs(10),
        state
            .resource_service
            .create_link("https://example.com".to_string(), Some("promo".to_string())),
    )
    .await
    .expect("retry should not hang")
    .unwrap();
    assert_eq!(retry.alias.as_deref(), Some("promo"));

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(links, 1);
    assert_eq!(
        common::alias_owner(&pool, "promo").await,
        Some(("link".to_string(), retry.id))
    );
}

#[sqlx::test]
async fn test_reconcile_moves_sequence_past_stored_ids(pool: PgPool) {
    sqlx::query("INSERT INTO file_assets (id, blob_location, file_name, size_bytes, mime_type) VALUES (5000, 's3://b/x', 'x', 1, 'text/plain')")
        .execute(&pool)
        .await
        .unwrap();

    let state = common::create_test_state(pool);
    let last = state.resource_service.reconcile_sequence().await.unwrap();
    assert_eq!(last, 5000);

    let link = common::create_test_link(&state, "https://example.com", None).await;
    assert_eq!(link.id, 5001);
}
