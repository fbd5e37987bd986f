mod common;

use shortlink::domain::repositories::IdSequence;
use shortlink::infrastructure::persistence::PgIdSequence;
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;

#[sqlx::test]
async fn test_next_id_is_increasing(pool: PgPool) {
    let sequence = PgIdSequence::new(Arc::new(pool));

    let first = sequence.next_id().await.unwrap();
    let second = sequence.next_id().await.unwrap();

    assert!(first >= 1);
    assert!(second > first);
}

#[sqlx::test]
async fn test_concurrent_allocations_are_distinct(pool: PgPool) {
    let sequence = Arc::new(PgIdSequence::new(Arc::new(pool)));

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..50 {
        let sequence = sequence.clone();
        tasks.spawn(async move { sequence.next_id().await.unwrap() });
    }

    let mut ids = HashSet::new();
    while let Some(id) = tasks.join_next().await {
        assert!(ids.insert(id.unwrap()), "duplicate id allocated");
    }

    assert_eq!(ids.len(), 50);
}

#[sqlx::test]
async fn test_advance_past_skips_stored_ids(pool: PgPool) {
    let sequence = PgIdSequence::new(Arc::new(pool));

    let last = sequence.advance_past(1000).await.unwrap();
    assert_eq!(last, 1000);

    assert_eq!(sequence.next_id().await.unwrap(), 1001);
}

#[sqlx::test]
async fn test_advance_past_never_moves_backwards(pool: PgPool) {
    let sequence = PgIdSequence::new(Arc::new(pool));

    sequence.advance_past(500).await.unwrap();
    let last = sequence.advance_past(10).await.unwrap();

    assert_eq!(last, 500);
    assert_eq!(sequence.next_id().await.unwrap(), 501);
}

#[sqlx::test]
async fn test_advance_past_on_fresh_sequence(pool: PgPool) {
    let sequence = PgIdSequence::new(Arc::new(pool));

    let last = sequence.advance_past(0).await.unwrap();

    assert_eq!(last, 0);
    assert_eq!(sequence.next_id().await.unwrap(), 1);
}
