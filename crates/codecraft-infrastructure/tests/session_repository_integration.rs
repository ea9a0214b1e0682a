use std::sync::Arc;

use chrono::{Duration, Utc};

use codecraft_domain::session::IdentityProvider;
use codecraft_infrastructure::persistence::repositories::SqliteSessionRepository;


#[tokio::test]
async fn session_repo_returns_none_without_sessions_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteSessionRepository::new(Arc::new(pool));

    let user = repo.current_user().await.expect("resolve identity");

    assert!(user.is_none());
}

#[tokio::test]
async fn session_repo_resolves_most_recent_session_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteSessionRepository::new(Arc::new(pool.clone()));

    let now = Utc::now();
    test_helpers::seed_session(&pool, "older-user", now - Duration::hours(2)).await;
    test_helpers::seed_session(&pool, "newer-user", now - Duration::minutes(5)).await;

    let user = repo
        .current_user()
        .await
        .expect("resolve identity")
        .expect("session exists");

    assert_eq!(user.as_str(), "newer-user");
}
