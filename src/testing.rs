use sqlx::SqlitePool;

/// Fresh in-memory database with every module migration applied.
pub async fn pool() -> SqlitePool {
    let pool = roamstay_db::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory database");
    crate::modules::registry()
        .run_migrations(&pool)
        .await
        .expect("migrations apply");
    pool
}
