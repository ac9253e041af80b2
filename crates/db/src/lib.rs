//! SQLite connection factory and migration runner.

use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// A single migration step, tagged with the module that owns it.
#[derive(Debug, Clone, Copy)]
pub struct MigrationStep<'a> {
    pub module: &'a str,
    pub id: &'a str,
    pub sql: &'a str,
}

const MIGRATIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS _migrations (
        module     TEXT NOT NULL,
        id         TEXT NOT NULL,
        applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        PRIMARY KEY (module, id)
    );
"#;

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a connection pool for `url`.
///
/// The database file is created when missing and foreign keys are enforced on
/// every connection. An in-memory database lives only as long as its
/// connection, so such URLs get exactly one connection that is never recycled.
pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .with_context(|| format!("invalid database url '{url}'"))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .with_context(|| format!("failed to connect to database '{url}'"))?;

    tracing::info!(target: "roamstay-db", %url, "database pool ready");
    Ok(pool)
}

/// Apply every step not yet recorded in `_migrations`, each in its own
/// transaction. Returns the number of steps applied.
pub async fn run_migrations(pool: &SqlitePool, steps: &[MigrationStep<'_>]) -> anyhow::Result<usize> {
    sqlx::raw_sql(MIGRATIONS_TABLE)
        .execute(pool)
        .await
        .context("failed to create migrations table")?;

    let mut applied = 0;
    for step in steps {
        let already: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM _migrations WHERE module = ? AND id = ?")
                .bind(step.module)
                .bind(step.id)
                .fetch_one(pool)
                .await?;
        if already > 0 {
            continue;
        }

        let mut tx = pool.begin().await?;
        sqlx::raw_sql(step.sql)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("migration {}/{} failed", step.module, step.id))?;
        sqlx::query("INSERT INTO _migrations (module, id) VALUES (?, ?)")
            .bind(step.module)
            .bind(step.id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(target: "roamstay-db", module = step.module, id = step.id, "migration applied");
        applied += 1;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: &[MigrationStep<'static>] = &[
        MigrationStep {
            module: "parent",
            id: "001_init",
            sql: "CREATE TABLE parent (id INTEGER PRIMARY KEY);",
        },
        MigrationStep {
            module: "child",
            id: "001_init",
            sql: "CREATE TABLE child (
                      id INTEGER PRIMARY KEY,
                      parent_id INTEGER NOT NULL REFERENCES parent(id) ON DELETE CASCADE
                  );",
        },
    ];

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://roamstay.db"));
    }

    #[tokio::test]
    async fn migrations_are_applied_once() {
        let pool = connect("sqlite::memory:", 4).await.unwrap();
        assert_eq!(run_migrations(&pool, STEPS).await.unwrap(), 2);
        assert_eq!(run_migrations(&pool, STEPS).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn foreign_keys_cascade() {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        run_migrations(&pool, STEPS).await.unwrap();

        sqlx::query("INSERT INTO parent (id) VALUES (1)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO child (parent_id) VALUES (1)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM parent WHERE id = 1")
            .execute(&pool)
            .await
            .unwrap();

        let left: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM child")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(left, 0);
    }
}
