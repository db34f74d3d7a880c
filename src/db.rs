use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Opens the pool and creates the schema if absent.
pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    // Foreign keys stay off so deleting an employee leaves attendance rows in place.
    // WAL lets readers run beside the single writer; writers queue on busy_timeout.
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;
    info!(database_url, "Database ready");
    Ok(pool)
}

/// Private in-memory database, one per call. Used by tests.
pub async fn init_memory_db() -> Result<SqlitePool, sqlx::Error> {
    // every pooled connection to :memory: opens its own database, so keep exactly one alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
        .await?;

    create_schema(&pool).await?;
    Ok(pool)
}

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employee (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id TEXT NOT NULL UNIQUE,
            full_name   TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            department  TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id TEXT NOT NULL REFERENCES employee(employee_id),
            date        TEXT NOT NULL,
            status      TEXT NOT NULL CHECK (status IN ('Present', 'Absent'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_attendance_employee_id ON attendance(employee_id)")
        .execute(pool)
        .await?;

    debug!("Schema created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn schema_creation_is_idempotent() {
        let pool = init_memory_db().await.unwrap();
        create_schema(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('employee', 'attendance') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tables, vec!["attendance", "employee"]);
    }

    #[actix_web::test]
    async fn storage_rejects_unknown_status() {
        let pool = init_memory_db().await.unwrap();

        let result = sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES ('E1', '2024-01-01', 'Late')")
            .execute(&pool)
            .await;

        assert!(result.is_err());
    }
}
