//! SQLite end-to-end fill tests over in-memory databases.

use content_gen::ContentGen;
use lorem_core::Table;
use loremdb::sqlite::SqliteDatabase;
use loremdb::{FillObserver, Filler};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::{Arc, Mutex};

async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool")
}

/// permissions is created first and references users, so a correct fill must
/// reorder the two.
async fn create_user_schema(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TABLE permissions (
            permission_id integer,
            user_id integer,
            action text,
            FOREIGN KEY (user_id) REFERENCES users(user_id)
        )",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query("CREATE TABLE users (user_id integer, name text, age integer)")
        .execute(pool)
        .await
        .unwrap();
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT count(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Records the order in which tables start filling.
struct TableOrderRecorder {
    order: Arc<Mutex<Vec<String>>>,
}

impl FillObserver for TableOrderRecorder {
    fn on_table_start(&mut self, table: &Table) {
        self.order.lock().unwrap().push(table.name.clone());
    }
}

#[tokio::test]
async fn test_fill_inserts_rows_into_every_table() {
    let pool = memory_pool().await;
    create_user_schema(&pool).await;

    let db = SqliteDatabase::from_pool(pool.clone());
    let mut filler = Filler::new(Box::new(db), ContentGen::seeded(42)).with_rows(10);

    let report = filler.fill().await.unwrap();

    assert_eq!(count(&pool, "users").await, 10);
    assert_eq!(count(&pool, "permissions").await, 10);
    assert_eq!(report.inserts, 20);
    assert_eq!(report.insert_errors, 0);
    assert_eq!(report.successes(), 20);
}

#[tokio::test]
async fn test_referenced_table_fills_first() {
    let pool = memory_pool().await;
    create_user_schema(&pool).await;

    let order = Arc::new(Mutex::new(Vec::new()));
    let db = SqliteDatabase::from_pool(pool.clone());
    let mut filler = Filler::new(Box::new(db), ContentGen::seeded(42)).with_rows(5);
    filler.register(Box::new(TableOrderRecorder {
        order: order.clone(),
    }));

    filler.fill().await.unwrap();

    // The catalog lists permissions first; the fill must not.
    assert_eq!(*order.lock().unwrap(), ["users", "permissions"]);
}

#[tokio::test]
async fn test_unknown_filter_name_aborts_before_any_insert() {
    let pool = memory_pool().await;
    create_user_schema(&pool).await;

    let db = SqliteDatabase::from_pool(pool.clone());
    let mut filler = Filler::new(Box::new(db), ContentGen::seeded(42))
        .with_rows(10)
        .with_filter(vec!["users".to_string(), "nope".to_string()]);

    let error = filler.fill().await.unwrap_err();

    assert!(error.to_string().contains("nope"), "got: {error:#}");
    assert_eq!(count(&pool, "users").await, 0);
    assert_eq!(count(&pool, "permissions").await, 0);
}

#[tokio::test]
async fn test_filter_restricts_the_run() {
    let pool = memory_pool().await;
    create_user_schema(&pool).await;

    let db = SqliteDatabase::from_pool(pool.clone());
    let mut filler = Filler::new(Box::new(db), ContentGen::seeded(42))
        .with_rows(7)
        .with_filter(vec!["users".to_string()]);

    let report = filler.fill().await.unwrap();

    assert_eq!(report.inserts, 7);
    assert_eq!(count(&pool, "users").await, 7);
    assert_eq!(count(&pool, "permissions").await, 0);
}

#[tokio::test]
async fn test_seeded_runs_produce_identical_rows() {
    let mut dumps = Vec::new();

    for _ in 0..2 {
        let pool = memory_pool().await;
        create_user_schema(&pool).await;

        let db = SqliteDatabase::from_pool(pool.clone());
        let mut filler = Filler::new(Box::new(db), ContentGen::seeded(1234)).with_rows(25);
        filler.fill().await.unwrap();

        let rows: Vec<(Option<i64>, Option<String>, Option<i64>)> =
            sqlx::query_as("SELECT user_id, name, age FROM users ORDER BY rowid")
                .fetch_all(&pool)
                .await
                .unwrap();
        dumps.push(rows);
    }

    assert_eq!(dumps[0], dumps[1]);
    assert!(!dumps[0].is_empty());
}

#[tokio::test]
async fn test_insert_errors_are_counted_but_not_fatal() {
    let pool = memory_pool().await;

    // The integer generator stays within 0..=9999, so this CHECK rejects
    // every generated row.
    sqlx::query("CREATE TABLE unreachable (v integer NOT NULL CHECK (v > 10000))")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("CREATE TABLE plain (v integer)")
        .execute(&pool)
        .await
        .unwrap();

    let db = SqliteDatabase::from_pool(pool.clone());
    let mut filler = Filler::new(Box::new(db), ContentGen::seeded(42)).with_rows(10);

    let report = filler.fill().await.unwrap();

    assert_eq!(report.inserts, 20);
    assert_eq!(report.insert_errors, 10);
    assert_eq!(report.successes(), 10);
    assert_eq!(count(&pool, "unreachable").await, 0);
    assert_eq!(count(&pool, "plain").await, 10);
}
