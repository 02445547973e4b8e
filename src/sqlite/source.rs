//! SQLite catalog introspection and insert execution over sqlx.

use super::affinity::Affinity;
use super::relations::parse_relations;
use crate::database::Database;
use anyhow::Context;
use async_trait::async_trait;
use lorem_core::{Field, FieldType, Table, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// SQLite dialect over a single pooled connection.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open a database file (or a `sqlite:` URL such as `sqlite::memory:`).
    pub async fn connect(database: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database)
            .with_context(|| format!("parsing SQLite database path {database:?}"))?
            .create_if_missing(false);

        // One connection per fill run; inserts are strictly sequential.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .with_context(|| format!("opening SQLite database {database:?}"))?;
        tracing::info!("opened SQLite database {database:?}");

        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by tests with in-memory databases).
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fields(&self, table: &str) -> anyhow::Result<Vec<Field>> {
        // PRAGMA table_info columns: cid, name, type, notnull, dflt_value, pk.
        #[derive(sqlx::FromRow)]
        struct TableInfoRow {
            #[allow(dead_code)]
            cid: i64,
            name: String,
            r#type: String,
            notnull: i64,
            dflt_value: Option<String>,
            #[allow(dead_code)]
            pk: i64,
        }

        let rows: Vec<TableInfoRow> = sqlx::query_as(&format!("PRAGMA table_info({table})"))
            .fetch_all(&self.pool)
            .await?;

        let fields = rows
            .into_iter()
            .map(|row| {
                let kind = match Affinity::of(&row.r#type) {
                    Affinity::Integer | Affinity::Numeric => {
                        FieldType::Integer { min: 0, max: 9999 }
                    }
                    Affinity::Text | Affinity::None => FieldType::Text { max_len: 255 },
                    Affinity::Real => FieldType::Decimal {
                        precision: 10,
                        scale: 5,
                    },
                };

                Field {
                    name: row.name,
                    nullable: row.notnull == 0,
                    default: row.dflt_value.map(unquote_default),
                    kind,
                }
            })
            .collect();

        Ok(fields)
    }

    async fn relations(&self, table: &str) -> anyhow::Result<Vec<lorem_core::Relation>> {
        let ddl: Option<String> = sqlx::query_scalar("SELECT sql FROM sqlite_master WHERE name = ?")
            .bind(table)
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("reading DDL of table '{table}'"))?;

        Ok(ddl
            .map(|sql| parse_relations(table, &sql))
            .unwrap_or_default())
    }
}

/// Catalog defaults arrive as SQL literals; strip one layer of quoting from
/// string literals so the default inserts as its value, not its spelling.
fn unquote_default(literal: String) -> Value {
    match literal
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    {
        Some(inner) => Value::Text(inner.replace("''", "'")),
        None => Value::Text(literal),
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_names(&mut self) -> anyhow::Result<Vec<String>> {
        let names = sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table'")
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    async fn table(&mut self, name: &str) -> anyhow::Result<Table> {
        let fields = self.fields(name).await?;
        let relations = self.relations(name).await?;

        Ok(Table {
            name: name.to_string(),
            fields,
            relations,
        })
    }

    fn insert_sql(&self, table: &Table) -> String {
        let columns = table
            .fields
            .iter()
            .map(|f| format!("\"{}\"", f.name))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; table.fields.len()].join(", ");

        format!(
            "INSERT INTO \"{}\" ({}) VALUES ({})",
            table.name, columns, placeholders
        )
    }

    async fn execute(&mut self, sql: &str, params: &[Value]) -> anyhow::Result<()> {
        let mut query = sqlx::query(sql);
        for value in params {
            query = match value {
                Value::Null => query.bind(Option::<String>::None),
                Value::Int(i) => query.bind(*i),
                Value::UInt(u) => query.bind(*u as i64),
                Value::Float(f) => query.bind(*f),
                Value::Text(s) => query.bind(s.as_str()),
                Value::Date(d) => query.bind(d.to_string()),
                Value::DateTime(dt) => query.bind(dt.to_string()),
            };
        }

        query.execute(&self.pool).await?;
        Ok(())
    }

    async fn commit(&mut self) -> anyhow::Result<()> {
        // sqlx runs the connection in autocommit mode: every insert is
        // durable on its own, so there is nothing left to commit.
        Ok(())
    }
}
