//! Dialect contract for fill runs.

use async_trait::async_trait;
use lorem_core::{Table, Value};

/// One database dialect: catalog introspection plus statement execution.
///
/// Implementations own their driver connection; the filler drives them
/// strictly sequentially, so no locking discipline is needed.
#[async_trait]
pub trait Database: Send {
    /// Names of the catalog's user tables, in discovery order.
    async fn table_names(&mut self) -> anyhow::Result<Vec<String>>;

    /// Full snapshot of one table: fields in ordinal order plus its
    /// outgoing foreign-key relations.
    async fn table(&mut self, name: &str) -> anyhow::Result<Table>;

    /// INSERT template for the table: explicit column list, one positional
    /// placeholder per field, in field order, with dialect quoting.
    fn insert_sql(&self, table: &Table) -> String;

    /// Execute one statement with the given parameter tuple.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> anyhow::Result<()>;

    /// Commit the fill pass. Dialects running in autocommit mode may treat
    /// this as a no-op; each insert is then durable on its own.
    async fn commit(&mut self) -> anyhow::Result<()>;
}
