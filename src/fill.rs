//! Fill orchestration: dependency-ordered inserts with error accounting.

use crate::database::Database;
use anyhow::Context;
use content_gen::ContentGen;
use lorem_core::{fill_order, Table};
use std::collections::HashSet;

/// Observer of fill progress, invoked synchronously in registration order.
pub trait FillObserver: Send {
    fn on_table_start(&mut self, _table: &Table) {}
    /// An insert is about to be attempted.
    fn on_insert(&mut self, _table: &str) {}
    fn on_insert_error(&mut self, _table: &str, _message: &str) {}
}

/// Totals of one fill pass. Attempts include failed inserts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    pub inserts: u64,
    pub insert_errors: u64,
}

impl FillReport {
    pub fn successes(&self) -> u64 {
        self.inserts - self.insert_errors
    }
}

/// Drives a fill run against one [`Database`].
///
/// Tables are filled one at a time in foreign-key dependency order, each
/// with `rows` freshly generated parameter tuples. Per-row insert failures
/// are counted and never abort the run; configuration and schema errors
/// abort before any insert.
pub struct Filler {
    db: Box<dyn Database>,
    gen: ContentGen,
    rows: u64,
    filter: Option<Vec<String>>,
    show_errors: bool,
    observers: Vec<Box<dyn FillObserver>>,
}

impl Filler {
    pub fn new(db: Box<dyn Database>, gen: ContentGen) -> Self {
        Self {
            db,
            gen,
            rows: 100,
            filter: None,
            show_errors: false,
            observers: Vec::new(),
        }
    }

    /// Number of rows to insert per table.
    pub fn with_rows(mut self, rows: u64) -> Self {
        self.rows = rows;
        self
    }

    /// Restrict the run to the named tables.
    pub fn with_filter(mut self, filter: Vec<String>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Log every failed insert.
    pub fn with_show_errors(mut self, show_errors: bool) -> Self {
        self.show_errors = show_errors;
        self
    }

    pub fn register(&mut self, observer: Box<dyn FillObserver>) {
        self.observers.push(observer);
    }

    pub async fn fill(&mut self) -> anyhow::Result<FillReport> {
        let tables = self.introspect().await?;
        let tables = fill_order(tables).context("resolving table fill order")?;

        let mut report = FillReport::default();
        for table in &tables {
            tracing::info!("filling table '{}' with {} rows", table.name, self.rows);
            for observer in &mut self.observers {
                observer.on_table_start(table);
            }

            let sql = self.db.insert_sql(table);
            for _ in 0..self.rows {
                report.inserts += 1;
                for observer in &mut self.observers {
                    observer.on_insert(&table.name);
                }

                let params = table.random_params(&mut self.gen)?;
                if let Err(e) = self.db.execute(&sql, &params).await {
                    report.insert_errors += 1;
                    if self.show_errors {
                        tracing::warn!("insert into '{}' failed: {e:#}", table.name);
                    }
                    for observer in &mut self.observers {
                        observer.on_insert_error(&table.name, &e.to_string());
                    }
                }
            }
        }

        self.db.commit().await.context("committing fill pass")?;
        Ok(report)
    }

    /// Discover tables and apply the filter, rejecting unknown names before
    /// any insert happens.
    async fn introspect(&mut self) -> anyhow::Result<Vec<Table>> {
        let mut names = self.db.table_names().await.context("listing tables")?;

        if let Some(filter) = &self.filter {
            let known: HashSet<&str> = names.iter().map(|n| n.as_str()).collect();
            let unknown: Vec<&str> = filter
                .iter()
                .map(|f| f.as_str())
                .filter(|f| !known.contains(f))
                .collect();
            if !unknown.is_empty() {
                anyhow::bail!("unknown tables in filter: {}", unknown.join(", "));
            }

            names.retain(|n| filter.iter().any(|f| f == n));
        }

        let mut tables = Vec::with_capacity(names.len());
        for name in &names {
            let table = self
                .db
                .table(name)
                .await
                .with_context(|| format!("introspecting table '{name}'"))?;
            tables.push(table);
        }

        Ok(tables)
    }
}
