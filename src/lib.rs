//! loremdb — fill a database's tables with lorem-ipsum rows.
//!
//! For every table discovered in the target database's catalog, loremdb maps
//! each column's declared type to a random value generator honoring the
//! column's constraints (length, precision/scale, signedness, nullability,
//! enum/set option lists) and inserts a configurable number of rows. Tables
//! are filled in foreign-key dependency order, so referenced tables always
//! receive their rows before the tables referencing them.
//!
//! # CLI Usage
//!
//! ```bash
//! # Fill every table of a MySQL database with 100 rows each
//! loremdb mysql --db shop -u root -p secret
//!
//! # Fill two specific tables of a SQLite file, reproducibly
//! loremdb sqlite --db fixtures.db -n 500 --seed 42 --filter users orders
//! ```
//!
//! Per-row insert failures (unique collisions, constraint violations) are
//! counted and reported but never abort a run; this is a best-effort fixture
//! generator, not a constraint solver.

use clap::Args;

pub mod database;
pub mod fill;
pub mod mysql;
pub mod progress;
pub mod sqlite;

pub use database::Database;
pub use fill::{FillObserver, FillReport, Filler};

/// Fill options shared by every dialect subcommand.
#[derive(Args, Clone, Debug)]
pub struct FillOpts {
    /// Number of rows to insert per table
    #[arg(short = 'n', long = "number", default_value_t = 100)]
    pub number: u64,

    /// Restrict the fill to these tables
    #[arg(long, num_args = 1..)]
    pub filter: Vec<String>,

    /// Seed the random source for a reproducible run
    #[arg(long, env = "LOREMDB_SEED")]
    pub seed: Option<u64>,

    /// Log every failed insert
    #[arg(long)]
    pub show_errors: bool,
}
