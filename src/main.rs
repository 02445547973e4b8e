//! Command-line interface for loremdb
//!
//! # Usage Examples
//!
//! ```bash
//! # Fill every table of a MySQL database with 100 rows each
//! loremdb mysql --db shop -u root -p secret --host db.local
//!
//! # Fill a SQLite file, 500 rows per table, only two tables, reproducibly
//! loremdb sqlite --db fixtures.db -n 500 --seed 42 --filter users orders
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use content_gen::ContentGen;
use lorem_core::Table;
use loremdb::mysql::MySqlDatabase;
use loremdb::progress::DotProgress;
use loremdb::sqlite::SqliteDatabase;
use loremdb::{Database, FillObserver, FillOpts, Filler};
use std::io::Write;

#[derive(Parser)]
#[command(name = "loremdb")]
#[command(version)]
#[command(about = "Fill a database's tables with lorem-ipsum rows")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a MySQL database
    Mysql {
        #[command(flatten)]
        connection: MySqlOpts,

        #[command(flatten)]
        fill: FillOpts,
    },

    /// Fill a SQLite database file
    Sqlite {
        /// Path to the database file
        #[arg(short = 'b', long = "db", env = "LOREMDB_DATABASE")]
        database: String,

        #[command(flatten)]
        fill: FillOpts,
    },
}

#[derive(Args, Clone, Debug)]
struct MySqlOpts {
    /// Database (schema) name
    #[arg(short = 'b', long = "db", env = "LOREMDB_DATABASE")]
    database: String,

    /// Database user
    #[arg(short, long, env = "LOREMDB_USER")]
    user: String,

    /// Database password
    #[arg(short, long, env = "LOREMDB_PASSWORD")]
    password: Option<String>,

    /// Database host
    #[arg(long, default_value = "localhost", env = "LOREMDB_HOST")]
    host: String,

    /// Database port
    #[arg(long, default_value_t = 3306, env = "LOREMDB_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    println!("LoremDb v{}", env!("CARGO_PKG_VERSION"));
    println!("------------------------------------");

    match cli.command {
        Commands::Mysql { connection, fill } => {
            let db = MySqlDatabase::connect_with_params(
                &connection.user,
                connection.password.as_deref(),
                &connection.host,
                connection.port,
                &connection.database,
            )
            .await
            .context("connecting to MySQL")?;

            run(Box::new(db), fill).await
        }
        Commands::Sqlite { database, fill } => {
            let db = SqliteDatabase::connect(&database)
                .await
                .context("opening SQLite database")?;

            run(Box::new(db), fill).await
        }
    }
}

async fn run(db: Box<dyn Database>, opts: FillOpts) -> anyhow::Result<()> {
    let gen = match opts.seed {
        Some(seed) => ContentGen::seeded(seed),
        None => ContentGen::new(),
    };

    let mut filler = Filler::new(db, gen)
        .with_rows(opts.number)
        .with_show_errors(opts.show_errors);
    if !opts.filter.is_empty() {
        filler = filler.with_filter(opts.filter.clone());
    }

    filler.register(Box::new(ConsoleProgress::new(opts.number)));

    let report = filler.fill().await?;

    println!();
    println!("... Finished");
    println!();
    println!("------------------------------------");
    println!("Inserts: {}", report.inserts);
    println!("Inserts with error: {}", report.insert_errors);
    println!("Inserts with success: {}", report.successes());
    println!("------------------------------------");

    Ok(())
}

/// Prints a heading and a dot block per table as rows go in.
struct ConsoleProgress {
    dots: DotProgress,
}

impl ConsoleProgress {
    fn new(rows_per_table: u64) -> Self {
        Self {
            dots: DotProgress::new(rows_per_table),
        }
    }
}

impl FillObserver for ConsoleProgress {
    fn on_table_start(&mut self, table: &Table) {
        println!();
        println!("Populating '{}'", table.name);
        self.dots.reset();
    }

    fn on_insert(&mut self, _table: &str) {
        let mut stdout = std::io::stdout();
        // Progress is cosmetic; rendering failures must not affect the run.
        let _ = self.dots.tick(&mut stdout);
        let _ = stdout.flush();
    }
}
