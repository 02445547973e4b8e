//! Foreign-key extraction from a table's creation DDL.

use lorem_core::Relation;
use regex::Regex;
use std::sync::LazyLock;

// One FOREIGN KEY clause per physical DDL line; this is a pragmatic line
// scanner, not a SQL parser.
static FOREIGN_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"FOREIGN KEY \((.*?)\).*?REFERENCES (.*?)\((.*?)\)")
        .expect("foreign key pattern is valid")
});

/// Scan a `CREATE TABLE` statement for foreign-key clauses.
pub fn parse_relations(table: &str, ddl: &str) -> Vec<Relation> {
    ddl.lines()
        .filter_map(|line| FOREIGN_KEY.captures(line))
        .map(|captures| Relation {
            source_table: table.to_string(),
            source_columns: split_columns(&captures[1]),
            target_table: captures[2].trim().to_string(),
            target_columns: split_columns(&captures[3]),
        })
        .collect()
}

fn split_columns(list: &str) -> Vec<String> {
    list.split(',').map(|c| c.trim().to_string()).collect()
}
