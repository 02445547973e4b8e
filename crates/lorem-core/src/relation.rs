//! Foreign-key relations and dependency-safe table ordering.

use crate::table::Table;
use std::collections::HashMap;

/// A foreign-key edge: `source_table` must be filled after `target_table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub source_table: String,
    pub source_columns: Vec<String>,
    pub target_table: String,
    pub target_columns: Vec<String>,
}

/// Error type for fill ordering.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    /// The relation graph contains a cycle; no fill order exists.
    #[error("cyclic foreign-key relations among tables: {tables:?}")]
    CyclicRelations { tables: Vec<String> },
}

/// Order tables so that every referenced table is filled strictly before any
/// table referencing it.
///
/// Kahn's algorithm over the relation graph. Ties (tables with no relation
/// between them) break deterministically by the input (catalog discovery)
/// order. Self-referential relations are skipped — a table cannot precede
/// itself — and relations targeting tables outside the input set are
/// ignored. A residual cycle is an error naming the tables involved.
pub fn fill_order(tables: Vec<Table>) -> Result<Vec<Table>, OrderError> {
    let count = tables.len();
    let mut indegree = vec![0usize; count];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];

    {
        let index: HashMap<&str, usize> = tables
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.as_str(), i))
            .collect();

        for (source, table) in tables.iter().enumerate() {
            for relation in &table.relations {
                if relation.target_table == table.name {
                    continue;
                }
                let Some(&target) = index.get(relation.target_table.as_str()) else {
                    continue;
                };
                dependents[target].push(source);
                indegree[source] += 1;
            }
        }
    }

    let mut order = Vec::with_capacity(count);
    let mut placed = vec![false; count];
    loop {
        let Some(next) = (0..count).find(|&i| !placed[i] && indegree[i] == 0) else {
            break;
        };
        placed[next] = true;
        order.push(next);
        for &dependent in &dependents[next] {
            indegree[dependent] -= 1;
        }
    }

    if order.len() != count {
        let remaining = tables
            .iter()
            .enumerate()
            .filter(|(i, _)| !placed[*i])
            .map(|(_, t)| t.name.clone())
            .collect();
        return Err(OrderError::CyclicRelations { tables: remaining });
    }

    let mut slots: Vec<Option<Table>> = tables.into_iter().map(Some).collect();
    Ok(order
        .into_iter()
        .map(|i| slots[i].take().expect("each table is placed exactly once"))
        .collect())
}
