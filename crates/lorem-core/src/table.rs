//! Table snapshots.

use crate::fields::{Field, FieldError};
use crate::relation::Relation;
use crate::values::Value;
use content_gen::ContentGen;

/// Read-only snapshot of one table, built from live catalog queries and
/// discarded after the fill run.
///
/// Field order matches the catalog's ordinal positions, and the INSERT
/// placeholder list is built in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub fields: Vec<Field>,
    pub relations: Vec<Relation>,
}

impl Table {
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// One fresh random parameter tuple, one value per field in field order.
    pub fn random_params(&self, gen: &mut ContentGen) -> Result<Vec<Value>, FieldError> {
        self.fields.iter().map(|f| f.random_value(gen)).collect()
    }
}
