//! MySQL dialect: information_schema introspection and insert execution.

mod schema;
mod source;
mod values;

pub use schema::{field_from_column, ColumnSpec, SchemaError};
pub use source::MySqlDatabase;
