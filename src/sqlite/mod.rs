//! SQLite dialect: type-affinity mapping and PRAGMA-based introspection.

mod affinity;
mod relations;
mod source;

pub use affinity::Affinity;
pub use source::SqliteDatabase;
