//! Core data model for loremdb.
//!
//! A fill run works over read-only snapshots of the target schema: a
//! [`Table`] owns its [`Field`]s in catalog order plus the foreign-key
//! [`Relation`]s extracted for it. Each field carries a [`FieldType`] — the
//! closed set of generation policies — and produces one [`Value`] per row
//! from a shared `ContentGen`.
//!
//! The [`options`] module holds the recursive-descent parser for quoted
//! option literals (`'a','b''c'`) used by enum/set column specifications,
//! and [`relation::fill_order`] computes the dependency-safe fill order.

pub mod fields;
pub mod options;
pub mod relation;
pub mod table;
pub mod values;

pub use fields::{Field, FieldError, FieldType};
pub use relation::{fill_order, OrderError, Relation};
pub use table::Table;
pub use values::Value;
