//! SQLite type affinity, per the rules of
//! <https://www.sqlite.org/datatype3.html#affname>.

/// Coarse category SQLite assigns to a declared column type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affinity {
    Integer,
    Text,
    Real,
    /// Blob columns and columns declared without a type.
    None,
    Numeric,
}

impl Affinity {
    /// Classify a declared type name by substring rules, in priority order.
    ///
    /// The "int" check runs first: type names frequently contain several
    /// matching substrings (e.g. "POINT" contains both "int" and nothing
    /// else useful), and SQLite resolves the ambiguity by rule order.
    pub fn of(typename: &str) -> Self {
        let typename = typename.to_lowercase();

        if typename.contains("int") {
            return Affinity::Integer;
        }

        if ["char", "clob", "text"].iter().any(|t| typename.contains(t)) {
            return Affinity::Text;
        }

        if ["real", "floa", "doub"].iter().any(|t| typename.contains(t)) {
            return Affinity::Real;
        }

        if typename.contains("blob") || typename.is_empty() {
            return Affinity::None;
        }

        Affinity::Numeric
    }
}
