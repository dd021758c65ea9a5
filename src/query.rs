//! SQL text construction.
//!
//! Pure functions assembling SELECT and UPDATE statements from a table
//! identity, filter descriptors and rendered column/value pairs. Output
//! shape is kept byte-compatible with the legacy store's expectations;
//! values are embedded as single-quoted literals after quote adjustment.
//! Equality is the only comparator.

use std::fmt;

use crate::filter::Filter;
use crate::meta::{ColumnKind, ColumnSpec};
use crate::value::{Value, DEFAULT_DATE_FORMAT};

/// Table identity: file name, optionally qualified by a library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIdent {
    /// Library (schema). Empty renders unqualified.
    pub library: String,
    /// File (table) name.
    pub file: String,
}

impl TableIdent {
    /// Create a table identity.
    pub fn new(library: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            file: file.into(),
        }
    }
}

impl fmt::Display for TableIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.library.is_empty() {
            f.write_str(&self.file)
        } else {
            write!(f, "{}.{}", self.library, self.file)
        }
    }
}

/// Normalize a value for embedding as a single-quoted literal.
///
/// Doubles embedded single quotes so a naive quote character cannot break
/// the statement. Literal embedding itself is inherited from the legacy
/// wire format; see DESIGN.md for the injection caveat.
#[must_use]
pub fn adjust_literal(raw: &str) -> String {
    raw.replace('\'', "''")
}

/// Render a field value as the literal stored in its column.
///
/// Dates honor the column's custom format (default `%Y-%m-%d`); enums
/// collapse to the first character of the variant name; everything else
/// uses its display form. The result is quote-adjusted.
#[must_use]
pub fn literal(spec: &ColumnSpec, value: &Value) -> String {
    let raw = match (spec.kind, value) {
        (ColumnKind::Date, Value::Date(d)) => d
            .format(spec.format.unwrap_or(DEFAULT_DATE_FORMAT))
            .to_string(),
        _ => value.to_string(),
    };
    adjust_literal(&raw)
}

/// Build `SELECT * FROM {ident}` with an equality predicate per active
/// filter, in filter-list order, joined with `AND`. Inactive filters
/// contribute nothing; with no active filter the WHERE clause is omitted.
#[must_use]
pub fn build_select(ident: &TableIdent, filters: &[Filter]) -> String {
    let mut sql = format!("SELECT * FROM {}", ident);

    let clauses: Vec<String> = filters
        .iter()
        .filter(|f| f.is_active())
        .map(|f| {
            format!(
                "{} = '{}'",
                f.column(),
                adjust_literal(&f.value().to_string())
            )
        })
        .collect();

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    sql
}

/// Build `UPDATE {ident} SET ... WHERE ...` from rendered (column, literal)
/// pairs: non-key columns in SET, primary keys in WHERE, each key wrapped in
/// `TRIM()` to tolerate fixed-width padding. Pair order is the caller's
/// declared column order.
#[must_use]
pub fn build_update(
    ident: &TableIdent,
    set_pairs: &[(String, String)],
    key_pairs: &[(String, String)],
) -> String {
    let set = set_pairs
        .iter()
        .map(|(col, lit)| format!("{} = '{}'", col, lit))
        .collect::<Vec<_>>()
        .join(", ");

    let predicate = key_pairs
        .iter()
        .map(|(col, lit)| format!("TRIM({}) = '{}'", col, lit))
        .collect::<Vec<_>>()
        .join(" AND ");

    format!("UPDATE {} SET {} WHERE {}", ident, set, predicate)
}
