//! Connection and execution seam.
//!
//! The mapper treats the database driver as an opaque executor: a
//! [`Connector`] opens a [`Session`] from a connection string, the session
//! accepts SQL text and returns rows or an affected-row count. Sessions are
//! scoped to a single statement and released on drop, including on error
//! paths. Driver faults surface as [`MapperError::Execution`].
//!
//! [`MapperError::Execution`]: crate::error::MapperError::Execution

use crate::error::Result;
use crate::value::Value;

/// One column of a result row, as reported by the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct RowColumn {
    /// Driver-reported column name.
    pub name: String,
    /// Driver-native value, before coercion.
    pub value: Value,
}

impl RowColumn {
    /// Create a result column.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A raw result row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Columns in result order.
    pub columns: Vec<RowColumn>,
}

impl Row {
    /// Create a row from its columns.
    pub fn new(columns: Vec<RowColumn>) -> Self {
        Self { columns }
    }
}

/// An open driver session executing exactly one statement at a time.
pub trait Session {
    /// Execute a query and collect the full result set.
    fn query(&mut self, sql: &str) -> Result<Vec<Row>>;

    /// Execute a statement and return the affected-row count.
    fn execute(&mut self, sql: &str) -> Result<u64>;
}

/// Opens sessions against the external store.
///
/// Each mapper call acquires an independent session; nothing is pooled or
/// shared between calls.
pub trait Connector {
    /// Session type produced by this connector.
    type Session: Session;

    /// Open a session from a connection string.
    fn connect(&self, connection_string: &str) -> Result<Self::Session>;
}
