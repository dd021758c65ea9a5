//! Equality filter descriptors for SELECT construction.

use crate::error::{MapperError, Result};
use crate::meta::Record;
use crate::value::Value;

/// An immutable (column, value, active) triple.
///
/// The field name is resolved to its column through the record type's
/// mapping at construction time; an unknown field is a `Mapping` error.
/// Inactive filters are carried in the list but contribute nothing to the
/// WHERE clause.
#[derive(Debug, Clone)]
pub struct Filter {
    column: String,
    value: Value,
    active: bool,
}

impl Filter {
    /// Build an active filter on a field of `T`.
    pub fn new<T: Record>(field: &str, value: impl Into<Value>) -> Result<Self> {
        Self::with_active::<T>(field, value, true)
    }

    /// Build an inactive filter: carried, but ignored at query-build time.
    pub fn inactive<T: Record>(field: &str, value: impl Into<Value>) -> Result<Self> {
        Self::with_active::<T>(field, value, false)
    }

    fn with_active<T: Record>(field: &str, value: impl Into<Value>, active: bool) -> Result<Self> {
        let spec = T::mapping().column_for_field(field).ok_or_else(|| {
            MapperError::mapping(format!("field `{}` is not mapped to a column", field))
        })?;
        Ok(Self {
            column: spec.column.to_string(),
            value: value.into(),
            active,
        })
    }

    /// The resolved column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The comparison value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether this filter participates in the WHERE clause.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
