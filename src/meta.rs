//! Metadata model: static table mappings declared per record type.
//!
//! A record type declares a [`TableMapping`] once, as a plain `static`,
//! instead of carrying annotations discovered through runtime reflection.
//! The mapping is immutable for the process lifetime; every lookup the
//! query builder and coercion engine need is answered from it.

use crate::error::{MapperError, Result};
use crate::value::Value;

/// How a field participates in a key-value table projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyValueRole {
    /// Not part of a key-value projection.
    None,
    /// Supplies the map key.
    Key,
    /// Supplies the map value.
    Value,
}

/// Coercion category for a mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Fixed-width text, trimmed on read.
    Text,
    /// Integer column.
    Integer,
    /// Floating point column.
    Float,
    /// Date column, parsed/rendered with the custom or default format.
    Date,
    /// Enumeration stored as the first character of the variant name.
    Enum,
    /// Anything else; assigned as the driver delivered it.
    Other,
}

/// One mapped field: column name, coercion kind and role flags.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Field name on the record type.
    pub field: &'static str,
    /// Column name in the file, matched case-sensitively against
    /// driver-reported result column names.
    pub column: &'static str,
    /// Custom date format (strftime syntax). `None` means the default
    /// `%Y-%m-%d`.
    pub format: Option<&'static str>,
    /// Coercion category.
    pub kind: ColumnKind,
    /// Key-value projection role.
    pub role: KeyValueRole,
    /// Part of the UPDATE key predicate.
    pub primary_key: bool,
}

impl ColumnSpec {
    /// Declare a mapped field.
    pub const fn new(field: &'static str, column: &'static str, kind: ColumnKind) -> Self {
        Self {
            field,
            column,
            format: None,
            kind,
            role: KeyValueRole::None,
            primary_key: false,
        }
    }

    /// Mark this column as part of the UPDATE key predicate.
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Attach a custom date format (strftime syntax).
    pub const fn format(mut self, format: &'static str) -> Self {
        self.format = Some(format);
        self
    }

    /// Assign a key-value projection role.
    pub const fn role(mut self, role: KeyValueRole) -> Self {
        self.role = role;
        self
    }
}

/// Static mapping of a record type onto a file and its columns.
#[derive(Debug, Clone, Copy)]
pub struct TableMapping {
    /// File (table) name. Empty means the type is not mapped.
    pub file: &'static str,
    /// Mapped columns in declared order. Clause ordering in generated SQL
    /// follows this order.
    pub columns: &'static [ColumnSpec],
}

impl TableMapping {
    /// The file name, or a `Mapping` error when the type declares none.
    pub fn file_name(&self) -> Result<&'static str> {
        if self.file.is_empty() {
            return Err(MapperError::mapping("record type is not mapped to a file"));
        }
        Ok(self.file)
    }

    /// Look up a column by record field name.
    #[must_use]
    pub fn column_for_field(&self, field: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Look up a column by its driver-reported name. Case-sensitive.
    #[must_use]
    pub fn column_by_name(&self, column: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.column == column)
    }

    /// The (key, value) column pair for key-value projections.
    ///
    /// Fails with a `Mapping` error unless the type declares both roles.
    pub fn key_value_pair(&self) -> Result<(&ColumnSpec, &ColumnSpec)> {
        let key = self
            .columns
            .iter()
            .find(|c| c.role == KeyValueRole::Key)
            .ok_or_else(|| MapperError::mapping("record type declares no Key role field"))?;
        let value = self
            .columns
            .iter()
            .find(|c| c.role == KeyValueRole::Value)
            .ok_or_else(|| MapperError::mapping("record type declares no Value role field"))?;
        Ok((key, value))
    }

    /// Primary-key columns, in declared order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    /// Non-key columns, in declared order.
    pub fn non_keys(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| !c.primary_key)
    }
}

/// A type mapped onto a legacy file.
///
/// Implementations expose their static [`TableMapping`] and field accessors
/// the coercion engine and update path drive by field name. Instances are
/// built through `Default` on the read path.
pub trait Record {
    /// The static mapping for this type.
    fn mapping() -> &'static TableMapping;

    /// Assign a coerced value to a field.
    ///
    /// Returns a `Coercion` error when the field is unknown or the value
    /// variant does not fit; the failure aborts the surrounding Select.
    fn set_field(&mut self, field: &str, value: Value) -> Result<()>;

    /// Read a field for query construction. Unknown fields yield `Null`.
    fn get_field(&self, field: &str) -> Value;
}
