//! Row coercion engine: raw result rows into typed records.

use chrono::NaiveDate;

use crate::conn::Row;
use crate::error::{MapperError, Result};
use crate::logging::LogSink;
use crate::meta::{ColumnKind, ColumnSpec, Record};
use crate::value::{Value, DEFAULT_DATE_FORMAT};

/// Coerce one raw row into a record.
///
/// Each result column is matched case-sensitively against the mapping;
/// columns with no mapped field log a Warn with the raw value and index
/// and are skipped. A field that fails coercion or assignment logs an
/// Error and aborts the whole row, which in turn aborts the surrounding
/// Select.
pub fn coerce_row<T: Record + Default>(row: &Row, log: &dyn LogSink) -> Result<T> {
    let mapping = T::mapping();
    let mut record = T::default();

    for (idx, col) in row.columns.iter().enumerate() {
        match mapping.column_by_name(&col.name) {
            Some(spec) => {
                let value = coerce_value(spec, &col.value, log)?;
                if let Err(err) = record.set_field(spec.field, value) {
                    log.error(
                        &format!(
                            "failed to assign column {} to field {}",
                            spec.column, spec.field
                        ),
                        Some(&err),
                    );
                    return Err(err);
                }
            }
            None => {
                log.warn(
                    &format!(
                        "no mapped field for value '{}' at index {}, skipped",
                        col.value.to_string().trim_end(),
                        idx
                    ),
                    None,
                );
            }
        }
    }

    Ok(record)
}

/// Apply the column's coercion rule to a driver-native value.
fn coerce_value(spec: &ColumnSpec, value: &Value, log: &dyn LogSink) -> Result<Value> {
    match spec.kind {
        ColumnKind::Date => Ok(coerce_date(spec, value, log)),
        ColumnKind::Enum => coerce_enum(spec, value),
        ColumnKind::Text => Ok(coerce_text(value)),
        ColumnKind::Integer | ColumnKind::Float | ColumnKind::Other => Ok(value.clone()),
    }
}

/// Dates already delivered typed pass through; text is parsed with the
/// custom or default format. A parse failure logs a Warn and substitutes
/// the minimum representable date rather than failing the row.
fn coerce_date(spec: &ColumnSpec, value: &Value, log: &dyn LogSink) -> Value {
    if let Value::Date(_) = value {
        return value.clone();
    }

    let format = spec.format.unwrap_or(DEFAULT_DATE_FORMAT);
    let raw = match value.as_str() {
        Some(s) => s.trim().to_string(),
        None => value.to_string(),
    };

    match NaiveDate::parse_from_str(&raw, format) {
        Ok(date) => Value::Date(date),
        Err(_) => {
            log.warn(
                &format!(
                    "unable to parse '{}' as a date with format {}, substituting the minimum date",
                    raw, format
                ),
                None,
            );
            Value::Date(NaiveDate::MIN)
        }
    }
}

/// The store keeps enumerations as a single character; an empty raw value
/// has no discriminant and fails the row.
fn coerce_enum(spec: &ColumnSpec, value: &Value) -> Result<Value> {
    let raw = match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    };
    match raw.chars().next() {
        Some(c) => Ok(Value::Enum(c.to_string())),
        None => Err(MapperError::coercion(format!(
            "empty enumeration value for column {}",
            spec.column
        ))),
    }
}

/// Strip the padding fixed-width storage adds around text.
fn coerce_text(value: &Value) -> Value {
    let raw = match value {
        Value::Text(s) => s.as_str().trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    Value::Text(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conn::RowColumn;
    use crate::fixtures::{Level, MemoryLog, Person, Status};

    fn person_row() -> Row {
        Row::new(vec![
            RowColumn::new("ID", 5i64),
            RowColumn::new("NAME", "Bob       "),
            RowColumn::new("STATUS", "A"),
            RowColumn::new("HIRED", "2024-03-07"),
        ])
    }

    #[test]
    fn test_full_row() {
        let log = MemoryLog::new();
        let person: Person = coerce_row(&person_row(), &log).unwrap();
        assert_eq!(person.id, 5);
        assert_eq!(person.name, "Bob");
        assert_eq!(person.status, Status::Active);
        assert_eq!(
            person.hired,
            Some(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
        );
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_unmapped_column_warns_and_skips() {
        let log = MemoryLog::new();
        let mut row = person_row();
        row.columns.push(RowColumn::new("LEGACY1", "junk   "));
        let person: Person = coerce_row(&row, &log).unwrap();
        assert_eq!(person.name, "Bob");
        assert_eq!(log.count(Level::Warn), 1);
        let (_, msg) = &log.entries()[0];
        assert!(msg.contains("'junk'"));
        assert!(msg.contains("index 4"));
    }

    #[test]
    fn test_unparsable_date_substitutes_minimum() {
        let log = MemoryLog::new();
        let row = Row::new(vec![RowColumn::new("HIRED", "not-a-date")]);
        let person: Person = coerce_row(&row, &log).unwrap();
        assert_eq!(person.hired, Some(NaiveDate::MIN));
        assert_eq!(log.count(Level::Warn), 1);
    }

    #[test]
    fn test_enum_round_trip() {
        let log = MemoryLog::new();
        let row = Row::new(vec![RowColumn::new("STATUS", "S")]);
        let person: Person = coerce_row(&row, &log).unwrap();
        assert_eq!(person.status, Status::Suspended);
        assert_eq!(Value::enum_name(person.status.name()).to_string(), "S");
    }

    #[test]
    fn test_empty_enum_fails_the_row() {
        let log = MemoryLog::new();
        let row = Row::new(vec![RowColumn::new("STATUS", "")]);
        let result: Result<Person> = coerce_row(&row, &log);
        assert!(matches!(result, Err(MapperError::Coercion(_))));
    }

    #[test]
    fn test_unknown_enum_discriminant_fails_and_logs() {
        let log = MemoryLog::new();
        let row = Row::new(vec![RowColumn::new("STATUS", "X")]);
        let result: Result<Person> = coerce_row(&row, &log);
        assert!(result.is_err());
        assert_eq!(log.count(Level::Error), 1);
    }

    #[test]
    fn test_text_trims_both_ends() {
        let log = MemoryLog::new();
        let row = Row::new(vec![RowColumn::new("NAME", "  padded out  ")]);
        let person: Person = coerce_row(&row, &log).unwrap();
        assert_eq!(person.name, "padded out");
    }

    #[test]
    fn test_date_with_custom_format() {
        let log = MemoryLog::new();
        let spec = ColumnSpec::new("hired", "HIRED", ColumnKind::Date).format("%d/%m/%Y");
        let value = coerce_date(&spec, &Value::Text("07/03/2024".into()), &log);
        assert_eq!(
            value,
            Value::Date(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
        );
    }
}
