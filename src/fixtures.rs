//! Shared record types and a capturing log sink for unit tests.

use std::error::Error;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::error::{MapperError, Result};
use crate::logging::LogSink;
use crate::meta::{ColumnKind, ColumnSpec, KeyValueRole, Record, TableMapping};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Active,
    Suspended,
}

impl Status {
    pub fn name(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Suspended => "Suspended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub status: Status,
    pub hired: Option<NaiveDate>,
}

static PERSON_MAPPING: TableMapping = TableMapping {
    file: "PEOPLE",
    columns: &[
        ColumnSpec::new("id", "ID", ColumnKind::Integer).primary_key(),
        ColumnSpec::new("name", "NAME", ColumnKind::Text),
        ColumnSpec::new("status", "STATUS", ColumnKind::Enum),
        ColumnSpec::new("hired", "HIRED", ColumnKind::Date),
    ],
};

impl Record for Person {
    fn mapping() -> &'static TableMapping {
        &PERSON_MAPPING
    }

    fn set_field(&mut self, field: &str, value: Value) -> Result<()> {
        match (field, value) {
            ("id", Value::Int(v)) => self.id = v,
            ("name", Value::Text(v)) => self.name = v,
            ("status", v) => {
                self.status = match v.enum_char() {
                    Some('A') => Status::Active,
                    Some('S') => Status::Suspended,
                    other => {
                        return Err(MapperError::coercion(format!(
                            "unknown status discriminant {:?}",
                            other
                        )))
                    }
                }
            }
            ("hired", Value::Date(v)) => self.hired = Some(v),
            (field, value) => {
                return Err(MapperError::coercion(format!(
                    "cannot assign {:?} to Person.{}",
                    value, field
                )))
            }
        }
        Ok(())
    }

    fn get_field(&self, field: &str) -> Value {
        match field {
            "id" => Value::Int(self.id),
            "name" => Value::Text(self.name.clone()),
            "status" => Value::enum_name(self.status.name()),
            "hired" => match self.hired {
                Some(d) => Value::Date(d),
                None => Value::Null,
            },
            _ => Value::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Setting {
    pub key: String,
    pub val: String,
}

static SETTING_MAPPING: TableMapping = TableMapping {
    file: "SETTINGS",
    columns: &[
        ColumnSpec::new("key", "SETKEY", ColumnKind::Text)
            .role(KeyValueRole::Key)
            .primary_key(),
        ColumnSpec::new("val", "SETVAL", ColumnKind::Text).role(KeyValueRole::Value),
    ],
};

impl Record for Setting {
    fn mapping() -> &'static TableMapping {
        &SETTING_MAPPING
    }

    fn set_field(&mut self, field: &str, value: Value) -> Result<()> {
        match (field, value) {
            ("key", Value::Text(v)) => self.key = v,
            ("val", Value::Text(v)) => self.val = v,
            (field, value) => {
                return Err(MapperError::coercion(format!(
                    "cannot assign {:?} to Setting.{}",
                    value, field
                )))
            }
        }
        Ok(())
    }

    fn get_field(&self, field: &str) -> Value {
        match field {
            "key" => Value::Text(self.key.clone()),
            "val" => Value::Text(self.val.clone()),
            _ => Value::Null,
        }
    }
}

/// Key-value table missing its Value role, for the failure path.
#[derive(Debug, Clone, Default)]
pub struct BadKv {
    pub key: String,
}

static BAD_KV_MAPPING: TableMapping = TableMapping {
    file: "BADKV",
    columns: &[ColumnSpec::new("key", "SETKEY", ColumnKind::Text).role(KeyValueRole::Key)],
};

impl Record for BadKv {
    fn mapping() -> &'static TableMapping {
        &BAD_KV_MAPPING
    }

    fn set_field(&mut self, field: &str, value: Value) -> Result<()> {
        match (field, value) {
            ("key", Value::Text(v)) => self.key = v,
            (field, value) => {
                return Err(MapperError::coercion(format!(
                    "cannot assign {:?} to BadKv.{}",
                    value, field
                )))
            }
        }
        Ok(())
    }

    fn get_field(&self, field: &str) -> Value {
        match field {
            "key" => Value::Text(self.key.clone()),
            _ => Value::Null,
        }
    }
}

/// Type with no file mapping, for the lookup failure path.
#[derive(Debug, Clone, Default)]
pub struct Unmapped;

static UNMAPPED_MAPPING: TableMapping = TableMapping {
    file: "",
    columns: &[],
};

impl Record for Unmapped {
    fn mapping() -> &'static TableMapping {
        &UNMAPPED_MAPPING
    }

    fn set_field(&mut self, _field: &str, _value: Value) -> Result<()> {
        Ok(())
    }

    fn get_field(&self, _field: &str) -> Value {
        Value::Null
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
    Debug,
}

/// Log sink that records every entry for assertions.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    fn push(&self, level: Level, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        let text = match fault {
            Some(err) => format!("{} ({})", msg, err),
            None => msg.to_string(),
        };
        self.entries.lock().unwrap().push((level, text));
    }
}

impl LogSink for MemoryLog {
    fn info(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        self.push(Level::Info, msg, fault);
    }

    fn warn(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        self.push(Level::Warn, msg, fault);
    }

    fn error(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        self.push(Level::Error, msg, fault);
    }

    fn debug(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        self.push(Level::Debug, msg, fault);
    }
}
