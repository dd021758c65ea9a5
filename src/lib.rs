//! # db2map
//!
//! Declarative record mapper for legacy DB2-style file stores reached
//! through an opaque driver connection.
//!
//! Record types declare a static [`TableMapping`] (file name, column
//! names, date formats, key roles) and implement [`Record`]; the mapper
//! turns filter descriptors into `SELECT` statements, entities into
//! keyed `UPDATE` statements, and result rows back into typed instances:
//!
//! - **SELECT** with equality filters over active [`Filter`] descriptors
//! - **UPDATE** with non-key columns in SET and `TRIM()`-wrapped primary
//!   keys in WHERE, tolerating fixed-width padding
//! - **Row coercion** with per-column date formats, single-character
//!   enum encoding and fixed-width text trimming
//! - **Key-value projection** of two-column tables into a map
//!
//! ## Example
//!
//! ```ignore
//! use db2map::{Filter, Mapper, MapperConfig};
//!
//! let config = MapperConfig::load("mapper.yaml")?;
//! let mapper = Mapper::new(config, OdbcConnector::default());
//!
//! let filters = vec![Filter::new::<Person>("id", 5)?];
//! let people: Vec<Person> = mapper.select(&filters);
//! ```
//!
//! Driver access is a seam: implement [`Connector`] and [`Session`] over
//! whatever ODBC or native client reaches the store. Logging is injected
//! through [`LogSink`]; the default sink is silent.

pub mod coerce;
pub mod config;
pub mod conn;
pub mod error;
pub mod filter;
pub mod logging;
pub mod mapper;
pub mod meta;
pub mod query;
pub mod value;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-exports for convenient access
pub use config::MapperConfig;
pub use conn::{Connector, Row, RowColumn, Session};
pub use error::{MapperError, Result};
pub use filter::Filter;
pub use logging::{LogSink, NoopLog, TracingLog};
pub use mapper::Mapper;
pub use meta::{ColumnKind, ColumnSpec, KeyValueRole, Record, TableMapping};
pub use query::TableIdent;
pub use value::{Value, DEFAULT_DATE_FORMAT};
