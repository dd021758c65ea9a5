//! Mapper façade: the single entry point external callers use.
//!
//! Each operation runs one statement over its own scoped session:
//! configuration snapshot, connect, build, execute, coerce, release.
//! Select faults are logged and collapse to an empty sequence; Update
//! faults collapse to `false`. Callers inspect results and logs, not
//! exceptions. Metadata misuse stays a hard error on the `try_` variants.

use std::collections::HashMap;

use crate::coerce::coerce_row;
use crate::config::MapperConfig;
use crate::conn::{Connector, Session};
use crate::error::Result;
use crate::filter::Filter;
use crate::logging::{LogSink, NoopLog};
use crate::meta::Record;
use crate::query::{self, TableIdent};

/// Record mapper over an opaque driver connection.
///
/// Holds the immutable configuration snapshot, the connector and the
/// injected log sink. No state is shared between calls; concurrent callers
/// each acquire an independent session.
pub struct Mapper<C: Connector> {
    config: MapperConfig,
    connector: C,
    log: Box<dyn LogSink>,
}

impl<C: Connector> Mapper<C> {
    /// Create a mapper with a silent log sink.
    pub fn new(config: MapperConfig, connector: C) -> Self {
        Self {
            config,
            connector,
            log: Box::new(NoopLog),
        }
    }

    /// Replace the log sink.
    #[must_use]
    pub fn with_logger(mut self, log: Box<dyn LogSink>) -> Self {
        self.log = log;
        self
    }

    /// The configuration snapshot this mapper was built with.
    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Select records of `T` matching the active filters.
    ///
    /// Any fault, mapping misuse included, is logged at Error severity and
    /// yields an empty sequence. Use [`try_select`] to surface the error.
    ///
    /// [`try_select`]: Mapper::try_select
    pub fn select<T: Record + Default>(&self, filters: &[Filter]) -> Vec<T> {
        match self.try_select(filters) {
            Ok(records) => records,
            Err(err) => {
                self.log.error(
                    "select failed during query preparation or execution",
                    Some(&err),
                );
                Vec::new()
            }
        }
    }

    /// Fallible variant of [`select`](Mapper::select).
    pub fn try_select<T: Record + Default>(&self, filters: &[Filter]) -> Result<Vec<T>> {
        let ident = self.table_ident::<T>()?;
        let sql = query::build_select(&ident, filters);
        self.trace(&ident, &sql);

        let mut session = self.connector.connect(&self.config.connection_string)?;
        let rows = session.query(&sql)?;

        rows.iter()
            .map(|row| coerce_row::<T>(row, &*self.log))
            .collect()
    }

    /// Project a key-value table into a map keyed by its Key-role field.
    ///
    /// Fails with a `Mapping` error when `T` declares no Key or no Value
    /// role. Execution faults behave as in [`select`](Mapper::select) and
    /// yield an empty map.
    pub fn key_value_select<T: Record + Default>(
        &self,
        filters: &[Filter],
    ) -> Result<HashMap<String, String>> {
        let (key, value) = T::mapping().key_value_pair()?;

        let records: Vec<T> = self.select(filters);

        let mut map = HashMap::with_capacity(records.len());
        for record in &records {
            map.insert(
                record.get_field(key.field).to_string(),
                record.get_field(value.field).to_string(),
            );
        }
        Ok(map)
    }

    /// Update the row identified by `entity`'s primary-key fields.
    ///
    /// Every non-key mapped field lands in SET, every primary-key field in
    /// the `TRIM()` WHERE predicate, both in declared column order. Faults
    /// are logged and reported as `false`.
    pub fn update<T: Record>(&self, entity: &T) -> bool {
        match self.try_update(entity) {
            Ok(_) => true,
            Err(err) => {
                self.log.error(
                    "update failed during query preparation or execution",
                    Some(&err),
                );
                false
            }
        }
    }

    /// Fallible variant of [`update`](Mapper::update), returning the
    /// affected-row count.
    pub fn try_update<T: Record>(&self, entity: &T) -> Result<u64> {
        let mapping = T::mapping();
        let ident = self.table_ident::<T>()?;

        let mut set_pairs = Vec::new();
        let mut key_pairs = Vec::new();
        for spec in mapping.columns {
            let rendered = query::literal(spec, &entity.get_field(spec.field));
            if spec.primary_key {
                key_pairs.push((spec.column.to_string(), rendered));
            } else {
                set_pairs.push((spec.column.to_string(), rendered));
            }
        }

        self.log
            .debug(&format!("{} columns ready to update", set_pairs.len()), None);

        let sql = query::build_update(&ident, &set_pairs, &key_pairs);
        self.trace(&ident, &sql);

        let mut session = self.connector.connect(&self.config.connection_string)?;
        let affected = session.execute(&sql)?;

        if affected == 0 {
            self.log.warn("update affected no rows", None);
        } else {
            self.log.info(&format!("{} rows affected", affected), None);
        }

        Ok(affected)
    }

    fn table_ident<T: Record>(&self) -> Result<TableIdent> {
        let file = T::mapping().file_name()?;
        Ok(TableIdent::new(self.config.library.clone(), file))
    }

    fn trace(&self, ident: &TableIdent, sql: &str) {
        if self.config.trace_query {
            self.log.info(&format!("[{}] {}", ident.file, sql), None);
        }
    }
}
