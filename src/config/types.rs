//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Root configuration structure.
///
/// Mirrors the external configuration section the mapper reads at startup:
/// the driver connection string, the optional library (schema) that
/// qualifies every file name, and the query trace flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Driver connection string, passed verbatim to the connector.
    pub connection_string: String,

    /// Library (schema) qualifying file names. Empty means unqualified.
    #[serde(default)]
    pub library: String,

    /// When set, every constructed query is logged at Info before execution.
    #[serde(default)]
    pub trace_query: bool,
}
