//! Configuration validation.

use super::MapperConfig;
use crate::error::{MapperError, Result};

/// Validate the configuration.
pub fn validate(config: &MapperConfig) -> Result<()> {
    if config.connection_string.is_empty() {
        return Err(MapperError::Config(
            "connection_string is required".into(),
        ));
    }

    Ok(())
}
