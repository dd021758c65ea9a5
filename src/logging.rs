//! Injected logging capability.
//!
//! The mapper never logs through a global logger directly; it talks to a
//! [`LogSink`] passed in at construction time. [`NoopLog`] (the default)
//! swallows everything, matching an unsubscribed notification surface.
//! [`TracingLog`] bridges the four channels onto the `tracing` macros.

use std::error::Error;

/// Four-channel logging capability, each call optionally carrying a fault.
pub trait LogSink: Send + Sync {
    /// Informational message.
    fn info(&self, msg: &str, fault: Option<&(dyn Error + 'static)>);

    /// Warning message.
    fn warn(&self, msg: &str, fault: Option<&(dyn Error + 'static)>);

    /// Error message.
    fn error(&self, msg: &str, fault: Option<&(dyn Error + 'static)>);

    /// Debug message.
    fn debug(&self, msg: &str, fault: Option<&(dyn Error + 'static)>);
}

impl<L: LogSink + ?Sized> LogSink for std::sync::Arc<L> {
    fn info(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        (**self).info(msg, fault);
    }

    fn warn(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        (**self).warn(msg, fault);
    }

    fn error(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        (**self).error(msg, fault);
    }

    fn debug(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        (**self).debug(msg, fault);
    }
}

/// Silent sink. Every channel is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl LogSink for NoopLog {
    fn info(&self, _msg: &str, _fault: Option<&(dyn Error + 'static)>) {}
    fn warn(&self, _msg: &str, _fault: Option<&(dyn Error + 'static)>) {}
    fn error(&self, _msg: &str, _fault: Option<&(dyn Error + 'static)>) {}
    fn debug(&self, _msg: &str, _fault: Option<&(dyn Error + 'static)>) {}
}

/// Sink forwarding to the `tracing` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl LogSink for TracingLog {
    fn info(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        match fault {
            Some(err) => tracing::info!(fault = %err, "{}", msg),
            None => tracing::info!("{}", msg),
        }
    }

    fn warn(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        match fault {
            Some(err) => tracing::warn!(fault = %err, "{}", msg),
            None => tracing::warn!("{}", msg),
        }
    }

    fn error(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        match fault {
            Some(err) => tracing::error!(fault = %err, "{}", msg),
            None => tracing::error!("{}", msg),
        }
    }

    fn debug(&self, msg: &str, fault: Option<&(dyn Error + 'static)>) {
        match fault {
            Some(err) => tracing::debug!(fault = %err, "{}", msg),
            None => tracing::debug!("{}", msg),
        }
    }
}
