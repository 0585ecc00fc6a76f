use crate::record::Level;
use tracing::{debug, error, info, trace, warn};

/// Synchronous, infallible console output used to mirror every call.
///
/// This is the only capability the logger needs from a "base logger";
/// anything that can print a leveled line can stand in for it.
pub trait ConsoleWriter: Send + Sync {
    fn write(&self, level: Level, message: &str, context: &str, trace: Option<&str>);
}

/// Mirrors calls as `tracing` events. Output depends on the subscriber
/// installed by [`init_console`](crate::init::init_console).
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingConsole;

impl ConsoleWriter for TracingConsole {
    fn write(&self, level: Level, message: &str, context: &str, trace: Option<&str>) {
        match level {
            Level::Error => error!(context, trace, "{}", message),
            Level::Warn => warn!(context, "{}", message),
            Level::Info => info!(context, "{}", message),
            Level::Debug => debug!(context, "{}", message),
            Level::Verbose => trace!(context, "{}", message),
        }
    }
}
