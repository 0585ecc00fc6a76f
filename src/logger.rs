use crate::config::{ConfigSource, ENVIRONMENT_KEY};
use crate::console::{ConsoleWriter, TracingConsole};
use crate::envelope::PushEnvelope;
use crate::error::ShipError;
use crate::fallback::{FallbackSink, StderrFallback};
use crate::record::{message_text, Level, LogEntry};
use crate::sink::LogSink;
use chrono::Utc;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Routing identifiers used by [`LokiLogger::log`] when none are given.
pub const LOG_DEFAULT_ORG_ID: &str = "abc";
pub const LOG_DEFAULT_BOT_ID: &str = "efg";

/// Routing identifier used by every other level when none is given.
pub const UNKNOWN_ID: &str = "unknown";

/// Optional per-call arguments of the leveled methods.
///
/// `trace` is only honoured by [`LokiLogger::error`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogArgs {
    pub org_id: Option<String>,
    pub bot_id: Option<String>,
    pub trace: Option<String>,
    pub context: Option<String>,
}

impl LogArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    pub fn bot_id(mut self, bot_id: impl Into<String>) -> Self {
        self.bot_id = Some(bot_id.into());
        self
    }

    pub fn trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Leveled logger that mirrors every call to the console and ships it to
/// a [`LogSink`] in the background.
///
/// Calls never fail and never wait on the network. The console line is
/// written before the method returns; the shipment runs as a detached
/// tokio task whose outcome is only seen by the [`FallbackSink`].
#[derive(Clone)]
pub struct LokiLogger {
    context: Arc<str>,
    sink: Arc<dyn LogSink>,
    config: Arc<dyn ConfigSource>,
    console: Arc<dyn ConsoleWriter>,
    fallback: Arc<dyn FallbackSink>,
}

impl LokiLogger {
    /// Logger shipping to Loki, mirroring through `tracing` and reporting
    /// failures on stderr.
    ///
    /// **Parameters**
    /// - `context`: default context name stamped on entries.
    /// - `config`: source for the Loki base URL and environment name.
    #[cfg(feature = "loki")]
    pub fn new(context: impl Into<String>, config: Arc<dyn ConfigSource>) -> Self {
        let sink = Arc::new(crate::loki::LokiSink::new(Arc::clone(&config)));
        Self::with_sink(context, sink, config)
    }

    /// Logger shipping to an arbitrary sink.
    pub fn with_sink(
        context: impl Into<String>,
        sink: Arc<dyn LogSink>,
        config: Arc<dyn ConfigSource>,
    ) -> Self {
        Self {
            context: Arc::from(context.into()),
            sink,
            config,
            console: Arc::new(TracingConsole),
            fallback: Arc::new(StderrFallback),
        }
    }

    pub fn with_console(mut self, console: Arc<dyn ConsoleWriter>) -> Self {
        self.console = console;
        self
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackSink>) -> Self {
        self.fallback = fallback;
        self
    }

    /// A logger sharing sink, console, fallback and configuration but
    /// stamping entries with a different default context.
    pub fn for_context(&self, context: impl Into<String>) -> Self {
        Self {
            context: Arc::from(context.into()),
            ..self.clone()
        }
    }

    /// Default context name of this logger.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// General checkpoint log, shipped at `info`.
    pub fn log<M>(&self, message: &M, args: LogArgs)
    where
        M: Serialize + fmt::Debug + ?Sized,
    {
        self.emit(Level::Info, message, args, (LOG_DEFAULT_ORG_ID, LOG_DEFAULT_BOT_ID));
    }

    /// Error log; the only level that carries `args.trace`.
    pub fn error<M>(&self, message: &M, args: LogArgs)
    where
        M: Serialize + fmt::Debug + ?Sized,
    {
        self.emit(Level::Error, message, args, (UNKNOWN_ID, UNKNOWN_ID));
    }

    pub fn warn<M>(&self, message: &M, args: LogArgs)
    where
        M: Serialize + fmt::Debug + ?Sized,
    {
        self.emit(Level::Warn, message, args, (UNKNOWN_ID, UNKNOWN_ID));
    }

    pub fn debug<M>(&self, message: &M, args: LogArgs)
    where
        M: Serialize + fmt::Debug + ?Sized,
    {
        self.emit(Level::Debug, message, args, (UNKNOWN_ID, UNKNOWN_ID));
    }

    pub fn verbose<M>(&self, message: &M, args: LogArgs)
    where
        M: Serialize + fmt::Debug + ?Sized,
    {
        self.emit(Level::Verbose, message, args, (UNKNOWN_ID, UNKNOWN_ID));
    }

    fn emit<M>(&self, level: Level, message: &M, args: LogArgs, defaults: (&str, &str))
    where
        M: Serialize + fmt::Debug + ?Sized,
    {
        let entry = self.entry(level, message, args, defaults);
        self.console
            .write(level, &entry.message, &entry.context, entry.trace.as_deref());
        self.dispatch(entry);
    }

    fn entry<M>(&self, level: Level, message: &M, args: LogArgs, defaults: (&str, &str)) -> LogEntry
    where
        M: Serialize + fmt::Debug + ?Sized,
    {
        let timestamp = Utc::now();
        let trace = if level == Level::Error { args.trace } else { None };

        LogEntry {
            level,
            message: message_text(message),
            context: args.context.unwrap_or_else(|| self.context.to_string()),
            trace,
            org_id: args.org_id.unwrap_or_else(|| defaults.0.to_string()),
            bot_id: args.bot_id.unwrap_or_else(|| defaults.1.to_string()),
            timestamp,
        }
    }

    fn dispatch(&self, entry: LogEntry) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                self.fallback.report(&ShipError::NoRuntime);
                return;
            }
        };

        let sink = Arc::clone(&self.sink);
        let config = Arc::clone(&self.config);
        let fallback = Arc::clone(&self.fallback);

        handle.spawn(async move {
            let envelope = PushEnvelope::single(&entry, config.get(ENVIRONMENT_KEY));
            if let Err(e) = sink.send(&envelope).await {
                fallback.report(&e);
            }
        });
    }
}

impl fmt::Debug for LokiLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LokiLogger")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
