use std::error::Error;

/// Why a single entry could not be delivered.
///
/// Every variant is terminal for that entry: it is reported once to the
/// [`FallbackSink`](crate::fallback::FallbackSink) and then dropped.
#[derive(thiserror::Error, Debug)]
pub enum ShipError {
    #[cfg(feature = "loki")]
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Loki push failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to encode push envelope: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("no tokio runtime available, log entry dropped")]
    NoRuntime,

    /// Escape hatch for custom [`LogSink`](crate::sink::LogSink)s.
    #[error("{0}")]
    Other(#[from] Box<dyn Error + Send + Sync>),
}

/// Error returned while installing the console subscriber.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("invalid log filter directive: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("global subscriber already installed: {0}")]
    AlreadySet(#[from] tracing_subscriber::util::TryInitError),
}
