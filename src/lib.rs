pub mod config;
pub mod console;
pub mod envelope;
pub mod error;
pub mod fallback;
pub mod init;
pub mod logger;
pub mod noop_sink;
pub mod record;
pub mod sink;

#[cfg(feature = "loki")]
pub mod loki;

pub use logger::{LogArgs, LokiLogger};
pub use record::Level;
