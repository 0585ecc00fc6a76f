use std::sync::Arc;

use async_trait::async_trait;
use loki_log_sink::{
    config::StaticConfig,
    envelope::PushEnvelope,
    error::ShipError,
    init::init_console,
    sink::LogSink,
    LogArgs, LokiLogger,
};
use tokio::time::{sleep, Duration};

/// Example of plugging a completely custom backend by implementing the
/// `LogSink` trait directly. Imagine this forwards envelopes to some
/// in-house collector instead of Loki.
struct StdoutCollector;

#[async_trait]
impl LogSink for StdoutCollector {
    async fn send(&self, envelope: &PushEnvelope) -> Result<(), ShipError> {
        // Here you would call your own client library.
        // For the sake of example we just print the body.
        println!("[collector] {}", serde_json::to_string(envelope)?);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_console()?;

    let logger = LokiLogger::with_sink(
        "CustomBackend",
        Arc::new(StdoutCollector),
        Arc::new(StaticConfig::new()),
    );

    logger.log("custom backend example started", LogArgs::default());
    logger.error(
        "simulated error sent via custom backend",
        LogArgs::new().org_id("org1").trace("at main()"),
    );

    sleep(Duration::from_millis(200)).await;
    Ok(())
}
