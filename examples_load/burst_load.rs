use std::sync::Arc;
use std::time::Instant;
use tokio::time::{sleep, Duration};

use loki_log_sink::config::{StaticConfig, ENVIRONMENT_KEY};
use loki_log_sink::init::{init_console_with_config, ConsoleConfig};
use loki_log_sink::noop_sink::NoopSink;
use loki_log_sink::{LogArgs, LokiLogger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let console_config = ConsoleConfig {
        enable_stdout: false,
        ..ConsoleConfig::default()
    };
    init_console_with_config(&console_config)?;

    let config = Arc::new(StaticConfig::new().with(ENVIRONMENT_KEY, "load"));
    let logger = LokiLogger::with_sink("BurstLoad", Arc::new(NoopSink), config);

    let n: u64 = 100_000;
    let start = Instant::now();

    for i in 0..n {
        logger.error(
            &format!("burst load error {}", i),
            LogArgs::new().org_id("org-load").bot_id("bot-load"),
        );
    }

    let elapsed = start.elapsed();
    println!("burst: issued {} calls in {:?} (~{:.0} calls/s)",
        n,
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );

    // Give detached shipments a little time to drain
    sleep(Duration::from_secs(2)).await;
    Ok(())
}
