use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use tokio::net::TcpListener;

use loki_log_sink::config::{env_or, ConfigSource, EnvConfig, PORT_KEY};
use loki_log_sink::init::init_console;
use loki_log_sink::{LogArgs, LokiLogger};

#[derive(Clone)]
struct AppState {
    logger: LokiLogger,
}

async fn get_hello(State(state): State<AppState>) -> &'static str {
    state.logger.log("Hello World!", LogArgs::default());
    "Hello World!"
}

fn app(logger: LokiLogger) -> Router {
    Router::new()
        .route("/", get(get_hello))
        .with_state(AppState { logger })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_console()?;

    let config: Arc<dyn ConfigSource> = Arc::new(EnvConfig);
    let logger = LokiLogger::new("YourAppName", config);

    let addr = format!("0.0.0.0:{}", env_or(PORT_KEY, "3000"));
    let listener = TcpListener::bind(&addr).await?;
    logger.log(&format!("listening on {}", addr), LogArgs::default());

    axum::serve(listener, app(logger.for_context("AppController"))).await?;
    Ok(())
}
