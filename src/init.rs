use crate::error::InitError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Конфигурация консольного зеркала.
///
/// Определяет фильтр уровней по умолчанию и то, печатаются ли события
/// в stdout через `fmt`‑слой.
///
/// **Поля**
/// - `default_filter`: директива `EnvFilter`, используемая, если
///   переменная `RUST_LOG` не задана. По умолчанию `trace`, чтобы
///   `verbose` тоже был виден.
/// - `enable_stdout`: если `false`, подписчик ставится без `fmt`‑слоя
///   и консоль молчит (удобно для нагрузочных замеров).
/// - `with_target`: печатать ли `target` события.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    pub default_filter: String,
    pub enable_stdout: bool,
    pub with_target: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            default_filter: "trace".to_string(),
            enable_stdout: true,
            with_target: false,
        }
    }
}

/// Build the filter: `RUST_LOG` wins, otherwise `config.default_filter`.
pub fn console_filter(config: &ConsoleConfig) -> Result<EnvFilter, InitError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.default_filter)?),
    }
}

/// Install the global `tracing` subscriber backing
/// [`TracingConsole`](crate::console::TracingConsole).
///
/// **Parameters**
/// - `config`: [`ConsoleConfig`] controlling filter and output.
///
/// **Returns**
/// - `Err(InitError::Filter)` if the default directive does not parse.
/// - `Err(InitError::AlreadySet)` if another global subscriber exists.
pub fn init_console_with_config(config: &ConsoleConfig) -> Result<(), InitError> {
    let filter = console_filter(config)?;

    // Два варианта subscriber'а, чтобы типы слоёв сошлись.
    if config.enable_stdout {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(config.with_target);
        Registry::default().with(filter).with(fmt_layer).try_init()?;
    } else {
        Registry::default().with(filter).try_init()?;
    }
    Ok(())
}

/// Install the console subscriber with [`ConsoleConfig::default`].
pub fn init_console() -> Result<(), InitError> {
    init_console_with_config(&ConsoleConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_default_directive_is_reported() {
        let config = ConsoleConfig {
            default_filter: "not a [valid directive".to_string(),
            ..ConsoleConfig::default()
        };
        if std::env::var("RUST_LOG").is_err() {
            assert!(matches!(console_filter(&config), Err(InitError::Filter(_))));
        }
    }

    #[test]
    fn default_config_mirrors_every_level() {
        let config = ConsoleConfig::default();
        assert_eq!(config.default_filter, "trace");
        assert!(config.enable_stdout);
    }
}
