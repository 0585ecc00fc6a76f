use std::collections::HashMap;

/// Base URL of the Loki instance, e.g. `http://loki:3100`.
pub const LOKI_BASE_URL_KEY: &str = "LOKI_INTERNAL_BASE_URL";

/// Deployment environment, shipped as the `env` stream label.
pub const ENVIRONMENT_KEY: &str = "APP_ENV";

/// Port the hello-world host listens on.
pub const PORT_KEY: &str = "PORT";

/// Read-only key/value configuration, consulted on every call.
///
/// Missing keys are never an error at this level; callers decide what an
/// absent value means.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads straight from the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvConfig;

impl ConfigSource for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory configuration.
#[derive(Clone, Debug, Default)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for StaticConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
