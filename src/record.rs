use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Severity of a log call. The set is closed; there are no custom levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
    Debug,
    Verbose,
}

impl Level {
    /// Name used both in the entry JSON and as the `level` stream label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Debug => "debug",
            Level::Verbose => "verbose",
        }
    }

    /// Console level this severity is mirrored at.
    pub fn to_tracing(self) -> tracing::Level {
        match self {
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
            Level::Debug => tracing::Level::DEBUG,
            Level::Verbose => tracing::Level::TRACE,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single normalized log call.
///
/// Only `level`, `message`, `context` and `trace` end up in the JSON line
/// sent to Loki; the routing identifiers travel as per-value metadata and
/// the timestamp as the value's first element.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(skip)]
    pub org_id: String,
    #[serde(skip)]
    pub bot_id: String,
    #[serde(skip)]
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Nanoseconds since the Unix epoch as a base-10 string, the only
    /// timestamp representation the push API accepts.
    pub fn timestamp_nanos(&self) -> String {
        let nanos = i128::from(self.timestamp.timestamp()) * 1_000_000_000
            + i128::from(self.timestamp.timestamp_subsec_nanos());
        nanos.to_string()
    }

    /// JSON line for this entry. Falls back to a hand-built line if the
    /// encoder ever refuses, so building an envelope cannot fail.
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                "{{\"level\":{:?},\"message\":{:?},\"context\":{:?}}}",
                self.level.as_str(),
                self.message,
                self.context
            )
        })
    }
}

/// Turn an arbitrary message into the text carried by a [`LogEntry`].
///
/// Values that serialize to a JSON string are used verbatim; anything
/// structured becomes compact JSON with sorted object keys. If
/// serialization fails the `Debug` rendering is used instead.
pub fn message_text<M>(message: &M) -> String
where
    M: Serialize + fmt::Debug + ?Sized,
{
    match serde_json::to_value(message) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(value) => value.to_string(),
        Err(_) => format!("{:?}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::ser::{Error as _, Serializer};
    use serde_json::json;

    #[derive(Debug)]
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    fn entry(trace: Option<&str>) -> LogEntry {
        LogEntry {
            level: Level::Error,
            message: "disk full".to_string(),
            context: "DiskWatcher".to_string(),
            trace: trace.map(str::to_string),
            org_id: "org1".to_string(),
            bot_id: "bot1".to_string(),
            timestamp: Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap(),
        }
    }

    #[test]
    fn text_messages_are_kept_verbatim() {
        assert_eq!(message_text("plain text"), "plain text");
        assert_eq!(message_text(&"owned".to_string()), "owned");
    }

    #[test]
    fn structured_messages_become_json_text() {
        let text = message_text(&json!({"b": [1, 2], "a": 1}));
        assert_eq!(text, r#"{"a":1,"b":[1,2]}"#);

        let decoded: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, json!({"a": 1, "b": [1, 2]}));

        assert_eq!(message_text(&42), "42");
    }

    #[test]
    fn serialization_failure_degrades_to_debug_text() {
        assert_eq!(message_text(&Unserializable), "Unserializable");
    }

    #[test]
    fn entry_line_carries_only_the_logged_fields() {
        let line: serde_json::Value = serde_json::from_str(&entry(Some("stack")).to_line()).unwrap();
        assert_eq!(
            line,
            json!({
                "level": "error",
                "message": "disk full",
                "context": "DiskWatcher",
                "trace": "stack",
            })
        );
    }

    #[test]
    fn missing_trace_is_omitted_from_line() {
        let line: serde_json::Value = serde_json::from_str(&entry(None).to_line()).unwrap();
        assert!(line.get("trace").is_none());
    }

    #[test]
    fn timestamp_is_rendered_in_nanoseconds() {
        assert_eq!(entry(None).timestamp_nanos(), "1700000000123456789");
    }

    #[test]
    fn levels_map_to_wire_and_console_names() {
        assert_eq!(Level::Verbose.as_str(), "verbose");
        assert_eq!(Level::Verbose.to_tracing(), tracing::Level::TRACE);
        assert_eq!(Level::Warn.to_string(), "warn");
        assert_eq!(serde_json::to_value(Level::Info).unwrap(), json!("info"));
    }
}
