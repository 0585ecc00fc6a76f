use crate::record::{Level, LogEntry};
use serde::Serialize;

/// Body of a `POST /loki/api/v1/push` request.
///
/// Every envelope built by this crate carries exactly one stream holding
/// exactly one value; calls are never batched together.
#[derive(Debug, Clone, Serialize)]
pub struct PushEnvelope {
    pub streams: Vec<PushStream>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PushStream {
    pub stream: StreamLabels,
    pub values: Vec<PushValue>,
}

/// Low-cardinality labels identifying the stream. Routing identifiers
/// must never be added here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamLabels {
    pub level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
}

/// Per-value metadata carrying the high-cardinality routing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryMetadata {
    #[serde(rename = "orgId")]
    pub org_id: String,
    #[serde(rename = "botId")]
    pub bot_id: String,
}

/// `[timestamp, line, metadata]`, serialized as a three element array.
pub type PushValue = (String, String, EntryMetadata);

impl PushEnvelope {
    /// Wrap a single entry into its own stream.
    ///
    /// **Parameters**
    /// - `entry`: the normalized call to ship.
    /// - `env`: environment name for the `env` label, omitted when `None`.
    pub fn single(entry: &LogEntry, env: Option<String>) -> Self {
        let value = (
            entry.timestamp_nanos(),
            entry.to_line(),
            EntryMetadata {
                org_id: entry.org_id.clone(),
                bot_id: entry.bot_id.clone(),
            },
        );

        PushEnvelope {
            streams: vec![PushStream {
                stream: StreamLabels {
                    level: entry.level,
                    env,
                },
                values: vec![value],
            }],
        }
    }

    /// Labels of the (single) stream.
    pub fn labels(&self) -> Option<&StreamLabels> {
        self.streams.first().map(|s| &s.stream)
    }

    /// The (single) value tuple.
    pub fn value(&self) -> Option<&PushValue> {
        self.streams.first().and_then(|s| s.values.first())
    }
}
