use crate::envelope::PushEnvelope;
use crate::error::ShipError;
use crate::sink::LogSink;
use async_trait::async_trait;

/// A sink that simply drops all envelopes.
///
/// Useful for measuring the overhead of the logger itself without any
/// network I/O, and for tests that only care about the console mirror.
#[derive(Clone, Default)]
pub struct NoopSink;

#[async_trait]
impl LogSink for NoopSink {
    async fn send(&self, _envelope: &PushEnvelope) -> Result<(), ShipError> {
        Ok(())
    }
}
