use crate::envelope::PushEnvelope;
use crate::error::ShipError;
use async_trait::async_trait;

/// Asynchronous destination for [`PushEnvelope`]s built by the logger.
///
/// Implementations transport one envelope to a concrete backend (Loki,
/// a test double, a custom service). The logger calls `send` from a
/// detached task and never awaits it on the caller's path.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Deliver a single envelope.
    ///
    /// **Returns**
    /// - `Ok(())` if the backend accepted the envelope.
    /// - `Err(..)` on transport failure, encoding failure or a non-success
    ///   status. The logger reports the error once and drops the entry;
    ///   it is never retried.
    async fn send(&self, envelope: &PushEnvelope) -> Result<(), ShipError>;
}
