use crate::error::ShipError;

/// Where shipment failures go.
///
/// Must not route back into the logger, otherwise a dead backend turns
/// every failure into another failing shipment.
pub trait FallbackSink: Send + Sync {
    fn report(&self, error: &ShipError);
}

/// Prints failures to standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrFallback;

impl FallbackSink for StderrFallback {
    fn report(&self, error: &ShipError) {
        eprintln!("Failed to push logs to Loki: {}", error);
    }
}
