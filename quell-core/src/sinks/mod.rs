//! Sinks for writing swallowed failures to an output
mod stdout;
mod tracing;
mod vec_sink;

pub use stdout::StdOutSink;
pub use tracing::TracingSink;
pub use vec_sink::VecSink;

use crate::failure::FailureRecord;

/// Where captured failures are written.
///
/// This is the extension point of the wrap/log contract: substitute a
/// production sink (crash analytics, alerting, ...) and reuse the adapter
/// unchanged. A sink receives exactly one record per suppressed failure
/// and performs output; it is infallible from the adapter's perspective.
///
/// `sink` takes `&self` and the adapter adds no locking of its own, so an
/// [`ErrorAdapter`](crate::adapter::ErrorAdapter) is safe to share across
/// threads exactly when its sink and the wrapped operations are.
pub trait FailureSink {
    /// Record one suppressed failure.
    fn sink(&self, record: FailureRecord);
}
