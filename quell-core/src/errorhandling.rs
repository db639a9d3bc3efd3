//! Sugar for swallowing failures out of already-materialized `Result`s.
use std::panic::Location;

use eyre::Report;

use crate::adapter::ErrorAdapter;
use crate::sinks::FailureSink;

/// Route a `Result`'s failure through an [`ErrorAdapter`] without going
/// through a closure.
pub trait Quell<T, E>: Sized + sealed::Sealed {
    /// Log the failure through `adapter` and downgrade it to `None`; pass
    /// a success value through as `Some`.
    ///
    /// Semantics are exactly those of [`ErrorAdapter::wrap`]: one record
    /// per failure, none on success, no rethrow path.
    ///
    /// # Example
    /// ```rust
    /// use quell::adapter::ErrorAdapter;
    /// use quell::errorhandling::Quell;
    /// use quell::sinks::VecSink;
    ///
    /// let sink = VecSink::new();
    /// let adapter = ErrorAdapter::builder().sink(sink.clone()).build();
    ///
    /// let healthy: Result<u32, std::io::Error> = Ok(204);
    /// assert_eq!(healthy.quell(&adapter), Some(204));
    ///
    /// let sick: Result<u32, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::ConnectionRefused,
    ///     "upstream unreachable",
    /// ));
    /// assert_eq!(sick.quell(&adapter), None);
    /// assert_eq!(sink.len(), 1);
    /// ```
    fn quell<S: FailureSink>(self, adapter: &ErrorAdapter<S>) -> Option<T>;
}

impl<T, E> Quell<T, E> for Result<T, E>
where
    E: Into<Report>,
{
    #[track_caller]
    fn quell<S: FailureSink>(self, adapter: &ErrorAdapter<S>) -> Option<T> {
        match self {
            Ok(x) => Some(x),
            Err(e) => {
                adapter.swallow(e, Location::caller());
                None
            }
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> {}
}

#[cfg(test)]
mod tests {
    use thiserror::Error;

    use super::*;
    use crate::failure::{FailureRecord, TraceMode};
    use crate::sinks::VecSink;

    #[derive(Debug, Error)]
    #[error("ledger out of balance")]
    struct OutOfBalance;

    fn capture_adapter() -> (ErrorAdapter<VecSink<FailureRecord>>, VecSink<FailureRecord>) {
        let sink = VecSink::new();
        let adapter = ErrorAdapter::builder()
            .sink(sink.clone())
            .trace_mode(TraceMode::Disabled)
            .build();
        (adapter, sink)
    }

    /// Success values pass through as `Some` without emissions
    #[test]
    fn passes_ok_through() {
        let (adapter, sink) = capture_adapter();
        let result: Result<&str, OutOfBalance> = Ok("booked");
        assert_eq!(result.quell(&adapter), Some("booked"));
        assert!(sink.is_empty());
    }

    /// Failures are logged once and downgraded to `None`
    #[test]
    fn swallows_err_with_one_record() {
        let (adapter, sink) = capture_adapter();
        let result: Result<u64, OutOfBalance> = Err(OutOfBalance);
        assert_eq!(result.quell(&adapter), None);
        let records = sink.drain_vec(..);
        assert_eq!(records.len(), 1);
        assert!(records[0].description().contains("ledger out of balance"));
    }

    /// The record's origin is the quell call line, not adapter internals
    #[test]
    fn origin_is_the_call_site() {
        let (adapter, sink) = capture_adapter();
        let result: Result<(), OutOfBalance> = Err(OutOfBalance);
        let here = Location::caller();
        let _ = result.quell(&adapter);
        let record = sink.drain_vec(..).pop().unwrap();
        assert_eq!(record.origin().file(), here.file());
        assert_eq!(record.origin().line(), here.line() + 1);
    }

    /// Fire-and-forget use on unit results reads naturally
    #[test]
    fn works_for_unit_results() {
        let (adapter, sink) = capture_adapter();
        let flushed: Result<(), OutOfBalance> = Err(OutOfBalance);
        let _ = flushed.quell(&adapter);
        assert_eq!(sink.len(), 1);
    }
}
