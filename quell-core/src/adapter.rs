//! The error adapter: run a fallible operation, log what fails, move on
//! with an optional value.
use std::panic::Location;

use bon::Builder;
use eyre::Report;

use crate::failure::{FailureRecord, TraceMode};
use crate::sinks::{FailureSink, StdOutSink};

/// Adapter between "fallible operation" and "optional result".
///
/// An `ErrorAdapter` centralizes what happens to errors the caller has
/// decided are not worth individual handling: each failure becomes one
/// record written to the adapter's sink, and the caller receives `None`
/// instead. Calls are independent of each other; the adapter keeps no
/// state between them.
///
/// The sink is the extension point. The [`Default`] adapter prints to
/// standard output; production code substitutes its own
/// [`FailureSink`](crate::sinks::FailureSink) and reuses the wrap/log
/// contract unchanged.
#[derive(Builder)]
pub struct ErrorAdapter<S = StdOutSink> {
    /// Where captured failures are written.
    sink: S,
    /// Diagnostic snapshot taken when a failure is captured.
    #[builder(default)]
    trace_mode: TraceMode,
    /// Tag stamped on every record this adapter emits.
    #[builder(into)]
    label: Option<String>,
}

impl<S> ErrorAdapter<S>
where
    S: FailureSink,
{
    /// Run `operation` exactly once on the calling thread. A present or
    /// absent success value is forwarded unchanged; a failure is captured,
    /// written to the sink and downgraded to `None`.
    ///
    /// Exactly one record reaches the sink per failure and none on
    /// success. There are no retries and no rethrow path. Note that `None`
    /// can mean "legitimately no value" as well as "failed and
    /// suppressed"; the two are indistinguishable by design, so callers
    /// must not try to tell them apart.
    ///
    /// # Example
    /// ```rust
    /// use quell::adapter::ErrorAdapter;
    /// use quell::failure::TraceMode;
    /// use quell::sinks::VecSink;
    ///
    /// let sink = VecSink::new();
    /// let adapter = ErrorAdapter::builder()
    ///     .sink(sink.clone())
    ///     .trace_mode(TraceMode::Disabled)
    ///     .label("config-loader")
    ///     .build();
    ///
    /// let found = adapter.wrap(|| Ok::<_, std::io::Error>(Some("secrets.toml")));
    /// assert_eq!(found, Some("secrets.toml"));
    /// assert!(sink.is_empty());
    ///
    /// let missing = adapter.wrap(|| {
    ///     Err::<Option<&str>, _>(std::io::Error::new(
    ///         std::io::ErrorKind::NotFound,
    ///         "no such file",
    ///     ))
    /// });
    /// assert_eq!(missing, None);
    ///
    /// let records = sink.drain_vec(..);
    /// assert_eq!(records.len(), 1);
    /// assert!(records[0].description().contains("no such file"));
    /// assert_eq!(records[0].label(), Some("config-loader"));
    /// ```
    #[track_caller]
    pub fn wrap<T, E>(&self, operation: impl FnOnce() -> Result<Option<T>, E>) -> Option<T>
    where
        E: Into<Report>,
    {
        let origin = Location::caller();
        match operation() {
            Ok(value) => value,
            Err(e) => {
                self.swallow(e, origin);
                None
            }
        }
    }

    /// Capture `error` into a record and hand it to the sink. Shared by
    /// [`wrap`](Self::wrap) and [`Quell::quell`](crate::errorhandling::Quell::quell).
    pub(crate) fn swallow(&self, error: impl Into<Report>, origin: &'static Location<'static>) {
        let record =
            FailureRecord::capture(error.into(), origin, self.trace_mode, self.label.clone());
        self.sink.sink(record);
    }
}

/// The illustrative flavor: print to standard output, capture call
/// stacks, no label.
impl Default for ErrorAdapter<StdOutSink> {
    fn default() -> Self {
        ErrorAdapter::builder().sink(StdOutSink).build()
    }
}
