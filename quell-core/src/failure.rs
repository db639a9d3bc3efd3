//! Captured failures and the diagnostic context recorded with them.
use std::backtrace::Backtrace;
use std::fmt::{self, Display};
use std::panic::Location;

use eyre::Report;

/// Selects the diagnostic snapshot taken when a failure is captured.
///
/// Call-stack capture is a nicety of the wrap/log contract, not a hard
/// requirement; disable it where the capture cost matters. The wrap call
/// site is recorded either way, it is free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceMode {
    /// Record the call stack at the time of failure.
    #[default]
    CallStack,
    /// Record no call stack.
    Disabled,
}

/// A failure captured on the swallowed path: the error report plus the
/// diagnostic context taken when the operation failed.
///
/// Records are created by [`ErrorAdapter`](crate::adapter::ErrorAdapter)
/// only, handed to the sink immediately and not retained anywhere.
#[derive(Debug)]
pub struct FailureRecord {
    report: Report,
    origin: &'static Location<'static>,
    trace: Option<Backtrace>,
    label: Option<String>,
}

impl FailureRecord {
    pub(crate) fn capture(
        report: Report,
        origin: &'static Location<'static>,
        trace_mode: TraceMode,
        label: Option<String>,
    ) -> Self {
        let trace = match trace_mode {
            TraceMode::CallStack => Some(Backtrace::force_capture()),
            TraceMode::Disabled => None,
        };
        FailureRecord {
            report,
            origin,
            trace,
            label,
        }
    }

    /// The failure description: the report's full error chain, outermost
    /// error first.
    pub fn description(&self) -> String {
        format!("{:#}", self.report)
    }

    /// The underlying failure report.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// The `wrap` or `quell` call site which swallowed this failure.
    pub fn origin(&self) -> &'static Location<'static> {
        self.origin
    }

    /// The call stack at the time of failure, if capture was enabled.
    pub fn trace(&self) -> Option<&Backtrace> {
        self.trace.as_ref()
    }

    /// The label of the adapter which captured this record, if it had one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(
                f,
                "suppressed failure [{label}] at {}: {:#}",
                self.origin, self.report
            )?,
            None => write!(
                f,
                "suppressed failure at {}: {:#}",
                self.origin, self.report
            )?,
        }
        if let Some(trace) = &self.trace {
            write!(f, "\ncall stack:\n{trace}")?;
        }
        Ok(())
    }
}
