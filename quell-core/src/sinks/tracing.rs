use tracing::{error, field};

use super::FailureSink;
use crate::failure::FailureRecord;

/// Production sink: emits every suppressed failure as one `tracing` error
/// event.
///
/// The failure description becomes the event message; the wrap call site,
/// the adapter label and the captured call stack (when present) travel as
/// structured fields, so downstream subscribers and crash-analytics
/// collectors can index them.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn sink(&self, record: FailureRecord) {
        error!(
            origin = %record.origin(),
            label = record.label(),
            trace = record.trace().map(field::display),
            "suppressed failure: {}",
            record.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapter::ErrorAdapter;
    use crate::failure::TraceMode;

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// One failure turns into exactly one error event carrying the
    /// description
    #[test]
    fn emits_one_event_per_failure() {
        let buffer: Arc<Mutex<Vec<u8>>> = Arc::default();
        let writer = CaptureWriter(buffer.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let adapter = ErrorAdapter::builder()
                .sink(TracingSink)
                .trace_mode(TraceMode::Disabled)
                .build();
            let out = adapter.wrap(|| {
                Err::<Option<()>, _>(io::Error::new(
                    io::ErrorKind::NotFound,
                    "file not found",
                ))
            });
            assert!(out.is_none());

            let fine = adapter.wrap(|| Ok::<_, io::Error>(Some(1)));
            assert_eq!(fine, Some(1));
        });

        let logged = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert_eq!(logged.matches("suppressed failure").count(), 1);
        assert!(logged.contains("file not found"));
        assert!(logged.contains("ERROR"));
    }
}
