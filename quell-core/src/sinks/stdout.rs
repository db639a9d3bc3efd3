use super::FailureSink;
use crate::failure::FailureRecord;

/// The illustrative sink: prints every record to standard output.
pub struct StdOutSink;

impl FailureSink for StdOutSink {
    fn sink(&self, record: FailureRecord) {
        println!("{record}")
    }
}
