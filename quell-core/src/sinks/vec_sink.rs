use std::{ops::RangeBounds, sync::Arc, sync::Mutex};

use super::FailureSink;
use crate::failure::FailureRecord;

/// A helper to write values into a shared vector and take them out again.
/// This is mainly useful for asserting on swallowed failures in unit
/// tests. This struct uses an `Arc<Mutex<Vec<T>>>` internally, so it can
/// be freely cloned.
pub struct VecSink<T> {
    inner: Arc<Mutex<Vec<T>>>,
}

// Not derived: the derive would bound `T: Clone`, but clones only share
// the vector. `FailureRecord` is not clonable and must still fit.
impl<T> Clone for VecSink<T> {
    fn clone(&self) -> Self {
        VecSink {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for VecSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VecSink<T> {
    /// Create a new sink which collects all records into a `Vec`
    pub fn new() -> Self {
        VecSink {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Put a value into this sink
    pub fn give(&self, value: T) {
        self.inner.lock().unwrap().push(value)
    }

    /// Take the given range out of this sink
    pub fn drain_vec<R: RangeBounds<usize>>(&self, range: R) -> Vec<T> {
        self.inner.lock().unwrap().drain(range).collect()
    }

    /// Returns the number of values currently held
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Returns whether the sink currently holds no values
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

impl<T> IntoIterator for VecSink<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.drain_vec(..).into_iter()
    }
}

impl FailureSink for VecSink<FailureRecord> {
    fn sink(&self, record: FailureRecord) {
        self.give(record);
    }
}
