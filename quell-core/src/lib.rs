//! Quell wraps fallible operations, logs what failed and hands back an
//! optional value instead of an error.
//!
//! The caller decides some errors are not worth individual handling;
//! [`adapter::ErrorAdapter`] centralizes what happens to them: one log
//! emission per failure, `None` instead of a value, nothing rethrown.
//!
//! ```rust
//! use quell::adapter::ErrorAdapter;
//! use quell::sinks::VecSink;
//!
//! let sink = VecSink::new();
//! let adapter = ErrorAdapter::builder().sink(sink.clone()).build();
//!
//! let present = adapter.wrap(|| Ok::<_, std::io::Error>(Some(7)));
//! let absent = adapter.wrap(|| {
//!     Err::<Option<i32>, _>(std::io::Error::other("disk on fire"))
//! });
//!
//! assert_eq!(present, Some(7));
//! assert_eq!(absent, None);
//! assert_eq!(sink.len(), 1);
//! ```
pub mod adapter;
pub mod errorhandling;
pub mod failure;
pub mod sinks;
