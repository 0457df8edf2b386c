// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the lull crates.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `CallRecorder<A>`
//!
//! Stands in for the callback given to a rate-limited wrapper and records
//! every invocation together with the (possibly paused) Tokio clock reading:
//!
//! ```rust
//! use lull_test_utils::CallRecorder;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let recorder = CallRecorder::new();
//! let callback = recorder.callback();
//! callback("hello");
//! assert_eq!(recorder.values(), vec!["hello"]);
//! # }
//! ```
//!
//! ## Channel helpers
//!
//! - [`test_channel`] - a sender plus the receiving half as a `Stream`
//! - [`helpers`] - assertions with timeouts for streams and receivers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recorder;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{assert_no_element_emitted, settle, unwrap_stream};
pub use recorder::CallRecorder;

/// Creates a test channel whose receiving half is a `Stream`.
///
/// # Example
///
/// ```rust
/// use lull_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
/// tx.send(42).unwrap();
/// assert_eq!(stream.next().await, Some(42));
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = T> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
