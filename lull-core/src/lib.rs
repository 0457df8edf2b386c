// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Shared building blocks for the lull crates.
//!
//! - [`LullError`] and the crate-wide [`Result`] alias
//! - logging macros (`debug!`, `warn!`, `error!`) that route to `tracing`
//!   when the `tracing` feature is enabled

pub mod error;
mod logging;

pub use self::error::{LullError, Result};

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;
