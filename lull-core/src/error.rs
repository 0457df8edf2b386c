// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the lull crates.
//!
//! Almost nothing in lull can fail: helpers are total and the rate-limited
//! invokers never reject a call. The two exceptions are a timer that cannot
//! be armed because no runtime is running, and strict parsing of an object
//! path string.
//!
//! # Examples
//!
//! ```
//! use lull_core::{LullError, Result};
//!
//! fn lookup(path: &str) -> Result<()> {
//!     Err(LullError::invalid_path(path, "unclosed bracket"))
//! }
//!
//! assert!(lookup("a[0").is_err());
//! ```

/// Root error type for all lull operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LullError {
    /// A deferred call needed a timer but no async runtime is active on the
    /// current thread.
    #[error("No timer runtime available: {context}")]
    NoRuntime {
        /// What was being scheduled when the runtime was found missing
        context: String,
    },

    /// A path string could not be parsed strictly.
    #[error("Invalid object path '{path}': {reason}")]
    InvalidPath {
        /// The offending path, verbatim
        path: String,
        /// Why parsing stopped
        reason: String,
    },
}

impl LullError {
    /// Create a missing-runtime error with the given context
    pub fn no_runtime(context: impl Into<String>) -> Self {
        Self::NoRuntime {
            context: context.into(),
        }
    }

    /// Create a path parsing error
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether retrying the same operation later could succeed.
    ///
    /// A missing runtime is an environment problem; a malformed path never
    /// becomes valid.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoRuntime { .. })
    }
}

/// Specialized Result type for lull operations
pub type Result<T, E = LullError> = core::result::Result<T, E>;
