// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Longest delay a wrapper or adapter schedules, about 30 years.
///
/// Longer `wait` and `max_wait` values are clamped to this on construction,
/// so deadline arithmetic never overflows the clock.
pub const MAX_DELAY: Duration = Duration::from_secs(86_400 * 365 * 30);

pub(crate) fn clamp_delay(delay: Duration) -> Duration {
    if delay > MAX_DELAY {
        lull_core::warn!("delay of {:?} clamped to {:?}", delay, MAX_DELAY);
        MAX_DELAY
    } else {
        delay
    }
}

/// Edge configuration for [`Debounced`](crate::Debounced) and
/// [`DebounceExt`](crate::DebounceExt).
///
/// Deserializes with missing fields taking their defaults, so
/// `{"leading": true}` keeps `trailing` on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceOptions {
    /// Invoke on the first call of a burst.
    pub leading: bool,
    /// Invoke with the latest arguments once the burst settles.
    pub trailing: bool,
    /// Upper bound on how long a buffered call may be deferred while calls
    /// keep arriving. Values below `wait` behave as `wait`.
    pub max_wait: Option<Duration>,
}

impl Default for DebounceOptions {
    fn default() -> Self {
        Self {
            leading: false,
            trailing: true,
            max_wait: None,
        }
    }
}

impl DebounceOptions {
    /// Leading edge only: fire immediately, ignore the rest of the burst.
    #[must_use]
    pub const fn leading_only() -> Self {
        Self {
            leading: true,
            trailing: false,
            max_wait: None,
        }
    }

    #[must_use]
    pub const fn with_leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub const fn with_trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    #[must_use]
    pub const fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    pub(crate) fn clamped(mut self) -> Self {
        self.max_wait = self.max_wait.map(clamp_delay);
        self
    }

    pub(crate) fn effective_max_wait(&self, wait: Duration) -> Option<Duration> {
        self.max_wait.map(|max_wait| max_wait.max(wait))
    }
}

/// Edge configuration for [`Throttled`](crate::Throttled) and
/// [`ThrottleExt`](crate::ThrottleExt). Both edges are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleOptions {
    /// Invoke on the first call of a fresh window.
    pub leading: bool,
    /// Invoke with the last suppressed arguments when the window closes.
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

impl ThrottleOptions {
    #[must_use]
    pub const fn with_leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub const fn with_trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }
}
