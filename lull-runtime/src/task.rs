// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Handle to a spawned timer task.
///
/// Dropping the handle detaches the task; it keeps running to completion.
/// Call [`abort`](TaskHandle::abort) to stop it at its next suspension point.
pub trait TaskHandle: Send + 'static {
    /// Stops the task without waiting for it.
    fn abort(self);

    /// Whether the task has already run to completion or been aborted.
    fn is_finished(&self) -> bool;
}
