// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lock guarding a wrapper's timing state.

use core::ops::{Deref, DerefMut};

/// Blocking lock around the state a wrapper shares with its timer task.
///
/// The state already lives behind the wrapper's `Arc`, so implementations are
/// plain locks. Critical sections only read or update timestamps and the
/// buffered arguments; the guard is always dropped before a user callback
/// runs, so the lock never needs to be reentrant.
pub trait MutexLike<T: ?Sized> {
    /// Exclusive access to the state until dropped.
    type Guard<'a>: Deref<Target = T> + DerefMut
    where
        Self: 'a,
        T: 'a;

    /// Wraps the initial state.
    fn new(value: T) -> Self
    where
        T: Sized;

    /// Blocks until no other caller or timer holds the state.
    fn lock(&self) -> Self::Guard<'_>;
}
