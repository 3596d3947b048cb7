// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small value shared between the render thread and observers.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// A `Copy` value behind its own lock.
///
/// The render thread writes through [`set`](Self::set) or
/// [`update`](Self::update); any thread holding an `Arc` to it may
/// [`get`](Self::get). A poisoned lock is recovered: the value is plain data
/// and a panic elsewhere cannot leave it half-written.
pub struct SharedValue<T> {
    inner: Mutex<T>,
}

impl<T: Copy> SharedValue<T> {
    /// Creates a shared value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> T {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the value.
    pub fn set(&self, value: T) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = value;
    }

    /// Replaces the value with `f(current)` under a single lock and returns
    /// the new value.
    pub fn update(&self, f: impl FnOnce(T) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = f(*guard);
        *guard
    }
}

impl<T: Copy + Default> Default for SharedValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for SharedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedValue").field(&self.get()).finish()
    }
}
