// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Looping frame timeline.
//!
//! A [`FrameTimeline`] holds the display duration of every frame of an
//! animation and answers one question: given the time elapsed since the
//! animation started, which frame is due?
//!
//! Elapsed time is reduced modulo the loop period, so an animation loops
//! forever without its start time ever being reset. Frame `i` covers the
//! half-open interval `[sum(d[..i]), sum(d[..=i]))`: a frame stays up for its
//! full duration and the boundary instant belongs to the next frame.
//!
//! Durations are integer host ticks, so the running sum is exact. The lookup
//! still clamps its result to the last frame in case a caller hands it an
//! elapsed value at or past the period.

use alloc::vec::Vec;

use crate::time::Duration;

/// Per-frame display durations of a looping animation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameTimeline {
    durations: Vec<Duration>,
    total: Duration,
}

impl FrameTimeline {
    /// Creates an empty timeline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            durations: Vec::new(),
            total: Duration::ZERO,
        }
    }

    /// Creates a timeline from a list of durations.
    #[must_use]
    pub fn from_durations(durations: Vec<Duration>) -> Self {
        let total = durations
            .iter()
            .fold(Duration::ZERO, |acc, d| acc.saturating_add(*d));
        Self { durations, total }
    }

    /// Appends a frame.
    pub fn push(&mut self, duration: Duration) {
        self.durations.push(duration);
        self.total = self.total.saturating_add(duration);
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Returns `true` if the timeline has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Sum of all durations; the loop period.
    #[must_use]
    pub const fn total(&self) -> Duration {
        self.total
    }

    /// The per-frame durations in display order.
    #[must_use]
    pub fn durations(&self) -> &[Duration] {
        &self.durations
    }

    /// Reduces `elapsed` into `[0, total)`.
    ///
    /// A zero-length timeline has no period; every instant maps to zero.
    #[must_use]
    pub const fn phase(&self, elapsed: Duration) -> Duration {
        match elapsed.checked_rem(self.total) {
            Some(phase) => phase,
            None => Duration::ZERO,
        }
    }

    /// Returns the index of the frame due `elapsed` after the animation
    /// started, or `None` if there are no frames.
    ///
    /// When every frame has zero duration, frame 0 is shown.
    #[must_use]
    pub fn frame_at(&self, elapsed: Duration) -> Option<usize> {
        let last = self.durations.len().checked_sub(1)?;
        let phase = self.phase(elapsed);
        let mut acc = Duration::ZERO;
        for (index, duration) in self.durations.iter().enumerate() {
            acc = acc.saturating_add(*duration);
            if acc > phase {
                return Some(index.min(last));
            }
        }
        // Only reachable when the total is zero or the sum saturated.
        Some(if self.total.is_zero() { 0 } else { last })
    }

    /// Returns the start offset of frame `index` within the loop.
    #[must_use]
    pub fn frame_start(&self, index: usize) -> Option<Duration> {
        if index >= self.durations.len() {
            return None;
        }
        Some(
            self.durations[..index]
                .iter()
                .fold(Duration::ZERO, |acc, d| acc.saturating_add(*d)),
        )
    }
}
