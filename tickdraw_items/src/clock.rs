// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform monotonic host clock.
//!
//! On Unix, host ticks are `CLOCK_MONOTONIC` nanoseconds read through
//! `rustix`, so every [`MonotonicClock`] shares one time origin. Elsewhere
//! each clock counts nanoseconds from the [`Instant`](std::time::Instant) it
//! was created at.

use tickdraw_core::time::{Clock, HostTime, Timebase};

#[cfg(unix)]
const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Returns the host [`Timebase`]: host ticks are nanoseconds.
#[must_use]
pub const fn timebase() -> Timebase {
    Timebase::NANOS
}

#[cfg(unix)]
fn monotonic_now() -> HostTime {
    use rustix::time::{ClockId, clock_gettime};

    let timespec = clock_gettime(ClockId::Monotonic);
    let seconds = u64::try_from(timespec.tv_sec).unwrap_or(0);
    let nanos = u64::try_from(timespec.tv_nsec)
        .unwrap_or(0)
        .min(999_999_999);
    let ticks = u128::from(seconds)
        .saturating_mul(NANOS_PER_SECOND)
        .saturating_add(u128::from(nanos));
    HostTime(u64::try_from(ticks).unwrap_or(u64::MAX))
}

/// Monotonic [`Clock`] in nanosecond ticks.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    #[cfg(not(unix))]
    anchor: std::time::Instant,
}

impl MonotonicClock {
    /// Creates a clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(not(unix))]
            anchor: std::time::Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[cfg(unix)]
    fn now(&self) -> HostTime {
        monotonic_now()
    }

    #[cfg(not(unix))]
    fn now(&self) -> HostTime {
        let elapsed = self.anchor.elapsed();
        HostTime(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
    }

    fn timebase(&self) -> Timebase {
        timebase()
    }
}
