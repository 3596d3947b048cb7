// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time, timebase conversion, and clock sources.
//!
//! [`HostTime`] is a point in time expressed as platform-native monotonic
//! ticks. [`Timebase`] carries the rational conversion from ticks to
//! nanoseconds, and [`Duration`] is a span in the same tick units.
//!
//! All frame-selection arithmetic is done in integer ticks so that summing
//! per-frame durations never drifts. Conversions to and from nanoseconds use
//! `u128` intermediates to avoid overflow.
//!
//! Render callbacks read the current time through the [`Clock`] trait. Hosts
//! with a real monotonic clock provide one implementation; deterministic
//! harnesses use [`ManualClock`].

use core::fmt;
use core::ops::{Add, Rem, Sub};
use core::sync::atomic::{AtomicU64, Ordering};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// A point in time expressed as platform-native monotonic ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Converts this host time to nanoseconds using the given timebase.
    #[inline]
    #[must_use]
    pub const fn to_nanos(self, timebase: Timebase) -> u64 {
        timebase.ticks_to_nanos(self.0)
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// Checked addition of a duration.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, duration: Duration) -> Option<Self> {
        match self.0.checked_add(duration.0) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }
}

impl Add<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for HostTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({})", self.0)
    }
}

/// Rational conversion factor from ticks to nanoseconds.
///
/// `nanoseconds = ticks * numer / denom`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timebase {
    /// Numerator of the ticks-to-nanoseconds ratio.
    pub numer: u32,
    /// Denominator of the ticks-to-nanoseconds ratio.
    pub denom: u32,
}

impl Timebase {
    /// A timebase where ticks are already nanoseconds (1:1).
    pub const NANOS: Self = Self { numer: 1, denom: 1 };

    /// Creates a new timebase with the given numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `numer` or `denom` is zero.
    #[inline]
    #[must_use]
    pub const fn new(numer: u32, denom: u32) -> Self {
        assert!(numer != 0, "timebase numerator must not be zero");
        assert!(denom != 0, "timebase denominator must not be zero");
        Self { numer, denom }
    }

    /// Converts a tick count to nanoseconds.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn ticks_to_nanos(self, ticks: u64) -> u64 {
        let wide = ticks as u128 * self.numer as u128 / self.denom as u128;
        wide as u64
    }

    /// Converts nanoseconds to a tick count.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn nanos_to_ticks(self, nanos: u64) -> u64 {
        let wide = nanos as u128 * self.denom as u128 / self.numer as u128;
        wide as u64
    }
}

impl Default for Timebase {
    fn default() -> Self {
        Self::NANOS
    }
}

impl fmt::Debug for Timebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timebase({}/{})", self.numer, self.denom)
    }
}

/// A duration in platform-native ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns `true` for a zero-length duration.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Converts this duration to nanoseconds using the given timebase.
    #[inline]
    #[must_use]
    pub const fn to_nanos(self, timebase: Timebase) -> u64 {
        timebase.ticks_to_nanos(self.0)
    }

    /// Creates a duration from a nanosecond value and timebase.
    #[inline]
    #[must_use]
    pub const fn from_nanos(nanos: u64, timebase: Timebase) -> Self {
        Self(timebase.nanos_to_ticks(nanos))
    }

    /// Creates a duration from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64, timebase: Timebase) -> Self {
        Self::from_nanos(millis.saturating_mul(1_000_000), timebase)
    }

    /// Converts this duration to fractional milliseconds.
    #[inline]
    #[must_use]
    pub fn to_millis_f64(self, timebase: Timebase) -> f64 {
        self.to_nanos(timebase) as f64 / NANOS_PER_MILLI
    }

    /// Saturating addition.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Remainder of `self` divided by `period`, or `None` for a zero period.
    #[inline]
    #[must_use]
    pub const fn checked_rem(self, period: Self) -> Option<Self> {
        match self.0.checked_rem(period.0) {
            Some(r) => Some(Self(r)),
            None => None,
        }
    }
}

impl Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Rem for Duration {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({})", self.0)
    }
}

/// A source of monotonic [`HostTime`] readings.
///
/// Render callbacks read time through this trait so the same drawable runs
/// against the platform clock in production and a [`ManualClock`] in tests.
pub trait Clock {
    /// Returns the current host time.
    fn now(&self) -> HostTime;

    /// Returns the timebase that converts this clock's ticks to nanoseconds.
    fn timebase(&self) -> Timebase;
}

/// A clock that only moves when told to.
///
/// Reads and writes are atomic, so a `ManualClock` can be shared between the
/// render thread and whatever drives simulated time.
#[derive(Debug, Default)]
pub struct ManualClock {
    ticks: AtomicU64,
    timebase: Timebase,
}

impl ManualClock {
    /// Creates a nanosecond clock reading `start`.
    #[must_use]
    pub const fn new(start: HostTime) -> Self {
        Self::with_timebase(start, Timebase::NANOS)
    }

    /// Creates a clock reading `start` in the given timebase.
    #[must_use]
    pub const fn with_timebase(start: HostTime, timebase: Timebase) -> Self {
        Self {
            ticks: AtomicU64::new(start.0),
            timebase,
        }
    }

    /// Jumps the clock to `t`.
    pub fn set(&self, t: HostTime) {
        self.ticks.store(t.0, Ordering::Release);
    }

    /// Moves the clock forward by `d`, saturating at the maximum tick value.
    pub fn advance(&self, d: Duration) {
        let _ = self
            .ticks
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |t| {
                Some(t.saturating_add(d.0))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> HostTime {
        HostTime(self.ticks.load(Ordering::Acquire))
    }

    fn timebase(&self) -> Timebase {
        self.timebase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_conversion_macos_style_timebase() {
        // 24 MHz ticks: 125/3 ns per tick.
        let tb = Timebase::new(125, 3);
        let d = Duration::from_millis(1_000, tb);
        assert_eq!(d.ticks(), 24_000_000, "1s at 24 MHz");
        assert!(
            (d.to_millis_f64(tb) - 1_000.0).abs() < 1e-9,
            "round trip back to milliseconds"
        );
    }

    #[test]
    fn overflow_safe_conversion() {
        let tb = Timebase::new(125, 3);
        let _nanos = HostTime(u64::MAX / 2).to_nanos(tb);
    }

    #[test]
    fn remainder_wraps_into_period() {
        let period = Duration(600);
        assert_eq!(Duration(650) % period, Duration(50));
        assert_eq!(Duration(650).checked_rem(period), Some(Duration(50)));
        assert_eq!(Duration(650).checked_rem(Duration::ZERO), None);
    }

    #[test]
    fn saturating_duration_since_clamps_to_zero() {
        let t = HostTime(1000);
        assert_eq!(t.saturating_duration_since(HostTime(1500)), Duration::ZERO);
        assert_eq!(t.saturating_duration_since(HostTime(400)), Duration(600));
    }

    #[test]
    fn manual_clock_advances_and_sets() {
        let clock = ManualClock::new(HostTime(10));
        clock.advance(Duration(5));
        assert_eq!(clock.now(), HostTime(15));
        clock.set(HostTime(3));
        assert_eq!(clock.now(), HostTime(3));
        clock.set(HostTime(u64::MAX - 1));
        clock.advance(Duration(10));
        assert_eq!(clock.now(), HostTime(u64::MAX), "advance saturates");
        assert_eq!(clock.timebase(), Timebase::NANOS);
    }
}
