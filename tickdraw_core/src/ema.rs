// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exponential moving average used to smooth per-tick render cost.
//!
//! Render cost is noisy from one tick to the next. Blending each new sample
//! into a running value gives a stable readout with O(1) state and no history
//! buffer, at the price of some lag after a sudden change.

/// Blend weights of an exponential moving average.
///
/// `next = retain * prev + update * sample`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ema {
    /// Weight of the previous value.
    pub retain: f64,
    /// Weight of the new sample.
    pub update: f64,
}

impl Ema {
    /// The weights used for render-cost probes: keep 90%, blend in 10%.
    pub const RENDER_COST: Self = Self {
        retain: 0.9,
        update: 0.1,
    };

    /// Creates weights where a sample contributes `update` and the previous
    /// value contributes `1 - update`.
    #[must_use]
    pub fn with_update(update: f64) -> Self {
        Self {
            retain: 1.0 - update,
            update,
        }
    }

    /// Blends `sample` into `prev`.
    #[inline]
    #[must_use]
    pub fn next(self, prev: f64, sample: f64) -> f64 {
        self.retain * prev + self.update * sample
    }
}

impl Default for Ema {
    fn default() -> Self {
        Self::RENDER_COST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_cost_rule_is_reproduced_exactly() {
        let ema = Ema::RENDER_COST;
        let sample = 4.0;
        let mut value = 0.0;
        let mut expected = 0.0;
        for _ in 0..8 {
            value = ema.next(value, sample);
            expected = 0.9 * expected + 0.1 * sample;
            assert_eq!(value, expected);
        }
    }

    #[test]
    fn constant_samples_converge_monotonically() {
        let ema = Ema::default();
        let mut value = 10.0;
        let mut gap = f64::INFINITY;
        for _ in 0..100 {
            value = ema.next(value, 2.0);
            let new_gap = (value - 2.0).abs();
            assert!(new_gap < gap, "gap must shrink: {new_gap} vs {gap}");
            gap = new_gap;
        }
        assert!(gap < 1e-3, "converged to within {gap}");
    }

    #[test]
    fn with_update_complements_weights() {
        let ema = Ema::with_update(0.25);
        assert_eq!(ema.retain, 0.75);
        assert_eq!(ema.next(8.0, 0.0), 6.0);
    }
}
