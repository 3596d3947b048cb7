// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rolling render-cost history with a fixed-size ring buffer.
#[derive(Debug)]
pub struct CostHistory<const N: usize> {
    costs_ms: [f64; N],
    cursor: usize,
    total_samples: u64,
}

impl<const N: usize> Default for CostHistory<N> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<const N: usize> CostHistory<N> {
    /// Creates a history with `seed_ms` prefilled in the ring buffer.
    #[must_use]
    pub const fn new(seed_ms: f64) -> Self {
        const { assert!(N > 0, "cost history needs at least one slot") };
        Self {
            costs_ms: [seed_ms; N],
            cursor: 0,
            total_samples: 0,
        }
    }

    /// Records one tick's cost.
    pub fn push(&mut self, cost_ms: f64) {
        self.costs_ms[self.cursor] = cost_ms;
        self.cursor = (self.cursor + 1) % N;
        self.total_samples = self.total_samples.saturating_add(1);
    }

    /// Total samples pushed, including those that have rolled out.
    #[must_use]
    pub const fn total_samples(&self) -> u64 {
        self.total_samples
    }

    /// Returns ring-buffer costs oldest→newest.
    #[must_use]
    pub fn costs(&self) -> [f64; N] {
        let mut out = [0.0; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.costs_ms[(self.cursor + i) % N];
        }
        out
    }

    /// Mean over the buffer.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.costs_ms.iter().sum::<f64>() / N as f64
    }

    /// Largest cost in the buffer.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.costs_ms.iter().copied().fold(f64::MIN, f64::max)
    }

    /// Returns an ASCII sparkline over [`costs`](Self::costs).
    #[must_use]
    pub fn sparkline_ascii(&self, min_ms: f64, max_ms: f64) -> String {
        const LEVELS: &[u8] = b" .:-=+*#%@";
        let span = max_ms - min_ms;
        self.costs()
            .iter()
            .map(|&v| {
                let t = if span > 0.0 {
                    (v.clamp(min_ms, max_ms) - min_ms) / span
                } else {
                    0.0
                };
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "index is clamped to ASCII level count"
                )]
                let level = (t * (LEVELS.len() as f64 - 1.0) + 0.5) as usize;
                LEVELS[level] as char
            })
            .collect()
    }
}
