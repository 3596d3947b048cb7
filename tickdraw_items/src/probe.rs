// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-cost measurement around a wrapped drawable.

use std::fmt;
use std::sync::Arc;

use tickdraw_core::draw::{DrawContext, Drawable, ItemId};
use tickdraw_core::ema::Ema;
use tickdraw_core::error::DrawError;
use tickdraw_core::trace::RenderCostEvent;

use crate::SharedValue;

/// Times each draw of its child and keeps an exponential moving average of
/// the cost in milliseconds.
///
/// The average starts at zero and is blended with [`Ema::RENDER_COST`]
/// weights. It lives in a [`SharedValue`] so a UI thread can poll it through
/// [`shareable_value`](Self::shareable_value) while the render thread
/// updates it.
///
/// A failing child draw is returned unchanged and leaves the average
/// untouched.
pub struct RenderCostProbe<D> {
    id: ItemId,
    child: D,
    ema: Ema,
    value: Arc<SharedValue<f64>>,
}

impl<D: Drawable> RenderCostProbe<D> {
    /// Wraps `child`.
    #[must_use]
    pub fn new(id: ItemId, child: D) -> Self {
        Self {
            id,
            child,
            ema: Ema::RENDER_COST,
            value: Arc::new(SharedValue::new(0.0)),
        }
    }

    /// Replaces the smoothing weights.
    #[must_use]
    pub fn with_ema(mut self, ema: Ema) -> Self {
        self.ema = ema;
        self
    }

    /// Identifier carried by this probe's events.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Current smoothed cost in milliseconds.
    #[must_use]
    pub fn smoothed_cost_ms(&self) -> f64 {
        self.value.get()
    }

    /// Shared handle to the smoothed cost.
    #[must_use]
    pub fn shareable_value(&self) -> Arc<SharedValue<f64>> {
        Arc::clone(&self.value)
    }

    /// The wrapped drawable.
    #[must_use]
    pub const fn child(&self) -> &D {
        &self.child
    }

    /// The wrapped drawable, mutably.
    pub fn child_mut(&mut self) -> &mut D {
        &mut self.child
    }

    /// Unwraps the child.
    #[must_use]
    pub fn into_inner(self) -> D {
        self.child
    }
}

impl<D: fmt::Debug> fmt::Debug for RenderCostProbe<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderCostProbe")
            .field("id", &self.id)
            .field("child", &self.child)
            .field("ema", &self.ema)
            .field("value", &self.value)
            .finish()
    }
}

impl<D: Drawable> Drawable for RenderCostProbe<D> {
    fn draw(&mut self, cx: &mut DrawContext<'_>) -> Result<bool, DrawError> {
        let clock = cx.clock;
        let start = clock.now();
        let visible = self.child.draw(cx)?;
        let end = clock.now();

        let sample = end
            .saturating_duration_since(start)
            .to_millis_f64(clock.timebase());
        let ema = self.ema;
        let smoothed_ms = self.value.update(|prev| ema.next(prev, sample));

        cx.tracer.render_cost(&RenderCostEvent {
            item: self.id,
            frame_index: cx.frame_index,
            start,
            end,
            smoothed_ms,
        });
        Ok(visible)
    }
}
