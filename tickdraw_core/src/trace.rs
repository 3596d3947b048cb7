// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for render callbacks.
//!
//! This module provides a [`TraceSink`] trait with one method per event that
//! drawables emit. All method bodies default to no-ops, so implementing only
//! the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::draw::ItemId;
use crate::texture::TextureId;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which batching strategy produced a piece of geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryVariant {
    /// One item issuing every line itself each tick.
    Monolithic,
    /// A container of one child item per line.
    List,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once an animation has been decoded and uploaded.
#[derive(Clone, Copy, Debug)]
pub struct AnimationLoadedEvent {
    /// The selector that loaded the animation.
    pub item: ItemId,
    /// Number of frames uploaded.
    pub frame_count: u32,
    /// Loop period.
    pub total: Duration,
    /// Host time when loading finished (the animation's start time).
    pub timestamp: HostTime,
}

/// Emitted when a selector publishes a different active frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameSwapEvent {
    /// The selector that swapped.
    pub item: ItemId,
    /// Render tick counter.
    pub frame_index: u64,
    /// Previously displayed animation frame.
    pub from: u32,
    /// Newly displayed animation frame.
    pub to: u32,
    /// Texture now bound for display.
    pub texture: TextureId,
    /// Host time used for the selection.
    pub timestamp: HostTime,
}

/// Emitted after a geometry item finishes construction.
#[derive(Clone, Copy, Debug)]
pub struct GeometryBuiltEvent {
    /// The geometry item.
    pub item: ItemId,
    /// Batching strategy.
    pub variant: GeometryVariant,
    /// Vertex count after clamping.
    pub point_count: u32,
    /// Number of line segments.
    pub segment_count: u32,
    /// Host time when construction began.
    pub start: HostTime,
    /// Host time when construction ended.
    pub end: HostTime,
}

/// Emitted by a render-cost probe after each measured tick.
#[derive(Clone, Copy, Debug)]
pub struct RenderCostEvent {
    /// The probe.
    pub item: ItemId,
    /// Render tick counter.
    pub frame_index: u64,
    /// Host time before the wrapped render.
    pub start: HostTime,
    /// Host time after the wrapped render.
    pub end: HostTime,
    /// Smoothed cost after this sample, in milliseconds.
    pub smoothed_ms: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from drawables.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an animation finishes loading.
    fn on_animation_loaded(&mut self, e: &AnimationLoadedEvent) {
        _ = e;
    }

    /// Called when a selector swaps its active frame.
    fn on_frame_swap(&mut self, e: &FrameSwapEvent) {
        _ = e;
    }

    /// Called when a geometry item is built.
    fn on_geometry_built(&mut self, e: &GeometryBuiltEvent) {
        _ = e;
    }

    /// Called when a probe records a render cost sample.
    fn on_render_cost(&mut self, e: &RenderCostEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Returns `true` if events reach a sink.
    ///
    /// Callers can skip assembling an event when this is `false`.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits an [`AnimationLoadedEvent`].
    #[inline]
    pub fn animation_loaded(&mut self, e: &AnimationLoadedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_animation_loaded(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameSwapEvent`].
    #[inline]
    pub fn frame_swap(&mut self, e: &FrameSwapEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame_swap(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GeometryBuiltEvent`].
    #[inline]
    pub fn geometry_built(&mut self, e: &GeometryBuiltEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_geometry_built(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RenderCostEvent`].
    #[inline]
    pub fn render_cost(&mut self, e: &RenderCostEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_render_cost(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_swap() -> FrameSwapEvent {
        FrameSwapEvent {
            item: ItemId(3),
            frame_index: 42,
            from: 0,
            to: 1,
            texture: TextureId(7),
            timestamp: HostTime(1_000_000),
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_frame_swap(&sample_swap());
        sink.on_render_cost(&RenderCostEvent {
            item: ItemId(0),
            frame_index: 0,
            start: HostTime(0),
            end: HostTime(10),
            smoothed_ms: 0.0,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        assert!(!tracer.is_enabled(), "no sink attached");
        tracer.frame_swap(&sample_swap());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            swaps: Vec<u64>,
        }
        impl TraceSink for RecordingSink {
            fn on_frame_swap(&mut self, e: &FrameSwapEvent) {
                self.swaps.push(e.frame_index);
            }
        }

        let mut sink = RecordingSink { swaps: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        assert!(tracer.is_enabled(), "sink attached");
        tracer.frame_swap(&sample_swap());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.swaps, &[42]);
    }
}
