// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawable render-callback contract.
//!
//! The host owns the item tree and the draw surface. Once per render tick it
//! walks its items in tree order and calls [`Drawable::draw`] on each, passing
//! a [`DrawContext`] that bundles everything a callback may touch:
//!
//! - the host's [`DrawSurface`] (line and image primitives),
//! - the [`Clock`] that defines "now" for this tick,
//! - the [`DrawScale`] multipliers the host applies to sizes,
//! - a [`Tracer`] for frame-loop instrumentation.
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! fn on_frame(items: &mut [Box<dyn Drawable>], surface: &mut impl DrawSurface) {
//!     let mut cx = DrawContext::new(surface, &clock, frame_index);
//!     for item in items {
//!         item.draw(&mut cx)?;
//!     }
//!     frame_index += 1;
//! }
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Line, Rect};

use crate::color::Color;
use crate::error::DrawError;
use crate::texture::TextureId;
use crate::time::Clock;
use crate::trace::Tracer;

/// Identifies a drawable in trace output.
///
/// Hosts assign these; tickdraw never interprets the value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemId(pub u32);

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

/// Low-level drawing primitives provided by the host rendering backend.
///
/// Coordinates are in the item's drawing space; mapping to screen pixels is
/// the host's business.
pub trait DrawSurface {
    /// Draws a straight line segment with the given stroke thickness.
    fn draw_line(&mut self, line: Line, color: Color, thickness: f64) -> Result<(), DrawError>;

    /// Draws `texture` stretched over `rect`.
    fn draw_image(&mut self, texture: TextureId, rect: Rect) -> Result<(), DrawError>;
}

/// Host-provided size multipliers applied at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawScale {
    /// Global line-thickness multiplier.
    pub thickness: f64,
    /// Global size multiplier (DPI and zoom).
    pub size: f64,
}

impl DrawScale {
    /// No scaling.
    pub const IDENTITY: Self = Self {
        thickness: 1.0,
        size: 1.0,
    };

    /// Returns the on-screen stroke width for a requested `thickness`.
    ///
    /// The result is never negative.
    #[inline]
    #[must_use]
    pub fn line_thickness(self, thickness: f64) -> f64 {
        (thickness * self.thickness * self.size).abs()
    }
}

impl Default for DrawScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Everything a render callback may use during one tick.
pub struct DrawContext<'a> {
    /// The host's drawing primitives.
    pub surface: &'a mut dyn DrawSurface,
    /// The clock defining "now" for this tick.
    pub clock: &'a dyn Clock,
    /// Size multipliers for this tick.
    pub scale: DrawScale,
    /// Monotonic render tick counter.
    pub frame_index: u64,
    /// Instrumentation hook.
    pub tracer: Tracer<'a>,
}

impl fmt::Debug for DrawContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawContext")
            .field("scale", &self.scale)
            .field("frame_index", &self.frame_index)
            .finish_non_exhaustive()
    }
}

impl<'a> DrawContext<'a> {
    /// Creates a context with identity scale and no tracing.
    #[must_use]
    pub fn new(surface: &'a mut dyn DrawSurface, clock: &'a dyn Clock, frame_index: u64) -> Self {
        Self {
            surface,
            clock,
            scale: DrawScale::IDENTITY,
            frame_index,
            tracer: Tracer::none(),
        }
    }

    /// Sets the size multipliers.
    #[must_use]
    pub fn with_scale(mut self, scale: DrawScale) -> Self {
        self.scale = scale;
        self
    }

    /// Routes trace events to `tracer`.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer<'a>) -> Self {
        self.tracer = tracer;
        self
    }
}

/// A per-tick render callback.
pub trait Drawable {
    /// Renders this item for the current tick.
    ///
    /// Returns whether the item produced visible output. Errors from the
    /// surface or from children propagate unchanged.
    fn draw(&mut self, cx: &mut DrawContext<'_>) -> Result<bool, DrawError>;
}

impl<D: Drawable + ?Sized> Drawable for Box<D> {
    fn draw(&mut self, cx: &mut DrawContext<'_>) -> Result<bool, DrawError> {
        (**self).draw(cx)
    }
}
