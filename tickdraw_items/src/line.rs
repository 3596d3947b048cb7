// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Line;
use tickdraw_core::color::Color;
use tickdraw_core::draw::{DrawContext, Drawable};
use tickdraw_core::error::DrawError;

/// A single stroked segment.
///
/// The stroke width is scaled by the host's [`DrawScale`] at draw time.
///
/// [`DrawScale`]: tickdraw_core::draw::DrawScale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawLine {
    /// Segment endpoints.
    pub line: Line,
    /// Stroke color.
    pub color: Color,
    /// Unscaled stroke width.
    pub thickness: f64,
}

impl DrawLine {
    /// Creates a line item.
    #[must_use]
    pub const fn new(line: Line, color: Color, thickness: f64) -> Self {
        Self {
            line,
            color,
            thickness,
        }
    }
}

impl Drawable for DrawLine {
    fn draw(&mut self, cx: &mut DrawContext<'_>) -> Result<bool, DrawError> {
        let thickness = cx.scale.line_thickness(self.thickness);
        cx.surface.draw_line(self.line, self.color, thickness)?;
        Ok(true)
    }
}
