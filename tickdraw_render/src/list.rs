// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw list: an ordered sequence of draw commands for one tick.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use kurbo::{Line, Rect};
use tickdraw_core::color::Color;
use tickdraw_core::draw::DrawSurface;
use tickdraw_core::error::DrawError;
use tickdraw_core::texture::TextureId;

use crate::TextureTable;

/// A single recorded draw.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A stroked line segment.
    Line {
        /// Segment endpoints.
        line: Line,
        /// Stroke color.
        color: Color,
        /// Stroke width after host scaling.
        thickness: f64,
    },
    /// A texture stretched over a rectangle.
    Image {
        /// Texture to draw.
        texture: TextureId,
        /// Destination rectangle.
        rect: Rect,
    },
}

/// An ordered list of draw commands recorded during one or more ticks.
///
/// Commands are kept in issue order. Hosts that replay the list draw them
/// back to front.
///
/// By default any texture id is accepted. After
/// [`restrict_textures`](Self::restrict_textures), image draws of ids the
/// table did not hand out fail with [`DrawError::UnknownTexture`].
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    pending_failure: Option<DrawError>,
    known_textures: Option<BTreeSet<TextureId>>,
}

impl DrawList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the list for reuse. A pending failure is kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands in issue order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates the recorded line segments.
    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { line, .. } => Some(line),
            DrawCommand::Image { .. } => None,
        })
    }

    /// Iterates the recorded image draws as `(texture, rect)`.
    pub fn images(&self) -> impl Iterator<Item = (TextureId, Rect)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { texture, rect } => Some((*texture, *rect)),
            DrawCommand::Line { .. } => None,
        })
    }

    /// Accepts only the textures currently in `table` for image draws.
    ///
    /// Textures uploaded later need another call.
    pub fn restrict_textures(&mut self, table: &TextureTable) {
        self.known_textures = Some(table.ids().collect());
    }

    /// Makes the next draw call fail with `error` instead of recording.
    ///
    /// Used to exercise error propagation through drawables.
    pub fn fail_next(&mut self, error: DrawError) {
        self.pending_failure = Some(error);
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), DrawError> {
        if let Some(error) = self.pending_failure.take() {
            return Err(error);
        }
        self.commands.push(command);
        Ok(())
    }
}

impl DrawSurface for DrawList {
    fn draw_line(&mut self, line: Line, color: Color, thickness: f64) -> Result<(), DrawError> {
        self.record(DrawCommand::Line {
            line,
            color,
            thickness,
        })
    }

    fn draw_image(&mut self, texture: TextureId, rect: Rect) -> Result<(), DrawError> {
        if let Some(known) = &self.known_textures
            && !known.contains(&texture)
        {
            return Err(DrawError::UnknownTexture(texture));
        }
        self.record(DrawCommand::Image { texture, rect })
    }
}
