// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generic container of child drawables.

use std::fmt;

use tickdraw_core::draw::{DrawContext, Drawable};
use tickdraw_core::error::DrawError;

/// Draws its children in insertion order.
///
/// The group is visible if any child reported visible output. The first
/// child error stops traversal and is returned unchanged.
#[derive(Default)]
pub struct DrawGroup {
    children: Vec<Box<dyn Drawable>>,
}

impl DrawGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty group with room for `capacity` children.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            children: Vec::with_capacity(capacity),
        }
    }

    /// Appends a child.
    pub fn push(&mut self, child: impl Drawable + 'static) {
        self.children.push(Box::new(child));
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Debug for DrawGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawGroup")
            .field("children", &self.children.len())
            .finish()
    }
}

impl Drawable for DrawGroup {
    fn draw(&mut self, cx: &mut DrawContext<'_>) -> Result<bool, DrawError> {
        let mut visible = false;
        for child in &mut self.children {
            visible |= child.draw(cx)?;
        }
        Ok(visible)
    }
}
