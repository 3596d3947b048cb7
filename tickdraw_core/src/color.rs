// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 8-bit RGBA colors as passed to host drawing primitives.

use core::fmt;

/// A non-premultiplied RGBA color with 8 bits per channel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Creates a color from its four channels.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Packs the color as `0xAABBGGRR`, the layout immediate-mode draw lists
    /// expect for vertex colors.
    #[inline]
    #[must_use]
    pub const fn to_packed(self) -> u32 {
        (self.a as u32) << 24 | (self.b as u32) << 16 | (self.g as u32) << 8 | self.r as u32
    }

    /// Unpacks a `0xAABBGGRR` value.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "each channel is masked to 8 bits before the cast"
    )]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed & 0xff) as u8,
            g: (packed >> 8 & 0xff) as u8,
            b: (packed >> 16 & 0xff) as u8,
            a: (packed >> 24) as u8,
        }
    }

    /// Returns `true` if the color contributes nothing when drawn.
    #[inline]
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color(#{:02x}{:02x}{:02x}{:02x})",
            self.r, self.g, self.b, self.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_layout_is_abgr() {
        let c = Color::rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_packed(), 0x4433_2211);
        assert_eq!(Color::from_packed(0x4433_2211), c);
    }

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(Color::default(), Color::WHITE);
        assert!(!Color::WHITE.is_transparent());
        assert!(Color::TRANSPARENT.is_transparent());
    }
}
