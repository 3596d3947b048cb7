// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture handles and the decode/upload contracts.
//!
//! Decoding an animated image and uploading pixels to the GPU both belong to
//! the host. Tickdraw only sees them through two traits:
//!
//! - [`FrameSource`] yields [`DecodedFrame`]s until it is exhausted.
//! - [`TextureUploader`] turns a decoded frame into an opaque [`TextureId`].

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{DecodeError, UploadError};

/// An opaque handle to a host-managed texture.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureId(pub u64);

impl fmt::Debug for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextureId({})", self.0)
    }
}

/// One decoded still image of an animation.
#[derive(Clone, PartialEq)]
pub struct DecodedFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA components, each normalized to `0.0..=1.0`.
    pub pixels: Vec<f32>,
    /// How long the frame stays on screen, in nanoseconds.
    pub delay_ns: u64,
}

impl DecodedFrame {
    /// Builds a frame from 8-bit RGBA bytes, normalizing each component.
    #[must_use]
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8], delay_ns: u64) -> Self {
        Self {
            width,
            height,
            pixels: bytes.iter().map(|&b| f32::from(b) / 255.0).collect(),
            delay_ns,
        }
    }

    /// Number of `f32` components the dimensions call for.
    #[must_use]
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Checks that the pixel buffer matches the dimensions.
    pub fn validate(&self) -> Result<(), DecodeError> {
        if self.pixels.len() == self.expected_len() {
            Ok(())
        } else {
            Err(DecodeError::InvalidFrame {
                width: self.width,
                height: self.height,
                len: self.pixels.len(),
            })
        }
    }
}

impl fmt::Debug for DecodedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels", &self.pixels.len())
            .field("delay_ns", &self.delay_ns)
            .finish()
    }
}

/// A sequential decoder for a multi-frame image.
pub trait FrameSource {
    /// Decodes the next frame.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted; that is the normal
    /// end of decoding, not a failure.
    fn next_frame(&mut self) -> Result<Option<DecodedFrame>, DecodeError>;
}

/// Frames already held in memory are yielded front to back.
impl FrameSource for VecDeque<DecodedFrame> {
    fn next_frame(&mut self) -> Result<Option<DecodedFrame>, DecodeError> {
        Ok(self.pop_front())
    }
}

/// Creates renderable textures from decoded frames.
pub trait TextureUploader {
    /// Uploads `frame` and returns a handle usable with
    /// [`DrawSurface::draw_image`](crate::draw::DrawSurface::draw_image).
    fn upload(&mut self, frame: &DecodedFrame) -> Result<TextureId, UploadError>;
}
