// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for frame loading and drawing.
//!
//! Running out of frames is not an error: [`FrameSource::next_frame`]
//! reports it as `Ok(None)`. The types here cover the genuine failures that
//! abort loading or a render tick.
//!
//! [`FrameSource::next_frame`]: crate::texture::FrameSource::next_frame

use alloc::string::String;
use core::fmt;

use crate::texture::TextureId;

/// A frame source failed to produce the next frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The codec rejected the data.
    Codec(String),
    /// Reading the underlying bytes failed.
    Io(String),
    /// A decoded frame's pixel buffer does not match its dimensions.
    InvalidFrame {
        /// Frame width in pixels.
        width: u32,
        /// Frame height in pixels.
        height: u32,
        /// Number of `f32` components actually present.
        len: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(msg) => write!(f, "codec error: {msg}"),
            Self::Io(msg) => write!(f, "i/o error while decoding: {msg}"),
            Self::InvalidFrame { width, height, len } => write!(
                f,
                "frame of {width}x{height} pixels carries {len} components"
            ),
        }
    }
}

impl core::error::Error for DecodeError {}

/// The host refused to create a texture for a decoded frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadError {
    /// Zero-sized or oversized frame.
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// Backend-specific failure.
    Backend(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "cannot create a {width}x{height} texture")
            }
            Self::Backend(msg) => write!(f, "texture upload failed: {msg}"),
        }
    }
}

impl core::error::Error for UploadError {}

/// Loading an animation into textures failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The frame source failed.
    Decode(DecodeError),
    /// The texture uploader failed.
    Upload(UploadError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(_) => f.write_str("failed to decode animation frame"),
            Self::Upload(_) => f.write_str("failed to upload animation frame"),
        }
    }
}

impl core::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Upload(e) => Some(e),
        }
    }
}

impl From<DecodeError> for LoadError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<UploadError> for LoadError {
    fn from(e: UploadError) -> Self {
        Self::Upload(e)
    }
}

/// A render callback failed.
///
/// Drawables never swallow these: a failing child aborts the enclosing
/// callback and the error reaches the host's frame loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawError {
    /// The host surface reported a failure.
    Backend(String),
    /// A draw referenced a texture the host does not know.
    UnknownTexture(TextureId),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(msg) => write!(f, "draw failed: {msg}"),
            Self::UnknownTexture(id) => write!(f, "unknown texture {}", id.0),
        }
    }
}

impl core::error::Error for DrawError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::error::Error as _;

    #[test]
    fn load_error_exposes_source() {
        let err = LoadError::from(DecodeError::Codec("bad block".into()));
        assert_eq!(err.to_string(), "failed to decode animation frame");
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("codec error: bad block"));
    }

    #[test]
    fn upload_error_display() {
        let err = UploadError::InvalidSize {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "cannot create a 0x4 texture");
    }
}
