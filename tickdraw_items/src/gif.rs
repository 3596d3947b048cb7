// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated GIF frame source.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Delay, Frames, ImageError};
use tickdraw_core::error::DecodeError;
use tickdraw_core::texture::{DecodedFrame, FrameSource};

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Decodes an animated GIF one composited frame at a time.
///
/// Frames come out full-canvas in RGBA, with the GIF's per-frame delay.
pub struct GifFrameSource {
    frames: Frames<'static>,
}

impl GifFrameSource {
    /// Prepares to decode GIF data from `reader`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the header cannot be read.
    pub fn new<R: BufRead + Seek + 'static>(reader: R) -> Result<Self, DecodeError> {
        let decoder = GifDecoder::new(reader).map_err(decode_error)?;
        Ok(Self {
            frames: decoder.into_frames(),
        })
    }

    /// Opens the GIF file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Io`] if the file cannot be opened, or another
    /// [`DecodeError`] if the header cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        let file = File::open(path).map_err(|e| DecodeError::Io(e.to_string()))?;
        Self::new(BufReader::new(file))
    }
}

impl fmt::Debug for GifFrameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GifFrameSource").finish_non_exhaustive()
    }
}

impl FrameSource for GifFrameSource {
    fn next_frame(&mut self) -> Result<Option<DecodedFrame>, DecodeError> {
        let Some(frame) = self.frames.next() else {
            return Ok(None);
        };
        let frame = frame.map_err(decode_error)?;
        let delay_ns = delay_nanos(frame.delay());
        let buffer = frame.into_buffer();
        Ok(Some(DecodedFrame::from_rgba8(
            buffer.width(),
            buffer.height(),
            buffer.as_raw(),
            delay_ns,
        )))
    }
}

/// Converts a frame delay, a millisecond ratio, to nanoseconds.
fn delay_nanos(delay: Delay) -> u64 {
    let (numer, denom) = delay.numer_denom_ms();
    if denom == 0 {
        return 0;
    }
    u64::from(numer).saturating_mul(NANOS_PER_MILLI) / u64::from(denom)
}

fn decode_error(e: ImageError) -> DecodeError {
    match e {
        ImageError::IoError(io) => DecodeError::Io(io.to_string()),
        other => DecodeError::Codec(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Frame, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(delays_ms: &[u32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            for (i, &ms) in delays_ms.iter().enumerate() {
                let shade = if i % 2 == 0 { 0 } else { 255 };
                let image = RgbaImage::from_pixel(3, 2, Rgba([shade, shade, shade, 255]));
                let frame = Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(ms, 1));
                encoder.encode_frame(frame).unwrap();
            }
        }
        bytes
    }

    #[test]
    fn decodes_frames_with_delays() {
        let bytes = encode(&[100, 200, 50]);
        let mut source = GifFrameSource::new(Cursor::new(bytes)).unwrap();
        let mut delays = Vec::new();
        while let Some(frame) = source.next_frame().unwrap() {
            assert_eq!((frame.width, frame.height), (3, 2));
            assert!(frame.validate().is_ok(), "buffer matches dimensions");
            assert!(
                frame.pixels.iter().all(|c| (0.0..=1.0).contains(c)),
                "components are normalized"
            );
            delays.push(frame.delay_ns);
        }
        assert_eq!(delays, [100_000_000, 200_000_000, 50_000_000]);
    }

    #[test]
    fn garbage_is_a_codec_error() {
        let err = GifFrameSource::new(Cursor::new(b"not a gif".to_vec())).unwrap_err();
        assert!(matches!(err, DecodeError::Codec(_)), "got {err:?}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GifFrameSource::open("/nonexistent/tickdraw.gif").unwrap_err();
        assert!(matches!(err, DecodeError::Io(_)), "got {err:?}");
    }

    #[test]
    fn delay_ratio_converts_to_nanos() {
        assert_eq!(delay_nanos(Delay::from_numer_denom_ms(1, 3)), 333_333);
        assert_eq!(delay_nanos(Delay::from_numer_denom_ms(70, 1)), 70_000_000);
    }
}
