// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory texture table.

use alloc::collections::BTreeMap;

use tickdraw_core::error::UploadError;
use tickdraw_core::texture::{DecodedFrame, TextureId, TextureUploader};

/// Largest edge accepted by [`TextureTable`], matching common GPU limits.
const MAX_EDGE: u32 = 16_384;

/// Accepts decoded frames and hands out sequential [`TextureId`]s.
///
/// Only frame dimensions are retained; pixel data is dropped after
/// validation.
#[derive(Clone, Debug, Default)]
pub struct TextureTable {
    next: u64,
    sizes: BTreeMap<TextureId, (u32, u32)>,
}

impl TextureTable {
    /// Creates an empty table. The first id handed out is `TextureId(1)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of textures created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if no texture has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Returns the dimensions of `id`, if it exists.
    #[must_use]
    pub fn size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.sizes.get(&id).copied()
    }

    /// Iterates the ids handed out so far, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = TextureId> + '_ {
        self.sizes.keys().copied()
    }

    /// Returns `true` if `id` was handed out by this table.
    #[must_use]
    pub fn contains(&self, id: TextureId) -> bool {
        self.sizes.contains_key(&id)
    }
}

impl TextureUploader for TextureTable {
    fn upload(&mut self, frame: &DecodedFrame) -> Result<TextureId, UploadError> {
        let (width, height) = (frame.width, frame.height);
        if width == 0 || height == 0 || width > MAX_EDGE || height > MAX_EDGE {
            return Err(UploadError::InvalidSize { width, height });
        }
        if frame.validate().is_err() {
            return Err(UploadError::Backend(alloc::format!(
                "pixel buffer holds {} components, expected {}",
                frame.pixels.len(),
                frame.expected_len()
            )));
        }
        self.next += 1;
        let id = TextureId(self.next);
        self.sizes.insert(id, (width, height));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn ids_are_sequential_and_distinct() {
        let mut table = TextureTable::new();
        let frame = DecodedFrame::from_rgba8(2, 1, &[0; 8], 0);
        let a = table.upload(&frame).unwrap();
        let b = table.upload(&frame).unwrap();
        assert_eq!((a, b), (TextureId(1), TextureId(2)));
        assert_eq!(table.size(b), Some((2, 1)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rejects_empty_frames() {
        let mut table = TextureTable::new();
        let frame = DecodedFrame::from_rgba8(0, 3, &[], 0);
        assert_eq!(
            table.upload(&frame),
            Err(UploadError::InvalidSize {
                width: 0,
                height: 3
            })
        );
        assert!(table.is_empty());
    }

    #[test]
    fn rejects_short_buffers() {
        let mut table = TextureTable::new();
        let frame = DecodedFrame {
            width: 2,
            height: 2,
            pixels: vec![0.0; 3],
            delay_ns: 0,
        };
        assert!(matches!(table.upload(&frame), Err(UploadError::Backend(_))));
        assert!(!table.contains(TextureId(1)));
    }
}
