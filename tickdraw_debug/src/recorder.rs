// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records, each led by a one-byte tag.
//! [`decode`] reads them back as an iterator of [`RecordedEvent`]. Decoding
//! stops at the first unknown tag or variant, or at a truncated record.

use tickdraw_core::draw::ItemId;
use tickdraw_core::texture::TextureId;
use tickdraw_core::time::{Duration, HostTime};
use tickdraw_core::trace::{
    AnimationLoadedEvent, FrameSwapEvent, GeometryBuiltEvent, GeometryVariant, RenderCostEvent,
    TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_ANIMATION_LOADED: u8 = 1;
const TAG_FRAME_SWAP: u8 = 2;
const TAG_GEOMETRY_BUILT: u8 = 3;
const TAG_RENDER_COST: u8 = 4;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_variant(&mut self, v: GeometryVariant) {
        self.write_u8(match v {
            GeometryVariant::Monolithic => 0,
            GeometryVariant::List => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_animation_loaded(&mut self, e: &AnimationLoadedEvent) {
        self.write_u8(TAG_ANIMATION_LOADED);
        self.write_u32(e.item.0);
        self.write_u32(e.frame_count);
        self.write_u64(e.total.ticks());
        self.write_u64(e.timestamp.ticks());
    }

    fn on_frame_swap(&mut self, e: &FrameSwapEvent) {
        self.write_u8(TAG_FRAME_SWAP);
        self.write_u32(e.item.0);
        self.write_u64(e.frame_index);
        self.write_u32(e.from);
        self.write_u32(e.to);
        self.write_u64(e.texture.0);
        self.write_u64(e.timestamp.ticks());
    }

    fn on_geometry_built(&mut self, e: &GeometryBuiltEvent) {
        self.write_u8(TAG_GEOMETRY_BUILT);
        self.write_u32(e.item.0);
        self.write_variant(e.variant);
        self.write_u32(e.point_count);
        self.write_u32(e.segment_count);
        self.write_u64(e.start.ticks());
        self.write_u64(e.end.ticks());
    }

    fn on_render_cost(&mut self, e: &RenderCostEvent) {
        self.write_u8(TAG_RENDER_COST);
        self.write_u32(e.item.0);
        self.write_u64(e.frame_index);
        self.write_u64(e.start.ticks());
        self.write_u64(e.end.ticks());
        self.write_f64(e.smoothed_ms);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// An [`AnimationLoadedEvent`].
    AnimationLoaded(AnimationLoadedEvent),
    /// A [`FrameSwapEvent`].
    FrameSwap(FrameSwapEvent),
    /// A [`GeometryBuiltEvent`].
    GeometryBuilt(GeometryBuiltEvent),
    /// A [`RenderCostEvent`].
    RenderCost(RenderCostEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_variant(&mut self) -> Option<GeometryVariant> {
        Some(match self.read_u8()? {
            0 => GeometryVariant::Monolithic,
            1 => GeometryVariant::List,
            _ => return None,
        })
    }

    fn decode_animation_loaded(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::AnimationLoaded(AnimationLoadedEvent {
            item: ItemId(self.read_u32()?),
            frame_count: self.read_u32()?,
            total: Duration(self.read_u64()?),
            timestamp: HostTime(self.read_u64()?),
        }))
    }

    fn decode_frame_swap(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::FrameSwap(FrameSwapEvent {
            item: ItemId(self.read_u32()?),
            frame_index: self.read_u64()?,
            from: self.read_u32()?,
            to: self.read_u32()?,
            texture: TextureId(self.read_u64()?),
            timestamp: HostTime(self.read_u64()?),
        }))
    }

    fn decode_geometry_built(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::GeometryBuilt(GeometryBuiltEvent {
            item: ItemId(self.read_u32()?),
            variant: self.read_variant()?,
            point_count: self.read_u32()?,
            segment_count: self.read_u32()?,
            start: HostTime(self.read_u64()?),
            end: HostTime(self.read_u64()?),
        }))
    }

    fn decode_render_cost(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::RenderCost(RenderCostEvent {
            item: ItemId(self.read_u32()?),
            frame_index: self.read_u64()?,
            start: HostTime(self.read_u64()?),
            end: HostTime(self.read_u64()?),
            smoothed_ms: self.read_f64()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_ANIMATION_LOADED => self.decode_animation_loaded(),
            TAG_FRAME_SWAP => self.decode_frame_swap(),
            TAG_GEOMETRY_BUILT => self.decode_geometry_built(),
            TAG_RENDER_COST => self.decode_render_cost(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record_session() -> RecorderSink {
        let mut rec = RecorderSink::new();
        rec.on_animation_loaded(&AnimationLoadedEvent {
            item: ItemId(1),
            frame_count: 4,
            total: Duration(600_000_000),
            timestamp: HostTime(1_000),
        });
        rec.on_geometry_built(&GeometryBuiltEvent {
            item: ItemId(2),
            variant: GeometryVariant::List,
            point_count: 32,
            segment_count: 496,
            start: HostTime(2_000),
            end: HostTime(9_500),
        });
        rec.on_frame_swap(&FrameSwapEvent {
            item: ItemId(1),
            frame_index: 7,
            from: 0,
            to: 1,
            texture: TextureId(11),
            timestamp: HostTime(120_000_000),
        });
        rec.on_render_cost(&RenderCostEvent {
            item: ItemId(3),
            frame_index: 7,
            start: HostTime(120_000_000),
            end: HostTime(121_500_000),
            smoothed_ms: 0.15,
        });
        rec
    }

    #[test]
    fn session_decodes_in_order() {
        let rec = record_session();
        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 4);

        match &events[0] {
            RecordedEvent::AnimationLoaded(e) => {
                assert_eq!(e.item, ItemId(1));
                assert_eq!(e.frame_count, 4);
                assert_eq!(e.total, Duration(600_000_000));
            }
            other => panic!("expected AnimationLoaded, got {other:?}"),
        }
        match &events[1] {
            RecordedEvent::GeometryBuilt(e) => {
                assert_eq!(e.variant, GeometryVariant::List);
                assert_eq!(e.segment_count, 496);
                assert_eq!(e.end, HostTime(9_500));
            }
            other => panic!("expected GeometryBuilt, got {other:?}"),
        }
        match &events[2] {
            RecordedEvent::FrameSwap(e) => {
                assert_eq!((e.from, e.to), (0, 1));
                assert_eq!(e.texture, TextureId(11));
            }
            other => panic!("expected FrameSwap, got {other:?}"),
        }
        match &events[3] {
            RecordedEvent::RenderCost(e) => {
                assert_eq!(e.smoothed_ms.to_bits(), 0.15_f64.to_bits());
                assert_eq!(e.end, HostTime(121_500_000));
            }
            other => panic!("expected RenderCost, got {other:?}"),
        }
    }

    #[test]
    fn truncated_record_stops_decoding() {
        let bytes = record_session().into_bytes();
        let cut = &bytes[..bytes.len() - 3];
        assert_eq!(decode(cut).count(), 3, "partial last record is dropped");
    }

    #[test]
    fn unknown_tag_stops_decoding() {
        let mut bytes = record_session().into_bytes();
        bytes.insert(0, 0xFF);
        assert_eq!(decode(&bytes).count(), 0);
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn unknown_variant_byte_stops_decoding() {
        let mut rec = RecorderSink::new();
        rec.on_geometry_built(&GeometryBuiltEvent {
            item: ItemId(2),
            variant: GeometryVariant::List,
            point_count: 3,
            segment_count: 3,
            start: HostTime(0),
            end: HostTime(1),
        });
        let mut bytes = rec.into_bytes();
        // tag (1) + item (4), then the variant byte.
        assert_eq!(bytes[5], 1, "list is encoded as 1");
        assert_eq!(decode(&bytes).count(), 1);
        bytes[5] = 7;
        assert_eq!(decode(&bytes).count(), 0, "variant 7 is not a known variant");
    }
}
