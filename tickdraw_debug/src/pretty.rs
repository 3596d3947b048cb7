// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to microseconds using a [`Timebase`].

use std::io::Write;

use tickdraw_core::time::{HostTime, Timebase};
use tickdraw_core::trace::{
    AnimationLoadedEvent, FrameSwapEvent, GeometryBuiltEvent, GeometryVariant, RenderCostEvent,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ticks_to_us(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_nanos(ticks) as f64 / 1000.0
    }

    fn host_us(&self, t: HostTime) -> f64 {
        self.ticks_to_us(t.ticks())
    }
}

fn variant_name(variant: GeometryVariant) -> &'static str {
    match variant {
        GeometryVariant::Monolithic => "monolithic",
        GeometryVariant::List => "list",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_animation_loaded(&mut self, e: &AnimationLoadedEvent) {
        let _ = writeln!(
            self.writer,
            "[load] item={} frames={} period={:.1}µs at {:.1}µs",
            e.item.0,
            e.frame_count,
            self.ticks_to_us(e.total.ticks()),
            self.host_us(e.timestamp),
        );
    }

    fn on_frame_swap(&mut self, e: &FrameSwapEvent) {
        let _ = writeln!(
            self.writer,
            "[swap] frame={} item={} {}->{} texture={} at {:.1}µs",
            e.frame_index,
            e.item.0,
            e.from,
            e.to,
            e.texture.0,
            self.host_us(e.timestamp),
        );
    }

    fn on_geometry_built(&mut self, e: &GeometryBuiltEvent) {
        let _ = writeln!(
            self.writer,
            "[build] item={} {} points={} segments={} took={:.1}µs",
            e.item.0,
            variant_name(e.variant),
            e.point_count,
            e.segment_count,
            self.ticks_to_us(e.end.ticks().saturating_sub(e.start.ticks())),
        );
    }

    fn on_render_cost(&mut self, e: &RenderCostEvent) {
        let _ = writeln!(
            self.writer,
            "[cost] frame={} item={} sample={:.1}µs smoothed={:.3}ms",
            e.frame_index,
            e.item.0,
            self.ticks_to_us(e.end.ticks().saturating_sub(e.start.ticks())),
            e.smoothed_ms,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickdraw_core::draw::ItemId;
    use tickdraw_core::texture::TextureId;

    #[test]
    fn pretty_print_swap() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_frame_swap(&FrameSwapEvent {
            item: ItemId(2),
            frame_index: 1,
            from: 3,
            to: 0,
            texture: TextureId(5),
            timestamp: HostTime(1_000_000),
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("[swap]"), "got: {output}");
        assert!(output.contains("3->0"), "got: {output}");
        assert!(output.contains("at 1000.0µs"), "got: {output}");
    }

    #[test]
    fn pretty_print_cost_uses_duration() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_render_cost(&RenderCostEvent {
            item: ItemId(1),
            frame_index: 9,
            start: HostTime(10_000),
            end: HostTime(12_500),
            smoothed_ms: 0.25,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("sample=2.5µs"), "got: {output}");
        assert!(output.contains("smoothed=0.250ms"), "got: {output}");
    }
}
