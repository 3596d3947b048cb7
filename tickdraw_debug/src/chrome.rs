// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Each drawable gets its own track (`tid` = item id). Geometry construction
//! and measured renders become complete (`X`) slices, frame swaps and loads
//! become instants, and every smoothed cost sample also feeds a counter track.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use tickdraw_core::time::{HostTime, Timebase};
use tickdraw_core::trace::GeometryVariant;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
pub fn export(bytes: &[u8], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let us = |t: HostTime| ticks_to_us(t.ticks(), timebase);
    let span_us = |start: HostTime, end: HostTime| {
        ticks_to_us(end.ticks().saturating_sub(start.ticks()), timebase)
    };

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::AnimationLoaded(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "AnimationLoaded",
                    "cat": "Animation",
                    "ts": us(e.timestamp),
                    "pid": 0,
                    "tid": e.item.0,
                    "s": "t",
                    "args": {
                        "frame_count": e.frame_count,
                        "period_us": ticks_to_us(e.total.ticks(), timebase),
                    }
                }));
            }
            RecordedEvent::FrameSwap(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "FrameSwap",
                    "cat": "Animation",
                    "ts": us(e.timestamp),
                    "pid": 0,
                    "tid": e.item.0,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "from": e.from,
                        "to": e.to,
                        "texture": e.texture.0,
                    }
                }));
            }
            RecordedEvent::GeometryBuilt(e) => {
                let name = match e.variant {
                    GeometryVariant::Monolithic => "BuildMonolithic",
                    GeometryVariant::List => "BuildList",
                };
                events.push(json!({
                    "ph": "X",
                    "name": name,
                    "cat": "Geometry",
                    "ts": us(e.start),
                    "dur": span_us(e.start, e.end),
                    "pid": 0,
                    "tid": e.item.0,
                    "args": {
                        "point_count": e.point_count,
                        "segment_count": e.segment_count,
                    }
                }));
            }
            RecordedEvent::RenderCost(e) => {
                events.push(json!({
                    "ph": "X",
                    "name": "Render",
                    "cat": "Probe",
                    "ts": us(e.start),
                    "dur": span_us(e.start, e.end),
                    "pid": 0,
                    "tid": e.item.0,
                    "args": {
                        "frame_index": e.frame_index,
                        "smoothed_ms": e.smoothed_ms,
                    }
                }));
                events.push(json!({
                    "ph": "C",
                    "name": format!("cost item {}", e.item.0),
                    "cat": "Probe",
                    "ts": us(e.end),
                    "pid": 0,
                    "args": {
                        "smoothed_ms": e.smoothed_ms,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}
