// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless render loop that exercises the drawables and the tracing pipeline.
//!
//! Loads an animation (the GIF named on the command line, or a synthetic
//! four-frame clip), builds both circle-lines variants, and renders 60
//! simulated frames with every item wrapped in a render-cost probe. Events go
//! to both a [`PrettyPrintSink`](tickdraw_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](tickdraw_debug::recorder::RecorderSink); the recording is
//! exported as a Chrome trace JSON file.
//!
//! The clock is a [`ManualClock`]. Each draw command advances it by a fixed
//! amount, so the probes see a deterministic simulated backend cost.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufWriter, Stdout};

use kurbo::{Line, Point, Rect};

use tickdraw_core::color::Color;
use tickdraw_core::draw::{DrawContext, DrawSurface, Drawable, ItemId};
use tickdraw_core::error::DrawError;
use tickdraw_core::texture::{DecodedFrame, FrameSource, TextureId};
use tickdraw_core::time::{Clock, Duration, HostTime, ManualClock, Timebase};
use tickdraw_core::trace::{
    AnimationLoadedEvent, FrameSwapEvent, GeometryBuiltEvent, RenderCostEvent, TraceSink, Tracer,
};

use tickdraw_debug::pretty::PrettyPrintSink;
use tickdraw_debug::recorder::RecorderSink;
use tickdraw_harness::{CostHistory, DEFAULT_POINT_COUNTS, compare};
use tickdraw_items::{
    AnimatedFrameSelector, CircleLinesList, CircleLinesMonolithic, CircleLinesParams,
    GifFrameSource, MonotonicClock, RenderCostProbe,
};
use tickdraw_render::{DrawList, TextureTable};

const FRAME_COUNT: u64 = 60;
/// 16.6ms refresh interval in nanoseconds (≈60 Hz).
const REFRESH_INTERVAL_NS: u64 = 16_666_667;
/// Simulated backend cost of one line command.
const LINE_COST_NS: u64 = 2_000;
/// Simulated backend cost of one image command.
const IMAGE_COST_NS: u64 = 150_000;
const POINT_COUNT: u32 = 32;

/// Forwards every event to both sinks.
struct Tee {
    pretty: PrettyPrintSink<Stdout>,
    recorder: RecorderSink,
}

impl TraceSink for Tee {
    fn on_animation_loaded(&mut self, e: &AnimationLoadedEvent) {
        self.pretty.on_animation_loaded(e);
        self.recorder.on_animation_loaded(e);
    }

    fn on_frame_swap(&mut self, e: &FrameSwapEvent) {
        self.pretty.on_frame_swap(e);
        self.recorder.on_frame_swap(e);
    }

    fn on_geometry_built(&mut self, e: &GeometryBuiltEvent) {
        self.pretty.on_geometry_built(e);
        self.recorder.on_geometry_built(e);
    }

    fn on_render_cost(&mut self, e: &RenderCostEvent) {
        self.pretty.on_render_cost(e);
        self.recorder.on_render_cost(e);
    }
}

/// A [`DrawList`] that charges simulated time for every command.
struct TimedSurface<'a> {
    list: DrawList,
    clock: &'a ManualClock,
}

impl DrawSurface for TimedSurface<'_> {
    fn draw_line(&mut self, line: Line, color: Color, thickness: f64) -> Result<(), DrawError> {
        self.clock.advance(Duration(LINE_COST_NS));
        self.list.draw_line(line, color, thickness)
    }

    fn draw_image(&mut self, texture: TextureId, rect: Rect) -> Result<(), DrawError> {
        self.clock.advance(Duration(IMAGE_COST_NS));
        self.list.draw_image(texture, rect)
    }
}

/// Four 2×2 solid frames alternating 100ms and 200ms.
fn synthetic_clip() -> VecDeque<DecodedFrame> {
    [
        ([255, 0, 0, 255], 100),
        ([0, 255, 0, 255], 200),
        ([0, 0, 255, 255], 100),
        ([255, 255, 255, 255], 200),
    ]
    .into_iter()
    .map(|(rgba, ms)| DecodedFrame::from_rgba8(2, 2, &rgba.repeat(4), ms * 1_000_000))
    .collect()
}

type Probed = (RenderCostProbe<Box<dyn Drawable>>, CostHistory<32>);

fn probed(id: ItemId, item: impl Drawable + 'static) -> Probed {
    let child: Box<dyn Drawable> = Box::new(item);
    (RenderCostProbe::new(id, child), CostHistory::default())
}

fn main() {
    let timebase = Timebase::NANOS;
    let clock = ManualClock::with_timebase(HostTime(1_000_000_000), timebase); // start at 1s

    // -- sinks -------------------------------------------------------------
    let mut sinks = Tee {
        pretty: PrettyPrintSink::with_writer(std::io::stdout(), timebase),
        recorder: RecorderSink::new(),
    };

    // -- items -------------------------------------------------------------
    let mut textures = TextureTable::new();
    let mut source: Box<dyn FrameSource> = match std::env::args().nth(1) {
        Some(path) => Box::new(GifFrameSource::open(path).expect("failed to open GIF")),
        None => Box::new(synthetic_clip()),
    };
    let params = CircleLinesParams {
        center: Point::new(105.0, 65.0),
        radius: 50.0,
        ..CircleLinesParams::DEFAULT.with_point_count(POINT_COUNT)
    };

    let (selector, monolithic, list) = {
        let mut tracer = Tracer::new(&mut sinks);
        let selector = AnimatedFrameSelector::load(
            ItemId(1),
            &mut *source,
            &mut textures,
            &clock,
            &mut tracer,
        )
        .expect("failed to load animation")
        .with_rect(Rect::new(0.0, 0.0, 210.0, 130.0));
        let monolithic =
            CircleLinesMonolithic::build_traced(ItemId(2), params, &clock, &mut tracer);
        let list = CircleLinesList::build_traced(ItemId(3), params, &clock, &mut tracer);
        (selector, monolithic, list)
    };

    let mut probes = [
        probed(ItemId(11), selector),
        probed(ItemId(12), monolithic),
        probed(ItemId(13), list),
    ];

    // -- simulated loop ----------------------------------------------------
    let mut surface = TimedSurface {
        list: DrawList::new(),
        clock: &clock,
    };
    surface.list.restrict_textures(&textures);

    for frame_index in 0..FRAME_COUNT {
        let tick_start = clock.now();
        surface.list.clear();
        {
            let tracer = Tracer::new(&mut sinks);
            let mut cx = DrawContext::new(&mut surface, &clock, frame_index).with_tracer(tracer);
            for (probe, _) in &mut probes {
                probe.draw(&mut cx).expect("draw failed");
            }
        }
        for (probe, history) in &mut probes {
            history.push(probe.smoothed_cost_ms());
        }
        clock.set(HostTime(tick_start.ticks() + REFRESH_INTERVAL_NS));
    }

    // -- summary -----------------------------------------------------------
    println!();
    let peak = probes
        .iter()
        .map(|(_, h)| h.max())
        .fold(0.0_f64, f64::max);
    for (probe, history) in &probes {
        println!(
            "item {:>2}  |{}|  mean={:.3}ms last={:.3}ms",
            probe.id().0,
            history.sparkline_ascii(0.0, peak),
            history.mean(),
            probe.smoothed_cost_ms(),
        );
    }

    println!();
    let wall = MonotonicClock::new();
    for n in DEFAULT_POINT_COUNTS {
        let report = compare(params.with_point_count(n), 20, 30, &wall).expect("compare failed");
        println!(
            "n={:>3} segments={:>5}  create mono={:.4}ms list={:.4}ms  render mono={:.4}ms list={:.4}ms  equivalent={}",
            report.point_count,
            report.segment_count,
            report.monolithic.mean_creation_ms,
            report.list.mean_creation_ms,
            report.monolithic.smoothed_render_ms,
            report.list.smoothed_render_ms,
            report.equivalent,
        );
    }

    // -- export Chrome trace -----------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    tickdraw_debug::chrome::export(sinks.recorder.as_bytes(), timebase, &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path} ({FRAME_COUNT} frames)");
}
