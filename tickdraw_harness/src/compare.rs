// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side-by-side cost of the two circle-lines batching strategies.
//!
//! Creation cost is the mean over repeated constructions. Render cost is the
//! smoothed value of a [`RenderCostProbe`] wrapped around one instance after
//! rendering it for a number of ticks into a [`DrawList`].

use std::hint::black_box;

use kurbo::Point;
use tickdraw_core::draw::{DrawContext, Drawable, ItemId};
use tickdraw_core::error::DrawError;
use tickdraw_core::time::{Clock, Duration};
use tickdraw_core::trace::GeometryVariant;
use tickdraw_items::{CircleLinesList, CircleLinesMonolithic, CircleLinesParams, RenderCostProbe};
use tickdraw_render::DrawList;

/// Point counts compared by default.
pub const DEFAULT_POINT_COUNTS: [u32; 3] = [8, 32, 128];

/// Coordinates are compared in units of this size.
const SEGMENT_QUANTUM: f64 = 1e-6;

/// A segment reduced to quantized, ordered endpoints.
pub type SegmentKey = [(i64, i64); 2];

/// Costs measured for one batching strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantReport {
    /// Which strategy.
    pub variant: GeometryVariant,
    /// Mean construction time in milliseconds.
    pub mean_creation_ms: f64,
    /// Smoothed render cost after the last tick, in milliseconds.
    pub smoothed_render_ms: f64,
    /// Line commands issued by one tick.
    pub lines_per_tick: usize,
}

/// Result of [`compare`].
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    /// Vertex count after clamping.
    pub point_count: u32,
    /// Segments per graph.
    pub segment_count: usize,
    /// Inline strategy.
    pub monolithic: VariantReport,
    /// Prebuilt child-list strategy.
    pub list: VariantReport,
    /// Whether both strategies drew the same segment multiset.
    pub equivalent: bool,
}

/// Builds each variant `creations` times, then renders one instance of each
/// for `ticks` ticks (at least one) under a render-cost probe.
///
/// # Errors
///
/// Returns the first [`DrawError`] raised while rendering.
pub fn compare(
    params: CircleLinesParams,
    creations: u32,
    ticks: u32,
    clock: &dyn Clock,
) -> Result<ComparisonReport, DrawError> {
    let (monolithic, mono_list) = measure(
        GeometryVariant::Monolithic,
        || CircleLinesMonolithic::new(params),
        creations,
        ticks,
        clock,
    )?;
    let (list, list_list) = measure(
        GeometryVariant::List,
        || CircleLinesList::new(params),
        creations,
        ticks,
        clock,
    )?;
    let graph = CircleLinesMonolithic::new(params);
    Ok(ComparisonReport {
        point_count: graph.graph().point_count(),
        segment_count: graph.graph().segment_count(),
        monolithic,
        list,
        equivalent: segment_set(&mono_list) == segment_set(&list_list),
    })
}

fn measure<D: Drawable>(
    variant: GeometryVariant,
    build: impl Fn() -> D,
    creations: u32,
    ticks: u32,
    clock: &dyn Clock,
) -> Result<(VariantReport, DrawList), DrawError> {
    let timebase = clock.timebase();

    let mut spent = Duration::ZERO;
    for _ in 0..creations {
        let start = clock.now();
        let _ = black_box(build());
        spent = spent.saturating_add(clock.now().saturating_duration_since(start));
    }
    let mean_creation_ms = if creations == 0 {
        0.0
    } else {
        spent.to_millis_f64(timebase) / f64::from(creations)
    };

    let id = match variant {
        GeometryVariant::Monolithic => ItemId(1),
        GeometryVariant::List => ItemId(2),
    };
    let mut probe = RenderCostProbe::new(id, build());
    let mut list = DrawList::new();
    for frame_index in 0..ticks.max(1) {
        list.clear();
        let mut cx = DrawContext::new(&mut list, clock, u64::from(frame_index));
        probe.draw(&mut cx)?;
    }

    let report = VariantReport {
        variant,
        mean_creation_ms,
        smoothed_render_ms: probe.smoothed_cost_ms(),
        lines_per_tick: list.lines().count(),
    };
    Ok((report, list))
}

/// Returns the recorded line segments as a sorted multiset.
///
/// Endpoints are quantized and ordered within each segment, so the result
/// does not depend on draw order or segment direction.
#[must_use]
pub fn segment_set(list: &DrawList) -> Vec<SegmentKey> {
    let mut out: Vec<SegmentKey> = list
        .lines()
        .map(|line| {
            let (a, b) = (quantize(line.p0), quantize(line.p1));
            if a <= b { [a, b] } else { [b, a] }
        })
        .collect();
    out.sort_unstable();
    out
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int `as` saturates; drawing coordinates are far inside i64 range"
)]
fn quantize(p: Point) -> (i64, i64) {
    (
        (p.x / SEGMENT_QUANTUM).round() as i64,
        (p.y / SEGMENT_QUANTUM).round() as i64,
    )
}
