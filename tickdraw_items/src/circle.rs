// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Complete graph between points evenly spaced on a circle, in two batching
//! strategies.
//!
//! [`CircleLinesMonolithic`] is a single drawable that recomputes every vertex
//! and issues every line itself on each tick. [`CircleLinesList`] computes the
//! segments once at construction and holds one [`DrawLine`] child per segment
//! in a [`DrawGroup`]; each tick is plain child traversal.
//!
//! For the same [`CircleLinesParams`] both produce the same line commands in
//! the same order. They differ only in where the work happens.

use kurbo::Point;
use tickdraw_core::color::Color;
use tickdraw_core::draw::{DrawContext, Drawable, ItemId};
use tickdraw_core::error::DrawError;
use tickdraw_core::geometry::CircleGraph;
use tickdraw_core::time::{Clock, HostTime};
use tickdraw_core::trace::{GeometryBuiltEvent, GeometryVariant, Tracer};

use crate::{DrawGroup, DrawLine};

/// Parameters shared by both circle-lines variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleLinesParams {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Number of vertices. Values below 3 are raised to 3.
    pub point_count: u32,
    /// Stroke color.
    pub color: Color,
    /// Unscaled stroke width.
    pub thickness: f64,
}

impl CircleLinesParams {
    /// Default parameters: a unit circle at the origin with three white
    /// points and unit thickness.
    pub const DEFAULT: Self = Self {
        center: Point::ORIGIN,
        radius: 1.0,
        point_count: 3,
        color: Color::WHITE,
        thickness: 1.0,
    };

    /// Returns a copy with a different point count.
    #[must_use]
    pub const fn with_point_count(mut self, point_count: u32) -> Self {
        self.point_count = point_count;
        self
    }

    fn graph(&self) -> CircleGraph {
        CircleGraph::new(self.center, self.radius, self.point_count)
    }
}

impl Default for CircleLinesParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn emit_built(
    tracer: &mut Tracer<'_>,
    item: ItemId,
    variant: GeometryVariant,
    graph: &CircleGraph,
    clock: &dyn Clock,
    start: HostTime,
) {
    tracer.geometry_built(&GeometryBuiltEvent {
        item,
        variant,
        point_count: graph.point_count(),
        segment_count: u32::try_from(graph.segment_count()).unwrap_or(u32::MAX),
        start,
        end: clock.now(),
    });
}

/// Draws every segment inline on each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleLinesMonolithic {
    graph: CircleGraph,
    color: Color,
    thickness: f64,
}

impl CircleLinesMonolithic {
    /// Creates the item. Nothing is precomputed.
    #[must_use]
    pub fn new(params: CircleLinesParams) -> Self {
        Self {
            graph: params.graph(),
            color: params.color,
            thickness: params.thickness,
        }
    }

    /// Creates the item and reports construction through `tracer`.
    #[must_use]
    pub fn build_traced(
        id: ItemId,
        params: CircleLinesParams,
        clock: &dyn Clock,
        tracer: &mut Tracer<'_>,
    ) -> Self {
        let start = clock.now();
        let item = Self::new(params);
        emit_built(
            tracer,
            id,
            GeometryVariant::Monolithic,
            &item.graph,
            clock,
            start,
        );
        item
    }

    /// The underlying graph, with the clamped point count.
    #[must_use]
    pub const fn graph(&self) -> &CircleGraph {
        &self.graph
    }
}

impl Drawable for CircleLinesMonolithic {
    fn draw(&mut self, cx: &mut DrawContext<'_>) -> Result<bool, DrawError> {
        let thickness = cx.scale.line_thickness(self.thickness);
        for (_, _, line) in self.graph.segments() {
            cx.surface.draw_line(line, self.color, thickness)?;
        }
        Ok(true)
    }
}

/// Holds one prebuilt [`DrawLine`] per segment.
#[derive(Debug)]
pub struct CircleLinesList {
    graph: CircleGraph,
    group: DrawGroup,
}

impl CircleLinesList {
    /// Computes every segment and builds the child list.
    #[must_use]
    pub fn new(params: CircleLinesParams) -> Self {
        let graph = params.graph();
        let mut group = DrawGroup::with_capacity(graph.segment_count());
        for (_, _, line) in graph.segments() {
            group.push(DrawLine::new(line, params.color, params.thickness));
        }
        Self { graph, group }
    }

    /// Builds the child list and reports construction through `tracer`.
    #[must_use]
    pub fn build_traced(
        id: ItemId,
        params: CircleLinesParams,
        clock: &dyn Clock,
        tracer: &mut Tracer<'_>,
    ) -> Self {
        let start = clock.now();
        let item = Self::new(params);
        emit_built(tracer, id, GeometryVariant::List, &item.graph, clock, start);
        item
    }

    /// The underlying graph, with the clamped point count.
    #[must_use]
    pub const fn graph(&self) -> &CircleGraph {
        &self.graph
    }

    /// Number of child line items.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.group.len()
    }
}

impl Drawable for CircleLinesList {
    fn draw(&mut self, cx: &mut DrawContext<'_>) -> Result<bool, DrawError> {
        self.group.draw(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickdraw_core::draw::DrawScale;
    use tickdraw_core::time::ManualClock;
    use tickdraw_render::{DrawCommand, DrawList};

    fn render(item: &mut dyn Drawable, scale: DrawScale) -> DrawList {
        let clock = ManualClock::new(HostTime(0));
        let mut list = DrawList::new();
        let mut cx = DrawContext::new(&mut list, &clock, 0).with_scale(scale);
        assert!(item.draw(&mut cx).unwrap(), "lines are visible");
        drop(cx);
        list
    }

    #[test]
    fn variants_issue_identical_commands() {
        let params = CircleLinesParams {
            center: Point::new(105.0, 65.0),
            radius: 50.0,
            point_count: 9,
            color: Color::rgb(200, 40, 40),
            thickness: 1.5,
        };
        let scale = DrawScale {
            thickness: 2.0,
            size: 1.25,
        };
        let a = render(&mut CircleLinesMonolithic::new(params), scale);
        let b = render(&mut CircleLinesList::new(params), scale);
        assert_eq!(a.commands(), b.commands());
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn thickness_is_scaled_and_absolute() {
        let params = CircleLinesParams {
            thickness: -2.0,
            ..CircleLinesParams::DEFAULT
        };
        let scale = DrawScale {
            thickness: 1.5,
            size: 2.0,
        };
        let list = render(&mut CircleLinesMonolithic::new(params), scale);
        for command in list.commands() {
            let DrawCommand::Line { thickness, .. } = command else {
                panic!("only lines expected");
            };
            assert_eq!(*thickness, 6.0);
        }
    }

    #[test]
    fn list_variant_builds_one_child_per_segment() {
        for n in [0_u32, 2, 3, 8, 32] {
            let item = CircleLinesList::new(CircleLinesParams::DEFAULT.with_point_count(n));
            assert_eq!(item.child_count(), item.graph().segment_count(), "n={n}");
        }
    }

    #[test]
    fn default_params() {
        let p = CircleLinesParams::default();
        assert_eq!(p.center, Point::ORIGIN);
        assert_eq!(p.radius, 1.0);
        assert_eq!(p.point_count, 3);
        assert_eq!(p.color, Color::WHITE);
        assert_eq!(p.thickness, 1.0);
    }
}
