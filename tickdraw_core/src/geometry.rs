// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Complete graph on points evenly spaced around a circle.
//!
//! [`CircleGraph`] describes `n` vertices at angles `2π·i/n` around a center
//! and the `n·(n−1)/2` segments joining every unordered pair of them.
//! Vertices are computed on demand; nothing is stored besides the three
//! parameters, so iterating [`segments`](CircleGraph::segments) is
//! allocation-free.

use core::f64::consts::TAU;
use core::iter::FusedIterator;

use kurbo::{Line, Point, Vec2};

/// The fewest vertices a circle graph may have.
pub const MIN_POINTS: u32 = 3;

/// Parameters of a complete graph inscribed in a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleGraph {
    center: Point,
    radius: f64,
    point_count: u32,
}

impl CircleGraph {
    /// Creates a graph, raising `point_count` to [`MIN_POINTS`] if needed.
    #[must_use]
    pub fn new(center: Point, radius: f64, point_count: u32) -> Self {
        Self {
            center,
            radius,
            point_count: point_count.max(MIN_POINTS),
        }
    }

    /// Center of the circle.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius of the circle.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of vertices, after clamping.
    #[must_use]
    pub const fn point_count(&self) -> u32 {
        self.point_count
    }

    /// Number of segments: `n·(n−1)/2`.
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        let n = self.point_count as usize;
        n * (n - 1) / 2
    }

    /// Position of vertex `i`.
    #[inline]
    #[must_use]
    pub fn vertex(&self, i: u32) -> Point {
        let theta = TAU * f64::from(i) / f64::from(self.point_count);
        self.center + self.radius * Vec2::from_angle(theta)
    }

    /// Iterates every segment as `(i, j, line)` with `i < j`, in row-major
    /// order: `(0,1), (0,2), …, (0,n−1), (1,2), …`.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            graph: self,
            i: 0,
            j: 1,
            start: self.vertex(0),
        }
    }
}

/// Iterator over the segments of a [`CircleGraph`].
///
/// Created by [`CircleGraph::segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    graph: &'a CircleGraph,
    i: u32,
    j: u32,
    start: Point,
}

impl Iterator for Segments<'_> {
    type Item = (u32, u32, Line);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.graph.point_count;
        if self.i + 1 >= n {
            return None;
        }
        if self.j >= n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= n {
                return None;
            }
            self.start = self.graph.vertex(self.i);
        }
        let item = (
            self.i,
            self.j,
            Line::new(self.start, self.graph.vertex(self.j)),
        );
        self.j += 1;
        Some(item)
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn four_points_give_six_segments() {
        let g = CircleGraph::new(Point::ORIGIN, 1.0, 4);
        let pairs: Vec<(u32, u32)> = g.segments().map(|(i, j, _)| (i, j)).collect();
        assert_eq!(pairs, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(g.segment_count(), 6);
    }

    #[test]
    fn point_count_is_clamped_to_three() {
        for n in 0..MIN_POINTS {
            let g = CircleGraph::new(Point::ORIGIN, 5.0, n);
            assert_eq!(g.point_count(), 3, "n={n}");
            assert_eq!(g.segments().count(), 3, "n={n}");
        }
    }

    #[test]
    fn segment_count_matches_iteration() {
        for n in [3_u32, 5, 8, 32, 128] {
            let g = CircleGraph::new(Point::new(10.0, 20.0), 50.0, n);
            assert_eq!(g.segments().count(), g.segment_count(), "n={n}");
        }
    }

    #[test]
    fn vertices_lie_on_circle() {
        let center = Point::new(105.0, 65.0);
        let g = CircleGraph::new(center, 50.0, 8);
        for i in 0..8 {
            let d = g.vertex(i).distance(center);
            assert!((d - 50.0).abs() < 1e-9, "vertex {i} at distance {d}");
        }
        let first = g.vertex(0);
        assert!(
            (first.x - 155.0).abs() < 1e-9 && (first.y - 65.0).abs() < 1e-9,
            "vertex 0 sits at angle zero"
        );
    }

    #[test]
    fn segment_endpoints_match_vertices() {
        let g = CircleGraph::new(Point::new(1.0, 2.0), 3.0, 7);
        for (i, j, line) in g.segments() {
            assert_eq!(line.p0, g.vertex(i), "p0 of ({i},{j})");
            assert_eq!(line.p1, g.vertex(j), "p1 of ({i},{j})");
        }
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let g = CircleGraph::new(Point::ORIGIN, 1.0, 3);
        let mut it = g.segments();
        assert_eq!(it.by_ref().count(), 3);
        assert!(it.next().is_none(), "first call after exhaustion");
        assert!(it.next().is_none(), "second call after exhaustion");
    }
}
