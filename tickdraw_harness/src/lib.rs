// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batching comparison and render-cost history for demo harnesses.
//!
//! - [`compare`] builds and renders both circle-lines variants for one set of
//!   parameters and reports their creation and render costs side by side.
//! - [`segment_set`] reduces a recorded [`DrawList`](tickdraw_render::DrawList)
//!   to a sorted multiset of segments for equivalence checks.
//! - [`CostHistory`] keeps the last `N` per-tick costs and renders them as an
//!   ASCII sparkline.

mod compare;
mod history;

pub use compare::{
    ComparisonReport, DEFAULT_POINT_COUNTS, SegmentKey, VariantReport, compare, segment_set,
};
pub use history::CostHistory;
