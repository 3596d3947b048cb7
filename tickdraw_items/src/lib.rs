// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawables for tickdraw.
//!
//! Three independent render callbacks, all implementing
//! [`Drawable`](tickdraw_core::draw::Drawable):
//!
//! - [`AnimatedFrameSelector`] picks the due frame of a looping animation
//!   from elapsed host time and draws it.
//! - [`CircleLinesMonolithic`] and [`CircleLinesList`] draw the complete graph
//!   between points on a circle, either computed inline every tick or as a
//!   prebuilt group of [`DrawLine`] children.
//! - [`RenderCostProbe`] wraps any drawable and keeps a smoothed measure of
//!   its render cost in a [`SharedValue`] other threads can poll.
//!
//! The crate also provides the platform [`MonotonicClock`] and, with the
//! `gif` feature, a [`GifFrameSource`] decoding animated GIFs.
//!
//! # Crate features
//!
//! - `gif` (enabled by default): [`GifFrameSource`] via the `image` crate.
//! - `trace` (disabled by default): Forwards to `tickdraw_core/trace`.

mod animated;
mod circle;
pub mod clock;
#[cfg(feature = "gif")]
mod gif;
mod group;
mod line;
mod probe;
mod shared;

pub use animated::{ActiveFrame, AnimatedFrameSelector};
pub use circle::{CircleLinesList, CircleLinesMonolithic, CircleLinesParams};
pub use clock::MonotonicClock;
#[cfg(feature = "gif")]
pub use gif::GifFrameSource;
pub use group::DrawGroup;
pub use line::DrawLine;
pub use probe::RenderCostProbe;
pub use shared::SharedValue;
