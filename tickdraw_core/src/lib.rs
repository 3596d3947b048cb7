// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for time-driven drawable render callbacks.
//!
//! `tickdraw_core` defines the contract between a host renderer and the items
//! it draws once per render tick, plus the pure, allocation-light math those
//! items share. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   Host frame loop
//!       │  DrawContext { surface, clock, scale, frame_index, tracer }
//!       ▼
//!   Drawable::draw() ──► DrawSurface::draw_line / draw_image
//!       │
//!       └──► Tracer ──► TraceSink (optional)
//! ```
//!
//! **[`draw`]**: The [`Drawable`](draw::Drawable) callback trait, the
//! [`DrawSurface`](draw::DrawSurface) primitives it renders through, and the
//! per-tick [`DrawContext`](draw::DrawContext).
//!
//! **[`time`]**: Integer host time, timebase conversion, and the
//! [`Clock`](time::Clock) trait with a deterministic
//! [`ManualClock`](time::ManualClock).
//!
//! **[`timeline`]**: Looping per-frame durations and the frame-due lookup.
//!
//! **[`geometry`]**: Complete graph of segments between points evenly spaced
//! on a circle.
//!
//! **[`ema`]**: Exponential moving average weights used by cost probes.
//!
//! **[`texture`]**: Decode and upload contracts for animation frames.
//!
//! **[`color`]**: Straight-alpha RGBA8 color.
//!
//! **[`error`]**: Decode, upload, load, and draw error types.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod color;
pub mod draw;
pub mod ema;
pub mod error;
pub mod geometry;
pub mod texture;
pub mod time;
pub mod timeline;
pub mod trace;
