// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven selection of the due frame of a looping animation.
//!
//! All decoding and uploading happens in [`AnimatedFrameSelector::load`]. The
//! per-tick [`draw`](Drawable::draw) only reads the clock, walks the frame
//! durations, and issues one image draw. The due frame depends on elapsed host
//! time alone, so playback speed is independent of the render rate.
//!
//! The texture currently on screen is published through an [`ActiveFrame`]
//! cell. Publishing is the only cross-thread write and happens only when the
//! selected frame changes.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use kurbo::Rect;
use tickdraw_core::draw::{DrawContext, Drawable, ItemId};
use tickdraw_core::error::{DrawError, LoadError};
use tickdraw_core::texture::{FrameSource, TextureId, TextureUploader};
use tickdraw_core::time::{Clock, Duration, HostTime};
use tickdraw_core::timeline::FrameTimeline;
use tickdraw_core::trace::{AnimationLoadedEvent, FrameSwapEvent, Tracer};

/// The texture bound for display, readable from any thread.
///
/// Every `u64` is a valid [`TextureId`], so whether a texture is bound is
/// tracked separately from the id itself.
pub struct ActiveFrame {
    texture: AtomicU64,
    bound: AtomicBool,
}

impl ActiveFrame {
    /// Creates a cell with no texture bound.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            texture: AtomicU64::new(0),
            bound: AtomicBool::new(false),
        }
    }

    /// Returns the bound texture, if any.
    #[must_use]
    pub fn get(&self) -> Option<TextureId> {
        // `bound` never goes back to false, so once it is observed every
        // reachable `texture` value was written by `publish`.
        if self.bound.load(Ordering::Acquire) {
            Some(TextureId(self.texture.load(Ordering::Acquire)))
        } else {
            None
        }
    }

    /// Binds `texture`.
    pub fn publish(&self, texture: TextureId) {
        self.texture.store(texture.0, Ordering::Release);
        self.bound.store(true, Ordering::Release);
    }
}

impl Default for ActiveFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ActiveFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActiveFrame").field(&self.get()).finish()
    }
}

/// Draws the frame of a looping animation that is due at the current host
/// time.
pub struct AnimatedFrameSelector {
    id: ItemId,
    textures: Vec<TextureId>,
    timeline: FrameTimeline,
    start: HostTime,
    current: usize,
    active: Arc<ActiveFrame>,
    rect: Rect,
}

impl AnimatedFrameSelector {
    /// Default destination rectangle: the unit square.
    pub const DEFAULT_RECT: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

    /// Decodes every frame of `source`, uploads each through `uploader`, and
    /// starts the animation at the clock's current time.
    ///
    /// Decoding stops when the source is exhausted. A source with no frames
    /// yields an empty selector that never draws.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Decode`] if the source fails or yields a malformed
    /// frame, and [`LoadError::Upload`] if the uploader rejects a frame. No
    /// selector is built in either case.
    pub fn load<S, U>(
        id: ItemId,
        source: &mut S,
        uploader: &mut U,
        clock: &dyn Clock,
        tracer: &mut Tracer<'_>,
    ) -> Result<Self, LoadError>
    where
        S: FrameSource + ?Sized,
        U: TextureUploader + ?Sized,
    {
        let timebase = clock.timebase();
        let mut frames = Vec::new();
        while let Some(frame) = source.next_frame()? {
            frame.validate()?;
            let texture = uploader.upload(&frame)?;
            frames.push((texture, Duration::from_nanos(frame.delay_ns, timebase)));
        }
        let selector = Self::from_frames(id, frames, clock.now());
        tracer.animation_loaded(&AnimationLoadedEvent {
            item: id,
            frame_count: u32::try_from(selector.len()).unwrap_or(u32::MAX),
            total: selector.timeline.total(),
            timestamp: selector.start,
        });
        Ok(selector)
    }

    /// Builds a selector from already uploaded frames and their display
    /// durations, starting at `start`.
    #[must_use]
    pub fn from_frames(
        id: ItemId,
        frames: impl IntoIterator<Item = (TextureId, Duration)>,
        start: HostTime,
    ) -> Self {
        let mut textures = Vec::new();
        let mut timeline = FrameTimeline::new();
        for (texture, duration) in frames {
            textures.push(texture);
            timeline.push(duration);
        }
        let active = Arc::new(ActiveFrame::new());
        if let Some(&first) = textures.first() {
            active.publish(first);
        }
        Self {
            id,
            textures,
            timeline,
            start,
            current: 0,
            active,
            rect: Self::DEFAULT_RECT,
        }
    }

    /// Sets the destination rectangle.
    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Trace identity of this selector.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns `true` if there are no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Uploaded frame textures in display order.
    #[must_use]
    pub fn textures(&self) -> &[TextureId] {
        &self.textures
    }

    /// Frame durations and loop period.
    #[must_use]
    pub const fn timeline(&self) -> &FrameTimeline {
        &self.timeline
    }

    /// Host time at which the animation started.
    #[must_use]
    pub const fn start_time(&self) -> HostTime {
        self.start
    }

    /// Destination rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Index of the frame chosen by the most recent draw (0 before any draw).
    #[must_use]
    pub const fn current_frame(&self) -> usize {
        self.current
    }

    /// Shared handle to the texture currently bound for display.
    #[must_use]
    pub fn active_frame(&self) -> Arc<ActiveFrame> {
        Arc::clone(&self.active)
    }

    /// Index of the frame due at `now`, or `None` if there are no frames.
    ///
    /// Times before the start are treated as the start.
    #[must_use]
    pub fn frame_at(&self, now: HostTime) -> Option<usize> {
        self.timeline.frame_at(now.saturating_duration_since(self.start))
    }
}

impl fmt::Debug for AnimatedFrameSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedFrameSelector")
            .field("id", &self.id)
            .field("frames", &self.textures.len())
            .field("total", &self.timeline.total())
            .field("start", &self.start)
            .field("current", &self.current)
            .field("rect", &self.rect)
            .finish_non_exhaustive()
    }
}

impl Drawable for AnimatedFrameSelector {
    fn draw(&mut self, cx: &mut DrawContext<'_>) -> Result<bool, DrawError> {
        let now = cx.clock.now();
        let Some(index) = self.frame_at(now) else {
            return Ok(false);
        };
        let Some(&texture) = self.textures.get(index) else {
            return Ok(false);
        };
        if index != self.current {
            self.active.publish(texture);
            cx.tracer.frame_swap(&FrameSwapEvent {
                item: self.id,
                frame_index: cx.frame_index,
                from: u32::try_from(self.current).unwrap_or(u32::MAX),
                to: u32::try_from(index).unwrap_or(u32::MAX),
                texture,
                timestamp: now,
            });
        }
        self.current = index;
        cx.surface.draw_image(texture, self.rect)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use tickdraw_core::color::Color;
    use tickdraw_core::draw::DrawSurface;
    use tickdraw_core::error::{DecodeError, UploadError};
    use tickdraw_core::texture::DecodedFrame;
    use tickdraw_core::time::{ManualClock, Timebase};

    const MS: u64 = 1_000_000;

    #[derive(Default)]
    struct Images(Vec<TextureId>);

    impl DrawSurface for Images {
        fn draw_line(&mut self, _: kurbo::Line, _: Color, _: f64) -> Result<(), DrawError> {
            Ok(())
        }

        fn draw_image(&mut self, texture: TextureId, _: Rect) -> Result<(), DrawError> {
            self.0.push(texture);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Counter(u64);

    impl TextureUploader for Counter {
        fn upload(&mut self, _: &DecodedFrame) -> Result<TextureId, UploadError> {
            self.0 += 1;
            Ok(TextureId(self.0 * 10))
        }
    }

    fn frames(delays_ms: &[u64]) -> VecDeque<DecodedFrame> {
        delays_ms
            .iter()
            .map(|&ms| DecodedFrame::from_rgba8(1, 1, &[255; 4], ms * MS))
            .collect()
    }

    fn draw_at(selector: &mut AnimatedFrameSelector, clock: &ManualClock, t: u64) -> Vec<TextureId> {
        clock.set(HostTime(t));
        let mut surface = Images::default();
        let mut cx = DrawContext::new(&mut surface, clock, 0);
        assert!(selector.draw(&mut cx).unwrap(), "non-empty selector draws");
        drop(cx);
        surface.0
    }

    #[test]
    fn load_uploads_every_frame_and_starts_at_load_time() {
        let clock = ManualClock::new(HostTime(5 * MS));
        let mut source = frames(&[100, 200, 100, 200]);
        let selector = AnimatedFrameSelector::load(
            ItemId(1),
            &mut source,
            &mut Counter::default(),
            &clock,
            &mut Tracer::none(),
        )
        .unwrap();
        assert_eq!(selector.len(), 4);
        assert_eq!(
            selector.textures(),
            [TextureId(10), TextureId(20), TextureId(30), TextureId(40)]
        );
        assert_eq!(selector.timeline().total(), Duration(600 * MS));
        assert_eq!(selector.start_time(), HostTime(5 * MS));
        assert_eq!(selector.active_frame().get(), Some(TextureId(10)));
    }

    #[test]
    fn selects_by_elapsed_time() {
        let clock = ManualClock::new(HostTime(0));
        let mut selector = AnimatedFrameSelector::load(
            ItemId(1),
            &mut frames(&[100, 200, 100, 200]),
            &mut Counter::default(),
            &clock,
            &mut Tracer::none(),
        )
        .unwrap();
        assert_eq!(draw_at(&mut selector, &clock, 50 * MS), [TextureId(10)]);
        assert_eq!(draw_at(&mut selector, &clock, 250 * MS), [TextureId(20)]);
        assert_eq!(selector.current_frame(), 1);
        assert_eq!(draw_at(&mut selector, &clock, 590 * MS), [TextureId(40)]);
        assert_eq!(draw_at(&mut selector, &clock, 650 * MS), [TextureId(10)]);
        assert_eq!(selector.current_frame(), 0);
    }

    #[test]
    fn active_frame_follows_selection() {
        let start = HostTime(1_000);
        let mut selector = AnimatedFrameSelector::from_frames(
            ItemId(2),
            [(TextureId(7), Duration(10)), (TextureId(8), Duration(10))],
            start,
        );
        let active = selector.active_frame();
        let clock = ManualClock::new(start);
        draw_at(&mut selector, &clock, 1_015);
        assert_eq!(active.get(), Some(TextureId(8)));
        draw_at(&mut selector, &clock, 1_020);
        assert_eq!(active.get(), Some(TextureId(7)));
    }

    #[test]
    fn empty_selector_draws_nothing() {
        let clock = ManualClock::new(HostTime(0));
        let mut selector = AnimatedFrameSelector::load(
            ItemId(3),
            &mut VecDeque::new(),
            &mut Counter::default(),
            &clock,
            &mut Tracer::none(),
        )
        .unwrap();
        assert!(selector.is_empty());
        assert_eq!(selector.active_frame().get(), None);

        let mut surface = Images::default();
        let mut cx = DrawContext::new(&mut surface, &clock, 0);
        for t in [0, 1, u64::MAX] {
            clock.set(HostTime(t));
            assert!(!selector.draw(&mut cx).unwrap(), "t={t}");
        }
        drop(cx);
        assert!(surface.0.is_empty(), "nothing drawn");
    }

    #[test]
    fn time_before_start_shows_first_frame() {
        let selector = AnimatedFrameSelector::from_frames(
            ItemId(4),
            [(TextureId(1), Duration(5)), (TextureId(2), Duration(5))],
            HostTime(100),
        );
        assert_eq!(selector.frame_at(HostTime(3)), Some(0));
    }

    #[test]
    fn custom_rect_is_used() {
        let clock = ManualClock::new(HostTime(0));
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        let mut selector = AnimatedFrameSelector::from_frames(
            ItemId(5),
            [(TextureId(1), Duration::from_millis(100, Timebase::NANOS))],
            HostTime(0),
        )
        .with_rect(rect);
        assert_eq!(selector.rect(), rect);
        let mut list = tickdraw_render::DrawList::new();
        let mut cx = DrawContext::new(&mut list, &clock, 0);
        selector.draw(&mut cx).unwrap();
        drop(cx);
        assert_eq!(list.images().collect::<Vec<_>>(), [(TextureId(1), rect)]);
    }

    #[test]
    fn decode_failure_aborts_load() {
        struct Broken;
        impl FrameSource for Broken {
            fn next_frame(&mut self) -> Result<Option<DecodedFrame>, DecodeError> {
                Err(DecodeError::Codec("truncated".into()))
            }
        }
        let clock = ManualClock::new(HostTime(0));
        let err = AnimatedFrameSelector::load(
            ItemId(6),
            &mut Broken,
            &mut Counter::default(),
            &clock,
            &mut Tracer::none(),
        )
        .unwrap_err();
        assert_eq!(err, LoadError::Decode(DecodeError::Codec("truncated".into())));
    }

    #[test]
    fn upload_failure_aborts_load() {
        let clock = ManualClock::new(HostTime(0));
        let mut source = frames(&[100]);
        source[0].width = 0;
        source[0].pixels.clear();
        let err = AnimatedFrameSelector::load(
            ItemId(7),
            &mut source,
            &mut tickdraw_render::TextureTable::new(),
            &clock,
            &mut Tracer::none(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LoadError::Upload(UploadError::InvalidSize {
                width: 0,
                height: 1
            })
        );
    }

    #[test]
    fn max_texture_id_is_a_bound_frame() {
        let last = TextureId(u64::MAX);
        let mut selector = AnimatedFrameSelector::from_frames(
            ItemId(8),
            [(TextureId(1), Duration(10)), (last, Duration(10))],
            HostTime(0),
        );
        let active = selector.active_frame();
        let clock = ManualClock::new(HostTime(0));
        assert_eq!(draw_at(&mut selector, &clock, 15), [last]);
        assert_eq!(selector.current_frame(), 1);
        assert_eq!(active.get(), Some(last), "drawn texture is the active one");
    }

    #[test]
    fn active_frame_is_readable_from_another_thread() {
        let textures: Vec<_> = (0..4).map(|i| (TextureId(100 + i), Duration(10))).collect();
        let valid: Vec<_> = textures.iter().map(|&(t, _)| t).collect();
        let mut selector = AnimatedFrameSelector::from_frames(ItemId(9), textures, HostTime(0));
        let active = selector.active_frame();

        let reader = std::thread::spawn(move || {
            let mut seen = Vec::new();
            for _ in 0..1_000 {
                seen.push(active.get());
                std::thread::yield_now();
            }
            seen
        });

        let clock = ManualClock::new(HostTime(0));
        for t in (0..400).step_by(5) {
            draw_at(&mut selector, &clock, t);
        }

        for seen in reader.join().unwrap() {
            let texture = seen.expect("first frame is bound before the reader starts");
            assert!(valid.contains(&texture), "{texture:?} was never published");
        }
        assert_eq!(
            selector.active_frame().get(),
            Some(valid[selector.current_frame()]),
            "active frame matches the current index"
        );
    }
}
