use alloc::vec::Vec;

use carousel::{Carousel, CarouselOptions, DragOutcome, ScrollCommand, VisualStyle};

use crate::{Easing, Tween};

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and turns its deferred
/// scroll commands into per-frame offsets.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_scroll_begin_drag` / `on_scroll_end_drag` when UI events occur
/// - `tick(now_ms)` each frame/timer tick; a returned offset should be applied to the real
///   scroll container
///
/// The first `tick` after a `scroll_to_index` is the "next tick" on which the physical scroll
/// starts, so `on_scroll_end` callbacks always run before the list moves.
#[derive(Clone, Debug)]
pub struct Controller<T> {
    carousel: Carousel<T>,
    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
}

impl<T> Controller<T> {
    pub fn new(options: CarouselOptions<T>) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(carousel: Carousel<T>) -> Self {
        Self {
            carousel,
            tween: None,
            duration_ms: 250,
            easing: Easing::default(),
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<T> {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel<T> {
        self.carousel
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, offset: f32) {
        self.cancel_animation();
        self.carousel.on_scroll(offset);
    }

    pub fn on_scroll_begin_drag(&mut self) {
        self.cancel_animation();
        self.carousel.on_scroll_begin_drag();
    }

    pub fn on_scroll_end_drag(&mut self) -> DragOutcome {
        self.carousel.on_scroll_end_drag()
    }

    /// Commits `index` now; the scroll itself starts on the next `tick`.
    pub fn scroll_to_index(&mut self, index: usize) -> bool {
        self.carousel.scroll_to_index(index)
    }

    /// Advances the controller.
    ///
    /// - Picks up a pending scroll command and starts (or retargets) a tween towards it.
    ///   Non-animated commands jump straight to their offset.
    /// - If a tween is active, samples it, records the offset as the scroll position and
    ///   returns it.
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if let Some(command) = self.carousel.take_scroll_command() {
            if let Some(offset) = self.start(command, now_ms) {
                return Some(offset);
            }
        }

        let tween = self.tween?;
        let offset = self.clamp_offset(tween.sample(now_ms));
        self.carousel.on_scroll(offset);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(offset)
    }

    /// Returns the offset when the command was applied without a tween.
    fn start(&mut self, command: ScrollCommand, now_ms: u64) -> Option<f32> {
        let target = self.clamp_offset(command.offset);
        if !command.animated || self.duration_ms == 0 {
            self.tween = None;
            self.carousel.on_scroll(target);
            return Some(target);
        }

        if let Some(tween) = self.tween.as_mut() {
            tween.retarget(now_ms, target, self.duration_ms);
        } else {
            self.tween = Some(Tween::new(
                self.clamp_offset(self.carousel.scroll_position()),
                target,
                now_ms,
                self.duration_ms,
                self.easing,
            ));
        }
        None
    }

    /// Keeps an offset inside `[0, max_scroll_offset]`.
    ///
    /// When the first item is narrower than the container its centering offset is negative,
    /// which a real scroll container cannot reach; it rests at 0 instead.
    fn clamp_offset(&self, offset: f32) -> f32 {
        let max = self
            .carousel
            .geometry()
            .max_scroll_offset()
            .unwrap_or(0.0)
            .max(0.0);
        offset.min(max).max(0.0)
    }

    /// Emphasis of every item at the current scroll position.
    ///
    /// For hosts that redraw each frame instead of binding [`carousel::ItemAnimation`]s to a
    /// native animated value.
    pub fn item_styles(&self) -> Vec<VisualStyle> {
        let geometry = self.carousel.geometry();
        let position = self.carousel.scroll_position();
        (0..geometry.len)
            .map(|index| {
                geometry
                    .item_visual_style(index, position)
                    .unwrap_or(VisualStyle::ACTIVE)
            })
            .collect()
    }
}
