use alloc::string::String;

use crate::{
    CarouselOptions, DragOutcome, DragPhase, Geometry, HostListConfig, ItemAnimation, ItemLayout,
    ItemMargin, ScrollCommand, ScrollState, VisualStyle,
};

/// A headless snap carousel.
///
/// The carousel does not hold any UI objects. Your adapter drives it by:
/// - reporting scroll positions along the active axis (`on_scroll`)
/// - forwarding drag begin/end events (`on_scroll_begin_drag` / `on_scroll_end_drag`)
/// - taking the deferred scroll command on its next tick (`take_scroll_command`) and scrolling
///   the real list there
///
/// Rendering goes through [`Carousel::items`], which yields each item with its key, layout,
/// margins and the emphasis mappings to bind to the live scroll value.
///
/// For tween-driven scrolling, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    options: CarouselOptions<T>,
    current_index: usize,
    scroll: ScrollState,
    phase: DragPhase,
    pending: Option<ScrollCommand>,
}

impl<T> Carousel<T> {
    pub fn new(options: CarouselOptions<T>) -> Self {
        cdebug!(
            len = options.len(),
            initial_index = options.initial_index,
            axis = ?options.axis,
            "Carousel::new"
        );
        debug_assert!(
            options.is_empty() || options.initial_index < options.len(),
            "initial_index {} out of range for {} items",
            options.initial_index,
            options.len()
        );
        Self {
            current_index: options.initial_index,
            scroll: ScrollState::default(),
            phase: DragPhase::Idle,
            pending: None,
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions<T> {
        &self.options
    }

    /// Replaces the per-render options.
    ///
    /// The current index, scroll state and any pending scroll command are kept.
    pub fn set_options(&mut self, options: CarouselOptions<T>) {
        self.options = options;
        ctrace!(
            len = self.options.len(),
            current_index = self.current_index,
            "Carousel::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<T>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn geometry(&self) -> Geometry {
        self.options.geometry()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The index the carousel currently considers centered.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&T> {
        self.options.data.get(self.current_index)
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn scroll_position(&self) -> f32 {
        self.scroll.position
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Records the host's scroll position along the active axis.
    pub fn on_scroll(&mut self, position: f32) {
        self.scroll.position = position;
    }

    /// Commits `index` as the current item and queues a scroll to it.
    ///
    /// This is the synchronous half of a two-phase operation: the index is committed and
    /// `on_scroll_end` fires before this returns. The physical scroll is only handed out by
    /// [`Carousel::take_scroll_command`], which the host calls on its next tick, so anything
    /// reacting to `on_scroll_end` observes state before the list starts moving.
    ///
    /// Out-of-range indexes are ignored and return `false`.
    pub fn scroll_to_index(&mut self, index: usize) -> bool {
        self.commit(index, true)
    }

    /// Like [`Carousel::scroll_to_index`], but the queued command asks for an instant jump.
    pub fn jump_to_index(&mut self, index: usize) -> bool {
        self.commit(index, false)
    }

    fn commit(&mut self, index: usize, animated: bool) -> bool {
        let Some(item) = self.options.data.get(index) else {
            cwarn!(
                index,
                len = self.options.len(),
                "Carousel::scroll_to_index: index out of range"
            );
            return false;
        };

        self.current_index = index;
        if let Some(on_scroll_end) = &self.options.on_scroll_end {
            on_scroll_end(item, index);
        }

        let offset = self.options.geometry().item_offset(index);
        ctrace!(index, offset, animated, "Carousel::scroll_to_index");
        self.pending = Some(ScrollCommand {
            index,
            offset,
            animated,
        });
        true
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending.is_some()
    }

    /// Hands the queued scroll command to the host.
    ///
    /// Only the latest command survives; an earlier one that was never taken is dropped.
    pub fn take_scroll_command(&mut self) -> Option<ScrollCommand> {
        self.pending.take()
    }

    pub fn on_scroll_begin_drag(&mut self) {
        if let Some(on_scroll_begin_drag) = &self.options.on_scroll_begin_drag {
            on_scroll_begin_drag();
        }
        self.scroll.drag_begin = self.scroll.position;
        self.phase = DragPhase::Dragging;
        ctrace!(begin = self.scroll.drag_begin, "Carousel::on_scroll_begin_drag");
    }

    /// Classifies the finished drag and pages at most one item.
    pub fn on_scroll_end_drag(&mut self) -> DragOutcome {
        self.phase = DragPhase::Idle;

        let position = self.scroll.position;
        if position < 0.0 {
            ctrace!(position, "Carousel::on_scroll_end_drag: overscroll, ignored");
            return DragOutcome::Ignored;
        }

        let distance = position - self.scroll.drag_begin;
        self.scroll.drag_begin = 0.0;

        let magnitude = if distance < 0.0 { -distance } else { distance };
        if magnitude < self.options.min_scroll_distance {
            let index = self.current_index;
            ctrace!(distance, index, "Carousel::on_scroll_end_drag: resnap");
            self.scroll_to_index(index);
            return DragOutcome::Resnapped(index);
        }

        let current = self.current_index as isize;
        let target = if distance < 0.0 {
            current - 1
        } else {
            current + 1
        };
        cdebug!(distance, target, "Carousel::on_scroll_end_drag: page");
        if let Some(on_scroll_end_drag) = &self.options.on_scroll_end_drag {
            on_scroll_end_drag(target);
        }
        let accepted = usize::try_from(target).is_ok_and(|index| self.scroll_to_index(index));
        DragOutcome::Paged { target, accepted }
    }

    pub fn key_for(&self, index: usize) -> Option<String> {
        self.options.key_for(index)
    }

    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        self.geometry().item_layout(index)
    }

    pub fn item_margin(&self, index: usize) -> Option<ItemMargin> {
        self.geometry().item_margin(index)
    }

    pub fn item_animation(&self, index: usize) -> Option<ItemAnimation> {
        self.geometry().item_animation(index)
    }

    /// The emphasis of item `index` at the last reported scroll position.
    pub fn item_visual_style(&self, index: usize) -> Option<VisualStyle> {
        self.geometry().item_visual_style(index, self.scroll.position)
    }

    /// Settings the host list needs besides the items themselves.
    pub fn host_config(&self) -> HostListConfig {
        let geometry = self.geometry();
        HostListConfig {
            horizontal: !geometry.axis.is_vertical(),
            inverted: self.options.inverted,
            bounces: self.options.bounces,
            initial_scroll_index: self.options.initial_index,
            initial_scroll_offset: geometry.item_offset(self.options.initial_index),
            deceleration_rate: 0.0,
            shows_scroll_indicator: false,
            adjust_content_insets: false,
            container: self.options.container,
        }
    }

    /// Iterates every item together with what the host needs to render it.
    pub fn items(&self) -> Items<'_, T> {
        Items {
            carousel: self,
            geometry: self.geometry(),
            index: 0,
        }
    }
}

/// One item ready for the host to render.
#[derive(Clone, Debug)]
pub struct CarouselItem<'a, T> {
    pub index: usize,
    pub key: String,
    pub item: &'a T,
    pub layout: ItemLayout,
    pub margin: ItemMargin,
    pub animation: ItemAnimation,
}

/// Iterator returned by [`Carousel::items`].
#[derive(Debug)]
pub struct Items<'a, T> {
    carousel: &'a Carousel<T>,
    geometry: Geometry,
    index: usize,
}

impl<'a, T> Iterator for Items<'a, T> {
    type Item = CarouselItem<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let carousel = self.carousel;
        while self.index < carousel.len() {
            let index = self.index;
            self.index += 1;

            let options = &carousel.options;
            let (Some(item), Some(key), Some(layout), Some(margin), Some(animation)) = (
                options.data.get(index),
                options.key_for(index),
                self.geometry.item_layout(index),
                self.geometry.item_margin(index),
                self.geometry.item_animation(index),
            ) else {
                cwarn!(index, "Carousel::items: skipping item without a layout");
                continue;
            };
            return Some(CarouselItem {
                index,
                key,
                item,
                layout,
                margin,
                animation,
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.carousel.len().saturating_sub(self.index)))
    }
}
