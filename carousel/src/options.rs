use alloc::string::{String, ToString};
use alloc::sync::Arc;

use crate::{Axis, Geometry, OptionsError, Size};

/// Maps an item and its index to a stable identity for the host list.
pub type KeyExtractor<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// Fired when a scroll target is committed, before the host scrolls to it.
pub type OnScrollEndCallback<T> = Arc<dyn Fn(&T, usize) + Send + Sync>;

pub type OnScrollBeginDragCallback = Arc<dyn Fn() + Send + Sync>;

/// Fired with the paging target of a drag, before the scroll is committed.
///
/// The target is signed: paging back from the first item reports `-1`.
pub type OnScrollEndDragCallback = Arc<dyn Fn(isize) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Options are per-render values: swap them with `Carousel::set_options` when the host
/// re-renders. Heavy fields (data and closures) sit behind `Arc`s so cloning stays cheap.
pub struct CarouselOptions<T> {
    pub data: Arc<[T]>,
    pub axis: Axis,
    /// Viewport size of the scroll container.
    pub container: Size,
    pub item: Size,
    /// Visible gap between two neighbouring items.
    pub separator_width: f32,
    /// Drags shorter than this (along the active axis) snap back instead of paging.
    pub min_scroll_distance: f32,
    pub inactive_scale: f32,
    pub inactive_opacity: f32,
    pub inverted: bool,
    pub initial_index: usize,
    /// Passed through to the host list's overscroll behaviour.
    pub bounces: bool,
    /// Keys default to the decimal index when unset.
    pub key_extractor: Option<KeyExtractor<T>>,
    pub on_scroll_end: Option<OnScrollEndCallback<T>>,
    pub on_scroll_begin_drag: Option<OnScrollBeginDragCallback>,
    pub on_scroll_end_drag: Option<OnScrollEndDragCallback>,
}

impl<T> Clone for CarouselOptions<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            axis: self.axis,
            container: self.container,
            item: self.item,
            separator_width: self.separator_width,
            min_scroll_distance: self.min_scroll_distance,
            inactive_scale: self.inactive_scale,
            inactive_opacity: self.inactive_opacity,
            inverted: self.inverted,
            initial_index: self.initial_index,
            bounces: self.bounces,
            key_extractor: self.key_extractor.clone(),
            on_scroll_end: self.on_scroll_end.clone(),
            on_scroll_begin_drag: self.on_scroll_begin_drag.clone(),
            on_scroll_end_drag: self.on_scroll_end_drag.clone(),
        }
    }
}

impl<T> CarouselOptions<T> {
    /// Creates options for `data` shown in a viewport of size `viewport`.
    ///
    /// The container fills the viewport and each item takes 90% of it. Other defaults: 10
    /// separator, 5 minimum drag distance, 0.8 inactive scale and opacity, horizontal, bouncing,
    /// keys are the decimal index.
    pub fn new(data: impl Into<Arc<[T]>>, viewport: Size) -> Self {
        Self {
            data: data.into(),
            axis: Axis::Horizontal,
            container: viewport,
            item: viewport.scale(0.9),
            separator_width: 10.0,
            min_scroll_distance: 5.0,
            inactive_scale: 0.8,
            inactive_opacity: 0.8,
            inverted: false,
            initial_index: 0,
            bounces: true,
            key_extractor: None,
            on_scroll_end: None,
            on_scroll_begin_drag: None,
            on_scroll_end_drag: None,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn key_for(&self, index: usize) -> Option<String> {
        let item = self.data.get(index)?;
        Some(match &self.key_extractor {
            Some(extract) => extract(item, index),
            None => index.to_string(),
        })
    }

    /// The layout math for the current options.
    pub fn geometry(&self) -> Geometry {
        Geometry {
            axis: self.axis,
            container: self.container,
            item: self.item,
            separator_width: self.separator_width,
            inactive_scale: self.inactive_scale,
            inactive_opacity: self.inactive_opacity,
            inverted: self.inverted,
            len: self.data.len(),
        }
    }

    /// Checks the configuration for values the layout math cannot give a sensible answer for.
    ///
    /// The carousel itself never calls this; it degrades instead of failing.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.data.is_empty() {
            return Err(OptionsError::Empty);
        }
        let sizes = [
            ("container.width", self.container.width),
            ("container.height", self.container.height),
            ("item.width", self.item.width),
            ("item.height", self.item.height),
            ("separator_width", self.separator_width),
            ("min_scroll_distance", self.min_scroll_distance),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(OptionsError::InvalidSize { field, value });
            }
        }
        let factors = [
            ("inactive_scale", self.inactive_scale),
            ("inactive_opacity", self.inactive_opacity),
        ];
        for (field, value) in factors {
            if !(0.0..=1.0).contains(&value) {
                return Err(OptionsError::InvalidFactor { field, value });
            }
        }
        if self.initial_index >= self.data.len() {
            return Err(OptionsError::InitialIndexOutOfRange {
                index: self.initial_index,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn with_data(mut self, data: impl Into<Arc<[T]>>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.axis = if vertical {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        self
    }

    pub fn with_container(mut self, container: Size) -> Self {
        self.container = container;
        self
    }

    pub fn with_item(mut self, item: Size) -> Self {
        self.item = item;
        self
    }

    pub fn with_separator_width(mut self, separator_width: f32) -> Self {
        self.separator_width = separator_width;
        self
    }

    pub fn with_min_scroll_distance(mut self, min_scroll_distance: f32) -> Self {
        self.min_scroll_distance = min_scroll_distance;
        self
    }

    pub fn with_inactive_scale(mut self, inactive_scale: f32) -> Self {
        self.inactive_scale = inactive_scale;
        self
    }

    pub fn with_inactive_opacity(mut self, inactive_opacity: f32) -> Self {
        self.inactive_opacity = inactive_opacity;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_bounces(mut self, bounces: bool) -> Self {
        self.bounces = bounces;
        self
    }

    pub fn with_key_extractor(
        mut self,
        key_extractor: impl Fn(&T, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.key_extractor = Some(Arc::new(key_extractor));
        self
    }

    pub fn with_on_scroll_end(
        mut self,
        on_scroll_end: Option<impl Fn(&T, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_end = on_scroll_end.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_begin_drag(
        mut self,
        on_scroll_begin_drag: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_begin_drag = on_scroll_begin_drag.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_end_drag(
        mut self,
        on_scroll_end_drag: Option<impl Fn(isize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_end_drag = on_scroll_end_drag.map(|f| Arc::new(f) as _);
        self
    }
}

impl<T> core::fmt::Debug for CarouselOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("len", &self.data.len())
            .field("axis", &self.axis)
            .field("container", &self.container)
            .field("item", &self.item)
            .field("separator_width", &self.separator_width)
            .field("min_scroll_distance", &self.min_scroll_distance)
            .field("inactive_scale", &self.inactive_scale)
            .field("inactive_opacity", &self.inactive_opacity)
            .field("inverted", &self.inverted)
            .field("initial_index", &self.initial_index)
            .field("bounces", &self.bounces)
            .finish_non_exhaustive()
    }
}
