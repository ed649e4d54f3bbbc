//! A headless snap-to-item carousel engine.
//!
//! For adapter-level utilities (tween-driven snapping), see the `carousel-adapter` crate.
//!
//! The crate covers the parts of a paginated carousel that are not rendering:
//! item offsets in the scroll container, the scale/opacity ramps that de-emphasize items away
//! from the focal point, and the drag classification that decides which neighbour to snap to.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the scroll position along the active axis
//! - drag begin/end events
//! - a way to scroll the real list to an offset (taken from [`Carousel::take_scroll_command`])
//! - a live scroll value to drive each item's [`ItemAnimation`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod error;
mod geometry;
mod interpolate;
mod options;
mod types;


pub use carousel::{Carousel, CarouselItem, Items};
pub use error::{InterpolationError, OptionsError};
pub use geometry::Geometry;
pub use interpolate::{Interpolation, ItemAnimation};
pub use options::{
    CarouselOptions, KeyExtractor, OnScrollBeginDragCallback, OnScrollEndCallback,
    OnScrollEndDragCallback,
};
pub use types::{
    Axis, Breakpoints, DragOutcome, DragPhase, HostListConfig, ItemLayout, ItemMargin,
    ScrollCommand, ScrollState, Size, VisualStyle,
};
