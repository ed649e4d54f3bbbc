/// The scroll direction in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }

    /// Picks the component of `size` that lies along this axis.
    pub fn main(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// The host list's layout answer for one item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    pub index: usize,
    /// Scroll offset that centers the item in the container.
    pub offset: f32,
    /// Item extent along the active axis.
    pub length: f32,
}

/// Scroll positions driving an item's emphasis ramp.
///
/// The item is fully emphasized at `mid` and fully de-emphasized at or beyond `start`/`end`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    pub start: f32,
    pub mid: f32,
    pub end: f32,
}

impl Breakpoints {
    pub fn collapsed(at: f32) -> Self {
        Self {
            start: at,
            mid: at,
            end: at,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.mid && self.mid == self.end
    }

    /// Pulls `start`/`end` onto `mid` when they sit on the wrong side of it.
    ///
    /// Small items in a wide container push the edge breakpoints of the first and last
    /// neighbours past their midpoint; the ramp on that side then becomes a step.
    pub fn ordered(self) -> Self {
        Self {
            start: self.start.min(self.mid),
            mid: self.mid,
            end: self.end.max(self.mid),
        }
    }
}

/// Margins around an item along the active axis.
///
/// `leading` is the left (or top) side, `trailing` the right (or bottom) side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMargin {
    pub leading: f32,
    pub trailing: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualStyle {
    pub opacity: f32,
    pub scale: f32,
}

impl VisualStyle {
    pub const ACTIVE: Self = Self {
        opacity: 1.0,
        scale: 1.0,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Latest scroll position reported by the host along the active axis.
    pub position: f32,
    /// Position captured when the current drag began.
    pub drag_begin: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// A physical scroll the host should perform on its next tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub index: usize,
    pub offset: f32,
    pub animated: bool,
}

/// How the end of a drag was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragOutcome {
    /// The list was in the overscroll region before the first item.
    Ignored,
    /// The drag was shorter than `min_scroll_distance`; snapped back to this index.
    Resnapped(usize),
    /// Paged one step. `accepted` is false when `target` fell outside the data.
    Paged { target: isize, accepted: bool },
}

/// Pass-through settings for the host's scrollable list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostListConfig {
    pub horizontal: bool,
    pub inverted: bool,
    pub bounces: bool,
    pub initial_scroll_index: usize,
    pub initial_scroll_offset: f32,
    /// Momentum is disabled so drags end where the finger lifts.
    pub deceleration_rate: f32,
    pub shows_scroll_indicator: bool,
    pub adjust_content_insets: bool,
    pub container: Size,
}
