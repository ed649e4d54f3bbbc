use crate::{
    Axis, Breakpoints, Interpolation, ItemAnimation, ItemLayout, ItemMargin, Size, VisualStyle,
};

/// Item geometry for a snap carousel.
///
/// A plain value: it holds only sizes and counts, so adapters can copy it into a frame and ask
/// it layout questions without touching the controller.
///
/// Positions are scroll offsets along the active axis. Item `i` is centered in the container
/// when the host list is scrolled to [`Geometry::item_offset`]`(i)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub axis: Axis,
    pub container: Size,
    pub item: Size,
    /// Visible gap between two neighbouring items.
    pub separator_width: f32,
    pub inactive_scale: f32,
    pub inactive_opacity: f32,
    pub inverted: bool,
    pub len: usize,
}

impl Geometry {
    pub fn new(axis: Axis, container: Size, item: Size, len: usize) -> Self {
        Self {
            axis,
            container,
            item,
            separator_width: 10.0,
            inactive_scale: 0.8,
            inactive_opacity: 0.8,
            inverted: false,
            len,
        }
    }

    pub fn item_extent(&self) -> f32 {
        self.axis.main(self.item)
    }

    pub fn container_extent(&self) -> f32 {
        self.axis.main(self.container)
    }

    fn half_item(&self) -> f32 {
        self.item_extent() / 2.0
    }

    fn half_container(&self) -> f32 {
        self.container_extent() / 2.0
    }

    fn is_first(&self, index: usize) -> bool {
        index == 0
    }

    fn is_last(&self, index: usize) -> bool {
        index.checked_add(1) == Some(self.len)
    }

    fn in_bounds(&self, index: usize) -> bool {
        index < self.len
    }

    /// The layout margin between two items.
    ///
    /// An inactive item is drawn scaled down around its center, which visually widens the gap
    /// by `(1 - inactive_scale) * item_extent / 2` on each side. Subtracting that keeps the
    /// visible gap at `separator_width`. Can be negative.
    pub fn effective_margin(&self) -> f32 {
        let shrink = (1.0 - self.inactive_scale) * self.item_extent();
        self.separator_width - shrink / 2.0
    }

    /// Distance between the layout slots of two neighbours.
    pub fn step(&self) -> f32 {
        self.item_extent() + self.effective_margin()
    }

    /// Scroll offset that centers item `index` in the container.
    ///
    /// This is both the layout offset reported to the host list and the programmatic scroll
    /// target; the two must agree or the list jitters on snap.
    pub fn item_offset(&self, index: usize) -> f32 {
        index as f32 * self.step() - (self.half_container() - self.half_item())
    }

    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        if !self.in_bounds(index) {
            return None;
        }
        Some(ItemLayout {
            index,
            offset: self.item_offset(index),
            length: self.item_extent(),
        })
    }

    /// Scroll offset of the last item, or `None` for an empty list.
    pub fn max_scroll_offset(&self) -> Option<f32> {
        self.len.checked_sub(1).map(|last| self.item_offset(last))
    }

    /// Where the item's center sits in the viewport at its emphasis peak.
    ///
    /// The first and last items cannot be centered at the scroll extremes, so they peak against
    /// the leading/trailing container edge instead.
    pub fn animated_offset(&self, index: usize) -> f32 {
        if self.is_first(index) {
            return self.half_item();
        }
        if self.is_last(index) {
            return self.container_extent() - self.half_item();
        }
        self.half_container()
    }

    pub fn mid_point(&self, index: usize) -> f32 {
        index as f32 * self.step() + self.half_item() - self.animated_offset(index)
    }

    pub fn start_point(&self, index: usize, mid: f32) -> f32 {
        if index == 1 {
            return 0.0;
        }
        if self.is_last(index) {
            let anchor = self.len.saturating_sub(2) as f32;
            return anchor * self.step() + self.half_item() - self.half_container();
        }
        mid - self.step()
    }

    pub fn end_point(&self, index: usize, mid: f32) -> f32 {
        if self.is_first(index) {
            return self.step() + self.half_item() - self.half_container();
        }
        if index.checked_add(2) == Some(self.len) {
            let last = (self.len - 1) as f32;
            return last * self.step() + self.item_extent() - self.container_extent();
        }
        mid + self.step()
    }

    /// The emphasis ramp of item `index`.
    ///
    /// A single item has nothing to ramp between and gets collapsed breakpoints at its offset.
    pub fn breakpoints(&self, index: usize) -> Option<Breakpoints> {
        if !self.in_bounds(index) {
            return None;
        }
        if self.len < 2 {
            return Some(Breakpoints::collapsed(self.item_offset(index)));
        }
        let mid = self.mid_point(index);
        Some(Breakpoints {
            start: self.start_point(index, mid),
            mid,
            end: self.end_point(index, mid),
        })
    }

    pub fn opacity_interpolation(&self, index: usize) -> Option<Interpolation> {
        self.ramp(index, self.inactive_opacity)
    }

    pub fn scale_interpolation(&self, index: usize) -> Option<Interpolation> {
        self.ramp(index, self.inactive_scale)
    }

    /// The mappings a host binds to its live scroll value for item `index`.
    ///
    /// Bind them to the vertical scroll value for [`Axis::Vertical`], else the horizontal one.
    pub fn item_animation(&self, index: usize) -> Option<ItemAnimation> {
        Some(ItemAnimation {
            opacity: self.opacity_interpolation(index)?,
            scale: self.scale_interpolation(index)?,
        })
    }

    pub fn item_visual_style(&self, index: usize, scroll: f32) -> Option<VisualStyle> {
        let animation = self.item_animation(index)?;
        Some(VisualStyle {
            opacity: animation.opacity.sample(scroll),
            scale: animation.scale.sample(scroll),
        })
    }

    /// Half of the effective margin on each side, except at the list edges where only the
    /// inward side gets it.
    pub fn item_margin(&self, index: usize) -> Option<ItemMargin> {
        if !self.in_bounds(index) {
            return None;
        }
        let half = self.effective_margin() / 2.0;
        let leading_only = ItemMargin {
            leading: half,
            trailing: 0.0,
        };
        let trailing_only = ItemMargin {
            leading: 0.0,
            trailing: half,
        };
        let margin = if self.is_first(index) {
            if self.inverted {
                leading_only
            } else {
                trailing_only
            }
        } else if self.is_last(index) {
            if self.inverted {
                trailing_only
            } else {
                leading_only
            }
        } else {
            ItemMargin {
                leading: half,
                trailing: half,
            }
        };
        Some(margin)
    }

    fn ramp(&self, index: usize, inactive: f32) -> Option<Interpolation> {
        let points = self.breakpoints(index)?.ordered();
        let ramp = if points.is_collapsed() {
            // Nothing to page to: the lone item stays emphasized.
            Interpolation::new([points.mid, points.mid], [1.0, 1.0])
        } else {
            Interpolation::new(
                [points.start, points.mid, points.end],
                [inactive, 1.0, inactive],
            )
        };
        match ramp {
            Ok(ramp) => Some(ramp),
            Err(_err) => {
                cwarn!(index, error = %_err, "Geometry: degenerate emphasis ramp");
                None
            }
        }
    }
}
