use alloc::vec::Vec;

use crate::InterpolationError;

/// A clamped piecewise-linear mapping from a scroll value to a visual value.
///
/// This is what a host binds to its live scroll value (on whatever thread drives its
/// animations). Outside the input range the first/last output is held; the mapping never
/// extrapolates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpolation {
    input: Vec<f32>,
    output: Vec<f32>,
}

impl Interpolation {
    /// Builds a mapping from ascending `input` breakpoints to `output` values.
    ///
    /// Equal neighbouring inputs are allowed (a zero-width segment).
    pub fn new(
        input: impl Into<Vec<f32>>,
        output: impl Into<Vec<f32>>,
    ) -> Result<Self, InterpolationError> {
        let input = input.into();
        let output = output.into();
        if input.len() != output.len() {
            return Err(InterpolationError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(InterpolationError::TooFewPoints(input.len()));
        }
        if let Some(i) = input.iter().position(|v| !v.is_finite()) {
            return Err(InterpolationError::NonFinite(i));
        }
        if let Some(i) = input.windows(2).position(|w| w[1] < w[0]) {
            return Err(InterpolationError::NotAscending(i + 1));
        }
        Ok(Self { input, output })
    }

    pub fn input(&self) -> &[f32] {
        &self.input
    }

    pub fn output(&self) -> &[f32] {
        &self.output
    }

    /// Evaluates the mapping at `x`.
    ///
    /// An exact hit on a breakpoint returns that breakpoint's output; when several breakpoints
    /// share the value, the earliest interior one wins.
    pub fn sample(&self, x: f32) -> f32 {
        let last = self.input.len() - 1;
        if x.is_nan() || x < self.input[0] {
            return self.output[0];
        }
        if x > self.input[last] {
            return self.output[last];
        }

        let hi = 1 + self.input[1..last].partition_point(|&v| v < x);
        let lo = hi - 1;
        let (x0, x1) = (self.input[lo], self.input[hi]);
        let (y0, y1) = (self.output[lo], self.output[hi]);
        // x0 <= x <= x1 here, so a zero-width segment always takes this branch.
        if x == x1 {
            return y1;
        }
        let t = ((x - x0) / (x1 - x0)).clamp(0.0, 1.0);
        y0 + (y1 - y0) * t
    }
}

/// The two mappings that de-emphasize an item away from the focal point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAnimation {
    pub opacity: Interpolation,
    pub scale: Interpolation,
}
