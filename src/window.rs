//! Sliding-window generation over a rectangular region.
//!
//! Windows are enumerated in row-major order (all x positions for the first
//! y row, then the next row) so scans are deterministic and reproducible.

use std::ops::Range;

use crate::util::{HeatscanError, HeatscanResult};

/// Candidate rectangular region in top-left-origin image coordinates.
///
/// Corners are half-open in spirit: pixels `x0..x1` by `y0..y1` are covered,
/// with `x1 > x0` and `y1 > y0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left edge (column) of the window.
    pub x0: usize,
    /// Top edge (row) of the window.
    pub y0: usize,
    /// Right edge, exclusive.
    pub x1: usize,
    /// Bottom edge, exclusive.
    pub y1: usize,
}

impl Window {
    /// Creates a window from its top-left corner and size.
    pub fn from_origin(x0: usize, y0: usize, width: usize, height: usize) -> Self {
        Self {
            x0,
            y0,
            x1: x0 + width,
            y1: y0 + height,
        }
    }

    /// Returns the window width in pixels.
    pub fn width(&self) -> usize {
        self.x1 - self.x0
    }

    /// Returns the window height in pixels.
    pub fn height(&self) -> usize {
        self.y1 - self.y0
    }
}

/// Advance per window position along one axis.
///
/// Truncating multiplication: `step = trunc(size * (1 - overlap))`. An
/// overlap of 1.0 (or a zero size) gives a zero step, which is rejected
/// because the walk along the axis would never advance.
fn axis_step(size: usize, overlap: f32, axis: &'static str) -> HeatscanResult<usize> {
    let step = (size as f32 * (1.0 - overlap)) as usize;
    if step == 0 {
        return Err(HeatscanError::ZeroStep { axis, overlap });
    }
    Ok(step)
}

/// Window positions along one axis: `span / step - 1`, clamped to zero.
///
/// The trailing `-1` is inherited behavior kept exactly; the clamp makes the
/// degenerate case (span shorter than two steps) an explicit empty result
/// rather than an error.
fn axis_count(span: usize, step: usize) -> usize {
    (span / step).saturating_sub(1)
}

/// Generates candidate windows covering `region_x × region_y`.
///
/// Every window starts inside the region and has exactly `size`; the last
/// window along an axis may overhang the region end by less than one step
/// due to truncating division. Degenerate spans yield an empty sequence.
pub fn generate(
    region_x: Range<usize>,
    region_y: Range<usize>,
    size: (usize, usize),
    overlap: (f32, f32),
) -> HeatscanResult<Vec<Window>> {
    let step_x = axis_step(size.0, overlap.0, "x")?;
    let step_y = axis_step(size.1, overlap.1, "y")?;

    let span_x = region_x.end.saturating_sub(region_x.start);
    let span_y = region_y.end.saturating_sub(region_y.start);
    let count_x = axis_count(span_x, step_x);
    let count_y = axis_count(span_y, step_y);

    let mut windows = Vec::with_capacity(count_x * count_y);
    for ys in 0..count_y {
        let y0 = ys * step_y + region_y.start;
        for xs in 0..count_x {
            let x0 = xs * step_x + region_x.start;
            windows.push(Window::from_origin(x0, y0, size.0, size.1));
        }
    }
    Ok(windows)
}
