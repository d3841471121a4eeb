//! Pixel-level accumulation of positive detections.
//!
//! Each positive window adds 1.0 to every cell it covers; overlapping
//! windows compound, so repeated detections build confidence. Downstream
//! clustering consumes the (optionally normalized) grid.

use crate::image::ImageView;
use crate::util::{HeatscanError, HeatscanResult};
use crate::window::Window;

/// 2D grid of floating accumulators with the source image's dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Heatmap {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl Heatmap {
    /// Creates a zeroed heatmap of the given size.
    pub fn new(width: usize, height: usize) -> HeatscanResult<Self> {
        if width == 0 || height == 0 {
            return Err(HeatscanError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(HeatscanError::InvalidDimensions { width, height })?;
        Ok(Self {
            data: vec![0.0; len],
            width,
            height,
        })
    }

    /// Creates a zeroed heatmap matching the image's width and height.
    pub fn zero_like(image: ImageView<'_>) -> Self {
        Self {
            data: vec![0.0; image.width() * image.height()],
            width: image.width(),
            height: image.height(),
        }
    }

    /// Returns the grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Returns the raw cell buffer in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Adds 1.0 to every cell covered by each window.
    ///
    /// Windows are clamped to the grid; accumulation is additive and
    /// unbounded.
    pub fn add_heat(&mut self, windows: &[Window]) {
        for window in windows {
            let x0 = window.x0.min(self.width);
            let x1 = window.x1.min(self.width);
            let y0 = window.y0.min(self.height);
            let y1 = window.y1.min(self.height);
            for y in y0..y1 {
                let row = y * self.width;
                for cell in &mut self.data[row + x0..row + x1] {
                    *cell += 1.0;
                }
            }
        }
    }

    /// Divides every cell by the maximum absolute cell value, in place.
    ///
    /// An all-zero grid is left unchanged and reported via `false`; the
    /// grid never picks up NaN or infinite cells here.
    pub fn normalize(&mut self) -> bool {
        let max_abs = self.data.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
        if max_abs == 0.0 {
            return false;
        }
        for cell in &mut self.data {
            *cell /= max_abs;
        }
        true
    }
}
