//! Window cropping and patch resampling for classifier input.
//!
//! Candidate windows may overhang the image by less than one generator step;
//! the crop clamps to image bounds before resampling, so the classifier
//! always receives a well-formed square patch.

use crate::image::{ImageView, OwnedImage};
use crate::util::{HeatscanError, HeatscanResult};
use crate::window::Window;

/// Crops `window` (clamped to image bounds) and resizes the crop to a
/// `side x side` patch with nearest-neighbor sampling.
pub fn extract_patch(
    image: ImageView<'_>,
    window: Window,
    side: usize,
) -> HeatscanResult<OwnedImage> {
    let x1 = window.x1.min(image.width());
    let y1 = window.y1.min(image.height());
    if window.x0 >= x1 || window.y0 >= y1 {
        return Err(HeatscanError::RoiOutOfBounds {
            x: window.x0,
            y: window.y0,
            width: window.width(),
            height: window.height(),
            img_width: image.width(),
            img_height: image.height(),
        });
    }

    let crop = image.roi(window.x0, window.y0, x1 - window.x0, y1 - window.y0)?;
    resize_nearest(crop, side, side)
}

/// Resamples `src` to `dst_width x dst_height` with nearest-neighbor lookup.
pub fn resize_nearest(
    src: ImageView<'_>,
    dst_width: usize,
    dst_height: usize,
) -> HeatscanResult<OwnedImage> {
    if dst_width == 0 || dst_height == 0 {
        return Err(HeatscanError::InvalidDimensions {
            width: dst_width,
            height: dst_height,
        });
    }

    let mut data = Vec::with_capacity(dst_width * dst_height);
    for y in 0..dst_height {
        let sy = (y * src.height()) / dst_height;
        let row = src.row(sy).expect("source row within bounds");
        for x in 0..dst_width {
            let sx = (x * src.width()) / dst_width;
            data.push(row[sx]);
        }
    }
    OwnedImage::new(data, dst_width, dst_height)
}
