//! Cosmetic box-outline rendering.

use crate::image::{ImageView, OwnedImage};
use crate::util::HeatscanResult;
use crate::window::Window;

/// Draws a rectangle outline per window onto a copy of the image.
///
/// Edges are clamped to the image; the source is never mutated. `thickness`
/// is clamped to at least one pixel.
pub fn draw_boxes(
    image: ImageView<'_>,
    windows: &[Window],
    value: u8,
    thickness: usize,
) -> HeatscanResult<OwnedImage> {
    let mut out = OwnedImage::from_view(image)?;
    let width = out.width();
    let height = out.height();
    let thickness = thickness.max(1);

    for window in windows {
        let x0 = window.x0.min(width);
        let x1 = window.x1.min(width);
        let y0 = window.y0.min(height);
        let y1 = window.y1.min(height);
        if x0 >= x1 || y0 >= y1 {
            continue;
        }

        let data = out.data_mut();
        // Top and bottom edges.
        for y in (y0..(y0 + thickness).min(y1)).chain(y1.saturating_sub(thickness).max(y0)..y1) {
            let row = y * width;
            for cell in &mut data[row + x0..row + x1] {
                *cell = value;
            }
        }
        // Left and right edges.
        for y in y0..y1 {
            let row = y * width;
            for x in (x0..(x0 + thickness).min(x1))
                .chain(x1.saturating_sub(thickness).max(x0)..x1)
            {
                data[row + x] = value;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::draw_boxes;
    use crate::image::ImageView;
    use crate::window::Window;

    #[test]
    fn outlines_without_filling() {
        let data = vec![0u8; 8 * 8];
        let view = ImageView::from_slice(&data, 8, 8).unwrap();
        let out = draw_boxes(view, &[Window::from_origin(1, 1, 5, 5)], 255, 1).unwrap();

        assert_eq!(out.view().get(1, 1), Some(255));
        assert_eq!(out.view().get(5, 1), Some(255));
        assert_eq!(out.view().get(1, 5), Some(255));
        // Interior stays untouched.
        assert_eq!(out.view().get(3, 3), Some(0));
        // Source is unchanged.
        assert_eq!(view.get(1, 1), Some(0));
    }

    #[test]
    fn clamps_overhanging_boxes() {
        let data = vec![0u8; 8 * 8];
        let view = ImageView::from_slice(&data, 8, 8).unwrap();
        let out = draw_boxes(view, &[Window::from_origin(6, 6, 5, 5)], 200, 2).unwrap();
        assert_eq!(out.view().get(7, 7), Some(200));
        assert_eq!(out.view().get(0, 0), Some(0));
    }
}
