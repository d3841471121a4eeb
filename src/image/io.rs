//! Convenience helpers for loading and saving images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use std::path::Path;

use crate::heatmap::Heatmap;
use crate::image::{ImageView, OwnedImage};
use crate::util::{HeatscanError, HeatscanResult};

/// Creates a borrowed view from a grayscale image buffer.
pub fn view_from_gray_image(img: &image::GrayImage) -> HeatscanResult<ImageView<'_>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageView::from_slice(img.as_raw(), width, height)
}

/// Loads an image from disk and converts it to a grayscale owned image.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> HeatscanResult<OwnedImage> {
    let img = image::open(path).map_err(|err| HeatscanError::ImageIo {
        reason: err.to_string(),
    })?;
    let gray = img.to_luma8();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    OwnedImage::new(gray.into_raw(), width, height)
}

/// Saves an owned grayscale image as an 8-bit PNG.
pub fn save_gray_png<P: AsRef<Path>>(img: &OwnedImage, path: P) -> HeatscanResult<()> {
    let buf = image::GrayImage::from_raw(
        img.width() as u32,
        img.height() as u32,
        img.data().to_vec(),
    )
    .ok_or(HeatscanError::ImageIo {
        reason: "buffer size mismatch".to_string(),
    })?;
    buf.save(path).map_err(|err| HeatscanError::ImageIo {
        reason: err.to_string(),
    })
}

/// Saves a heatmap as an 8-bit PNG, linearly scaled so the maximum cell
/// maps to 255. An all-zero heatmap produces an all-black image.
pub fn save_heatmap_png<P: AsRef<Path>>(heatmap: &Heatmap, path: P) -> HeatscanResult<()> {
    let max = heatmap
        .as_slice()
        .iter()
        .fold(0.0f32, |acc, v| acc.max(v.abs()));
    let scale = if max == 0.0 { 0.0 } else { 255.0 / max };
    let data: Vec<u8> = heatmap
        .as_slice()
        .iter()
        .map(|v| (v.abs() * scale).round().min(255.0) as u8)
        .collect();
    let img = OwnedImage::new(data, heatmap.width(), heatmap.height())?;
    save_gray_png(&img, path)
}
