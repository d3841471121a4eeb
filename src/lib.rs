//! Heatscan locates candidate object regions in a still image by sliding
//! rectangular windows at multiple scales, submitting each window to an
//! external binary classifier, and accumulating positive detections into a
//! pixel-level confidence heatmap.
//!
//! The crate is the detection-stage backbone of a larger vision pipeline:
//! downstream consumers cluster and threshold the heatmap into final
//! bounding boxes. Optional parallelism is available via the `rayon`
//! feature; image decoding via `image-io`.

pub mod draw;
pub mod heatmap;
pub mod image;
pub mod params;
pub mod scan;
pub mod tier;
mod trace;
pub mod util;
pub mod window;

pub use heatmap::Heatmap;
pub use image::{ImageView, OwnedImage};
pub use params::{ActiveTier, ParamDef, ParamKey, ParameterStore};
pub use scan::{Classifier, MeanLumaClassifier, ScanOutcome, Scanner, PATCH_SIZE};
pub use tier::{Tier, TierRegistry};
pub use util::{HeatscanError, HeatscanResult};
pub use window::{generate, Window};

pub use draw::draw_boxes;
