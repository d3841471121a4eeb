//! Detection scan: window planning plus per-window classification.
//!
//! The scanner reads the active-tier state from the [`ParameterStore`],
//! generates candidate windows tier by tier, and submits each cropped,
//! resized patch to the external classifier. Windows are logically
//! independent, so the optional rayon path classifies them in parallel and
//! folds the results back in generation order.

use crate::image::patch::extract_patch;
use crate::image::ImageView;
use crate::params::{ActiveTier, ParameterStore};
use crate::trace::{trace_event, trace_span};
use crate::util::HeatscanResult;
use crate::window::{generate, Window};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Side length of the canonical square classifier input patch.
pub const PATCH_SIZE: usize = 64;

/// Opaque binary predicate over a fixed-size grayscale patch.
///
/// Implementations wrap a trained model (feature extraction included); this
/// crate only crops and resizes the patch before calling.
pub trait Classifier {
    /// Returns true when the patch contains the target object.
    fn predict(&self, patch: ImageView<'_>) -> HeatscanResult<bool>;
}

/// Trivial reference predicate: mean patch luma at or above a threshold.
///
/// Used by the CLI and tests to exercise the scan path; real deployments
/// supply a trained model behind [`Classifier`].
#[derive(Clone, Copy, Debug)]
pub struct MeanLumaClassifier {
    /// Minimum mean luma for a positive prediction.
    pub threshold: u8,
}

impl Classifier for MeanLumaClassifier {
    fn predict(&self, patch: ImageView<'_>) -> HeatscanResult<bool> {
        let mut sum = 0u64;
        for y in 0..patch.height() {
            let row = patch.row(y).expect("patch row within bounds");
            sum += row.iter().map(|&v| v as u64).sum::<u64>();
        }
        let mean = sum / (patch.width() * patch.height()) as u64;
        Ok(mean >= self.threshold as u64)
    }
}

/// Result of one scan: every candidate window plus the positive subset.
///
/// Both sequences preserve generation order; callers needing only the
/// positives may discard `windows`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanOutcome {
    /// All candidate windows, in generation order.
    pub windows: Vec<Window>,
    /// Windows the classifier flagged positive, in generation order.
    pub hot_windows: Vec<Window>,
}

/// Orchestrates window generation and classification over an image.
pub struct Scanner<C> {
    classifier: C,
    #[cfg(feature = "rayon")]
    parallel: bool,
}

impl<C: Classifier> Scanner<C> {
    /// Creates a sequential scanner around a classifier.
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            #[cfg(feature = "rayon")]
            parallel: false,
        }
    }

    /// Enables rayon-parallel classification.
    ///
    /// Ordering of the returned sequences is identical to the sequential
    /// path.
    #[cfg(feature = "rayon")]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Plans the candidate windows for the store's active-tier state.
    ///
    /// All-tiers mode walks the registry in order, each tier with its own
    /// persisted size and overlap on both axes. Single-tier mode uses the
    /// live tunables for size and for the x-axis overlap, but keeps the
    /// tier's persisted overlap on the y axis; the asymmetry is a contract,
    /// not an accident.
    pub fn plan_windows(
        &self,
        image: ImageView<'_>,
        store: &ParameterStore,
    ) -> HeatscanResult<Vec<Window>> {
        let width = image.width();
        match store.active_tier() {
            ActiveTier::All => {
                let mut windows = Vec::new();
                for tier in store.tiers().iter() {
                    windows.extend(generate(
                        0..width,
                        tier.min_y..tier.max_y,
                        (tier.size, tier.size),
                        (tier.overlap, tier.overlap),
                    )?);
                }
                Ok(windows)
            }
            ActiveTier::Specific(index) => {
                let tier = store.tiers().get(index)?;
                generate(
                    0..width,
                    tier.min_y..tier.max_y,
                    (store.window_dim(), store.window_dim()),
                    (store.window_overlap(), tier.overlap),
                )
            }
        }
    }

    /// Scans the image: plan windows, classify each, keep the positives.
    ///
    /// A classifier failure aborts the scan with no partial results.
    pub fn scan(
        &self,
        image: ImageView<'_>,
        store: &ParameterStore,
    ) -> HeatscanResult<ScanOutcome>
    where
        C: Sync,
    {
        let windows = self.plan_windows(image, store)?;
        let _span = trace_span!(
            "scan",
            tier = store.active_tier().to_index(store.tiers().len()),
            windows = windows.len()
        )
        .entered();

        let hot_windows = self.classify(image, &windows)?;
        trace_event!("hot_windows", count = hot_windows.len());
        Ok(ScanOutcome {
            windows,
            hot_windows,
        })
    }

    fn classify(
        &self,
        image: ImageView<'_>,
        windows: &[Window],
    ) -> HeatscanResult<Vec<Window>>
    where
        C: Sync,
    {
        #[cfg(feature = "rayon")]
        if self.parallel {
            return self.classify_par(image, windows);
        }

        let mut hot = Vec::new();
        for &window in windows {
            let patch = extract_patch(image, window, PATCH_SIZE)?;
            if self.classifier.predict(patch.view())? {
                hot.push(window);
            }
        }
        Ok(hot)
    }

    /// Parallel classification; results are folded back in window order so
    /// parallel execution is not observable in the output.
    #[cfg(feature = "rayon")]
    fn classify_par(
        &self,
        image: ImageView<'_>,
        windows: &[Window],
    ) -> HeatscanResult<Vec<Window>>
    where
        C: Sync,
    {
        let verdicts: Vec<HeatscanResult<bool>> = windows
            .par_iter()
            .map(|&window| {
                let patch = extract_patch(image, window, PATCH_SIZE)?;
                self.classifier.predict(patch.view())
            })
            .collect();

        let mut hot = Vec::new();
        for (&window, verdict) in windows.iter().zip(verdicts) {
            if verdict? {
                hot.push(window);
            }
        }
        Ok(hot)
    }
}
