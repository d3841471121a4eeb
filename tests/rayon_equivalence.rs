#![cfg(feature = "rayon")]

use heatscan::{
    ActiveTier, Classifier, HeatscanError, HeatscanResult, ImageView, ParameterStore, Scanner,
    Tier, TierRegistry,
};

fn make_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push((((x * 11) ^ (y * 3)) & 0xFF) as u8);
        }
    }
    data
}

struct BrightCornerClassifier;

impl Classifier for BrightCornerClassifier {
    fn predict(&self, patch: ImageView<'_>) -> HeatscanResult<bool> {
        Ok(patch.get(0, 0).unwrap() > 127)
    }
}

#[test]
fn parallel_scan_matches_sequential() {
    let data = make_image(320, 200);
    let image = ImageView::from_slice(&data, 320, 200).unwrap();
    let store = ParameterStore::new(TierRegistry::new(vec![
        Tier::new(10, 120, 48, 0.6),
        Tier::new(80, 200, 64, 0.5),
    ]));

    let sequential = Scanner::new(BrightCornerClassifier)
        .scan(image, &store)
        .unwrap();
    let parallel = Scanner::new(BrightCornerClassifier)
        .with_parallel(true)
        .scan(image, &store)
        .unwrap();

    assert_eq!(sequential.windows, parallel.windows);
    assert_eq!(sequential.hot_windows, parallel.hot_windows);
}

/// Fails for every patch; the scan must surface the error, never positives.
struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _patch: ImageView<'_>) -> HeatscanResult<bool> {
        Err(HeatscanError::Classifier {
            reason: "model unavailable".to_string(),
        })
    }
}

#[test]
fn parallel_classifier_failure_aborts_with_no_partial_results() {
    let data = make_image(320, 200);
    let image = ImageView::from_slice(&data, 320, 200).unwrap();
    let store = ParameterStore::new(TierRegistry::new(vec![
        Tier::new(10, 120, 48, 0.6),
        Tier::new(80, 200, 64, 0.5),
    ]));

    let err = Scanner::new(FailingClassifier)
        .with_parallel(true)
        .scan(image, &store)
        .unwrap_err();
    assert_eq!(
        err,
        HeatscanError::Classifier {
            reason: "model unavailable".to_string(),
        }
    );
}

#[test]
fn parallel_scan_matches_sequential_for_single_tier() {
    let data = make_image(320, 200);
    let image = ImageView::from_slice(&data, 320, 200).unwrap();
    let mut store = ParameterStore::new(TierRegistry::new(vec![
        Tier::new(10, 120, 48, 0.6),
        Tier::new(80, 200, 64, 0.5),
    ]));
    store.set_active_tier(ActiveTier::Specific(1)).unwrap();
    store.set_window_overlap(0.7);

    let sequential = Scanner::new(BrightCornerClassifier)
        .scan(image, &store)
        .unwrap();
    let parallel = Scanner::new(BrightCornerClassifier)
        .with_parallel(true)
        .scan(image, &store)
        .unwrap();

    assert_eq!(sequential.hot_windows, parallel.hot_windows);
}
