use heatscan::{Heatmap, ImageView, Window};

#[test]
fn add_heat_is_additive_and_compounds() {
    let mut map = Heatmap::new(20, 20).unwrap();
    let windows = [
        Window::from_origin(2, 2, 6, 6),
        Window::from_origin(5, 5, 6, 6),
    ];

    map.add_heat(&windows);
    assert_eq!(map.get(3, 3), Some(1.0));
    // Overlap region covered by both windows.
    assert_eq!(map.get(6, 6), Some(2.0));
    assert_eq!(map.get(15, 15), Some(0.0));

    // Applying the same list again doubles every cell.
    let before: Vec<f32> = map.as_slice().to_vec();
    map.add_heat(&windows);
    for (cell, prev) in map.as_slice().iter().zip(before) {
        assert_eq!(*cell, prev * 2.0);
    }
}

#[test]
fn add_heat_clamps_to_grid_bounds() {
    let mut map = Heatmap::new(10, 10).unwrap();
    map.add_heat(&[Window::from_origin(7, 7, 8, 8)]);
    assert_eq!(map.get(9, 9), Some(1.0));
    assert_eq!(map.get(0, 0), Some(0.0));

    // Entirely outside: nothing accumulates.
    map.add_heat(&[Window::from_origin(20, 20, 5, 5)]);
    let total: f32 = map.as_slice().iter().sum();
    assert_eq!(total, 9.0);
}

#[test]
fn normalize_scales_max_to_one_and_preserves_order() {
    let mut map = Heatmap::new(16, 16).unwrap();
    map.add_heat(&[
        Window::from_origin(0, 0, 8, 8),
        Window::from_origin(4, 4, 8, 8),
        Window::from_origin(6, 6, 4, 4),
    ]);

    let before: Vec<f32> = map.as_slice().to_vec();
    assert!(map.normalize());

    let max = map.as_slice().iter().cloned().fold(0.0f32, f32::max);
    assert_eq!(max, 1.0);
    assert!(map.as_slice().iter().all(|v| v.is_finite()));

    // Relative ordering between cells is unchanged.
    for i in 0..before.len() {
        for j in (i + 1)..before.len() {
            let was = before[i].partial_cmp(&before[j]).unwrap();
            let now = map.as_slice()[i].partial_cmp(&map.as_slice()[j]).unwrap();
            assert_eq!(was, now);
        }
    }
}

#[test]
fn normalize_leaves_all_zero_maps_unchanged() {
    let mut map = Heatmap::new(8, 8).unwrap();
    assert!(!map.normalize());
    assert!(map.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn zero_like_matches_image_dimensions() {
    let data = vec![0u8; 12 * 7];
    let view = ImageView::from_slice(&data, 12, 7).unwrap();
    let map = Heatmap::zero_like(view);
    assert_eq!((map.width(), map.height()), (12, 7));
    assert!(map.as_slice().iter().all(|&v| v == 0.0));
}
