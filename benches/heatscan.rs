use criterion::{criterion_group, criterion_main, Criterion};
use heatscan::{generate, Heatmap, ImageView, MeanLumaClassifier, ParameterStore, Scanner};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    data
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_1280x720_tier", |b| {
        b.iter(|| {
            let windows = generate(
                black_box(0..1280),
                black_box(350..720),
                (100, 100),
                (0.5, 0.5),
            )
            .unwrap();
            black_box(windows)
        })
    });
}

fn bench_scan(c: &mut Criterion) {
    let width = 1280;
    let height = 720;
    let data = make_image(width, height);
    let image = ImageView::from_slice(&data, width, height).unwrap();
    let store = ParameterStore::default();
    let scanner = Scanner::new(MeanLumaClassifier { threshold: 128 });

    c.bench_function("scan_all_tiers_1280x720", |b| {
        b.iter(|| {
            let outcome = scanner.scan(black_box(image), &store).unwrap();
            black_box(outcome)
        })
    });
}

fn bench_add_heat(c: &mut Criterion) {
    let windows = generate(0..1280, 350..720, (100, 100), (0.5, 0.5)).unwrap();

    c.bench_function("add_heat_144_windows", |b| {
        b.iter(|| {
            let mut map = Heatmap::new(1280, 720).unwrap();
            map.add_heat(black_box(&windows));
            black_box(map)
        })
    });
}

criterion_group!(benches, bench_generate, bench_scan, bench_add_heat);
criterion_main!(benches);
