// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use loupe_gallery::{Catalog, Position, ViewableItem};
use loupe_view::RenderTransform;
use loupe_viewer::{Viewer, ViewerConfig, ViewerEvent, ViewerHost};

/// A host that only remembers whether a frame is outstanding.
#[derive(Default)]
struct NullHost {
    frame_pending: bool,
}

impl ViewerHost for NullHost {
    fn request_frame(&mut self) {
        self.frame_pending = true;
    }

    fn apply_transform(&mut self, transform: RenderTransform) {
        black_box(transform);
    }

    fn show_item(&mut self, index: usize, position: Position, item: &ViewableItem) {
        black_box((index, position, item));
    }
}

fn items(n: usize) -> Vec<ViewableItem> {
    (0..n)
        .map(|i| ViewableItem::new(format!("photos/{i}.jpg"), format!("Photo {i}"), "Harbor at dusk"))
        .collect()
}

fn open_viewer() -> Viewer<NullHost> {
    let mut viewer = Viewer::new(ViewerConfig::default(), NullHost::default());
    viewer.handle(ViewerEvent::Resize {
        container: Size::new(1280.0, 800.0),
        natural: Size::new(4000.0, 3000.0),
    });
    viewer.open(items(32), 0).expect("open");
    viewer
}

fn bench_pointer_moves_per_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer/pointer_moves_per_frame");

    // High-rate pointers deliver several moves per display frame; only the
    // last one reaches the host.
    for per_frame in [1_usize, 4, 16] {
        group.throughput(Throughput::Elements(per_frame as u64 * 60));
        group.bench_with_input(BenchmarkId::from_parameter(per_frame), &per_frame, |b, &k| {
            b.iter_batched(
                || {
                    let mut viewer = open_viewer();
                    viewer.handle(ViewerEvent::Wheel {
                        delta_y: -1.0,
                        position: Point::new(640.0, 400.0),
                    });
                    viewer.handle(ViewerEvent::PointerDown {
                        position: Point::new(100.0, 100.0),
                    });
                    viewer
                },
                |mut viewer| {
                    for frame in 0..60 {
                        for step in 0..k {
                            let x = 100.0 + f64::from(frame) * 2.0 + step as f64 * 0.1;
                            viewer.handle(ViewerEvent::PointerMove {
                                position: Point::new(x, 100.0),
                            });
                        }
                        if viewer.host().frame_pending {
                            viewer.host_mut().frame_pending = false;
                            black_box(viewer.on_animation_frame());
                        }
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_catalog_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery/filter");

    for len in [100_usize, 10_000] {
        let catalog: Catalog = items(len).into_iter().collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.filter(black_box("HARBOR"))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pointer_moves_per_frame, bench_catalog_filter);
criterion_main!(benches);
