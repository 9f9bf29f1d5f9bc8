use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use starmap_layout::config::Config;
use starmap_layout::dataset::generate_nodes;
use starmap_layout::layout::compute_layout_with_rng;
use starmap_layout::model::LayoutMode;
use std::hint::black_box;

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let config = Config::default();

    for count in [50usize, 150, 400] {
        let mut dataset = config.dataset.clone();
        dataset.count = count;
        let mut rng = StdRng::seed_from_u64(7);
        let nodes = generate_nodes(&dataset, &mut rng);

        for mode in [
            LayoutMode::Spiral,
            LayoutMode::Sphere,
            LayoutMode::Force,
            LayoutMode::Grouped,
        ] {
            group.bench_with_input(BenchmarkId::new(mode.as_str(), count), &nodes, |b, nodes| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(11);
                    let layout =
                        compute_layout_with_rng(black_box(nodes), mode, &config.layout, &mut rng);
                    black_box(layout.positions.len());
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
