use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandel_plot::{PlotConfig, RepaintEngine, RepaintStrategy};
use std::hint::black_box;

fn bench_repaint(c: &mut Criterion) {
    let mut group = c.benchmark_group("repaint");

    for size in [40usize, 160] {
        let config = PlotConfig {
            grid_size: size,
            max_iterations: 256,
            ..PlotConfig::default()
        };
        let viewport = match config.validate() {
            Ok(settings) => settings.viewport,
            Err(err) => panic!("benchmark config is invalid: {err}"),
        };

        for strategy in [RepaintStrategy::Serial, RepaintStrategy::Parallel] {
            let engine = RepaintEngine::new(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), size),
                &viewport,
                |b, viewport| b.iter(|| engine.render(black_box(viewport))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_repaint);
criterion_main!(benches);
