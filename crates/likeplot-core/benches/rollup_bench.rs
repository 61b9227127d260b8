use likeplot_core::{rollup, Record};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

const GROUPS: [&str; 5] = ["18-24", "25-34", "35-44", "45-54", "55+"];

fn gen_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            // skewed like counts with drift per group
            let v = (i as f64 * 0.37).sin().abs() * 500.0 + (i % 7) as f64 * 13.0;
            Record::new(GROUPS[i % GROUPS.len()], v)
        })
        .collect()
}

fn bench_rollup(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollup");
    for &n in &[1_000usize, 50_000usize, 500_000usize] {
        let data = gen_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &n, |b, _| {
            b.iter_batched(
                || data.clone(),
                |d| { let _ = black_box(rollup(&d)); },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rollup);
criterion_main!(benches);
