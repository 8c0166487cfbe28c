use criterion::{criterion_group, criterion_main, Criterion};
use polylab::algorithms::{generate_convex_polygon, generate_polygon, GeneratorConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  let config = GeneratorConfig::default();
  c.bench_function("generate_polygon(default)", |b| {
    b.iter(|| generate_polygon(&config, &mut rng))
  });
  c.bench_function("generate_convex_polygon(default)", |b| {
    b.iter(|| generate_convex_polygon(&config, &mut rng))
  });
  let fine = GeneratorConfig::new(100..=200, 1..=5, config.center);
  c.bench_function("generate_convex_polygon(1..=5 degrees)", |b| {
    b.iter(|| generate_convex_polygon(&fine, &mut rng))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
