use criterion::{Criterion, criterion_group, criterion_main};
use planform::render::Scene;
use planform::{PlanformConstants, WingInputs, compute_planform};
use std::hint::black_box;

fn bench_compute(c: &mut Criterion) {
    let inputs = WingInputs::new(500.0, 20.0, 300.0, 150.0);
    c.bench_function("compute_planform", |b| {
        b.iter(|| compute_planform(black_box(&inputs), &PlanformConstants::DEFAULT))
    });
}

fn bench_scene(c: &mut Criterion) {
    let result = compute_planform(
        &WingInputs::new(500.0, 20.0, 300.0, 150.0),
        &PlanformConstants::DEFAULT,
    );
    c.bench_function("scene_from_result", |b| {
        b.iter(|| Scene::from_result(black_box(&result)))
    });
}

criterion_group!(benches, bench_compute, bench_scene);
criterion_main!(benches);
