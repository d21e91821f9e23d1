use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use glam::Vec2;
use stamfluid::StableFluid;
use stamfluid::advect::advect;
use stamfluid::boundary::Boundary;
use stamfluid::diffuse::diffuse;
use stamfluid::project::project;

fn seeded(n: usize) -> StableFluid {
    let mut sim = StableFluid::new(n).unwrap();
    let cell = sim.grid().index(n / 2, n / 2);
    sim.inject_density_source(cell, 100.0).unwrap();
    sim.inject_velocity_impulse(cell, Vec2::new(20.0, 5.0)).unwrap();
    sim
}

fn benchmark_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for n in [32, 64, 128].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let mut sim = seeded(n);
            b.iter(|| {
                black_box(sim.tick(0.1, 0.0001).unwrap());
            });
        });
    }
    group.finish();
}

fn benchmark_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let mut sim = seeded(64);
    for _ in 0..5 {
        sim.tick(0.1, 0.0001).unwrap();
    }
    let grid = *sim.grid();
    let u = sim.velocity_x().to_vec();
    let v = sim.velocity_y().to_vec();
    let density = sim.density().to_vec();

    group.bench_function("diffuse", |b| {
        let mut current = density.clone();
        b.iter(|| diffuse(&grid, black_box(&mut current), &density, 0.0001, 0.1, Boundary::None));
    });

    group.bench_function("project", |b| {
        let (mut u, mut v) = (u.clone(), v.clone());
        let mut div = vec![0.0; grid.size()];
        let mut pressure = vec![0.0; grid.size()];
        b.iter(|| project(&grid, black_box(&mut u), &mut v, &mut div, &mut pressure));
    });

    group.bench_function("advect", |b| {
        let mut dest = vec![0.0; grid.size()];
        b.iter(|| advect(&grid, 0.1, black_box(&mut dest), &density, &u, &v, Boundary::None));
    });

    group.finish();
}

criterion_group!(benches, benchmark_tick, benchmark_stages);
criterion_main!(benches);
