use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{advance, Grid, Simulation};
use tui_life::term::{encode_full_into, GridView};
use tui_life::types::Theme;

fn bench_step(c: &mut Criterion) {
    let mut sim = Simulation::new(80, 30, 12345, false).unwrap();

    c.bench_function("step_80x30", |b| {
        b.iter(|| {
            sim.step();
        })
    });
}

fn bench_advance_large(c: &mut Criterion) {
    let mut src = Grid::new(400, 200).unwrap();
    src.randomize(12345);
    let mut dst = Grid::new(400, 200).unwrap();

    c.bench_function("advance_400x200", |b| {
        b.iter(|| {
            advance(black_box(&src), &mut dst);
        })
    });
}

fn bench_terrain_init(c: &mut Criterion) {
    c.bench_function("terrain_init_80x30", |b| {
        b.iter(|| Simulation::new(80, 30, black_box(7), true).unwrap())
    });
}

fn bench_encode_frame(c: &mut Criterion) {
    let sim = Simulation::new(80, 30, 12345, true).unwrap();
    let fb = GridView::new(Theme::Terrain).render(sim.grid());
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_frame_80x30", |b| {
        b.iter(|| {
            out.clear();
            encode_full_into(black_box(&fb), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_advance_large,
    bench_terrain_init,
    bench_encode_frame
);
criterion_main!(benches);
