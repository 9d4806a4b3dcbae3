//! Benchmarks for the navigation engine.
//!
//! These benchmarks measure the cost of feeding wheel bursts and key presses
//! through the engine and firing its deadlines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio_tui::navigation::{
    Direction, Engine, NavKey, NavigationConfig, Presenter, SectionIndex,
};
use std::time::{Duration, Instant};

struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, index: SectionIndex, direction: Direction) {
        black_box((index, direction));
    }
}

fn engine() -> Engine<NullPresenter> {
    Engine::mount(&NavigationConfig::default(), NullPresenter)
}

fn bench_wheel_burst(c: &mut Criterion) {
    c.bench_function("wheel_burst_64_deltas", |b| {
        b.iter(|| {
            let mut engine = engine();
            let t0 = Instant::now();
            for step in 0..64u64 {
                engine.on_wheel_delta(black_box(7.5), t0 + Duration::from_millis(step));
            }
            engine.tick(t0 + Duration::from_millis(200));
            engine.state()
        })
    });
}

fn bench_key_cycle(c: &mut Criterion) {
    c.bench_function("key_forward_settle_cycle", |b| {
        b.iter(|| {
            let mut engine = engine();
            let mut now = Instant::now();
            for _ in 0..6 {
                engine.on_key(black_box(NavKey::Forward), now);
                now += Duration::from_millis(400);
                engine.tick(now);
            }
            engine.readout()
        })
    });
}

fn bench_idle_tick(c: &mut Criterion) {
    let mut engine = engine();
    let now = Instant::now();
    c.bench_function("idle_tick", |b| b.iter(|| engine.tick(black_box(now))));
}

criterion_group!(benches, bench_wheel_burst, bench_key_cycle, bench_idle_tick);
criterion_main!(benches);
