use animated_core::{from, AnimatedValue, Millis, Rgba, Vec2};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick_vec2_running", |b| {
        b.iter_batched(
            || {
                let mut v = AnimatedValue::new(Vec2::ZERO);
                v.animate(
                    from(Vec2::ZERO)
                        .to(Vec2::new(100.0, 50.0))
                        .during(Millis::new(u32::MAX))
                        .build()
                        .expect("complete transition"),
                );
                v
            },
            |mut v| {
                for _ in 0..64 {
                    v.tick(black_box(Millis::new(16)));
                }
                v
            },
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("tick_rgba_finished", |b| {
        let mut v = AnimatedValue::new(Rgba::RED);
        v.animate(
            from(Rgba::RED)
                .to(Rgba::WHITE)
                .during(Millis::new(1))
                .build()
                .expect("complete transition"),
        );
        v.tick(Millis::new(1));
        b.iter(|| v.tick(black_box(Millis::new(16))))
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
