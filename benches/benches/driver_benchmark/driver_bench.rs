use std::{fmt::Write as _, hint::black_box, io};

use chainkv::{driver, KeyValueStore};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn build_script(ops: usize) -> String {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut script = format!("{ops}\n");

    for _ in 0..ops {
        let key: i64 = rng.gen_range(-5_000..5_000);
        let written = match rng.gen_range(0..3) {
            0 => writeln!(script, "put {key} {}", rng.gen::<i64>()),
            1 => writeln!(script, "get {key}"),
            _ => writeln!(script, "delete {key}"),
        };
        written.expect("writing to a String cannot fail");
    }

    script
}

fn bench_driver(c: &mut Criterion) {
    let script = build_script(50_000);

    c.bench_function("driver: 50_000 mixed commands", |b| {
        b.iter(|| {
            let mut store = KeyValueStore::new();
            let summary = driver::run(script.as_bytes(), &mut io::sink(), &mut store)
                .expect("generated script is valid");
            black_box(summary);
        });
    });
}

criterion_group!(benches, bench_driver);
criterion_main!(benches);
