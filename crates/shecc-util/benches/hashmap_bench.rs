//! Chain hashmap benchmarks
//!
//! Measures lookup cost at the scale `find_func` is sized for (§10.5).
//! Run with: `cargo bench --bench hashmap_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shecc_util::hashmap::Hashmap;
use shecc_util::limits::MAX_FUNCS;

fn bench_put(c: &mut Criterion) {
    c.bench_function("put_at_max_funcs", |b| {
        b.iter(|| {
            let mut map = Hashmap::create(MAX_FUNCS as u32);
            for i in 0..MAX_FUNCS {
                map.put(&format!("func_{i}"), i);
            }
            black_box(map)
        })
    });
}

fn bench_get_hit(c: &mut Criterion) {
    let mut map = Hashmap::create(MAX_FUNCS as u32);
    for i in 0..MAX_FUNCS {
        map.put(&format!("func_{i}"), i);
    }

    c.bench_function("get_hit_at_max_funcs", |b| {
        b.iter(|| black_box(map.get("func_255")))
    });
}

fn bench_get_miss(c: &mut Criterion) {
    let mut map = Hashmap::create(MAX_FUNCS as u32);
    for i in 0..MAX_FUNCS {
        map.put(&format!("func_{i}"), i);
    }

    c.bench_function("get_miss_at_max_funcs", |b| {
        b.iter(|| black_box(map.get("not_a_func")))
    });
}

criterion_group!(benches, bench_put, bench_get_hit, bench_get_miss);
criterion_main!(benches);
