use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;

use fanout_btree::BTree;

const N: usize = 10_000;

// ─── Helper functions to generate value sequences ───────────────────────────

fn ordered_values(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_values(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_values(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut values = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        values.push((x >> 33) as i64);
    }
    values
}

// ─── Insert Benchmarks ──────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut tree = BTree::new();
            for i in 0..N as i64 {
                tree.insert(i);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for i in 0..N as i64 {
                set.insert(i);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_reverse");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut tree = BTree::new();
            for i in (0..N as i64).rev() {
                tree.insert(i);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for i in (0..N as i64).rev() {
                set.insert(i);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let values = random_values(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut tree = BTree::new();
            for &v in &values {
                tree.insert(v);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &v in &values {
                set.insert(v);
            }
            set
        });
    });

    group.finish();
}

// ─── Lookup Benchmarks ──────────────────────────────────────────────────────

fn bench_contains_ordered(c: &mut Criterion) {
    let values = ordered_values(N);
    let tree: BTree<i64> = values.iter().copied().collect();
    let set: BTreeSet<i64> = values.iter().copied().collect();

    let mut group = c.benchmark_group("contains_ordered");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for v in &values {
                if tree.contains(v) {
                    count += 1;
                }
            }
            count
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for v in &values {
                if set.contains(v) {
                    count += 1;
                }
            }
            count
        });
    });

    group.finish();
}

fn bench_contains_reverse(c: &mut Criterion) {
    let values = ordered_values(N);
    let tree: BTree<i64> = values.iter().copied().collect();
    let set: BTreeSet<i64> = values.iter().copied().collect();
    let reverse_values = reverse_ordered_values(N);

    let mut group = c.benchmark_group("contains_reverse");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for v in &reverse_values {
                if tree.contains(v) {
                    count += 1;
                }
            }
            count
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for v in &reverse_values {
                if set.contains(v) {
                    count += 1;
                }
            }
            count
        });
    });

    group.finish();
}

fn bench_contains_random(c: &mut Criterion) {
    let values = random_values(N);
    let tree: BTree<i64> = values.iter().copied().collect();
    let set: BTreeSet<i64> = values.iter().copied().collect();

    let mut group = c.benchmark_group("contains_random");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for v in &values {
                if tree.contains(v) {
                    count += 1;
                }
            }
            count
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut count = 0usize;
            for v in &values {
                if set.contains(v) {
                    count += 1;
                }
            }
            count
        });
    });

    group.finish();
}

// ─── Iteration Benchmarks ───────────────────────────────────────────────────

fn bench_iter_forward(c: &mut Criterion) {
    let values = random_values(N);
    let tree: BTree<i64> = values.iter().copied().collect();
    let set: BTreeSet<i64> = values.iter().copied().collect();

    let mut group = c.benchmark_group("iter_forward");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &v in tree.iter() {
                sum = sum.wrapping_add(v);
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &v in set.iter() {
                sum = sum.wrapping_add(v);
            }
            sum
        });
    });

    group.finish();
}

fn bench_iter_reverse(c: &mut Criterion) {
    let values = random_values(N);
    let tree: BTree<i64> = values.iter().copied().collect();
    let set: BTreeSet<i64> = values.iter().copied().collect();

    let mut group = c.benchmark_group("iter_reverse");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &v in tree.iter().rev() {
                sum = sum.wrapping_add(v);
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &v in set.iter().rev() {
                sum = sum.wrapping_add(v);
            }
            sum
        });
    });

    group.finish();
}

// ─── Fan-out sweep ──────────────────────────────────────────────────────────

/// Random inserts and lookups across fan-out bounds, to expose where node
/// binary search stops paying for deeper descent.
fn bench_fan_out_sweep(c: &mut Criterion) {
    let values = random_values(N);
    let mut group = c.benchmark_group("fan_out_sweep");

    for fan_out in [2usize, 8, 40, 128] {
        group.bench_function(BenchmarkId::new("insert_random", fan_out), |b| {
            b.iter(|| {
                let mut tree = BTree::with_max_node_elems(fan_out);
                for &v in &values {
                    tree.insert(v);
                }
                tree
            });
        });
    }

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_reverse, bench_insert_random,);

criterion_group!(contains_benches, bench_contains_ordered, bench_contains_reverse, bench_contains_random,);

criterion_group!(iter_benches, bench_iter_forward, bench_iter_reverse,);

criterion_group!(sweep_benches, bench_fan_out_sweep,);

criterion_main!(insert_benches, contains_benches, iter_benches, sweep_benches,);
