//! Arity Benchmarks
//!
//! Compares `MaryHeap` at several branching factors against
//! `std::collections::BinaryHeap` on push-heavy, pop-heavy and mixed
//! workloads.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench arity_benchmark
//!
//! # Only the 4-ary heap
//! cargo bench --bench arity_benchmark -- 'arity_4'
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mary_heap::{Greater, Less, MaryHeap};
use std::collections::BinaryHeap;
use std::hint::black_box;

const ARITIES: [usize; 5] = [2, 3, 4, 8, 16];
const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next() >> 16).collect()
}

fn benchmark_push_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_then_drain");

    for size in SIZES {
        let values = random_values(size, 42);

        for arity in ARITIES {
            group.bench_with_input(
                BenchmarkId::new(format!("arity_{}", arity), size),
                &values,
                |b, values| {
                    b.iter(|| {
                        let mut heap = MaryHeap::with_capacity(arity, Less, values.len()).unwrap();
                        heap.extend(values.iter().copied());
                        let mut checksum = 0u64;
                        while let Ok(v) = heap.pop() {
                            checksum = checksum.wrapping_add(v);
                        }
                        black_box(checksum)
                    })
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("std_binary_heap", size), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(values.len());
                heap.extend(values.iter().copied());
                let mut checksum = 0u64;
                while let Some(v) = heap.pop() {
                    checksum = checksum.wrapping_add(v);
                }
                black_box(checksum)
            })
        });
    }

    group.finish();
}

fn benchmark_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_workload");
    let values = random_values(50_000, 7);

    for arity in ARITIES {
        group.bench_with_input(BenchmarkId::new("arity", arity), &values, |b, values| {
            b.iter(|| {
                // Scheduler-like pattern: push two, pop one
                let mut heap = MaryHeap::with_comparator(arity, Greater).unwrap();
                let mut checksum = 0u64;
                for pair in values.chunks(2) {
                    heap.extend(pair.iter().copied());
                    if let Ok(v) = heap.pop() {
                        checksum = checksum.wrapping_add(v);
                    }
                }
                black_box((checksum, heap.len()))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_push_then_drain, benchmark_mixed_workload);
criterion_main!(benches);
