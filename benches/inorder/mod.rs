use std::hint::black_box;

use avl_index::AvlTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("inorder");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure a full in-order walk of a tree containing `n_values` keys.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = AvlTree::default();

    for _i in 0..n_values {
        t.insert(rand.next());
    }

    g.throughput(Throughput::Elements(n_values as _)); // Keys per second
    g.bench_function(BenchmarkId::new("n_values", n_values), |b| {
        b.iter(|| {
            for v in t.inorder() {
                black_box(v);
            }
        })
    });
}
