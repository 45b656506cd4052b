use core::ptr::NonNull;
use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_chain::linked_list::intrusive::{reverse::reverse, single::SingleNode, traits::Link};
use mola_chain::linked_list::owned::SinglyLinkedList;
use rand::Rng;

const LENGTHS: [usize; 4] = [16, 1_024, 16_384, 262_144];

fn random_values(len: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random()).collect()
}

// --- Owned chains ---

fn owned_reverse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("owned_reverse");

    for len in LENGTHS {
        let values = random_values(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_batched(
                || values.iter().copied().collect::<SinglyLinkedList<u64>>(),
                |mut list| {
                    list.reverse();
                    list
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// --- Intrusive chains ---

fn intrusive_reverse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("intrusive_reverse");

    for len in LENGTHS {
        let mut nodes: Vec<SingleNode<u64>> = random_values(len)
            .into_iter()
            .map(SingleNode::new)
            .collect();

        let base = nodes.as_mut_ptr();
        for i in 0..len {
            unsafe {
                let next = if i + 1 < len {
                    Some(NonNull::new_unchecked(base.add(i + 1)))
                } else {
                    None
                };
                (*base.add(i)).set_next(next);
            }
        }
        let mut head = NonNull::new(base);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            // Every pass flips the chain, so it stays well formed across iterations.
            b.iter(|| {
                head = unsafe { reverse(black_box(head)) };
                head
            });
        });

        drop(nodes);
    }

    group.finish();
}

criterion_group!(benches, owned_reverse_benchmark, intrusive_reverse_benchmark);
criterion_main!(benches);
