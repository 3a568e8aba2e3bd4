//! Benchmarks for ring and stack operations.
//!
//! Compares circlet against std containers for the closest equivalent
//! operation. The std containers allocate and own their elements, so this
//! is a sanity baseline rather than an apples-to-apples comparison.

use circlet::{BoxedStorage, Node, Ring, Stack, Storage};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");

    group.bench_function("circlet/link_unlink_front", |b| {
        let mut arena: BoxedStorage<Node<u64>> = BoxedStorage::with_capacity(16);
        let head = arena.try_insert(Node::new(0)).unwrap();
        let ring = Ring::init(&mut arena, head);
        let key = arena.try_insert(Node::new(42)).unwrap();

        b.iter(|| {
            ring.link_front(&mut arena, black_box(key));
            Ring::unlink(&mut arena, black_box(key));
        });
    });

    group.bench_function("std/vecdeque_push_pop_front", |b| {
        let mut deque: VecDeque<u64> = VecDeque::with_capacity(16);

        b.iter(|| {
            deque.push_front(black_box(42));
            black_box(deque.pop_front())
        });
    });

    group.bench_function("circlet/move_back", |b| {
        let mut arena: BoxedStorage<Node<u64>> = BoxedStorage::with_capacity(16);
        let head = arena.try_insert(Node::new(0)).unwrap();
        let ring = Ring::init(&mut arena, head);
        let mut target = u32::MAX;
        for v in 1..=8 {
            let key = arena.try_insert(Node::new(v)).unwrap();
            ring.link_back(&mut arena, key);
            target = key;
        }

        b.iter(|| {
            ring.move_back(&mut arena, black_box(target));
        });
    });

    group.bench_function("circlet/iterate_8", |b| {
        let mut arena: BoxedStorage<Node<u64>> = BoxedStorage::with_capacity(16);
        let head = arena.try_insert(Node::new(0)).unwrap();
        let ring = Ring::init(&mut arena, head);
        for v in 1..=8 {
            let key = arena.try_insert(Node::new(v)).unwrap();
            ring.link_back(&mut arena, key);
        }

        b.iter(|| ring.iter(&arena).map(|n| n.data).sum::<u64>());
    });

    group.finish();
}

fn bench_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");

    group.bench_function("circlet/push_pop", |b| {
        let mut stack: Stack<u32, 1024> = Stack::new();

        b.iter(|| {
            stack.push(black_box(42)).unwrap();
            black_box(stack.pop())
        });
    });

    group.bench_function("std/vec_push_pop", |b| {
        let mut vec: Vec<u32> = Vec::with_capacity(1024);

        b.iter(|| {
            vec.push(black_box(42));
            black_box(vec.pop())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ring, bench_stack);
criterion_main!(benches);
