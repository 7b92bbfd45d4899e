//! IAI-Callgrind benchmark for OrderedSet construction APIs.
//!
//! Measures instruction counts for bulk construction methods vs incremental
//! insert. Data sizes: 100, 1000, 10000 (all past the inline capacity).

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use ordset::OrderedSet;
use std::hint::black_box;

// Setup functions for different data sizes
fn setup_sorted_vec_100() -> Vec<i32> {
    (0..100).collect()
}

fn setup_sorted_vec_1000() -> Vec<i32> {
    (0..1000).collect()
}

fn setup_sorted_vec_10000() -> Vec<i32> {
    (0..10000).collect()
}

// from_sorted_iter benchmarks
#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_100())]
fn from_sorted_iter_100(elements: Vec<i32>) -> OrderedSet<i32> {
    black_box(OrderedSet::from_sorted_iter(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_1000())]
fn from_sorted_iter_1000(elements: Vec<i32>) -> OrderedSet<i32> {
    black_box(OrderedSet::from_sorted_iter(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_10000())]
fn from_sorted_iter_10000(elements: Vec<i32>) -> OrderedSet<i32> {
    black_box(OrderedSet::from_sorted_iter(black_box(elements)))
}

// from_sorted_vec benchmarks
#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_100())]
fn from_sorted_vec_100(elements: Vec<i32>) -> OrderedSet<i32> {
    black_box(OrderedSet::from_sorted_vec(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_1000())]
fn from_sorted_vec_1000(elements: Vec<i32>) -> OrderedSet<i32> {
    black_box(OrderedSet::from_sorted_vec(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_10000())]
fn from_sorted_vec_10000(elements: Vec<i32>) -> OrderedSet<i32> {
    black_box(OrderedSet::from_sorted_vec(black_box(elements)))
}

// insert-each benchmarks (baseline for comparison)
#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_100())]
fn insert_each_100(elements: Vec<i32>) -> OrderedSet<i32> {
    let mut set = OrderedSet::new();
    for element in black_box(elements) {
        set.insert(black_box(element));
    }
    black_box(set)
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_1000())]
fn insert_each_1000(elements: Vec<i32>) -> OrderedSet<i32> {
    let mut set = OrderedSet::new();
    for element in black_box(elements) {
        set.insert(black_box(element));
    }
    black_box(set)
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_10000())]
fn insert_each_10000(elements: Vec<i32>) -> OrderedSet<i32> {
    let mut set = OrderedSet::new();
    for element in black_box(elements) {
        set.insert(black_box(element));
    }
    black_box(set)
}

library_benchmark_group!(
    name = ordered_set_construction_group;
    benchmarks =
        from_sorted_iter_100, from_sorted_iter_1000, from_sorted_iter_10000,
        from_sorted_vec_100, from_sorted_vec_1000, from_sorted_vec_10000,
        insert_each_100, insert_each_1000, insert_each_10000
);

main!(library_benchmark_groups = ordered_set_construction_group);
