//! IAI-Callgrind benchmark for the set-algebra adapters.
//!
//! Measures instruction counts for difference, intersect, union, and
//! distinct over partially overlapping sorted inputs at 1000 and 10000
//! elements.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use ordseq::merge::SortedSequence;
use std::hint::black_box;

// Setup functions for different data sizes
fn setup_merge_inputs_1000() -> (Vec<i32>, Vec<i32>) {
    let left = (0..1000).map(|value| value * 2).collect();
    let right = (0..1000).map(|value| value * 3).collect();
    (left, right)
}

fn setup_merge_inputs_10000() -> (Vec<i32>, Vec<i32>) {
    let left = (0..10000).map(|value| value * 2).collect();
    let right = (0..10000).map(|value| value * 3).collect();
    (left, right)
}

fn setup_duplicated_vec_1000() -> Vec<i32> {
    (0..500).flat_map(|value| [value, value]).collect()
}

fn setup_duplicated_vec_10000() -> Vec<i32> {
    (0..5000).flat_map(|value| [value, value]).collect()
}

// difference benchmarks
#[library_benchmark]
#[bench::with_setup(setup_merge_inputs_1000())]
fn difference_1000(inputs: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    let (left, right) = inputs;
    black_box(black_box(left).difference(black_box(right)).collect())
}

#[library_benchmark]
#[bench::with_setup(setup_merge_inputs_10000())]
fn difference_10000(inputs: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    let (left, right) = inputs;
    black_box(black_box(left).difference(black_box(right)).collect())
}

// intersect benchmarks
#[library_benchmark]
#[bench::with_setup(setup_merge_inputs_1000())]
fn intersect_1000(inputs: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    let (left, right) = inputs;
    black_box(black_box(left).intersect(black_box(right)).collect())
}

#[library_benchmark]
#[bench::with_setup(setup_merge_inputs_10000())]
fn intersect_10000(inputs: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    let (left, right) = inputs;
    black_box(black_box(left).intersect(black_box(right)).collect())
}

// union benchmarks
#[library_benchmark]
#[bench::with_setup(setup_merge_inputs_1000())]
fn union_1000(inputs: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    let (left, right) = inputs;
    black_box(black_box(left).union(black_box(right)).collect())
}

#[library_benchmark]
#[bench::with_setup(setup_merge_inputs_10000())]
fn union_10000(inputs: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    let (left, right) = inputs;
    black_box(black_box(left).union(black_box(right)).collect())
}

// distinct benchmarks
#[library_benchmark]
#[bench::with_setup(setup_duplicated_vec_1000())]
fn distinct_1000(values: Vec<i32>) -> Vec<i32> {
    black_box(black_box(values).distinct().collect())
}

#[library_benchmark]
#[bench::with_setup(setup_duplicated_vec_10000())]
fn distinct_10000(values: Vec<i32>) -> Vec<i32> {
    black_box(black_box(values).distinct().collect())
}

library_benchmark_group!(
    name = merge_adapter_group;
    benchmarks =
        difference_1000, difference_10000,
        intersect_1000, intersect_10000,
        union_1000, union_10000,
        distinct_1000, distinct_10000
);

main!(library_benchmark_groups = merge_adapter_group);
