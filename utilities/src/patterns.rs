//! Input patterns for testing sorting algorithms. Currently limited to i32 values.

use rand::prelude::*;

/// Sizes every pattern is tried with. Small enough for the quadratic sorters.
pub const TEST_SIZES: [usize; 20] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 33, 50, 100, 200, 500,
];

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::
    let mut rng = thread_rng();
    (0..size).map(|_| rng.gen::<i32>()).collect()
}

/// Random values drawn from `0..=max`, so there are plenty of duplicates for small `max`.
pub fn random_narrow(size: usize, max: i32) -> Vec<i32> {
    // :.:.:.::
    let mut rng = thread_rng();
    (0..size).map(|_| rng.gen_range(0..=max)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::
    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::
    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.
    (0..size as i32).rev().collect()
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.
    let half = size / 2;
    (0..half as i32)
        .chain((0..(size - half) as i32).rev())
        .collect()
}

pub fn saw_ascending(size: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::
    let saw_len = (size / saw_count.max(1)).max(1);
    (0..size).map(|i| (i % saw_len) as i32).collect()
}

pub type Pattern = fn(usize) -> Vec<i32>;

/// Every pattern, as plain functions of the size, for looping over in tests.
pub fn all() -> Vec<(&'static str, Pattern)> {
    vec![
        ("random", random),
        ("random_narrow", |size| random_narrow(size, 3)),
        ("all_equal", all_equal),
        ("ascending", ascending),
        ("descending", descending),
        ("pipe_organ", pipe_organ),
        ("saw_ascending", |size| saw_ascending(size, 4)),
    ]
}
