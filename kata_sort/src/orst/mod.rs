//! Implementation of the classic interview sorting algorithms, loosely following [Crust of Rust:
//! Sorting Algorithms](https://www.youtube.com/watch?v=h4RkCyJyXmM)
//!
//! Every sorter takes ownership of a [`Vec`] and hands back the same elements in ascending order.
//! Elements are only ever moved, never cloned, so the output is always a permutation of the input.
//!
//! # Example
//!
//! ```
//! use kata_sort::orst::MergeSorter;
//! use kata_sort::orst::Sorter;
//!
//! let sorted = MergeSorter.sort(vec![1, 3, 2, 5, 4]);
//! assert_eq!(vec![1, 2, 3, 4, 5], sorted);
//! ```

pub mod benchmark;
mod binary_search;
mod sorters;

pub use binary_search::binary_search;
pub use sorters::bubble_sorter::{bubble_sort, BubbleSorter};
pub use sorters::insertion_sorter::{insertion_sort, InsertionSorter};
pub use sorters::merge_sorter::{merge, merge_sort, MergeSorter};
pub use sorters::quick_sorter::{quick_sort, quick_sort_in_place, QuickSorter};

/// The sorting algorithm must implement the trait `Sorter`.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, values: Vec<T>) -> Vec<T>;
}
