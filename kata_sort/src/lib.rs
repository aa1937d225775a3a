//! # Introduction
//!
//! Sorting and searching katas written as a small reusable library: bubble sort, insertion sort,
//! quick sort, merge sort and a recursive binary search. See the [`orst`] module for the
//! algorithms themselves.
//!
//! ```
//! use kata_sort::{binary_search, merge_sort};
//!
//! let sorted = merge_sort(vec![5, 3, 8, 1, 9, 2]);
//! assert_eq!(sorted, [1, 2, 3, 5, 8, 9]);
//! assert!(binary_search(&sorted, &5));
//! assert!(!binary_search(&sorted, &4));
//! ```

pub mod orst;

pub use orst::{
    binary_search, bubble_sort, insertion_sort, merge, merge_sort, quick_sort,
    quick_sort_in_place, Sorter,
};

use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use orst::{BubbleSorter, InsertionSorter, MergeSorter, QuickSorter};

/// Sort and search numbers on the commandline. Install the `kata` crate and run `kata sort --help`
/// to see what options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortArgs {
    #[command(subcommand)]
    command: SortCommands,
}

#[derive(Clone, Subcommand, Debug)]
enum SortCommands {
    /// Sort the given values in ascending order and print them.
    #[command(arg_required_else_help = true)]
    Run {
        /// Sorting algorithm to use.
        #[arg(short, long, value_enum, default_value_t = Algorithm::Merge)]
        algorithm: Algorithm,

        /// Values to sort.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Check whether a value is present. The values must already be sorted in ascending order,
    /// otherwise the answer is meaningless.
    #[command(arg_required_else_help = true)]
    Search {
        /// Value to look for.
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        /// Values to search, sorted ascending.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Count the comparisons every algorithm makes on random input of growing size.
    Bench {
        /// Largest input size to benchmark.
        #[arg(long, default_value_t = 10_000)]
        max_size: usize,
    },
}

/// The sorting algorithms available through [`SortArgs`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Bubble,
    /// Insertion sort scanning the sorted part from the front.
    Insertion,
    /// Insertion sort binary searching the sorted part.
    InsertionSmart,
    Quick,
    QuickInPlace,
    Merge,
}

impl Algorithm {
    pub fn sort<T: Ord>(self, values: Vec<T>) -> Vec<T> {
        match self {
            Algorithm::Bubble => BubbleSorter.sort(values),
            Algorithm::Insertion => InsertionSorter { smart: false }.sort(values),
            Algorithm::InsertionSmart => InsertionSorter { smart: true }.sort(values),
            Algorithm::Quick => QuickSorter { in_place: false }.sort(values),
            Algorithm::QuickInPlace => QuickSorter { in_place: true }.sort(values),
            Algorithm::Merge => MergeSorter.sort(values),
        }
    }
}

impl SortArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            SortCommands::Run { algorithm, values } => {
                let sorted = algorithm.sort(values);
                println!("{}", join(&sorted));
            }
            SortCommands::Search { target, values } => {
                if binary_search(&values, &target) {
                    println!("{} {}", target.to_string().bold(), "found".green());
                } else {
                    println!("{} {}", target.to_string().bold(), "not found".red());
                }
            }
            SortCommands::Bench { max_size } => orst::benchmark::run_orst(max_size)?,
        }

        Ok(())
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn every_algorithm_sorts() {
        for algorithm in Algorithm::value_variants() {
            let sorted = algorithm.sort(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
            assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9], "{algorithm:?}");
        }
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(
            Algorithm::from_str("quick-in-place", false),
            Ok(Algorithm::QuickInPlace)
        );
        assert_eq!(
            Algorithm::from_str("insertion-smart", false),
            Ok(Algorithm::InsertionSmart)
        );
        assert!(Algorithm::from_str("bogo", false).is_err());
    }

    #[test]
    fn joins_with_spaces() {
        assert_eq!(join(&[-1, 0, 12]), "-1 0 12");
        assert_eq!(join(&[]), "");
    }
}
