use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{self, Rng};
use std::{cell::Cell, rc::Rc, time::Instant};

use prettytable::{row, Table};

use super::{BubbleSorter, InsertionSorter, MergeSorter, QuickSorter, Sorter};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;
const MILLION: usize = 1_000_000;

/// The sizes the benchmark walks through, smallest first.
pub const SIZES: [usize; 6] = [ZERO, ONE, HUNDRED, TEN_THOUSAND, HUNDRED_THOUSAND, MILLION];

/// Wrapper that counts how often it gets compared.
///
/// Only `elem` takes part in the comparison, `comparison_counter` is ignored by it.
#[derive(Clone)]
pub struct SortEvaluator<T> {
    elem: T,
    // Bumped on every comparison of `elem`. Shared between all the elements of one run, hence
    // the reference counter and the cell.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn tick(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tick();
        self.elem == other.elem
    }
}

// `lt`, `le`, `gt` and `ge` all go through `partial_cmp`, so every operator counts exactly once.
impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.tick();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tick();
        self.elem.cmp(&other.elem)
    }
}

fn run_bench<T, S>(sorter: &S, values: &[SortEvaluator<T>], comparisons: &Cell<usize>) -> usize
where
    T: Ord + Clone,
    S: Sorter<SortEvaluator<T>> + ?Sized,
{
    let values = values.to_vec();
    comparisons.set(0);
    drop(sorter.sort(values));

    comparisons.get()
}

/// Number of comparisons `sorter` makes while sorting a copy of `values`.
///
/// ```
/// use kata_sort::orst::{benchmark::count_comparisons, BubbleSorter};
///
/// // A single pass over already sorted input.
/// assert_eq!(count_comparisons(&BubbleSorter, &[1, 2, 3, 4]), 3);
/// ```
pub fn count_comparisons<T, S>(sorter: &S, values: &[T]) -> usize
where
    T: Ord + Clone,
    S: Sorter<SortEvaluator<T>>,
{
    let counter = Rc::new(Cell::new(0));
    let values: Vec<_> = values
        .iter()
        .map(|v| SortEvaluator::new(v.clone(), counter.clone()))
        .collect();

    run_bench(sorter, &values, &counter)
}

struct Entry {
    name: &'static str,
    sorter: Box<dyn Sorter<SortEvaluator<i32>>>,
    quadratic: bool,
}

fn entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "Bubble Sort",
            sorter: Box::new(BubbleSorter),
            quadratic: true,
        },
        Entry {
            name: "Insertion Sort",
            sorter: Box::new(InsertionSorter { smart: true }),
            quadratic: true,
        },
        Entry {
            name: "Insertion Sort (not smart)",
            sorter: Box::new(InsertionSorter { smart: false }),
            quadratic: true,
        },
        Entry {
            name: "Quick Sort",
            sorter: Box::new(QuickSorter { in_place: false }),
            quadratic: false,
        },
        Entry {
            name: "Quick Sort (in place)",
            sorter: Box::new(QuickSorter { in_place: true }),
            quadratic: false,
        },
        Entry {
            name: "Merge Sort",
            sorter: Box::new(MergeSorter),
            quadratic: false,
        },
    ]
}

/// Runs every sorter over the same random input for each of the [`SIZES`] up to `max_size` and
/// prints the comparisons made and the time taken as a table.
///
/// Quadratic sorters are skipped above a hundred thousand elements.
pub fn run_orst(max_size: usize) -> anyhow::Result<()> {
    let mut random = rand::thread_rng();
    let counter = Rc::new(Cell::new(0));
    let entries = entries();

    for n in SIZES.into_iter().filter(|&n| n <= max_size) {
        let values: Vec<_> = (0..n)
            .map(|_| SortEvaluator::new(random.gen::<i32>(), counter.clone()))
            .collect();

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let pb = ProgressBar::new(entries.len() as u64);
        pb.set_style(ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len}) {msg}",
        )?);

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        for entry in &entries {
            pb.set_message(entry.name);

            if entry.quadratic && n > HUNDRED_THOUSAND {
                table.add_row(row![entry.name, "Not Doing It".red(), "It is Stupid"]);
            } else {
                let now = Instant::now();
                let took = run_bench(entry.sorter.as_ref(), &values, &counter);
                table.add_row(row![
                    entry.name,
                    took.to_string(),
                    format!("{:?}", now.elapsed())
                ]);
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        table.printstd();
        println!();
    }

    Ok(())
}
