use crate::orst::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// The lame variant finds that location by scanning the sorted list from the front and stopping
/// at the first element that is bigger than the new one. The smart variant binary searches the
/// sorted list for the same spot. Both place a new element after every element equal to it, so
/// the sort is stable either way.
///
/// # Usage
///```
/// use kata_sort::orst::{InsertionSorter, Sorter};
///
/// let sorted = InsertionSorter { smart: true }.sort(vec![1, 5, 4, 2, 3]);
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
///```
#[derive(Default)]
pub struct InsertionSorter {
    pub smart: bool,
}

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, values: Vec<T>) -> Vec<T> {
        if !self.smart {
            return insertion_sort(values);
        }

        let mut sorted = Vec::with_capacity(values.len());
        for value in values {
            let i = sorted.partition_point(|placed| placed <= &value);
            sorted.insert(i, value);
        }
        sorted
    }
}

/// Sorts `values` by inserting every element, in input order, in front of the first already
/// placed element it is smaller than. An element that is not smaller than anything placed so far
/// is appended.
///
/// ```
/// use kata_sort::orst::insertion_sort;
///
/// assert_eq!(insertion_sort(vec![5, 3, 8, 1]), [1, 3, 5, 8]);
/// ```
pub fn insertion_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    let mut sorted: Vec<T> = Vec::with_capacity(values.len());

    for value in values {
        let i = sorted
            .iter()
            .position(|placed| value < *placed)
            .unwrap_or(sorted.len());
        sorted.insert(i, value);
    }

    sorted
}
