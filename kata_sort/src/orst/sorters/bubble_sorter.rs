use crate::orst::Sorter;

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use kata_sort::orst::{BubbleSorter, Sorter};
///
/// let sorted = BubbleSorter.sort(vec![1, 5, 4, 2, 3]);
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// Only strictly out of order neighbours are swapped, so equal elements never overtake each other
/// and the sort is stable.
#[derive(Default)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, values: Vec<T>) -> Vec<T> {
        bubble_sort(values)
    }
}

/// Sorts `values` with bubble sort.
///
/// The buffer that is moved in is sorted in place and handed back, no new allocation is made.
/// A pass without a single swap ends the sort, so already sorted input costs one pass.
///
/// ```
/// use kata_sort::orst::bubble_sort;
///
/// assert_eq!(bubble_sort(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn bubble_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    let mut swapped = true;

    while swapped {
        swapped = false;
        for i in 1..values.len() {
            if values[i] < values[i - 1] {
                values.swap(i - 1, i);
                swapped = true;
            }
        }
    }

    values
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let sorted = BubbleSorter.sort(vec![1, 5, 4, 2, 3]);
        assert_eq!(sorted, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let sorted = BubbleSorter.sort((1..10).collect::<Vec<_>>());
        assert_eq!(sorted, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let sorted = BubbleSorter.sort((1..1000).rev().collect::<Vec<_>>());
        assert_eq!(sorted, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn reverse_nine() {
        assert_eq!(
            bubble_sort(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]),
            [1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
    }

    #[test]
    fn keeps_the_buffer() {
        let values = vec![3, 1, 2];
        let ptr = values.as_ptr();
        let sorted = bubble_sort(values);
        assert_eq!(sorted.as_ptr(), ptr);
        assert_eq!(sorted, [1, 2, 3]);
    }

    #[test]
    fn simple_edge_cases() {
        let empty: Vec<i32> = bubble_sort(vec![]);
        assert!(empty.is_empty());

        assert_eq!(bubble_sort(vec![7]), vec![7]);

        assert_eq!(BubbleSorter.sort(vec![1, 2]), vec![1, 2]);
        assert_eq!(BubbleSorter.sort(vec![2, 1]), vec![1, 2]);
        assert_eq!(BubbleSorter.sort(vec![3, 1, 2]), vec![1, 2, 3]);
        assert_eq!(BubbleSorter.sort(vec![2, 2, 1, 1]), vec![1, 1, 2, 2]);
    }
}
