use crate::orst::Sorter;

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use kata_sort::orst::{MergeSorter, Sorter};
///
/// let sorted = MergeSorter.sort(vec![5, 3, 8, 1, 9, 2]);
/// assert_eq!(sorted, [1, 2, 3, 5, 8, 9]);
///```
///
/// # Explanation
///
/// Merge sort is a divide-and-conquer algorithm that was invented by John von Neumann in 1945.
/// It divides the unsorted list into two halves at the midpoint, sorts both halves recursively
/// and then repeatedly merges the two sorted halves into one sorted list.
///
/// It always does O(n log n) comparisons and needs O(n) extra space for each level of merging.
/// On ties the element from the left half is taken first, which makes the sort stable.
#[derive(Default)]
pub struct MergeSorter;

impl<T> Sorter<T> for MergeSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, values: Vec<T>) -> Vec<T> {
        merge_sort(values)
    }
}

/// Sorts `values` with merge sort, splitting at `len / 2`.
///
/// ```
/// use kata_sort::orst::merge_sort;
///
/// assert_eq!(merge_sort(vec![5, 3, 8, 1, 9, 2]), [1, 2, 3, 5, 8, 9]);
/// assert!(merge_sort(Vec::<i32>::new()).is_empty());
/// ```
pub fn merge_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() < 2 {
        return values;
    }

    let right = values.split_off(values.len() / 2);
    merge(merge_sort(values), merge_sort(right))
}

/// Merges two ascending vectors into one ascending vector.
///
/// When the heads compare equal the one from `left` is taken first. Once either side runs out the
/// rest of the other side is appended as is.
///
/// ```
/// use kata_sort::orst::merge;
///
/// assert_eq!(merge(vec![1, 4, 9], vec![2, 3, 10, 11]), [1, 2, 3, 4, 9, 10, 11]);
/// ```
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            _ => break,
        };

        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
