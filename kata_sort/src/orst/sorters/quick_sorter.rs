use crate::orst::Sorter;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use kata_sort::orst::{QuickSorter, Sorter};
///
/// let sorted = QuickSorter { in_place: false }.sort(vec![1, 5, 4, 2, 3]);
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
///
/// let sorted = QuickSorter { in_place: true }.sort(vec![1, 5, 4, 2, 3]);
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot. For this reason,
/// it is sometimes called partition-exchange sort.
/// The sub-arrays are then sorted recursively.
///
/// Both variants always pick the first element as the pivot. That makes already sorted and
/// reverse sorted input the worst case: O(n²) comparisons and a recursion as deep as the input is
/// long, which can overflow the stack for very large adversarial inputs. Quicksort is not stable.
#[derive(Default)]
pub struct QuickSorter {
    /// Partition the buffer in place with two pointers instead of splitting it into new vectors.
    pub in_place: bool,
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, mut values: Vec<T>) -> Vec<T> {
        if self.in_place {
            quick_sort_in_place(&mut values);
            values
        } else {
            quick_sort(values)
        }
    }
}

/// Sorts `values` by splitting them around the first element.
///
/// Everything strictly smaller than the pivot goes left, everything else (duplicates of the pivot
/// included) goes right. Both groups keep their relative order before being sorted recursively.
///
/// ```
/// use kata_sort::orst::quick_sort;
///
/// assert_eq!(quick_sort(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn quick_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    if values.len() < 2 {
        return values;
    }

    let mut rest = values.into_iter();
    let Some(pivot) = rest.next() else {
        return Vec::new();
    };

    let (smaller, larger): (Vec<T>, Vec<T>) = rest.partition(|value| *value < pivot);

    let mut sorted = quick_sort(smaller);
    sorted.push(pivot);
    sorted.extend(quick_sort(larger));
    sorted
}

/// Sorts `slice` in place around its first element.
///
/// ```
/// use kata_sort::orst::quick_sort_in_place;
///
/// let mut slice = [3, 1, 2, 3, 1];
/// quick_sort_in_place(&mut slice);
/// assert_eq!(slice, [1, 1, 2, 3, 3]);
/// ```
pub fn quick_sort_in_place<T: Ord>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }

    let mid = partition(slice);

    let (left, right) = slice.split_at_mut(mid);
    quick_sort_in_place(left);
    quick_sort_in_place(&mut right[1..]);
}

// Moves the first element to its final position and returns that position. Everything before it
// is `<=` the pivot and everything after it is `>=` the pivot.
fn partition<T: Ord>(slice: &mut [T]) -> usize {
    let Some((pivot, rest)) = slice.split_first_mut() else {
        return 0;
    };

    // rest[..left] <= pivot and rest[right..] >= pivot at every step.
    let mut left = 0;
    let mut right = rest.len();

    loop {
        while left < right && rest[left] < *pivot {
            left += 1;
        }
        while left < right && rest[right - 1] > *pivot {
            right -= 1;
        }
        if left >= right {
            break;
        }

        // Both stopped on an element that may equal the pivot. Stepping past it after the swap
        // is what keeps runs of duplicates from stalling the loop.
        rest.swap(left, right - 1);
        left += 1;
        right -= 1;
    }

    slice.swap(0, left);
    left
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let sorted = QuickSorter::default().sort(vec![1, 5, 4, 2, 3]);
        assert_eq!(sorted, [1, 2, 3, 4, 5]);

        let sorted = QuickSorter { in_place: true }.sort(vec![1, 5, 4, 2, 3]);
        assert_eq!(sorted, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let sorted = quick_sort((1..10).collect::<Vec<_>>());
        assert_eq!(sorted, (1..10).collect::<Vec<_>>());

        let mut slice = (1..10).collect::<Vec<_>>();
        quick_sort_in_place(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let sorted = quick_sort((1..1000).rev().collect::<Vec<_>>());
        assert_eq!(sorted, (1..1000).collect::<Vec<_>>());

        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        quick_sort_in_place(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn all_duplicates_terminate() {
        let sorted = quick_sort(vec![4; 500]);
        assert_eq!(sorted, vec![4; 500]);

        let mut slice = vec![4; 500];
        quick_sort_in_place(&mut slice);
        assert_eq!(slice, vec![4; 500]);
    }

    #[test]
    fn partition_places_pivot() {
        let mut slice = [5, 9, 1, 5, 7, 2, 5];
        let mid = partition(&mut slice);

        assert_eq!(slice[mid], 5);
        assert!(slice[..mid].iter().all(|v| *v <= 5));
        assert!(slice[mid + 1..].iter().all(|v| *v >= 5));
    }

    #[test]
    fn simple_edge_cases() {
        let empty: Vec<i32> = quick_sort(vec![]);
        assert!(empty.is_empty());

        let mut empty: [i32; 0] = [];
        quick_sort_in_place(&mut empty);

        for in_place in [false, true] {
            let sorter = QuickSorter { in_place };

            assert_eq!(sorter.sort(vec![1]), vec![1]);
            assert_eq!(sorter.sort(vec![1, 2]), vec![1, 2]);
            assert_eq!(sorter.sort(vec![2, 1]), vec![1, 2]);
            assert_eq!(sorter.sort(vec![3, 1, 2]), vec![1, 2, 3]);
            assert_eq!(sorter.sort(vec![2, 1, 2, 1]), vec![1, 1, 2, 2]);
        }
    }
}
