use std::cmp::Ordering;

/// Recursive [Binary Search](https://en.wikipedia.org/wiki/Binary_search) that only answers
/// whether `target` is present.
///
/// `sorted` must already be in ascending order. Nothing checks this: on unsorted input the answer
/// is unspecified, and the slice is never reordered to make it true.
///
/// Every call looks at the element at `len / 2` and either stops there or continues with the part
/// strictly before or strictly after it, so the recursion is at most `log2(len) + 1` deep.
///
/// # Usage
/// ```
/// use kata_sort::orst::binary_search;
///
/// let sorted = [1, 2, 3, 5, 8, 9];
/// assert!(binary_search(&sorted, &5));
/// assert!(!binary_search(&sorted, &4));
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> bool {
    if sorted.is_empty() {
        return false;
    }

    let mid = sorted.len() / 2;
    match target.cmp(&sorted[mid]) {
        Ordering::Equal => true,
        Ordering::Less => binary_search(&sorted[..mid], target),
        Ordering::Greater => binary_search(&sorted[mid + 1..], target),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn finds_present_values() {
        let sorted = [1, 2, 3, 5, 8, 9];
        for v in sorted {
            assert!(binary_search(&sorted, &v), "{v} should be found");
        }
    }

    #[test]
    fn misses_absent_values() {
        let sorted = [1, 2, 3, 5, 8, 9];
        for v in [0, 4, 6, 7, 10, -3] {
            assert!(!binary_search(&sorted, &v), "{v} should not be found");
        }
    }

    #[test]
    fn midpoint_hit() {
        assert!(binary_search(&[1, 2, 3], &2));
    }

    #[test]
    fn with_duplicates() {
        let sorted = [1, 1, 1, 2, 2, 7, 7, 7, 7];
        assert!(binary_search(&sorted, &1));
        assert!(binary_search(&sorted, &2));
        assert!(binary_search(&sorted, &7));
        assert!(!binary_search(&sorted, &3));
    }

    #[test]
    fn works_on_strings() {
        let sorted = ["apple", "banana", "cherry"];
        assert!(binary_search(&sorted, &"banana"));
        assert!(!binary_search(&sorted, &"blueberry"));
    }

    #[test]
    fn simple_edge_cases() {
        let empty: [i32; 0] = [];
        assert!(!binary_search(&empty, &1));

        assert!(binary_search(&[7], &7));
        assert!(!binary_search(&[7], &6));
        assert!(!binary_search(&[7], &8));
    }
}
