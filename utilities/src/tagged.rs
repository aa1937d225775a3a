//! Elements that compare on a key but remember where they came from, for checking stability.

use std::cmp::Ordering;

/// A value ordered by `key` alone. `index` is its position in the original input.
#[derive(Debug, Clone, Copy)]
pub struct Tagged {
    pub key: i32,
    pub index: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Tags every key with its position.
pub fn tag(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(index, &key)| Tagged { key, index })
        .collect()
}

/// Whether every run of equal keys is still in original input order.
pub fn is_stable(sorted: &[Tagged]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[0].key != w[1].key || w[0].index < w[1].index)
}
