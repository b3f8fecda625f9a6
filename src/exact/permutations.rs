//! Lazy permutation enumeration.

use std::iter::FusedIterator;

/// Iterator over every permutation of a sequence.
///
/// Permutations are yielded in lexicographic order of positions: the first
/// is the input as given, and each later one is the next arrangement of the
/// input positions. For an ascending input this is plain lexicographic
/// order. Only the current arrangement is held in memory.
///
/// An empty input yields exactly one (empty) permutation. Once exhausted the
/// iterator cannot be restarted; build a new one instead.
///
/// # Examples
///
/// ```
/// use u_tsp::exact::Permutations;
///
/// let perms: Vec<Vec<u32>> = Permutations::new(vec![1, 2, 3]).collect();
/// assert_eq!(perms, vec![
///     vec![1, 2, 3], vec![1, 3, 2],
///     vec![2, 1, 3], vec![2, 3, 1],
///     vec![3, 1, 2], vec![3, 2, 1],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    positions: Vec<usize>,
    exhausted: bool,
}

impl<T: Clone> Permutations<T> {
    /// Starts enumeration with `items` in their given order.
    pub fn new(items: Vec<T>) -> Self {
        let positions = (0..items.len()).collect();
        Self {
            items,
            positions,
            exhausted: false,
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }
        let current = self
            .positions
            .iter()
            .map(|&p| self.items[p].clone())
            .collect();
        self.exhausted = !next_permutation(&mut self.positions);
        Some(current)
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

/// Rearranges `seq` into its lexicographic successor.
///
/// Returns `false` (leaving `seq` untouched) when `seq` is already the last
/// arrangement.
fn next_permutation(seq: &mut [usize]) -> bool {
    let n = seq.len();
    if n < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at pivot + 1.
    let mut pivot = n - 1;
    while pivot > 0 && seq[pivot - 1] >= seq[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let pivot = pivot - 1;

    let mut successor = n - 1;
    while seq[successor] <= seq[pivot] {
        successor -= 1;
    }
    seq.swap(pivot, successor);
    seq[pivot + 1..].reverse();
    true
}

/// Number of permutations of `n` items, or `None` on overflow.
pub fn permutation_count(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}
