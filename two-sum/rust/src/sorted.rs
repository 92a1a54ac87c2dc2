use crate::Pair;

/// Sorts a copy of `(value, index)` and walks two pointers inward. O(n log n).
///
/// Which pair is found depends on sorted order, so with several valid pairs
/// the result may differ from the other solvers. Indices are returned ascending.
pub fn two_sum(nums: &[i32], target: i32) -> Option<Pair> {
    if nums.len() < 2 {
        return None;
    }

    let mut indexed: Vec<(i32, usize)> = nums.iter().copied().zip(0..).collect();
    indexed.sort_unstable();

    let target = i64::from(target);
    let mut low = 0;
    let mut high = indexed.len() - 1;

    while low < high {
        let (nl, il) = indexed[low];
        let (nh, ih) = indexed[high];

        match (i64::from(nl) + i64::from(nh)).cmp(&target) {
            std::cmp::Ordering::Less => low += 1,
            std::cmp::Ordering::Greater => high -= 1,
            std::cmp::Ordering::Equal => return Some((il.min(ih), il.max(ih))),
        };
    }

    None
}
