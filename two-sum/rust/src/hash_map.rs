use std::collections::HashMap;

use crate::Pair;

/// Single pass, O(n) time and space.
///
/// Returns the first pair the scan completes: the smallest `j`, paired with
/// the earliest index holding the complement of `nums[j]`.
pub fn two_sum(nums: &[i32], target: i32) -> Option<Pair> {
    let mut index_by_num: HashMap<i32, usize> = HashMap::with_capacity(nums.len());

    for (j, &n) in nums.iter().enumerate() {
        let diff = i64::from(target) - i64::from(n);

        // A complement outside i32 can't be in the map.
        if let Ok(diff) = i32::try_from(diff) {
            if let Some(&i) = index_by_num.get(&diff) {
                return Some((i, j));
            }
        }

        index_by_num.entry(n).or_insert(j);
    }

    None
}
