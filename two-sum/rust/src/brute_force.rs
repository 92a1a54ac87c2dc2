use crate::Pair;

/// Checks every `(i, j)` with `i < j` in lexicographic order. O(n²) time, no allocation.
pub fn two_sum(nums: &[i32], target: i32) -> Option<Pair> {
    let target = i64::from(target);

    for (i, &ni) in nums.iter().enumerate() {
        for (j, &nj) in nums.iter().enumerate().skip(i + 1) {
            if i64::from(ni) + i64::from(nj) == target {
                return Some((i, j));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_1() {
        let nums = vec![2, 7, 11, 15];
        let target = 9;
        let expected = Some((0, 1));

        let result = two_sum(&nums, target);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_case_2() {
        let nums = vec![3, 2, 4];
        let target = 6;
        let expected = Some((1, 2));

        let result = two_sum(&nums, target);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_case_3() {
        let nums = vec![3, 3];
        let target = 6;
        let expected = Some((0, 1));

        let result = two_sum(&nums, target);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_case_4() {
        let nums = vec![-1, -2, -3, -4, -5];
        let target = -8;
        let expected = Some((2, 4));

        let result = two_sum(&nums, target);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_case_5() {
        let nums = vec![0, 4, 3, 0];
        let target = 0;
        let expected = Some((0, 3));

        let result = two_sum(&nums, target);
        assert_eq!(result, expected);
    }

    #[test]
    fn lexicographically_smallest_pair() {
        let nums = vec![1, 2, 3, 4];
        assert_eq!(two_sum(&nums, 5), Some((0, 3)));
    }

    #[test]
    fn no_pair() {
        assert_eq!(two_sum(&[1, 2, 3], 100), None);
        assert_eq!(two_sum(&[7], 14), None);
        assert_eq!(two_sum(&[], 0), None);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let nums = vec![i32::MAX, 1, i32::MIN, -1];
        assert_eq!(two_sum(&nums, i32::MIN), None);
        assert_eq!(two_sum(&nums, i32::MAX - 1), Some((0, 3)));
    }
}
