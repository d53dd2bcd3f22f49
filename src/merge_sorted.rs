//! Merge a sorted sequence into the spare tail capacity of another one.
//!
//! `a` holds `m` sorted values followed by at least `n` free slots, `b` holds `n`
//! sorted values. The merge runs from the back so that the write cursor never
//! overtakes an unread value of `a`, which means no scratch buffer is needed.

use anyhow::bail;

/// Merges `b[..n]` into `a[..m]`, leaving the sorted result in `a[..m + n]`.
///
/// Equal values are taken from `b` first when walking backwards. Slots of `a`
/// past `m + n` are not touched.
///
/// # Errors
/// Fails without modifying `a` if:
/// - `b` holds fewer than `n` values
/// - `a` is too short to hold `m + n` values
pub fn merge<T: Ord + Copy>(a: &mut [T], m: usize, b: &[T], n: usize) -> anyhow::Result<()> {
    if b.len() < n {
        bail!(
            "second sequence holds {} values, expected at least {n}",
            b.len()
        );
    }
    let total = match m.checked_add(n) {
        Some(total) if total <= a.len() => total,
        _ => bail!(
            "first sequence capacity {} cannot hold {m} + {n} values",
            a.len()
        ),
    };
    log::debug!("merging {n} values into {m} from the back");

    // p1 and p2 count the values still unread, p is one past the next write.
    let (mut p1, mut p2, mut p) = (m, n, total);
    while p1 > 0 && p2 > 0 {
        p -= 1;
        if a[p1 - 1] > b[p2 - 1] {
            a[p] = a[p1 - 1];
            p1 -= 1;
        } else {
            a[p] = b[p2 - 1];
            p2 -= 1;
        }
    }

    // Leftovers of `a` are already in place; leftovers of `b` go to the front.
    a[..p2].copy_from_slice(&b[..p2]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn basic() {
        let mut a = [1, 2, 3, 0, 0, 0];
        merge(&mut a, 3, &[2, 5, 6], 3).unwrap();
        assert_eq!(a, [1, 2, 2, 3, 5, 6]);
    }

    #[test]
    fn b_empty() {
        let mut a = [1];
        merge(&mut a, 1, &[], 0).unwrap();
        assert_eq!(a, [1]);
    }

    #[test]
    fn a_real_portion_empty() {
        let mut a = [0];
        merge(&mut a, 0, &[1], 1).unwrap();
        assert_eq!(a, [1]);
    }

    #[test]
    fn duplicates_across_inputs() {
        let mut a = [2, 2, 3, 0, 0];
        merge(&mut a, 3, &[2, 2], 2).unwrap();
        assert_eq!(a, [2, 2, 2, 2, 3]);
    }

    #[test]
    fn b_entirely_smaller() {
        let mut a = [4, 5, 6, 0, 0, 0];
        merge(&mut a, 3, &[1, 2, 3], 3).unwrap();
        assert_eq!(a, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn b_entirely_larger() {
        let mut a = [1, 2, 0, 0];
        merge(&mut a, 2, &[7, 9], 2).unwrap();
        assert_eq!(a, [1, 2, 7, 9]);
    }

    #[test]
    fn negative_values() {
        let mut a = [-5, -1, 0, 0, 0];
        merge(&mut a, 2, &[-3, -2, 8], 3).unwrap();
        assert_eq!(a, [-5, -3, -2, -1, 8]);
    }

    #[test]
    fn only_prefix_of_b_is_used() {
        let mut a = [1, 4, 0];
        merge(&mut a, 2, &[3, 100], 1).unwrap();
        assert_eq!(a, [1, 3, 4]);
    }

    #[test]
    fn slots_past_capacity_untouched() {
        let mut a = [1, 3, 0, 0, 42, 43];
        merge(&mut a, 2, &[2, 4], 2).unwrap();
        assert_eq!(a, [1, 2, 3, 4, 42, 43]);
    }

    #[test]
    fn both_empty() {
        let mut a: [i32; 0] = [];
        merge(&mut a, 0, &[], 0).unwrap();
    }

    #[test]
    fn insufficient_capacity_is_rejected() {
        let mut a = [1, 2, 0];
        let err = merge(&mut a, 2, &[3, 4], 2).unwrap_err();
        assert!(err.to_string().contains("capacity 3"));
        assert_eq!(a, [1, 2, 0]);
    }

    #[test]
    fn short_second_sequence_is_rejected() {
        let mut a = [1, 0, 0];
        let err = merge(&mut a, 1, &[2], 2).unwrap_err();
        assert!(err.to_string().contains("expected at least 2"));
        assert_eq!(a, [1, 0, 0]);
    }

    #[test]
    fn overflowing_counts_are_rejected() {
        let mut a = [0u8; 4];
        assert!(merge(&mut a, usize::MAX, &[1], 1).is_err());
    }

    fn sorted_vec() -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(-50..50i32, 0..20).prop_map(|mut v| {
            v.sort();
            v
        })
    }

    proptest! {
        #[test]
        fn merged_output_is_sorted_union(
            left in sorted_vec(),
            right in sorted_vec(),
            filler in any::<i32>(),
        ) {
            let (m, n) = (left.len(), right.len());
            let mut a = left.clone();
            a.resize(m + n, filler);
            merge(&mut a, m, &right, n).unwrap();

            let mut expected = [left, right].concat();
            expected.sort();
            prop_assert_eq!(a, expected);
        }
    }
}
