/// Binary search for the lower bound of `key` within a sorted slice.
///
/// Returns the index of the first element that is not less than `key`, or
/// `keys.len()` if every element is smaller. This single rule drives both
/// tree descent (a key equal to a separator routes into the separator's left
/// child) and leaf insertion (a new pair with a repeated key lands before
/// its equals, keeping duplicates in stable order).
///
/// # Examples
///
/// ```ignore
/// let keys = [0, 2, 4, 6, 8];
///
/// assert_eq!(lower_bound(&keys, &2), 1);
/// assert_eq!(lower_bound(&keys, &3), 2);
/// assert_eq!(lower_bound(&keys, &9), 5);
/// ```
#[inline]
pub(crate) fn lower_bound<K: Ord>(keys: &[K], key: &K) -> usize {
    keys.partition_point(|k| k < key)
}

#[cfg(test)]
mod tests {
    use super::lower_bound;

    #[test]
    fn test_lower_bound() {
        assert_eq!(lower_bound(&[1, 2, 3, 4, 5], &1), 0);
        assert_eq!(lower_bound(&[1, 2, 3, 4, 5], &3), 2);
        assert_eq!(lower_bound(&[1, 2, 3, 4, 5], &5), 4);

        assert_eq!(lower_bound(&[1, 3, 5, 7], &0), 0);
        assert_eq!(lower_bound(&[1, 3, 5, 7], &2), 1);
        assert_eq!(lower_bound(&[1, 3, 5, 7], &8), 4);

        assert_eq!(lower_bound::<i32>(&[], &42), 0);
    }

    #[test]
    fn test_lower_bound_duplicates() {
        // The insertion point for a repeated key is the start of its run.
        assert_eq!(lower_bound(&[1, 2, 2, 2, 3], &2), 1);
        assert_eq!(lower_bound(&[2, 2, 2], &2), 0);
        assert_eq!(lower_bound(&[2, 2, 2], &3), 3);
    }
}
