//! The two ordered sequences of the builder and the reorder primitive they
//! share.

pub mod palette;
pub mod template;

use crate::error::StoreError;

/// Moves the element at `from` so it ends up at `to`.
///
/// Both indices must address an existing element. `from == to` is a no-op.
pub(crate) fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), StoreError> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }
    }
    if from != to {
        let moved = items.remove(from);
        items.insert(to, moved);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn moves_forward_and_backward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        reorder(&mut v, 0, 2).unwrap();
        assert_eq!(v, ['b', 'c', 'a', 'd']);
        reorder(&mut v, 3, 0).unwrap();
        assert_eq!(v, ['d', 'b', 'c', 'a']);
    }

    #[test]
    fn rejects_out_of_range_without_change() {
        let mut v = vec![1, 2, 3];
        assert_eq!(
            reorder(&mut v, 0, 3),
            Err(StoreError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            reorder(&mut v, 7, 0),
            Err(StoreError::IndexOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn empty_sequence_rejects_everything() {
        let mut v: Vec<u8> = Vec::new();
        assert!(reorder(&mut v, 0, 0).is_err());
    }

    proptest! {
        #[test]
        fn same_index_is_identity(len in 1usize..32, seed in any::<usize>()) {
            let mut v: Vec<usize> = (0..len).collect();
            let i = seed % len;
            reorder(&mut v, i, i).unwrap();
            prop_assert_eq!(v, (0..len).collect::<Vec<_>>());
        }

        #[test]
        fn reorder_is_a_permutation(len in 1usize..32, a in any::<usize>(), b in any::<usize>()) {
            let mut v: Vec<usize> = (0..len).collect();
            let (from, to) = (a % len, b % len);
            reorder(&mut v, from, to).unwrap();
            prop_assert_eq!(v.len(), len);
            prop_assert_eq!(v[to], from);
            let mut sorted = v.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>());
        }
    }
}
