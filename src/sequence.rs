// Pattern 2: Slices Share Their Backing Storage
//
// `&mut [T]` is a (pointer, length) view into the caller's buffer. Handing it to a
// function copies the view, never the elements, so writes land in the caller's Vec
// or array.

use log::debug;
use std::fmt::Debug;

/// Swaps the first two elements in the caller's storage.
/// Fewer than two elements is a no-op, not an error.
pub fn swap_first_two<T: Debug>(slice: &mut [T]) {
    if slice.len() >= 2 {
        slice.swap(0, 1);
        debug!("swap_first_two: {:?}", &slice[..2]);
    } else {
        debug!("swap_first_two: {} element(s), nothing to swap", slice.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_swap_first_two() {
        let mut values = vec![10, 20];
        swap_first_two(&mut values);

        assert_eq!(values, vec![20, 10]);
    }

    #[test]
    fn test_swap_keeps_rest() {
        let mut values = [1, 2, 3, 4];
        swap_first_two(&mut values);

        assert_eq!(values, [2, 1, 3, 4]);
    }

    #[test]
    fn test_short_slices_are_unchanged() {
        let mut empty: Vec<i32> = vec![];
        swap_first_two(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec!["only"];
        swap_first_two(&mut single);
        assert_eq!(single, vec!["only"]);
    }

    #[test]
    fn test_subslice_writes_through() {
        // A view into the middle of the buffer still aliases the buffer
        let mut values = vec![1, 2, 3, 4];
        swap_first_two(&mut values[2..]);

        assert_eq!(values, vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_no_reallocation() {
        let mut values = vec![10, 20, 30];
        let before = values.as_ptr();
        swap_first_two(&mut values);

        assert_eq!(values.as_ptr(), before);
    }

    proptest! {
        #[test]
        fn prop_swap_first_two(values: Vec<i32>) {
            let mut swapped = values.clone();
            swap_first_two(&mut swapped);

            if values.len() >= 2 {
                prop_assert_eq!(swapped[0], values[1]);
                prop_assert_eq!(swapped[1], values[0]);
                prop_assert_eq!(&swapped[2..], &values[2..]);
            } else {
                prop_assert_eq!(swapped, values);
            }
        }
    }
}
