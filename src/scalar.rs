// Pattern 1: Passing Scalars by Value, by Return and by Reference
//
// A parameter taken by value is the callee's own copy (or moved value). Swapping
// it changes nothing the caller can see. To make the swap stick the callee either
// hands the values back, or borrows the caller's storage mutably.

use log::debug;
use std::fmt::Debug;
use std::mem;

// ============================================================================
// Example: Swap by value (the naive attempt)
// ============================================================================

/// Swaps two values that the callee owns. The caller's originals are untouched:
/// `Copy` types arrive as copies, everything else has to be cloned or moved in.
pub fn swap_by_value<T: Debug>(mut left: T, mut right: T) {
    mem::swap(&mut left, &mut right);
    // Only this stack frame sees the swap
    debug!("swap_by_value: left: {:?}, right: {:?}", left, right);
}

// ============================================================================
// Example: Swap by returning the values
// ============================================================================

/// Hands the values back in swapped order. The caller has to reassign:
/// `(left, right) = swap_by_return(left, right);`
pub fn swap_by_return<T>(left: T, right: T) -> (T, T) {
    (right, left)
}

// ============================================================================
// Example: Swap through mutable references
// ============================================================================

/// Exchanges the two referenced values in place.
pub fn swap_by_reference<T: Debug>(left: &mut T, right: &mut T) {
    mem::swap(left, right);
    debug!("swap_by_reference: left: {:?}, right: {:?}", left, right);
}

/// Same result as [`swap_by_reference`], done step by step with a temporary.
/// `mem::take` leaves a default behind so nothing is moved out of a borrow.
pub fn swap_by_reference_with_temp<T: Default + Debug>(left: &mut T, right: &mut T) {
    let temp = mem::take(left);
    *left = mem::take(right);
    *right = temp;
    debug!("swap_by_reference_with_temp: left: {:?}, right: {:?}", left, right);
}
