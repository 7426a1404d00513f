// Pattern 3: Maps Are Passed as Handles to One Table
//
// Taking `&mut HashMap` borrows the caller's table. Inserts and overwrites made by
// the callee are what the caller sees afterwards; there is no second table.

use crate::error::{DemoError, Result};
use log::debug;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

// ============================================================================
// Example: Swap values with silent defaults
// ============================================================================

/// Exchanges the values stored under `first` and `second` in the caller's map.
///
/// Keys are assumed present. A missing key reads as `V::default()`, and since
/// both keys are written back, both keys exist once this returns. Swapping a key
/// with itself leaves its value as it was, inserting the default if absent.
pub fn swap_entries<K, V>(map: &mut HashMap<K, V>, first: K, second: K)
where
    K: Eq + Hash + Debug,
    V: Default + Debug,
{
    if first == second {
        map.entry(first).or_default();
        return;
    }

    let first_value = map.remove(&first).unwrap_or_default();
    let second_value = map.remove(&second).unwrap_or_default();
    debug!(
        "swap_entries: {:?} <- {:?}, {:?} <- {:?}",
        first, second_value, second, first_value
    );
    map.insert(first, second_value);
    map.insert(second, first_value);
}

// ============================================================================
// Example: Checked swap
// ============================================================================

/// Like [`swap_entries`] but refuses to invent values. The map is left untouched
/// when either key is missing.
pub fn try_swap_entries<K, V>(map: &mut HashMap<K, V>, first: K, second: K) -> Result<()>
where
    K: Eq + Hash + Debug + Display,
    V: Default + Debug,
{
    for key in [&first, &second] {
        if !map.contains_key(key) {
            return Err(DemoError::missing_key(key.to_string()));
        }
    }
    swap_entries(map, first, second);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fruit() -> HashMap<&'static str, i32> {
        HashMap::from([("apple", 10), ("banana", 20)])
    }

    #[test]
    fn test_swap_entries() {
        let mut text_to_int = fruit();
        swap_entries(&mut text_to_int, "apple", "banana");

        assert_eq!(text_to_int["apple"], 20);
        assert_eq!(text_to_int["banana"], 10);
    }

    #[test]
    fn test_swap_leaves_other_entries() {
        let mut text_to_int = fruit();
        text_to_int.insert("cherry", 30);
        swap_entries(&mut text_to_int, "apple", "banana");

        assert_eq!(text_to_int["cherry"], 30);
        assert_eq!(text_to_int.len(), 3);
    }

    #[test]
    fn test_missing_key_reads_as_default() {
        let mut text_to_int = fruit();
        swap_entries(&mut text_to_int, "apple", "cherry");

        assert_eq!(text_to_int["apple"], 0);
        assert_eq!(text_to_int["cherry"], 10);
        assert_eq!(text_to_int["banana"], 20);
    }

    #[test]
    fn test_both_keys_missing() {
        let mut words: HashMap<String, String> = HashMap::new();
        swap_entries(&mut words, "x".to_string(), "y".to_string());

        assert_eq!(words.len(), 2);
        assert_eq!(words["x"], "");
        assert_eq!(words["y"], "");
    }

    #[test]
    fn test_same_key_keeps_value() {
        let mut text_to_int = fruit();
        swap_entries(&mut text_to_int, "apple", "apple");

        assert_eq!(text_to_int, fruit());
    }

    #[test]
    fn test_same_missing_key_inserts_default() {
        let mut text_to_int = fruit();
        swap_entries(&mut text_to_int, "cherry", "cherry");

        assert_eq!(text_to_int["cherry"], 0);
        assert_eq!(text_to_int.len(), 3);
    }

    #[test]
    fn test_try_swap_entries() {
        let mut text_to_int = fruit();
        try_swap_entries(&mut text_to_int, "apple", "banana").unwrap();

        assert_eq!(text_to_int["apple"], 20);
        assert_eq!(text_to_int["banana"], 10);
    }

    #[test]
    fn test_try_swap_reports_missing_key() {
        let mut text_to_int = fruit();
        let err = try_swap_entries(&mut text_to_int, "apple", "cherry").unwrap_err();

        assert!(matches!(err, DemoError::MissingKey { ref key } if key == "cherry"));
        assert_eq!(text_to_int, fruit());
    }

    proptest! {
        #[test]
        fn prop_swap_entries(
            original in prop::collection::hash_map("[a-z]{1,4}", any::<i32>(), 2..8),
        ) {
            let mut map = original.clone();
            let keys: Vec<String> = map.keys().take(2).cloned().collect();
            swap_entries(&mut map, keys[0].clone(), keys[1].clone());

            prop_assert_eq!(map[&keys[0]], original[&keys[1]]);
            prop_assert_eq!(map[&keys[1]], original[&keys[0]]);
            for (key, value) in &original {
                if !keys.contains(key) {
                    prop_assert_eq!(map[key], *value);
                }
            }
        }
    }
}
