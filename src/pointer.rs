// Pattern 5: A Reference Is a Value of Its Own
//
// Rust references can never be null, so the "points nowhere" state is spelled
// out with Option. `Pointer` wraps `Option<&mut T>`: it starts unbound, can be
// bound to one variable at a time, rebound elsewhere, or cleared. There is no
// arithmetic on it; the only operations are dereference and rebinding.
//
// While a Pointer is bound it holds the exclusive borrow, so the variable it
// points at can only be touched through it. Clear (or drop) the Pointer to get
// direct access back.

use log::trace;
use std::fmt;

/// What an unbound Pointer prints as.
pub const UNBOUND: &str = "<unbound>";

/// Renders the address a reference points at, e.g. `0x7ffd5c3a1b2c`.
pub fn address_of<T: ?Sized>(value: &T) -> String {
    format!("{:p}", value)
}

pub struct Pointer<'a, T> {
    target: Option<&'a mut T>,
}

impl<'a, T> Pointer<'a, T> {
    /// A pointer that was declared but never bound.
    pub fn unbound() -> Self {
        Pointer { target: None }
    }

    pub fn to(target: &'a mut T) -> Self {
        Pointer {
            target: Some(target),
        }
    }

    /// Points at `target` instead of whatever was referenced before.
    pub fn bind(&mut self, target: &'a mut T) {
        self.target = Some(target);
        trace!("pointer bound to {}", self);
    }

    /// Points nowhere again. The storage itself is left alone.
    pub fn clear(&mut self) {
        self.target = None;
        trace!("pointer cleared");
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// The address held by the pointer, `None` while unbound.
    pub fn address(&self) -> Option<String> {
        self.target.as_deref().map(address_of)
    }

    /// Dereferences the pointer. Reading through an unbound pointer is a
    /// precondition violation; here it shows up as `None`.
    pub fn get(&self) -> Option<&T> {
        self.target.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.target.as_deref_mut()
    }

    /// Writes through the pointer and returns the previous value.
    /// Returns `None` (and drops `value`) when unbound.
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.get_mut().map(|slot| std::mem::replace(slot, value))
    }

    /// Gives the borrow back, e.g. to hand it to a function taking `&mut T`.
    pub fn release(self) -> Option<&'a mut T> {
        self.target
    }
}

impl<T> Default for Pointer<'_, T> {
    fn default() -> Self {
        Self::unbound()
    }
}

// Prints the pointer itself (the address), not the value behind it.
impl<T> fmt::Display for Pointer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.address() {
            Some(address) => f.write_str(&address),
            None => f.write_str(UNBOUND),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Pointer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "Pointer({:p} -> {:?})", *target, target),
            None => write!(f, "Pointer({})", UNBOUND),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_pointer() {
        let pointer: Pointer<'_, i32> = Pointer::unbound();

        assert!(!pointer.is_bound());
        assert_eq!(pointer.address(), None);
        assert_eq!(pointer.get(), None);
        assert_eq!(pointer.to_string(), UNBOUND);
    }

    #[test]
    fn test_bound_pointer_shows_address() {
        let mut number = 42;
        let expected = address_of(&number);
        let pointer = Pointer::to(&mut number);

        assert_eq!(pointer.address(), Some(expected.clone()));
        assert_eq!(pointer.to_string(), expected);
        assert_eq!(pointer.get(), Some(&42));
    }

    #[test]
    fn test_bind_then_clear() {
        let mut number = 42;
        let mut pointer = Pointer::unbound();
        assert_eq!(pointer.to_string(), UNBOUND);

        pointer.bind(&mut number);
        assert!(pointer.is_bound());
        assert!(pointer.to_string().starts_with("0x"));

        pointer.clear();
        assert_eq!(pointer.to_string(), UNBOUND);
        // Clearing the pointer does not touch the number
        assert_eq!(number, 42);
    }

    #[test]
    fn test_write_through_pointer() {
        let mut message = String::from("Hello world!");
        let mut pointer = Pointer::to(&mut message);

        let previous = pointer.replace(String::from("Grapefruit!"));
        assert_eq!(previous.as_deref(), Some("Hello world!"));
        pointer.clear();

        assert_eq!(message, "Grapefruit!");
    }

    #[test]
    fn test_replace_on_unbound_is_noop() {
        let mut pointer: Pointer<'_, i32> = Pointer::default();
        assert_eq!(pointer.replace(7), None);
        assert!(!pointer.is_bound());
    }

    #[test]
    fn test_rebind_points_elsewhere() {
        let mut first = 1;
        let mut second = 2;
        let second_address = address_of(&second);

        let mut pointer = Pointer::to(&mut first);
        pointer.bind(&mut second);
        if let Some(value) = pointer.get_mut() {
            *value += 10;
        }

        assert_eq!(pointer.address(), Some(second_address));
        pointer.clear();
        assert_eq!((first, second), (1, 12));
    }

    #[test]
    fn test_release_hands_back_borrow() {
        let mut number = 5;
        let pointer = Pointer::to(&mut number);
        if let Some(target) = pointer.release() {
            *target = 6;
        }
        assert_eq!(number, 6);
    }

    #[test]
    fn test_debug_output() {
        let mut number = 9;
        let pointer = Pointer::to(&mut number);
        let rendered = format!("{:?}", pointer);
        assert!(rendered.starts_with("Pointer(0x"));
        assert!(rendered.ends_with("-> 9)"));

        let empty: Pointer<'_, i32> = Pointer::unbound();
        assert_eq!(format!("{:?}", empty), "Pointer(<unbound>)");
    }
}
