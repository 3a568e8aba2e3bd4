//! Bounded LIFO stack of non-owning keys.
//!
//! Capacity is a const generic, so the slot array is inline and the stack
//! never allocates. Slots hold keys to caller-owned elements; the stack
//! never inspects or frees what they refer to.

use crate::{Full, Key};

/// A fixed-capacity LIFO stack of keys.
///
/// `push` rejects at capacity, `pop` returns [`Key::NONE`] when empty;
/// neither mutates on rejection. LIFO ordering is the only ordering
/// guarantee.
///
/// Slots at and above `len` are unspecified; [`Stack::clear`] only resets
/// the length and never touches referenced elements.
///
/// # Example
///
/// ```
/// use circlet::{Key, Stack};
///
/// let mut stack: Stack<u32, 4> = Stack::new();
///
/// stack.push(10).unwrap();
/// stack.push(20).unwrap();
///
/// assert_eq!(stack.pop(), 20);
/// assert_eq!(stack.pop(), 10);
/// assert_eq!(stack.pop(), u32::NONE);
/// ```
#[derive(Debug)]
pub struct Stack<K: Key, const N: usize> {
    len: usize,
    slots: [K; N],
}

impl<K: Key, const N: usize> Stack<K, N> {
    /// Creates an empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self {
            len: 0,
            slots: [K::NONE; N],
        }
    }

    /// Empties the stack for reuse.
    ///
    /// Only resets the length; the caller remains responsible for the
    /// lifetime of any still-referenced elements.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Pushes a key onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(key))` without mutating if the stack is at
    /// capacity.
    #[inline]
    pub fn push(&mut self, key: K) -> Result<(), Full<K>> {
        debug_assert!(key.is_some(), "cannot push the sentinel key");

        if self.len == N {
            return Err(Full(key));
        }

        self.slots[self.len] = key;
        self.len += 1;
        Ok(())
    }

    /// Pops the most recently pushed key.
    ///
    /// Returns [`Key::NONE`] without mutating if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> K {
        if self.len == 0 {
            return K::NONE;
        }

        self.len -= 1;
        self.slots[self.len]
    }

    /// Returns the top key without removing it.
    ///
    /// Returns [`Key::NONE`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> K {
        if self.len == 0 {
            K::NONE
        } else {
            self.slots[self.len - 1]
        }
    }

    /// Returns the number of keys on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no keys.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the stack is at capacity.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the fixed capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<K: Key, const N: usize> Default for Stack<K, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let stack: Stack<u32, 8> = Stack::new();
        assert!(stack.is_empty());
        assert!(!stack.is_full());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.capacity(), 8);
        assert_eq!(stack.peek(), u32::NONE);
    }

    #[test]
    fn lifo_ordering() {
        let mut stack: Stack<u32, 8> = Stack::new();

        for key in [3, 1, 4, 1, 5] {
            stack.push(key).unwrap();
        }

        let mut popped = Vec::new();
        while !stack.is_empty() {
            popped.push(stack.pop());
        }
        assert_eq!(popped, vec![5, 1, 4, 1, 3]);
    }

    #[test]
    fn push_at_capacity_rejects_without_mutation() {
        let mut stack: Stack<u32, 2> = Stack::new();

        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(stack.is_full());

        assert_eq!(stack.push(3), Err(Full(3)));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), 2);

        // Still fully usable after the rejection
        assert_eq!(stack.pop(), 2);
        stack.push(4).unwrap();
        assert_eq!(stack.pop(), 4);
    }

    #[test]
    fn pop_empty_returns_sentinel_without_mutation() {
        let mut stack: Stack<u32, 4> = Stack::new();

        assert_eq!(stack.pop(), u32::NONE);
        assert_eq!(stack.len(), 0);

        stack.push(7).unwrap();
        assert_eq!(stack.pop(), 7);
        assert_eq!(stack.pop(), u32::NONE);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn clear_resets_length_only() {
        let mut stack: Stack<u32, 4> = Stack::new();

        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.pop(), u32::NONE);

        // Reusable after clear
        stack.push(9).unwrap();
        assert_eq!(stack.pop(), 9);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack: Stack<u32, 4> = Stack::new();

        stack.push(5).unwrap();
        assert_eq!(stack.peek(), 5);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), 5);
    }

    #[test]
    fn independent_stacks_do_not_interfere() {
        let mut a: Stack<u32, 2> = Stack::new();
        let mut b: Stack<u16, 4> = Stack::new();

        a.push(1).unwrap();
        b.push(100).unwrap();
        b.push(200).unwrap();

        assert_eq!(a.pop(), 1);
        assert_eq!(b.len(), 2);
        assert_eq!(b.pop(), 200);
        assert_eq!(b.pop(), 100);
    }

    #[test]
    fn fill_drain_cycles() {
        let mut stack: Stack<usize, 16> = Stack::new();

        for round in 0..3 {
            for i in 0..16 {
                stack.push(round * 100 + i).unwrap();
            }
            assert!(stack.is_full());
            assert!(stack.push(999).is_err());

            for i in (0..16).rev() {
                assert_eq!(stack.pop(), round * 100 + i);
            }
            assert!(stack.is_empty());
        }
    }
}
