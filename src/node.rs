//! Link embedding for intrusive ring nodes.
//!
//! A node carries its own `next`/`prev` keys. The [`Linked`] trait is the
//! seam between node types and the ring algorithms: anything exposing a link
//! pair can be threaded into a [`Ring`](crate::Ring), and a type can embed
//! several link pairs to participate in several rings at once.

use crate::Key;

/// Trait for types that can participate in a ring.
///
/// Implementors embed prev/next keys directly in their struct. Use the
/// ready-made [`Node`] wrapper unless you need multiple link pairs or a
/// custom layout.
///
/// A link pair must read back what was last stored in it; the ring
/// algorithms keep both directions consistent and set both links to
/// [`Key::NONE`] on unlink.
///
/// # Example
///
/// ```
/// use circlet::{Key, Linked};
///
/// struct Conn {
///     fd: i32,
///     // Links for the idle ring
///     next: u32,
///     prev: u32,
/// }
///
/// impl Linked<u32> for Conn {
///     fn next(&self) -> u32 { self.next }
///     fn prev(&self) -> u32 { self.prev }
///     fn set_next(&mut self, key: u32) { self.next = key; }
///     fn set_prev(&mut self, key: u32) { self.prev = key; }
/// }
/// ```
pub trait Linked<K: Key> {
    /// Returns the successor's key.
    fn next(&self) -> K;

    /// Returns the predecessor's key.
    fn prev(&self) -> K;

    /// Sets the successor's key.
    fn set_next(&mut self, key: K);

    /// Sets the predecessor's key.
    fn set_prev(&mut self, key: K);
}

/// A ready-made ring node wrapping a payload with a link pair.
///
/// The payload is public; the links are managed by the ring operations.
/// Freshly created nodes are unlinked (both links [`Key::NONE`]).
///
/// # Example
///
/// ```
/// use circlet::{BoxedStorage, Node, Ring, Storage};
///
/// let mut arena: BoxedStorage<Node<&str>> = BoxedStorage::with_capacity(8);
///
/// let head = arena.try_insert(Node::new("head")).unwrap();
/// let ring = Ring::init(&mut arena, head);
///
/// let a = arena.try_insert(Node::new("a")).unwrap();
/// ring.link_back(&mut arena, a);
///
/// assert!(!ring.is_empty(&arena));
/// ```
#[derive(Debug)]
pub struct Node<T, K: Key = u32> {
    /// The caller's payload.
    pub data: T,
    pub(crate) next: K,
    pub(crate) prev: K,
}

impl<T, K: Key> Node<T, K> {
    /// Creates a new unlinked node.
    #[inline]
    pub fn new(data: T) -> Self {
        Self {
            data,
            next: K::NONE,
            prev: K::NONE,
        }
    }

    /// Consumes the node and returns the payload.
    #[inline]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns `true` if the node is not currently in a ring.
    ///
    /// Holds for freshly created nodes and nodes after
    /// [`Ring::unlink`](crate::Ring::unlink); does not hold for a sentinel
    /// head, which links to itself even when its ring is empty.
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }
}

impl<T: Default, K: Key> Default for Node<T, K> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, K: Key> Linked<K> for Node<T, K> {
    #[inline]
    fn next(&self) -> K {
        self.next
    }

    #[inline]
    fn prev(&self) -> K {
        self.prev
    }

    #[inline]
    fn set_next(&mut self, key: K) {
        self.next = key;
    }

    #[inline]
    fn set_prev(&mut self, key: K) {
        self.prev = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_unlinked() {
        let node: Node<u64> = Node::new(42);
        assert!(node.is_unlinked());
        assert_eq!(node.data, 42);
    }

    #[test]
    fn into_inner() {
        let node: Node<String> = Node::new("payload".into());
        assert_eq!(node.into_inner(), "payload");
    }

    #[test]
    fn default_is_unlinked() {
        let node: Node<u64> = Node::default();
        assert!(node.is_unlinked());
        assert_eq!(node.data, 0);
    }

    #[test]
    fn accessors_roundtrip() {
        let mut node: Node<u64, u16> = Node::new(0);
        node.set_next(3);
        node.set_prev(7);
        assert_eq!(node.next(), 3);
        assert_eq!(node.prev(), 7);
        assert!(!node.is_unlinked());
    }
}
