//! Intrusive circular doubly-linked list over external storage.
//!
//! Kernel-style: a ring is anchored by a sentinel head, which is an ordinary
//! node in storage rather than a distinct list type. An empty ring is a head
//! linking to itself; every non-empty ring is circular and doubly consistent
//! (`n.next.prev == n` and `n.prev.next == n` for every member).
//!
//! The ring never inserts into or removes from storage. Linking and
//! unlinking only rewire keys, so node lifetime stays entirely with the
//! caller. There is no length field; determining length takes a full
//! traversal.
//!
//! # Misuse
//!
//! Unlinking a node that is not in a ring, linking a node that already is,
//! or unlinking a sentinel head are caller contract violations. They are
//! caught by `debug_assert!` in debug builds and unchecked in release
//! builds; the operations themselves stay branch-free on the hot path.
//!
//! Iteration while mutating the ring is ruled out statically: [`Ring::iter`]
//! borrows storage for its whole lifetime. When the loop body needs to
//! unlink the node it just visited, use [`Ring::cursor`], which pre-captures
//! the successor and borrows storage one step at a time.

use core::marker::PhantomData;

use crate::{Key, Linked, Storage};

/// Handle to a circular intrusive list, wrapping the sentinel head's key.
///
/// The head must be initialized with [`Ring::init`] before use and
/// re-initialized if it is ever unlinked.
///
/// # Example
///
/// ```
/// use circlet::{BoxedStorage, Node, Ring, Storage};
///
/// let mut arena: BoxedStorage<Node<u32>> = BoxedStorage::with_capacity(8);
/// let head = arena.try_insert(Node::new(0)).unwrap();
/// let ring = Ring::init(&mut arena, head);
///
/// let t1 = arena.try_insert(Node::new(1)).unwrap();
/// let t2 = arena.try_insert(Node::new(2)).unwrap();
/// let t3 = arena.try_insert(Node::new(3)).unwrap();
///
/// // Each link_front splices directly after the head, so the most
/// // recently linked node is nearest the head.
/// ring.link_front(&mut arena, t1);
/// ring.link_front(&mut arena, t2);
/// ring.link_front(&mut arena, t3);
///
/// let order: Vec<u32> = ring.iter(&arena).map(|n| n.data).collect();
/// assert_eq!(order, [3, 2, 1]);
///
/// Ring::unlink(&mut arena, t2);
/// let order: Vec<u32> = ring.iter(&arena).map(|n| n.data).collect();
/// assert_eq!(order, [3, 1]);
/// ```
#[derive(Debug)]
pub struct Ring<K: Key> {
    head: K,
}

impl<K: Key> Ring<K> {
    /// Initializes `head` as an empty ring and returns its handle.
    ///
    /// Sets both of the head's links to itself. Also used to reclaim a head
    /// after its ring was drained by [`Ring::splice_front`]/
    /// [`Ring::splice_back`].
    ///
    /// # Panics
    ///
    /// Panics if `head` is not valid in storage.
    #[inline]
    pub fn init<T, S>(storage: &mut S, head: K) -> Self
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let node = storage.get_mut(head).expect("invalid head key");
        node.set_next(head);
        node.set_prev(head);
        Self { head }
    }

    /// Returns the sentinel head's key.
    #[inline]
    pub const fn head(&self) -> K {
        self.head
    }

    /// Returns `true` if the ring has no members (the head self-loops).
    ///
    /// # Panics
    ///
    /// Panics if the head is not valid in storage.
    #[inline]
    pub fn is_empty<T, S>(&self, storage: &S) -> bool
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        storage.get(self.head).expect("invalid head key").next() == self.head
    }

    // ========================================================================
    // Link operations
    // ========================================================================

    /// Splices `key` in immediately after the head.
    ///
    /// O(1), four link writes. The node must not already be in a ring;
    /// freshly created and just-unlinked nodes qualify.
    ///
    /// # Panics
    ///
    /// Panics if `key` or the head is not valid in storage.
    #[inline]
    pub fn link_front<T, S>(&self, storage: &mut S, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        debug_assert!(key != self.head, "cannot link a head into its own ring");
        debug_assert!(
            {
                let node = storage.get(key).expect("invalid key");
                node.next().is_none() && node.prev().is_none()
            },
            "linking a node that is already in a ring"
        );

        let next = storage.get(self.head).expect("invalid head key").next();
        Self::link_between(storage, key, self.head, next);
    }

    /// Splices `key` in immediately before the head (at the tail).
    ///
    /// Same contract as [`Ring::link_front`].
    ///
    /// # Panics
    ///
    /// Panics if `key` or the head is not valid in storage.
    #[inline]
    pub fn link_back<T, S>(&self, storage: &mut S, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        debug_assert!(key != self.head, "cannot link a head into its own ring");
        debug_assert!(
            {
                let node = storage.get(key).expect("invalid key");
                node.next().is_none() && node.prev().is_none()
            },
            "linking a node that is already in a ring"
        );

        let prev = storage.get(self.head).expect("invalid head key").prev();
        Self::link_between(storage, key, prev, self.head);
    }

    /// Unlinks `key` from whatever ring it is in.
    ///
    /// The neighbors are rewired to each other and both of the node's links
    /// are set to [`Key::NONE`]. The node stays in storage and can be
    /// relinked, but cannot serve as a head without [`Ring::init`].
    ///
    /// An associated function rather than a method: unlinking needs no
    /// head, only the node's own links.
    ///
    /// # Panics
    ///
    /// Panics if `key` or a neighbor is not valid in storage.
    #[inline]
    pub fn unlink<T, S>(storage: &mut S, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let (prev, next) = {
            let node = storage.get(key).expect("invalid key");
            (node.prev(), node.next())
        };
        debug_assert!(
            prev.is_some() && next.is_some(),
            "unlinking a node that is not in a ring"
        );
        debug_assert!(prev != key, "unlinking a sentinel head");

        storage.get_mut(prev).expect("invalid key in ring").set_next(next);
        storage.get_mut(next).expect("invalid key in ring").set_prev(prev);

        let node = storage.get_mut(key).expect("invalid key");
        node.set_next(K::NONE);
        node.set_prev(K::NONE);
    }

    /// Moves `key` out of its current ring to immediately after this head.
    ///
    /// Single splice: the node is never observably detached, unlike
    /// [`Ring::unlink`] followed by [`Ring::link_front`].
    ///
    /// # Panics
    ///
    /// Panics if `key`, a neighbor, or the head is not valid in storage.
    #[inline]
    pub fn move_front<T, S>(&self, storage: &mut S, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        self.detach(storage, key);
        let next = storage.get(self.head).expect("invalid head key").next();
        Self::link_between(storage, key, self.head, next);
    }

    /// Moves `key` out of its current ring to immediately before this head.
    ///
    /// Single splice, like [`Ring::move_front`].
    ///
    /// # Panics
    ///
    /// Panics if `key`, a neighbor, or the head is not valid in storage.
    #[inline]
    pub fn move_back<T, S>(&self, storage: &mut S, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        self.detach(storage, key);
        let prev = storage.get(self.head).expect("invalid head key").prev();
        Self::link_between(storage, key, prev, self.head);
    }

    /// Merges all members of `other` into this ring, after the head.
    ///
    /// O(1): four link exchanges transplant the whole member chain. The
    /// donor ring is consumed; its head is left stale in storage and must go
    /// through [`Ring::init`] before being used as a ring again.
    ///
    /// # Panics
    ///
    /// Panics if either head is not valid in storage.
    pub fn splice_front<T, S>(&self, storage: &mut S, other: Ring<K>)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let (first, last) = {
            let donor = storage.get(other.head).expect("invalid donor head key");
            (donor.next(), donor.prev())
        };
        if first == other.head {
            return;
        }

        let at = storage.get(self.head).expect("invalid head key").next();
        Self::transplant(storage, first, last, self.head, at);
    }

    /// Merges all members of `other` into this ring, before the head.
    ///
    /// Tail-end counterpart of [`Ring::splice_front`].
    ///
    /// # Panics
    ///
    /// Panics if either head is not valid in storage.
    pub fn splice_back<T, S>(&self, storage: &mut S, other: Ring<K>)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let (first, last) = {
            let donor = storage.get(other.head).expect("invalid donor head key");
            (donor.next(), donor.prev())
        };
        if first == other.head {
            return;
        }

        let at = storage.get(self.head).expect("invalid head key").prev();
        Self::transplant(storage, first, last, at, self.head);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Returns the key of the member after `key`.
    ///
    /// Returns `None` if the successor is the head (i.e. `key` is the last
    /// member) or `key` is not in storage.
    #[inline]
    pub fn next_of<T, S>(&self, storage: &S, key: K) -> Option<K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let next = storage.get(key)?.next();
        if next == self.head { None } else { Some(next) }
    }

    /// Returns the key of the member before `key`.
    ///
    /// Returns `None` if the predecessor is the head or `key` is not in
    /// storage.
    #[inline]
    pub fn prev_of<T, S>(&self, storage: &S, key: K) -> Option<K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let prev = storage.get(key)?.prev();
        if prev == self.head { None } else { Some(prev) }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over member nodes in `next` order.
    ///
    /// The head itself is never visited. Reverse (`prev`-order) traversal is
    /// `iter(..).rev()`.
    #[inline]
    pub fn iter<'a, T, S>(&self, storage: &'a S) -> Iter<'a, T, S, K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let (front, back) = self.bounds(storage);
        Iter {
            storage,
            front,
            back,
            done: front == self.head,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over mutable member nodes in `next` order.
    #[inline]
    pub fn iter_mut<'a, T, S>(&self, storage: &'a mut S) -> IterMut<'a, T, S, K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let (front, back) = self.bounds(storage);
        IterMut {
            done: front == self.head,
            storage,
            front,
            back,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over member keys in `next` order.
    #[inline]
    pub fn keys<'a, T, S>(&self, storage: &'a S) -> Keys<'a, T, S, K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let (front, back) = self.bounds(storage);
        Keys {
            storage,
            front,
            back,
            done: front == self.head,
            _marker: PhantomData,
        }
    }

    /// Returns a removal-safe cursor starting at the first member.
    ///
    /// The cursor pre-captures each node's successor before yielding it, so
    /// the caller may [`Ring::unlink`] the yielded node before the next
    /// step. Unlinking any *other* member mid-traversal is not supported.
    ///
    /// # Example
    ///
    /// ```
    /// use circlet::{BoxedStorage, Node, Ring, Storage};
    ///
    /// let mut arena: BoxedStorage<Node<u32>> = BoxedStorage::with_capacity(8);
    /// let head = arena.try_insert(Node::new(0)).unwrap();
    /// let ring = Ring::init(&mut arena, head);
    /// for v in 1..=3 {
    ///     let key = arena.try_insert(Node::new(v)).unwrap();
    ///     ring.link_back(&mut arena, key);
    /// }
    ///
    /// // Drain the ring, unlinking every visited node.
    /// let mut cursor = ring.cursor(&arena);
    /// while let Some(key) = cursor.next(&arena) {
    ///     Ring::unlink(&mut arena, key);
    /// }
    /// assert!(ring.is_empty(&arena));
    /// ```
    #[inline]
    pub fn cursor<T, S>(&self, storage: &S) -> Cursor<K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let pos = storage.get(self.head).expect("invalid head key").next();
        let succ = if pos == self.head {
            self.head
        } else {
            storage.get(pos).expect("invalid key in ring").next()
        };
        Cursor {
            head: self.head,
            pos,
            succ,
            rev: false,
        }
    }

    /// Returns a removal-safe cursor starting at the last member, walking
    /// `prev` links.
    #[inline]
    pub fn cursor_rev<T, S>(&self, storage: &S) -> Cursor<K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let pos = storage.get(self.head).expect("invalid head key").prev();
        let succ = if pos == self.head {
            self.head
        } else {
            storage.get(pos).expect("invalid key in ring").prev()
        };
        Cursor {
            head: self.head,
            pos,
            succ,
            rev: true,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// First and last member keys (both the head when empty).
    #[inline]
    fn bounds<T, S>(&self, storage: &S) -> (K, K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        let head = storage.get(self.head).expect("invalid head key");
        (head.next(), head.prev())
    }

    /// Splices `key` between two adjacent keys. Four link writes.
    #[inline]
    fn link_between<T, S>(storage: &mut S, key: K, prev: K, next: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        {
            let node = storage.get_mut(key).expect("invalid key");
            node.set_prev(prev);
            node.set_next(next);
        }
        storage.get_mut(prev).expect("invalid key in ring").set_next(key);
        storage.get_mut(next).expect("invalid key in ring").set_prev(key);
    }

    /// Rewires `key`'s neighbors around it without clearing its links.
    #[inline]
    fn detach<T, S>(&self, storage: &mut S, key: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        debug_assert!(key != self.head, "cannot move a head into its own ring");

        let (prev, next) = {
            let node = storage.get(key).expect("invalid key");
            (node.prev(), node.next())
        };
        debug_assert!(
            prev.is_some() && next.is_some(),
            "moving a node that is not in a ring"
        );

        storage.get_mut(prev).expect("invalid key in ring").set_next(next);
        storage.get_mut(next).expect("invalid key in ring").set_prev(prev);
    }

    /// Splices the chain `first..=last` between two adjacent keys.
    #[inline]
    fn transplant<T, S>(storage: &mut S, first: K, last: K, prev: K, next: K)
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        storage.get_mut(first).expect("invalid key in ring").set_prev(prev);
        storage.get_mut(prev).expect("invalid key in ring").set_next(first);
        storage.get_mut(last).expect("invalid key in ring").set_next(next);
        storage.get_mut(next).expect("invalid key in ring").set_prev(last);
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to ring members.
pub struct Iter<'a, T, S, K: Key> {
    storage: &'a S,
    front: K,
    back: K,
    done: bool,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, K: Key> Iterator for Iter<'a, T, S, K>
where
    T: Linked<K>,
    S: Storage<T, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let node = self.storage.get(self.front).expect("invalid key in ring");

        // Front and back cursors met in the middle
        if self.front == self.back {
            self.done = true;
        } else {
            self.front = node.next();
        }

        Some(node)
    }
}

impl<'a, T: 'a, S, K: Key> DoubleEndedIterator for Iter<'a, T, S, K>
where
    T: Linked<K>,
    S: Storage<T, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let node = self.storage.get(self.back).expect("invalid key in ring");

        if self.front == self.back {
            self.done = true;
        } else {
            self.back = node.prev();
        }

        Some(node)
    }
}

/// Iterator over mutable references to ring members.
pub struct IterMut<'a, T, S, K: Key> {
    storage: &'a mut S,
    front: K,
    back: K,
    done: bool,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, K: Key> Iterator for IterMut<'a, T, S, K>
where
    T: Linked<K>,
    S: Storage<T, Key = K>,
{
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let node = self.storage.get_mut(self.front).expect("invalid key in ring");
        // Extend lifetime - safe because each member is visited exactly once
        let node = unsafe { &mut *(node as *mut T) };

        if self.front == self.back {
            self.done = true;
        } else {
            self.front = node.next();
        }

        Some(node)
    }
}

impl<'a, T: 'a, S, K: Key> DoubleEndedIterator for IterMut<'a, T, S, K>
where
    T: Linked<K>,
    S: Storage<T, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let node = self.storage.get_mut(self.back).expect("invalid key in ring");
        // Extend lifetime - safe because each member is visited exactly once
        let node = unsafe { &mut *(node as *mut T) };

        if self.front == self.back {
            self.done = true;
        } else {
            self.back = node.prev();
        }

        Some(node)
    }
}

/// Iterator over member keys.
pub struct Keys<'a, T, S, K: Key> {
    storage: &'a S,
    front: K,
    back: K,
    done: bool,
    _marker: PhantomData<T>,
}

impl<'a, T, S, K: Key> Iterator for Keys<'a, T, S, K>
where
    T: Linked<K>,
    S: Storage<T, Key = K>,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let key = self.front;
        let node = self.storage.get(key).expect("invalid key in ring");

        if self.front == self.back {
            self.done = true;
        } else {
            self.front = node.next();
        }

        Some(key)
    }
}

impl<'a, T, S, K: Key> DoubleEndedIterator for Keys<'a, T, S, K>
where
    T: Linked<K>,
    S: Storage<T, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let key = self.back;
        let node = self.storage.get(key).expect("invalid key in ring");

        if self.front == self.back {
            self.done = true;
        } else {
            self.back = node.prev();
        }

        Some(key)
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Removal-safe traversal position.
///
/// Holds no borrow of storage; each [`Cursor::next`] call takes storage
/// fresh, so the caller can mutate the ring between steps. The successor of
/// the yielded node is captured *before* yielding, which makes it safe to
/// unlink the yielded node itself.
pub struct Cursor<K: Key> {
    head: K,
    pos: K,
    succ: K,
    rev: bool,
}

impl<K: Key> Cursor<K> {
    /// Advances and returns the next member key, or `None` past the end.
    ///
    /// # Panics
    ///
    /// Panics if the pre-captured successor was removed from storage or
    /// unlinked mid-traversal.
    #[inline]
    pub fn next<T, S>(&mut self, storage: &S) -> Option<K>
    where
        T: Linked<K>,
        S: Storage<T, Key = K>,
    {
        if self.pos == self.head {
            return None;
        }

        let key = self.pos;
        self.pos = self.succ;
        let node = storage.get(self.pos).expect("invalid key in ring");
        self.succ = if self.rev { node.prev() } else { node.next() };

        Some(key)
    }
}
