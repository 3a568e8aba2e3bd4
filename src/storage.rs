//! Storage trait for slab-like arenas with stable keys.
//!
//! Storage owns node memory; the containers in this crate only coordinate
//! keys into it. An index remains valid until the value is explicitly
//! removed, which is what lets a ring rewire links without ever allocating
//! or freeing anything itself.

use crate::Key;

/// Slab-like storage with stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// # Implementations
///
/// - [`BoxedStorage<T>`] - fixed capacity, heap allocated (in this crate)
/// - `slab::Slab<T>` - growable (feature `slab`)
pub trait Storage<T> {
    /// Key type for this storage.
    type Key: Key;

    /// Inserts a value, returning its stable key.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the storage is at capacity. Growable
    /// backends never fail.
    fn try_insert(&mut self, value: T) -> Result<Self::Key, Full<T>>;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error returned when fixed-capacity storage or a bounded container is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "capacity exhausted")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}

// =============================================================================
// BoxedStorage - fixed capacity, boxed slot array, vacant free list
// =============================================================================

enum Slot<T, K: Key> {
    Vacant { next_free: K },
    Occupied(T),
}

/// Fixed-capacity storage backed by a single boxed slot array.
///
/// Vacant slots are threaded into an internal free list, giving O(1) insert
/// and remove with LIFO slot reuse. Capacity is exactly what was requested
/// and never grows.
///
/// # Example
///
/// ```
/// use circlet::{BoxedStorage, Storage};
///
/// let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(100);
///
/// let key = storage.try_insert(42).unwrap();
/// assert_eq!(storage.get(key), Some(&42));
///
/// assert_eq!(storage.remove(key), Some(42));
/// assert_eq!(storage.get(key), None);
/// ```
pub struct BoxedStorage<T, K: Key = u32> {
    slots: Box<[Slot<T, K>]>,
    next_free: K,
    len: usize,
}

impl<T, K: Key> BoxedStorage<T, K> {
    /// Creates storage with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or would collide with the key type's
    /// sentinel value.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        assert!(
            capacity < K::NONE.as_usize(),
            "capacity exceeds key type maximum"
        );

        let mut slots = Vec::with_capacity(capacity);
        for i in 0..capacity {
            let next_free = if i + 1 == capacity {
                K::NONE
            } else {
                K::from_usize(i + 1)
            };
            slots.push(Slot::Vacant { next_free });
        }

        Self {
            slots: slots.into_boxed_slice(),
            next_free: K::from_usize(0),
            len: 0,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if all slots are occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.next_free.is_none()
    }
}

impl<T, K: Key> Storage<T> for BoxedStorage<T, K> {
    type Key = K;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<K, Full<T>> {
        if self.next_free.is_none() {
            return Err(Full(value));
        }

        let key = self.next_free;
        let slot = &mut self.slots[key.as_usize()];
        match *slot {
            Slot::Vacant { next_free } => self.next_free = next_free,
            Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
        }
        *slot = Slot::Occupied(value);
        self.len += 1;

        Ok(key)
    }

    #[inline]
    fn remove(&mut self, key: K) -> Option<T> {
        let i = key.as_usize();
        if i >= self.slots.len() || matches!(self.slots[i], Slot::Vacant { .. }) {
            return None;
        }

        let slot = core::mem::replace(
            &mut self.slots[i],
            Slot::Vacant {
                next_free: self.next_free,
            },
        );
        self.next_free = key;
        self.len -= 1;

        match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<usize, Full<T>> {
        Ok(self.insert(value))
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        self.get(key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.get_mut(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let storage: BoxedStorage<u64> = BoxedStorage::with_capacity(16);
        assert!(storage.is_empty());
        assert!(!storage.is_full());
        assert_eq!(storage.len(), 0);
        assert_eq!(storage.capacity(), 16);
    }

    #[test]
    fn insert_get_remove() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(16);

        let key = storage.try_insert(42).unwrap();
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get(key), Some(&42));

        assert_eq!(storage.remove(key), Some(42));
        assert_eq!(storage.get(key), None);
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn get_mut() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(16);

        let key = storage.try_insert(10).unwrap();
        *storage.get_mut(key).unwrap() = 20;

        assert_eq!(storage.get(key), Some(&20));
    }

    #[test]
    fn fill_to_capacity() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(4);

        let k0 = storage.try_insert(0).unwrap();
        let k1 = storage.try_insert(1).unwrap();
        let k2 = storage.try_insert(2).unwrap();
        let k3 = storage.try_insert(3).unwrap();

        assert!(storage.is_full());

        let err = storage.try_insert(4);
        assert_eq!(err, Err(Full(4)));
        assert_eq!(err.unwrap_err().into_inner(), 4);

        assert_eq!(storage.get(k0), Some(&0));
        assert_eq!(storage.get(k1), Some(&1));
        assert_eq!(storage.get(k2), Some(&2));
        assert_eq!(storage.get(k3), Some(&3));
    }

    #[test]
    fn slot_reuse() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(4);

        let k0 = storage.try_insert(0).unwrap();
        let _k1 = storage.try_insert(1).unwrap();

        storage.remove(k0);

        // Next insert reuses k0's slot (LIFO)
        let k2 = storage.try_insert(2).unwrap();
        assert_eq!(k2, k0);
    }

    #[test]
    fn remove_nonexistent() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(16);

        let key = storage.try_insert(42).unwrap();
        storage.remove(key);

        // Double remove returns None
        assert_eq!(storage.remove(key), None);

        // Out-of-bounds key returns None
        assert_eq!(storage.remove(1000), None);
    }

    #[test]
    fn u16_key() {
        let mut storage: BoxedStorage<u64, u16> = BoxedStorage::with_capacity(100);

        let key = storage.try_insert(42).unwrap();
        assert_eq!(storage.get(key), Some(&42));
    }

    #[test]
    fn drop_cleans_up() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug)]
        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);

        {
            let mut storage: BoxedStorage<DropCounter> = BoxedStorage::with_capacity(8);
            storage.try_insert(DropCounter).unwrap();
            storage.try_insert(DropCounter).unwrap();
            storage.try_insert(DropCounter).unwrap();
        }

        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 3);
    }

    #[cfg(feature = "slab")]
    mod slab_tests {
        use super::*;

        #[test]
        fn insert_get_remove() {
            let mut storage = slab::Slab::new();

            let key = storage.try_insert(42).unwrap();
            assert_eq!(Storage::get(&storage, key), Some(&42));

            assert_eq!(Storage::remove(&mut storage, key), Some(42));
            assert_eq!(Storage::get(&storage, key), None);
        }

        #[test]
        fn slot_reuse() {
            let mut storage = slab::Slab::new();

            let k1 = storage.try_insert(1).unwrap();
            Storage::remove(&mut storage, k1);

            let k2 = storage.try_insert(2).unwrap();
            assert_eq!(k1, k2);
        }
    }
}
