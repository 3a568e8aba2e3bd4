//! Sentinel-based key trait for zero-cost optional indices.
//!
//! Links inside nodes use a reserved sentinel value (e.g. `u32::MAX`) instead
//! of `Option<K>`, so a link pair costs exactly two integers.

/// A copyable key type with a sentinel "none" value.
///
/// Keys identify slots in caller-provided [`Storage`](crate::Storage) and
/// double as the non-owning references held by the containers in this crate.
///
/// # Example
///
/// ```
/// use circlet::Key;
///
/// let key: u32 = 5;
/// let none: u32 = u32::NONE;
///
/// assert!(key.is_some());
/// assert!(none.is_none());
/// ```
pub trait Key: Copy + Eq {
    /// Sentinel value representing "no key" / null.
    ///
    /// For the integer impls this is `MAX`, which is therefore never a valid
    /// slot index.
    const NONE: Self;

    /// Creates a key from a `usize` slot index.
    fn from_usize(val: usize) -> Self;

    /// Returns the key as a `usize` slot index.
    fn as_usize(self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64, usize);
