#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod ordered_map;
#[cfg(feature = "serde")]
mod serde_support;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

/// A hash map that preserves the order in which keys were first inserted,
/// implemented as a doubly-linked list backed by a hash table for O(1)
/// lookups.
///
/// This is the main type alias using the default hasher. For custom hashers,
/// use [`ordered_map::OrderedMap`] directly.
///
/// # Examples
///
/// ```
/// use strand_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// // Maintains insertion order
/// let entries: Vec<_> = map.iter().collect();
/// assert_eq!(entries, [(&"a", &1), (&"b", &2)]);
/// ```
pub type OrderedMap<K, V> = crate::ordered_map::OrderedMap<K, V, RandomState>;
use core::num::NonZeroU32;

pub use ordered_map::Entry;
pub use ordered_map::IntoIter;
pub use ordered_map::Iter;
pub use ordered_map::IterMut;
pub use ordered_map::OccupiedEntry;
pub use ordered_map::VacantEntry;
pub use ordered_map::ValuesMut;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
/// A handle identifying one entry in an ordered map.
///
/// This is an opaque handle that can be used to access entries directly
/// without a key lookup. It is **non-generational**, meaning that once an
/// entry is removed, the handle may be re-used for a new entry.
///
/// Handles are not disturbed by [`reverse`] or the sort family. Those
/// operations relink the list without moving entries, so a handle obtained
/// before reordering still resolves to the same entry afterwards.
///
/// [`reverse`]: ordered_map::OrderedMap::reverse
///
/// # Examples
///
/// ```
/// use strand_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("key", 42);
///
/// let ptr = map.get_ptr(&"key").unwrap();
/// assert_eq!(map.ptr_get(ptr), Some(&42));
/// ```
pub struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    /// Slot 0 of every arena: the list anchor. Never stored in the index and
    /// never yielded to callers.
    pub(crate) const SENTINEL: Ptr = Ptr(NonZeroU32::MIN);

    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}
