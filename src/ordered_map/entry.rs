use hashbrown::hash_table;

use crate::Ptr;
use crate::arena::Arena;

/// A view into a single entry in a map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`OrderedMap`].
///
/// [`entry`]: super::OrderedMap::entry
/// [`OrderedMap`]: super::OrderedMap
///
/// # Examples
///
/// ```
/// use strand_map::Entry;
/// use strand_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
///
/// match map.entry("key") {
///     Entry::Vacant(entry) => {
///         entry.insert("value");
///     }
///     Entry::Occupied(entry) => {
///         println!("Key already exists: {}", entry.get());
///     }
/// }
/// ```
pub enum Entry<'a, K, T> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, T>),

    /// A vacant entry.
    Vacant(VacantEntry<'a, K, T>),
}

impl<'a, K, T> Entry<'a, K, T> {
    /// Ensures a value is in the entry by inserting the provided default if
    /// vacant, and returns a mutable reference to the value in the entry.
    ///
    /// When inserting, the new entry is appended at the end of the iteration
    /// order, matching the behavior of `insert` for new keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// *map.entry("counter").or_insert(0) += 1;
    /// *map.entry("counter").or_insert(0) += 1;
    /// assert_eq!(map.get(&"counter"), Some(&2));
    /// ```
    #[inline]
    pub fn or_insert(self, default: T) -> &'a mut T {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the
    /// provided function if vacant, and returns a mutable reference to the
    /// value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, Vec<i32>> = OrderedMap::new();
    /// map.entry("list").or_insert_with(Vec::new).push(1);
    /// assert_eq!(map.get(&"list"), Some(&vec![1]));
    /// ```
    #[inline]
    pub fn or_insert_with<F: FnOnce() -> T>(self, default: F) -> &'a mut T {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Ensures a value is in the entry by inserting the default value if
    /// vacant, and returns a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    /// map.entry("missing").or_default();
    /// assert_eq!(map.get(&"missing"), Some(&0));
    /// ```
    #[inline]
    pub fn or_default(self) -> &'a mut T
    where
        T: Default,
    {
        self.or_insert_with(T::default)
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("key", 1);
    ///
    /// map.entry("key").and_modify(|v| *v += 10).or_insert(0);
    /// assert_eq!(map.get(&"key"), Some(&11));
    ///
    /// map.entry("other").and_modify(|v| *v += 10).or_insert(0);
    /// assert_eq!(map.get(&"other"), Some(&0));
    /// ```
    #[inline]
    pub fn and_modify<F: FnOnce(&mut T)>(self, f: F) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

/// A view into an occupied entry in an `OrderedMap`. It is part of the
/// [`Entry`] enum.
pub struct OccupiedEntry<'a, K, T> {
    pub(crate) slots: &'a mut Arena<K, T>,
    pub(crate) entry: hash_table::OccupiedEntry<'a, Ptr>,
}

impl<'a, K, T> OccupiedEntry<'a, K, T> {
    /// Returns the handle of this entry.
    pub fn ptr(&self) -> Ptr {
        *self.entry.get()
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        &self.slots.node(self.ptr()).key
    }

    /// Returns a reference to this entry's value.
    pub fn get(&self) -> &T {
        &self.slots.node(self.ptr()).value
    }

    /// Returns a mutable reference to this entry's value.
    pub fn get_mut(&mut self) -> &mut T {
        let ptr = self.ptr();
        &mut self.slots.node_mut(ptr).value
    }

    /// Converts the entry into a mutable reference to its value, with a
    /// lifetime bound to the map itself.
    pub fn into_mut(self) -> &'a mut T {
        let OccupiedEntry { slots, entry } = self;
        let ptr = *entry.get();
        &mut slots.node_mut(ptr).value
    }

    /// Replaces this entry's value, returning the old value. The entry keeps
    /// its position in the iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_map::Entry;
    /// use strand_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("key", 1);
    ///
    /// if let Entry::Occupied(mut entry) = map.entry("key") {
    ///     assert_eq!(entry.insert(2), 1);
    /// }
    /// assert_eq!(map.get(&"key"), Some(&2));
    /// ```
    pub fn insert(&mut self, value: T) -> T {
        core::mem::replace(self.get_mut(), value)
    }

    /// Removes this entry from the map, returning its key and value.
    pub fn remove_entry(self) -> (K, T) {
        let OccupiedEntry { slots, entry } = self;
        let (ptr, _) = entry.remove();
        let node = slots.free_and_unlink(ptr);
        (node.key, node.value)
    }

    /// Removes this entry from the map, returning its value.
    pub fn remove(self) -> T {
        self.remove_entry().1
    }
}

/// A view into a vacant entry in an `OrderedMap`. It is part of the
/// [`Entry`] enum.
pub struct VacantEntry<'a, K, T> {
    pub(crate) slots: &'a mut Arena<K, T>,
    pub(crate) entry: hash_table::VacantEntry<'a, Ptr>,
    pub(crate) hash: u64,
    pub(crate) key: K,
}

impl<'a, K, T> VacantEntry<'a, K, T> {
    /// Returns a reference to the key that would be used when inserting.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key, leaving the entry unused.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the entry's key with the given value, appended at the end of
    /// the iteration order, and returns a mutable reference to the value.
    pub fn insert(self, value: T) -> &'a mut T {
        let VacantEntry {
            slots,
            entry,
            hash,
            key,
        } = self;
        let ptr = slots.push_back(hash, key, value);
        entry.insert(ptr);
        &mut slots.node_mut(ptr).value
    }
}
