use super::ChainSet;
use crate::raw::RawChainSet;

impl<T> ChainSet<T> {
    /// Creates an empty set with arena capacity for at least `capacity`
    /// elements.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set: ChainSet<i32> = ChainSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ChainSet {
            raw: RawChainSet::with_capacity(capacity),
        }
    }

    /// Returns the current arena capacity of the set.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set: ChainSet<i32> = ChainSet::with_capacity(32);
    /// assert!(set.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
