use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;

use crate::raw::{Handle, RawChainSet};

mod capacity;

/// An ordered set of unique keys backed by a spliced chain.
///
/// Elements are stored one per arena slot and threaded onto a single
/// right-going chain in ascending order, with back-links for reverse
/// stepping. The set does not balance anything: insertion, lookup and removal
/// walk the chain, so they are O(n), and positions are exposed as copyable
/// [`Cursor`] tokens rather than borrowed pointers.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the [`Ord`]
/// trait, changes while it is in the set (possible through
/// [`get_mut`](ChainSet::get_mut)). The behavior resulting from such a logic
/// error is not specified, but will be encapsulated to the `ChainSet` that
/// observed it and will not result in undefined behavior.
///
/// # Preserved quirk
///
/// This container reproduces its source semantics faithfully, including one
/// deliberate departure from what a search tree would do: removing the
/// minimum element promotes its successor to the head of the chain *without
/// clearing the successor's back-link*. From that point on, inserting any key
/// below the new minimum is silently dropped - [`insert`](ChainSet::insert)
/// returns `(end, false)` and the set is unchanged. See `insert` for details.
///
/// # Examples
///
/// ```
/// use chain_set::ChainSet;
///
/// let mut books = ChainSet::new();
///
/// // Add some books.
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// // Check for a specific one.
/// if !books.contains(&"The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.",
///              books.len());
/// }
///
/// // Remove a book.
/// books.erase(books.find(&"The Odyssey"));
///
/// // Iterate over everything.
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// A `ChainSet` with a known list of items can be initialized from an array:
///
/// ```
/// use chain_set::ChainSet;
///
/// let set = ChainSet::from([1, 2, 3]);
/// ```
pub struct ChainSet<T> {
    raw: RawChainSet<T>,
}

/// A position in a [`ChainSet`]: either one of its elements or the end
/// sentinel.
///
/// A `Cursor` is a plain copyable token, not a borrow; dereferencing and
/// stepping go through the owning set ([`ChainSet::get`], [`ChainSet::next`],
/// [`ChainSet::prev`]). Two cursors are equal when they name the same node,
/// and any two end sentinels are equal.
///
/// A cursor is invalidated the instant the element it names is removed (or
/// the set is cleared); there is no generation check, so using an invalidated
/// cursor may panic or observe an unrelated element that recycled the slot.
///
/// # Examples
///
/// ```
/// use chain_set::ChainSet;
///
/// let set = ChainSet::from([1, 2, 3]);
/// let mut pos = set.begin();
/// assert_eq!(set.get(pos), Some(&1));
///
/// pos = set.next(pos);
/// pos = set.next(pos);
/// assert_eq!(set.get(pos), Some(&3));
///
/// pos = set.next(pos);
/// assert_eq!(pos, set.end());
/// assert_eq!(set.get(pos), None);
/// ```
pub struct Cursor<T> {
    node: Option<Handle>,
    marker: PhantomData<fn() -> T>,
}

/// An iterator over the items of a `ChainSet` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`ChainSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use chain_set::ChainSet;
///
/// let set = ChainSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: ChainSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    set: &'a ChainSet<T>,
    node: Option<Handle>,
    remaining: usize,
}

/// An owning iterator over the items of a `ChainSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`ChainSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// # Examples
///
/// ```
/// use chain_set::ChainSet;
///
/// let set = ChainSet::from([1, 2, 3]);
/// let mut iter = set.into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), Some(3));
/// ```
///
/// [`into_iter`]: ChainSet#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> ChainSet<T> {
    /// Makes a new, empty `ChainSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    ///
    /// // entries can now be inserted into the empty set
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> ChainSet<T> {
        ChainSet {
            raw: RawChainSet::new(),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// assert!(set.is_empty());
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the largest number of elements the set could ever hold.
    ///
    /// This is the static bound imposed by the handle width of the node
    /// arena, not a function of available memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set: ChainSet<i32> = ChainSet::new();
    /// assert!(set.max_size() >= u32::MAX as usize - 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn max_size(&self) -> usize {
        RawChainSet::<T>::MAX_LEN
    }

    /// Clears the set, removing all elements.
    ///
    /// Every outstanding [`Cursor`] into this set is invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let mut v = ChainSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a cursor over the first element in the chain, or the end
    /// sentinel when the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set = ChainSet::from([2, 1]);
    /// assert_eq!(set.get(set.begin()), Some(&1));
    ///
    /// let empty: ChainSet<i32> = ChainSet::new();
    /// assert_eq!(empty.begin(), empty.end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn begin(&self) -> Cursor<T> {
        Cursor {
            node: self.raw.root(),
            marker: PhantomData,
        }
    }

    /// Returns the end sentinel cursor.
    ///
    /// The sentinel names no element; [`get`](ChainSet::get) returns `None`
    /// for it and stepping it is a no-op.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn end(&self) -> Cursor<T> {
        Cursor {
            node: None,
            marker: PhantomData,
        }
    }

    /// Returns a reference to the element at `pos`, or `None` at the end
    /// sentinel.
    ///
    /// # Panics
    ///
    /// May panic if `pos` has been invalidated by a removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set = ChainSet::from([1, 2]);
    /// assert_eq!(set.get(set.find(&2)), Some(&2));
    /// assert_eq!(set.get(set.end()), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn get(&self, pos: Cursor<T>) -> Option<&T> {
        pos.node.map(|node| self.raw.key(node))
    }

    /// Returns a mutable reference to the element at `pos`, or `None` at the
    /// end sentinel.
    ///
    /// Changing the element's order relative to the rest of the set through
    /// this reference is a logic error: the chain is not re-sorted and later
    /// lookups may miss elements. See the type-level documentation.
    ///
    /// # Panics
    ///
    /// May panic if `pos` has been invalidated by a removal.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn get_mut(&mut self, pos: Cursor<T>) -> Option<&mut T> {
        pos.node.map(|node| self.raw.key_mut(node))
    }

    /// Steps `pos` forward to its ascending successor.
    ///
    /// Stepping the end sentinel yields the end sentinel.
    ///
    /// # Panics
    ///
    /// May panic if `pos` has been invalidated by a removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set = ChainSet::from([1, 2]);
    /// let pos = set.next(set.begin());
    /// assert_eq!(set.get(pos), Some(&2));
    /// assert_eq!(set.next(pos), set.end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn next(&self, pos: Cursor<T>) -> Cursor<T> {
        Cursor {
            node: pos.node.and_then(|node| self.raw.right(node)),
            marker: PhantomData,
        }
    }

    /// Steps `pos` backward along the back-links.
    ///
    /// Stepping the end sentinel yields the end sentinel; stepping the first
    /// element yields the end sentinel as well. Back-links are best-effort:
    /// a removal next to `pos` may leave its back-link stale (see
    /// [`erase`](ChainSet::erase)), in which case stepping backward over the
    /// removal site is not supported.
    ///
    /// # Panics
    ///
    /// May panic if `pos`, or the back-link at `pos`, has been invalidated by
    /// a removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set = ChainSet::from([1, 2, 3]);
    /// let pos = set.find(&3);
    /// assert_eq!(set.get(set.prev(pos)), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn prev(&self, pos: Cursor<T>) -> Cursor<T> {
        Cursor {
            node: pos.node.and_then(|node| self.raw.left(node)),
            marker: PhantomData,
        }
    }

    /// Gets an iterator that visits the elements in the `ChainSet` in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set = ChainSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) to create; each step is O(1).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            set: self,
            node: self.raw.root(),
            remaining: self.len(),
        }
    }

    /// Swaps the contents of two sets in constant time.
    ///
    /// Cursors keep naming the elements they named before the swap, which now
    /// live in the other set.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let mut a = ChainSet::from([1, 2, 3]);
    /// let mut b = ChainSet::from([4, 5, 6, 8]);
    /// a.swap(&mut b);
    /// assert_eq!(set_to_vec(&a), [4, 5, 6, 8]);
    /// assert_eq!(set_to_vec(&b), [1, 2, 3]);
    ///
    /// fn set_to_vec(set: &ChainSet<i32>) -> Vec<i32> {
    ///     set.iter().copied().collect()
    /// }
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn swap(&mut self, other: &mut ChainSet<T>) {
        mem::swap(self, other);
    }
}

impl<T: Ord> ChainSet<T> {
    /// Adds a value to the set.
    ///
    /// Returns a cursor to where the value now lives together with whether a
    /// new element was created, like the `(iterator, bool)` pair of the
    /// container this set reproduces:
    ///
    /// - A fresh value yields `(cursor to it, true)`.
    /// - A value already present yields `(cursor to the existing element,
    ///   false)` and the set is unchanged.
    /// - A value below the current minimum, inserted after an
    ///   [`erase`](ChainSet::erase) of the minimum armed the head's stale
    ///   back-link, is *silently dropped*: `(end sentinel, false)`. This is
    ///   preserved source behavior, not a defect to fix here; see the
    ///   type-level documentation.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    ///
    /// let (pos, inserted) = set.insert(2);
    /// assert!(inserted);
    /// assert_eq!(set.get(pos), Some(&2));
    ///
    /// let (pos, inserted) = set.insert(2);
    /// assert!(!inserted);
    /// assert_eq!(set.get(pos), Some(&2));
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// The dropped case:
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::from([1, 2, 3]);
    /// set.erase(set.find(&1)); // removes the head of the chain
    ///
    /// let (pos, inserted) = set.insert(0);
    /// assert!(!inserted);
    /// assert_eq!(pos, set.end());
    /// assert!(!set.contains(&0)); // 0 was dropped
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn insert(&mut self, value: T) -> (Cursor<T>, bool) {
        let (node, inserted) = self.raw.insert(value);
        (
            Cursor {
                node,
                marker: PhantomData,
            },
            inserted,
        )
    }

    /// Inserts every value of `values` in order, ignoring duplicates.
    ///
    /// The variadic `insert_many` of the source container, rendered over any
    /// iterable sequence. Equivalent to [`Extend::extend`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// set.insert_many([3, 1, 2, 1]);
    /// assert_eq!(set.len(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) per value inserted.
    pub fn insert_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            let _ = self.insert(value);
        }
    }

    /// Removes the element whose key equals the one at `pos`.
    ///
    /// A no-op when `pos` is the end sentinel, so `set.erase(set.find(&k))`
    /// removes `k` when present and does nothing otherwise. The removal
    /// splices the element out of the forward chain but leaves its follower's
    /// back-link untouched; in particular, erasing the minimum arms the
    /// preserved drop quirk of [`insert`](ChainSet::insert).
    ///
    /// Cursors to the removed element are invalidated.
    ///
    /// # Panics
    ///
    /// May panic if `pos` has been invalidated by an earlier removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::from([1, 2, 3]);
    /// set.erase(set.find(&2));
    /// set.erase(set.find(&52)); // absent, no-op
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.contains(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn erase(&mut self, pos: Cursor<T>) {
        if let Some(target) = pos.node {
            let _ = self.raw.remove_at(target);
        }
    }

    /// Moves every element of `other` into `self`, in `other`'s ascending
    /// order, leaving `other` empty.
    ///
    /// Elements already present in `self` (and elements lost to the preserved
    /// drop quirk of [`insert`](ChainSet::insert)) are discarded rather than
    /// returned to `other`: the source container empties `other`
    /// unconditionally, and so does this.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let mut a = ChainSet::from([1, 2, 3]);
    /// let mut b = ChainSet::from([2, 3, 4, 5, 0]);
    ///
    /// a.merge(&mut b);
    /// assert_eq!(a.len(), 6);
    /// assert!(b.is_empty());
    ///
    /// let items: Vec<_> = a.iter().copied().collect();
    /// assert_eq!(items, [0, 1, 2, 3, 4, 5]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(m * n) where m is `other.len()`.
    pub fn merge(&mut self, other: &mut ChainSet<T>) {
        self.raw.merge(&mut other.raw);
    }

    /// Returns a cursor to the element equal to `key`, or the end sentinel
    /// when no such element exists.
    ///
    /// The key may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set = ChainSet::from([1, 2, 3]);
    /// assert_eq!(set.get(set.find(&2)), Some(&2));
    /// assert_eq!(set.find(&4), set.end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Cursor<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Cursor {
            node: self.raw.find(key),
            marker: PhantomData,
        }
    }

    /// Returns `true` if the set contains an element equal to `key`.
    ///
    /// The key may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set = ChainSet::from([1, 2, 3]);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&4));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key) != self.end()
    }
}

impl<T> Default for ChainSet<T> {
    /// Creates an empty `ChainSet`.
    fn default() -> ChainSet<T> {
        ChainSet::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ChainSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord + Clone> Clone for ChainSet<T> {
    /// Deep copy: rebuilds an independent chain by re-inserting every element
    /// of an ascending traversal, as the source's copy constructor does. Any
    /// stale back-link state of `self` is deliberately not reproduced.
    fn clone(&self) -> ChainSet<T> {
        let mut copy = ChainSet::new();
        for item in self {
            let _ = copy.insert(item.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for ChainSet<T> {
    fn eq(&self, other: &ChainSet<T>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for ChainSet<T> {}

impl<T: Hash> Hash for ChainSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: Ord> Extend<T> for ChainSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<T: Ord> FromIterator<T> for ChainSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> ChainSet<T> {
        let mut set = ChainSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for ChainSet<T> {
    /// Converts a `[T; N]` into a `ChainSet<T>`, inserting each value in
    /// turn; duplicates are silently ignored.
    ///
    /// ```
    /// use chain_set::ChainSet;
    ///
    /// let set1 = ChainSet::from([1, 2, 3, 4]);
    /// let set2: ChainSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(values: [T; N]) -> ChainSet<T> {
        ChainSet::from_iter(values)
    }
}

impl<'a, T> IntoIterator for &'a ChainSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for ChainSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an owning iterator over the elements in ascending order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.into_ordered().into_iter(),
        }
    }
}

// Cursor impls are written out by hand: deriving them would demand the same
// bound of `T`, and a position token carries no `T` at all.

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Cursor<T> {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Cursor<T>) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => f.debug_tuple("Cursor").field(&node).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.node?;
        self.node = self.set.raw.right(node);
        self.remaining -= 1;
        Some(self.set.raw.key(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            set: self.set,
            node: self.node,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.inner.len()).finish()
    }
}
