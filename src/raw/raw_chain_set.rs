use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// The untyped-surface core of the set: an arena of nodes threaded onto an
/// ascending right-going chain, with `root` naming the current head.
///
/// The structure descends from a container written in binary-search-tree
/// vocabulary whose live links never actually branch: `right` is the sorted
/// successor chain and `left` a best-effort back-link. The algorithms here
/// reproduce that container's observable behavior exactly, splices, root
/// reassignments, stale back-links and all; only the recursion of the source
/// has been flattened into loops so chain length cannot exhaust the stack.
pub(crate) struct RawChainSet<K> {
    arena: Arena<Node<K>>,
    root: Option<Handle>,
}

impl<K> RawChainSet<K> {
    /// The largest number of elements any chain can hold, bounded by the
    /// handle width rather than by available memory.
    pub(crate) const MAX_LEN: usize = Handle::MAX;

    pub(crate) const fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Every live arena slot is a chain node, so the arena count is the
    /// element count.
    pub(crate) const fn len(&self) -> usize {
        self.arena.len()
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn key(&self, node: Handle) -> &K {
        self.arena.get(node).key()
    }

    #[inline]
    pub(crate) fn key_mut(&mut self, node: Handle) -> &mut K {
        self.arena.get_mut(node).key_mut()
    }

    #[inline]
    pub(crate) fn left(&self, node: Handle) -> Option<Handle> {
        self.arena.get(node).left()
    }

    #[inline]
    pub(crate) fn right(&self, node: Handle) -> Option<Handle> {
        self.arena.get(node).right()
    }

    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Inserts `key`, returning the node the insertion lands on (the new node,
    /// or the existing duplicate) and whether a node was created.
    ///
    /// Faithful to the source in all of its asymmetry:
    ///
    /// - A key below the root splices a new head in front of the chain and
    ///   reassigns the root, but only when the root's back-link is clear. A
    ///   root promoted by an earlier head removal keeps its stale back-link,
    ///   and from then on every below-root key is silently dropped: no node,
    ///   `(None, false)`.
    /// - A key above the root is appended or spliced into the right chain at
    ///   its sorted position.
    /// - A duplicate anywhere on the descent is a no-op.
    pub(crate) fn insert(&mut self, key: K) -> (Option<Handle>, bool)
    where
        K: Ord,
    {
        let Some(root) = self.root else {
            let head = self.arena.alloc(Node::new(key));
            self.root = Some(head);
            return (Some(head), true);
        };

        match key.cmp(self.arena.get(root).key()) {
            Ordering::Equal => (Some(root), false),
            Ordering::Less => {
                if self.arena.get(root).left().is_some() {
                    // Stale back-link on the head; the key is dropped.
                    return (None, false);
                }
                let head = self.arena.alloc(Node::new(key));
                self.arena.get_mut(head).set_right(Some(root));
                self.arena.get_mut(root).set_left(Some(head));
                self.root = Some(head);
                (Some(head), true)
            }
            Ordering::Greater => self.insert_after(root, key),
        }
    }

    /// Walks the right chain from `node` (whose key is known to be below
    /// `key`) and links `key` at its sorted position.
    fn insert_after(&mut self, mut node: Handle, key: K) -> (Option<Handle>, bool)
    where
        K: Ord,
    {
        loop {
            let Some(next) = self.arena.get(node).right() else {
                // End of the chain; append.
                let new = self.arena.alloc(Node::new(key));
                self.arena.get_mut(new).set_left(Some(node));
                self.arena.get_mut(node).set_right(Some(new));
                return (Some(new), true);
            };

            match key.cmp(self.arena.get(next).key()) {
                Ordering::Equal => return (Some(next), false),
                Ordering::Less => {
                    // Splice between `node` and `next`.
                    let new = self.arena.alloc(Node::new(key));
                    let spliced = self.arena.get_mut(new);
                    spliced.set_left(Some(node));
                    spliced.set_right(Some(next));
                    self.arena.get_mut(node).set_right(Some(new));
                    self.arena.get_mut(next).set_left(Some(new));
                    return (Some(new), true);
                }
                Ordering::Greater => node = next,
            }
        }
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut node = self.root;
        while let Some(current) = node {
            match key.cmp(self.arena.get(current).key().borrow()) {
                Ordering::Greater => node = self.arena.get(current).right(),
                Ordering::Equal => return Some(current),
                // The chain is ascending, so the key cannot appear further right.
                Ordering::Less => return None,
            }
        }
        None
    }

    /// Removes the node whose key equals the key stored at `target`, searching
    /// from the root as the source does. Returns whether a node was freed.
    ///
    /// Removing the head promotes its right neighbor to root *without*
    /// clearing the neighbor's back-link; removing an interior node redirects
    /// the predecessor's right link past it and likewise leaves the follower's
    /// back-link stale. Both are preserved source behavior and are what arms
    /// the drop case of [`Self::insert`].
    pub(crate) fn remove_at(&mut self, target: Handle) -> bool
    where
        K: Ord,
    {
        let Some(root) = self.root else {
            return false;
        };

        if self.key_cmp(root, target) == Ordering::Equal {
            self.root = self.arena.get(root).right();
            self.arena.free(root);
            return true;
        }

        let mut node = root;
        while let Some(next) = self.arena.get(node).right() {
            match self.key_cmp(target, next) {
                Ordering::Greater => node = next,
                Ordering::Equal => {
                    let after = self.arena.get(next).right();
                    self.arena.get_mut(node).set_right(after);
                    self.arena.free(next);
                    return true;
                }
                Ordering::Less => return false,
            }
        }
        false
    }

    /// Drains `other` in ascending order, re-inserting each key into `self`.
    ///
    /// Duplicates (and keys lost to the head-drop case of [`Self::insert`])
    /// simply vanish; `other` ends empty either way.
    pub(crate) fn merge(&mut self, other: &mut Self)
    where
        K: Ord,
    {
        let mut node = other.root.take();
        while let Some(current) = node {
            let (key, right) = other.arena.take(current).into_parts();
            node = right;
            let _ = self.insert(key);
        }
        other.clear();
    }

    /// Consumes the chain into a `Vec` of keys in ascending order.
    pub(crate) fn into_ordered(mut self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut node = self.root.take();
        while let Some(current) = node {
            let (key, right) = self.arena.take(current).into_parts();
            keys.push(key);
            node = right;
        }
        keys
    }

    #[inline]
    fn key_cmp(&self, a: Handle, b: Handle) -> Ordering
    where
        K: Ord,
    {
        self.arena.get(a).key().cmp(self.arena.get(b).key())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec::Vec;

    use proptest::prelude::*;

    use super::*;

    fn keys(set: &RawChainSet<i64>) -> Vec<i64> {
        let mut out = Vec::new();
        let mut node = set.root();
        while let Some(current) = node {
            out.push(*set.key(current));
            node = set.right(current);
        }
        out
    }

    #[test]
    fn front_splice_reassigns_root() {
        let mut set = RawChainSet::new();
        assert!(set.insert(5).1);
        assert!(set.insert(3).1);
        assert!(set.insert(1).1);
        // Each below-root key became the new head; no key was lost.
        assert_eq!(keys(&set), [1, 3, 5]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn head_removal_arms_the_drop() {
        let mut set = RawChainSet::new();
        for key in [1, 2, 3] {
            set.insert(key);
        }
        let head = set.find(&1).unwrap();
        assert!(set.remove_at(head));
        // The promoted root kept its stale back-link, so below-root keys are
        // now dropped without a trace.
        assert_eq!(set.insert(0), (None, false));
        assert_eq!(keys(&set), [2, 3]);
        assert_eq!(set.len(), 2);
        // Above-root insertion is unaffected.
        assert!(set.insert(4).1);
        assert_eq!(keys(&set), [2, 3, 4]);
    }

    #[test]
    fn interior_removal_splices_the_chain() {
        let mut set = RawChainSet::new();
        for key in [1, 2, 3, 4] {
            set.insert(key);
        }
        let mid = set.find(&3).unwrap();
        assert!(set.remove_at(mid));
        assert_eq!(keys(&set), [1, 2, 4]);
        // A second removal of the same key finds nothing.
        assert_eq!(set.find(&3), None);
    }

    #[test]
    fn merge_drains_the_source() {
        let mut a = RawChainSet::new();
        let mut b = RawChainSet::new();
        for key in [1, 2, 3] {
            a.insert(key);
        }
        for key in [2, 3, 4, 5, 0] {
            b.insert(key);
        }
        a.merge(&mut b);
        assert_eq!(keys(&a), [0, 1, 2, 3, 4, 5]);
        assert_eq!(b.len(), 0);
        assert_eq!(b.root(), None);
    }

    proptest! {
        /// No insertion order may ever break the ascending-chain invariant,
        /// drops and duplicates included.
        #[test]
        fn chain_stays_strictly_ascending(values in proptest::collection::vec(-100i64..100, 0..64)) {
            let mut set = RawChainSet::new();
            for value in values {
                set.insert(value);
            }
            let out = keys(&set);
            prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(out.len(), set.len());
        }

        /// Insert-only workloads never hit the drop case, so the chain must
        /// contain exactly the distinct values.
        #[test]
        fn insert_only_keeps_every_distinct_value(values in proptest::collection::vec(-100i64..100, 0..64)) {
            let mut set = RawChainSet::new();
            let mut model: Vec<i64> = Vec::new();
            for value in values {
                let (node, inserted) = set.insert(value);
                prop_assert_eq!(inserted, !model.contains(&value));
                prop_assert!(node.is_some());
                if inserted {
                    model.push(value);
                }
            }
            model.sort_unstable();
            prop_assert_eq!(keys(&set), model);
        }

        /// `into_ordered` yields the same sequence a forward walk does.
        #[test]
        fn into_ordered_matches_walk(values in proptest::collection::vec(-100i64..100, 0..64)) {
            let mut set = RawChainSet::new();
            for value in values {
                set.insert(value);
            }
            let walked = keys(&set);
            prop_assert_eq!(set.into_ordered(), walked);
        }
    }
}
