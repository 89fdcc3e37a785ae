use super::handle::Handle;

/// A single element of the chain: one key and two optional links.
///
/// `right` points at the successor in ascending order and is the backbone of
/// every traversal. `left` is only a back-link: it exists for reverse stepping
/// and is deliberately allowed to go stale when a neighbor is spliced out (see
/// `RawChainSet::remove_at`). Nothing on the forward path ever reads it.
pub(crate) struct Node<K> {
    key: K,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K> Node<K> {
    pub(crate) const fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn key_mut(&mut self) -> &mut K {
        &mut self.key
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) const fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    pub(crate) const fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    /// Consumes the node, returning the key and the right link.
    ///
    /// Used when draining a chain in ascending order; the back-link is of no
    /// use to a consumer that only walks forward.
    pub(crate) fn into_parts(self) -> (K, Option<Handle>) {
        (self.key, self.right)
    }
}
