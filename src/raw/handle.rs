use core::num::NonZero;

type RawHandle = u32;

/// A stable index of a node slot in the arena.
///
/// Stored shifted by one so that `Option<Handle>` benefits from the niche
/// optimization and a chain node's two links cost no more than two words.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        // SAFETY: `index + 1` cannot be zero and cannot overflow.
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as RawHandle).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Verify our assumptions about `Handle` and the niche optimization.
    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Handle, RawHandle);

    #[test]
    #[should_panic(expected = "`Handle::from_index()` - `index` > `Handle::MAX`!")]
    fn index_past_max() {
        let _ = Handle::from_index(Handle::MAX + 1);
    }

    #[test]
    fn max_is_representable() {
        let handle = Handle::from_index(Handle::MAX);
        assert_eq!(handle.to_index(), Handle::MAX);
    }

    proptest! {
        #[test]
        fn index_round_trip(index in 0..=Handle::MAX) {
            prop_assert_eq!(Handle::from_index(index).to_index(), index);
        }

        #[test]
        fn distinct_indices_give_distinct_handles(a in 0..=Handle::MAX, b in 0..=Handle::MAX) {
            prop_assert_eq!(Handle::from_index(a) == Handle::from_index(b), a == b);
        }
    }
}
