//! An ordered-set collection backed by a spliced chain.
//!
//! This crate provides [`ChainSet`], an ordered set of unique keys whose
//! storage is an arena of singly-allocated nodes threaded onto an ascending
//! right-going chain with back-links for reverse stepping. It reproduces the
//! traversal semantics of the hand-rolled container it is modeled on,
//! including the places where those semantics depart from a canonical
//! balanced binary search tree (see [`ChainSet::insert`]).
//!
//! # Example
//!
//! ```
//! use chain_set::ChainSet;
//!
//! let mut set = ChainSet::new();
//! set.insert(3);
//! set.insert(1);
//! set.insert(2);
//! set.insert(2); // duplicate, ignored
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&2));
//!
//! // Forward traversal is always strictly ascending.
//! let items: Vec<_> = set.iter().copied().collect();
//! assert_eq!(items, [1, 2, 3]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **One arena slot per element** - Stable [`Cursor`] positions that survive
//!   unrelated mutations
//! - **Bidirectional stepping** - Cursors follow the chain forward and backward
//!
//! # Implementation
//!
//! The set is *not* balanced and does not rebalance; every operation walks the
//! ascending chain, so insertion, lookup and removal are O(n). Elements live in
//! slots of a `Vec`-backed arena addressed by niche-optimized handles, which is
//! what lets cursors be plain copyable tokens instead of borrowed pointers.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod chain_set;

pub use chain_set::{ChainSet, Cursor};
