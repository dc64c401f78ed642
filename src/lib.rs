//! An in-memory ordered index backed by a B+ tree, written in Rust.
//!
//! `rangetree` is a building block for indexing a dataset by some attribute:
//! it stores key-value pairs in key order and answers three flavors of range
//! query (`<=`, `==`, `>=`) by scanning a sorted chain of leaves, so a query
//! costs one `log_m N` descent plus a linear walk over the matching run.
//!
//! It is deliberately *not* a storage engine: there is no on-disk format, no
//! deletion, and no concurrency control (share a tree across threads only
//! under external exclusion).
//!
//! # Construct a Tree
//!
//! A tree is parameterized by its branching factor, the maximum number of
//! children an internal node may have. Factors of 2 or less are rejected —
//! the only loud failure in the API.
//!
//! ```
//! use rangetree::{BPTree, Error};
//!
//! let tree: BPTree<i32, String> = BPTree::new(5)?;
//! assert!(tree.is_empty());
//!
//! assert!(matches!(
//!     BPTree::<i32, String>::new(2),
//!     Err(Error::InvalidBranchingFactor(2)),
//! ));
//! # Ok::<(), rangetree::Error>(())
//! ```
//!
//! # Insert and Query
//!
//! Duplicate keys are preserved, not merged: inserting the same key twice
//! stores two pairs, and range queries return both.
//!
//! ```
//! use rangetree::BPTree;
//!
//! let mut tree = BPTree::new(5)?;
//! for (key, name) in [(3, "three"), (1, "one"), (7, "seven"), (3, "trois")] {
//!     tree.insert(key, name);
//! }
//!
//! // The textual comparator form mirrors the query language this index
//! // serves; anything unrecognized yields an empty result.
//! assert_eq!(tree.range_search(&3, ">="), vec![&"trois", &"three", &"seven"]);
//! assert_eq!(tree.range_search(&3, "=="), vec![&"trois", &"three"]);
//! assert_eq!(tree.range_search(&3, "<="), vec![&"one", &"trois", &"three"]);
//! assert!(tree.range_search(&3, "!=").is_empty());
//! # Ok::<(), rangetree::Error>(())
//! ```
//!
//! The typed form skips string parsing:
//!
//! ```
//! use rangetree::{BPTree, Comparator};
//!
//! let mut tree = BPTree::new(5)?;
//! tree.insert(10, "ten");
//! tree.insert(20, "twenty");
//!
//! assert_eq!(tree.range(&15, Comparator::GreaterOrEqual), vec![&"twenty"]);
//! # Ok::<(), rangetree::Error>(())
//! ```
//!
//! # Iterate in Key Order
//!
//! The leaves form a doubly-linked chain, so an in-order walk never
//! re-descends the tree:
//!
//! ```
//! use rangetree::BPTree;
//!
//! let mut tree = BPTree::new(5)?;
//! for key in [2, 9, 4] {
//!     tree.insert(key, ());
//! }
//!
//! // Forward traversal.
//! let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![2, 4, 9]);
//!
//! // Backward traversal.
//! let keys: Vec<i32> = tree.iter_rev().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![9, 4, 2]);
//!
//! assert_eq!(tree.first_key(), Some(&2));
//! # Ok::<(), rangetree::Error>(())
//! ```
//!
//! # Inspect the Structure
//!
//! The `Debug` rendering prints the key lists of each level, breadth first.
//! It exists for diagnostics; its exact format is not guaranteed stable.

mod bptree;
mod error;

pub use crate::{
    bptree::{BPTree, Comparator, Cursor, RevCursor},
    error::{Error, Result},
};
