pub use cursor::{Cursor, RevCursor};
pub use range::Comparator;

mod arena;
mod branch;
mod crud;
mod cursor;
mod debug;
mod leaf;
mod node;
mod range;
mod search;

use crate::{
    bptree::{
        arena::{Arena, NodeId},
        node::Node,
    },
    error::{Error, Result},
};

/// An in-memory B+ tree mapping totally ordered keys to values, tuned for
/// range queries.
///
/// Its structure consists of nodes of two variants, leaves and branches (see
/// `node`, `leaf`, `branch`). All pairs live in the leaves, which additionally
/// form a sorted doubly-linked chain; that chain is what lets a range query
/// scan forward linearly instead of re-descending the tree.
///
/// Different kinds of algorithms are implemented in different `mod`s. See
/// `crud`, `range`, `cursor` and `debug` for more details.
///
/// The tree is a plain single-threaded structure: sharing it across threads
/// requires external exclusion, which is a documented limitation of the
/// domain rather than something the tree coordinates itself.
pub struct BPTree<K, V> {
    /// Slot storage for every node; links between nodes are arena indices.
    arena: Arena<K, V>,
    /// `None` iff the tree holds no pairs at all.
    root: Option<NodeId>,
    /// Branching factor: the maximum number of children per branch, bounding
    /// keys per node at `order - 1`.
    order: usize,
    /// Number of stored pairs, duplicates included.
    len: usize,
}

impl<K, V> BPTree<K, V> {
    /// Creates an empty tree with the given branching factor (the maximum
    /// number of children an internal node may have).
    ///
    /// A branching factor of 2 or less cannot form a valid multiway node, so
    /// construction reports [`Error::InvalidBranchingFactor`] for it. This is
    /// the only loud failure in the whole API.
    pub fn new(order: usize) -> Result<Self> {
        if order <= 2 {
            return Err(Error::InvalidBranchingFactor(order));
        }
        Ok(Self {
            arena: Arena::new(),
            root: None,
            order,
            len: 0,
        })
    }

    /// The branching factor this tree was constructed with.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of key-value pairs stored, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The smallest key currently stored.
    #[inline]
    pub fn first_key(&self) -> Option<&K> {
        self.root.and_then(|root| self.first_leaf_key(root))
    }

    /// Descends along first children from `id` down to the leftmost leaf of
    /// that subtree.
    pub(crate) fn first_leaf(&self, mut id: NodeId) -> NodeId {
        loop {
            match self.arena.node(id) {
                Node::Branch(branch) => id = branch.first_child(),
                Node::Leaf(_) => return id,
            }
        }
    }

    /// Descends along last children from `id` down to the rightmost leaf of
    /// that subtree.
    pub(crate) fn last_leaf(&self, mut id: NodeId) -> NodeId {
        loop {
            match self.arena.node(id) {
                Node::Branch(branch) => id = branch.last_child(),
                Node::Leaf(_) => return id,
            }
        }
    }

    /// First key of the leftmost leaf reachable from `id`.
    pub(crate) fn first_leaf_key(&self, id: NodeId) -> Option<&K> {
        let leaf = self.first_leaf(id);
        self.arena.node(leaf).leaf().and_then(|l| l.keys.first())
    }
}
