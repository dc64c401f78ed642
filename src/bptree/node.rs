use crate::bptree::{branch::Branch, leaf::Leaf};

/// A node of the tree. Exactly two variants ever exist, so the closed enum
/// is matched per operation instead of dispatching through a trait.
pub(crate) enum Node<K, V> {
    Leaf(Leaf<K, V>),
    Branch(Branch<K>),
}

impl<K, V> Node<K, V> {
    /// Number of keys currently held by the node.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        match self {
            Self::Leaf(leaf) => leaf.count(),
            Self::Branch(branch) => branch.count(),
        }
    }

    /// A node may legally hold at most `order - 1` keys; one past that
    /// triggers a split. The threshold is the same for both variants.
    #[inline]
    pub(crate) fn is_overflow(&self, order: usize) -> bool {
        self.count() > order - 1
    }

    #[inline]
    pub(crate) fn leaf(&self) -> Option<&Leaf<K, V>> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Branch(_) => None,
        }
    }

    #[inline]
    pub(crate) fn leaf_mut(&mut self) -> Option<&mut Leaf<K, V>> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Branch(_) => None,
        }
    }
}
