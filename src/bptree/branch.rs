use crate::bptree::{arena::NodeId, search::lower_bound};

/// An internal node: separator keys and child links, with
/// `children.len() == keys.len() + 1` whenever a call returns.
pub(crate) struct Branch<K> {
    pub(crate) keys: Vec<K>,
    pub(crate) children: Vec<NodeId>,
}

impl<K> Branch<K> {
    /// A fresh root absorbing a split of the previous root.
    #[inline]
    pub(crate) fn new_root(separator: K, left: NodeId, right: NodeId) -> Self {
        Self {
            keys: vec![separator],
            children: vec![left, right],
        }
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn first_child(&self) -> NodeId {
        self.children[0]
    }

    #[inline]
    pub(crate) fn last_child(&self) -> NodeId {
        self.children[self.children.len() - 1]
    }
}

impl<K> Branch<K>
where
    K: Ord,
{
    /// Routing index for `key`: the first separator not less than `key`
    /// selects its left child, and keys greater than every separator fall
    /// through to the last child.
    #[inline]
    pub(crate) fn search(&self, key: &K) -> usize {
        lower_bound(&self.keys, key)
    }

    #[inline]
    pub(crate) fn child_for(&self, key: &K) -> NodeId {
        self.children[self.search(key)]
    }

    /// Absorbs a child split: the separator goes in at `index` and the upper
    /// half right after the child that overflowed. Restores the
    /// one-more-child-than-keys invariant.
    pub(crate) fn absorb(&mut self, index: usize, separator: K, right: NodeId) {
        self.keys.insert(index, separator);
        self.children.insert(index + 1, right);
    }

    /// Splits around the middle separator, which is promoted rather than
    /// duplicated into either half. The lower half stays in place; the upper
    /// half and the promoted key are returned.
    pub(crate) fn split(&mut self) -> (K, Self) {
        let mid = self.keys.len() / 2;

        let keys = self.keys.split_off(mid + 1);
        let children = self.children.split_off(mid + 1);
        let separator = self.keys.pop().expect("splitting an empty branch");

        (separator, Self { keys, children })
    }
}

#[cfg(test)]
mod tests {
    use super::Branch;
    use crate::bptree::{arena::Arena, leaf::Leaf, node::Node};

    fn ids(arena: &mut Arena<i32, i32>, count: usize) -> Vec<super::NodeId> {
        (0..count).map(|_| arena.alloc(Node::Leaf(Leaf::new()))).collect()
    }

    #[test]
    fn test_search() {
        let mut arena = Arena::new();
        let children = ids(&mut arena, 4);
        let branch = Branch {
            keys: vec![1, 3, 5],
            children,
        };

        assert_eq!(branch.search(&0), 0);
        assert_eq!(branch.search(&1), 0);
        assert_eq!(branch.search(&2), 1);
        assert_eq!(branch.search(&3), 1);
        assert_eq!(branch.search(&4), 2);
        assert_eq!(branch.search(&6), 3);
    }

    #[test]
    fn test_split() {
        let mut arena = Arena::new();
        let children = ids(&mut arena, 5);
        let mut branch = Branch {
            keys: vec![1, 3, 5, 7],
            children: children.clone(),
        };

        let (separator, right) = branch.split();

        assert_eq!(separator, 5);
        assert_eq!(branch.keys, vec![1, 3]);
        assert_eq!(branch.children, &children[..3]);
        assert_eq!(right.keys, vec![7]);
        assert_eq!(right.children, &children[3..]);
    }

    #[test]
    fn test_absorb() {
        let mut arena = Arena::new();
        let children = ids(&mut arena, 3);
        let mut branch = Branch {
            keys: vec![2, 6],
            children: children.clone(),
        };

        let new_child = arena.alloc(Node::Leaf(Leaf::new()));
        branch.absorb(1, 4, new_child);

        assert_eq!(branch.keys, vec![2, 4, 6]);
        assert_eq!(branch.children.len(), branch.keys.len() + 1);
        assert_eq!(branch.children[2], new_child);
    }
}
