use crate::bptree::{arena::NodeId, BPTree};

/// In-order traversal over the leaf chain.
///
/// Once positioned at the leftmost leaf, iteration follows the sibling links
/// alone, yielding every pair in ascending key order without re-descending
/// the tree.
pub struct Cursor<'a, K, V> {
    tree: &'a BPTree<K, V>,
    leaf: Option<NodeId>,
    index: usize,
}

/// Backward counterpart of [`Cursor`]: walks the chain from the rightmost
/// leaf via the `prev` links.
pub struct RevCursor<'a, K, V> {
    tree: &'a BPTree<K, V>,
    leaf: Option<NodeId>,
    /// Number of unconsumed pairs in the current leaf; the next item is at
    /// `remaining - 1`.
    remaining: usize,
}

impl<K, V> BPTree<K, V> {
    /// An iterator over all pairs in ascending key order, duplicates
    /// included.
    pub fn iter(&self) -> Cursor<'_, K, V> {
        Cursor {
            tree: self,
            leaf: self.root.map(|root| self.first_leaf(root)),
            index: 0,
        }
    }

    /// An iterator over all pairs in descending key order.
    pub fn iter_rev(&self) -> RevCursor<'_, K, V> {
        let leaf = self.root.map(|root| self.last_leaf(root));
        let remaining = leaf
            .and_then(|id| self.arena.node(id).leaf())
            .map_or(0, |leaf| leaf.count());
        RevCursor {
            tree: self,
            leaf,
            remaining,
        }
    }
}

impl<'a, K, V> Iterator for Cursor<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf = self.tree.arena.node(self.leaf?).leaf()?;

            if self.index < leaf.count() {
                let item = (&leaf.keys[self.index], &leaf.values[self.index]);
                self.index += 1;
                return Some(item);
            }

            self.leaf = leaf.next;
            self.index = 0;
        }
    }
}

impl<'a, K, V> Iterator for RevCursor<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf = self.tree.arena.node(self.leaf?).leaf()?;

            if self.remaining > 0 {
                self.remaining -= 1;
                return Some((&leaf.keys[self.remaining], &leaf.values[self.remaining]));
            }

            self.leaf = leaf.prev;
            self.remaining = match self.leaf {
                Some(id) => self.tree.arena.node(id).leaf()?.count(),
                None => 0,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{BPTree, Result};

    #[test]
    fn test_iter_yields_sorted_pairs() -> Result<()> {
        let mut tree = BPTree::new(4)?;
        for key in [5, 3, 9, 1, 7, 3] {
            tree.insert(key, key * 10);
        }

        let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 3, 3, 5, 7, 9]);
        Ok(())
    }

    #[test]
    fn test_iter_rev_is_reverse_of_iter() -> Result<()> {
        let mut tree = BPTree::new(3)?;
        for key in [5, 3, 9, 1, 7, 3, 8, 2] {
            tree.insert(key, key);
        }

        let forward: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
        let mut backward: Vec<i32> = tree.iter_rev().map(|(k, _)| *k).collect();
        backward.reverse();
        assert_eq!(forward, backward);
        Ok(())
    }

    #[test]
    fn test_iter_empty_tree() -> Result<()> {
        let tree: BPTree<i32, i32> = BPTree::new(3)?;
        assert_eq!(tree.iter().count(), 0);
        assert_eq!(tree.iter_rev().count(), 0);
        Ok(())
    }
}
