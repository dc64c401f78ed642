use crate::bptree::{arena::NodeId, node::Node, BPTree};

/// Selects which contiguous portion of the sorted key space a range query
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Every value whose key is less than or equal to the query key.
    LessOrEqual,
    /// Every value whose key is equal to the query key.
    Equal,
    /// Every value whose key is greater than or equal to the query key.
    GreaterOrEqual,
}

impl Comparator {
    /// Parses the textual form: `"<="`, `"=="` or `">="`. Anything else is
    /// not a comparator.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "<=" => Some(Self::LessOrEqual),
            "==" => Some(Self::Equal),
            ">=" => Some(Self::GreaterOrEqual),
            _ => None,
        }
    }
}

impl<K, V> BPTree<K, V>
where
    K: Ord,
{
    /// Range query in its textual form.
    ///
    /// An unrecognized comparator yields an empty result rather than an
    /// error, mirroring the rest of the query surface: only construction
    /// fails loudly, query misuse degrades silently.
    pub fn range_search(&self, key: &K, comparator: &str) -> Vec<&V> {
        match Comparator::parse(comparator) {
            Some(comparator) => self.range(key, comparator),
            None => Vec::new(),
        }
    }

    /// Returns the values whose keys satisfy `comparator` against `key`, in
    /// ascending key order. Duplicate keys contribute all of their values.
    ///
    /// A single descent picks the leaf where scanning starts; the matching
    /// values always form one contiguous run of the leaf chain from there,
    /// so no branch ever aggregates results across children.
    pub fn range(&self, key: &K, comparator: Comparator) -> Vec<&V> {
        let Some(root) = self.root else {
            return Vec::new();
        };

        let start = self.descend(root, key, comparator);
        self.scan(start, key, comparator)
    }

    /// Walks from `id` down to the leaf where the scan starts.
    ///
    /// `<=` deliberately ignores the key and pins the start at the overall
    /// leftmost leaf, leaving all filtering to the scan's stop condition.
    /// `==` and `>=` descend by the same lower-bound routing as insertion.
    fn descend(&self, mut id: NodeId, key: &K, comparator: Comparator) -> NodeId {
        if comparator == Comparator::LessOrEqual {
            return self.first_leaf(id);
        }

        loop {
            match self.arena.node(id) {
                Node::Branch(branch) => id = branch.child_for(key),
                Node::Leaf(_) => return id,
            }
        }
    }

    /// Forward scan across the leaf chain with comparator-specific stop
    /// conditions.
    ///
    /// A matching run may span any number of leaves; the scan only ever
    /// stops at the first key ruling out further matches, or at the chain
    /// end.
    fn scan(&self, start: NodeId, key: &K, comparator: Comparator) -> Vec<&V> {
        let mut values = Vec::new();
        let mut current = Some(start);

        while let Some(id) = current {
            let Some(leaf) = self.arena.node(id).leaf() else {
                // The chain holds leaves only, so this is unreachable.
                break;
            };

            for (k, v) in leaf.keys.iter().zip(&leaf.values) {
                match comparator {
                    Comparator::LessOrEqual => {
                        if k > key {
                            return values;
                        }
                        values.push(v);
                    }
                    Comparator::Equal => {
                        if k > key {
                            return values;
                        }
                        if k == key {
                            values.push(v);
                        }
                    }
                    Comparator::GreaterOrEqual => {
                        if k >= key {
                            values.push(v);
                        }
                    }
                }
            }

            current = leaf.next;
        }

        values
    }
}

#[cfg(test)]
mod tests {
    use super::Comparator;
    use crate::{BPTree, Result};

    #[test]
    fn test_parse() {
        assert_eq!(Comparator::parse("<="), Some(Comparator::LessOrEqual));
        assert_eq!(Comparator::parse("=="), Some(Comparator::Equal));
        assert_eq!(Comparator::parse(">="), Some(Comparator::GreaterOrEqual));
        assert_eq!(Comparator::parse("<"), None);
        assert_eq!(Comparator::parse(""), None);
    }

    #[test]
    fn test_equal_run_spanning_leaves() -> Result<()> {
        // Order 3 keeps leaves tiny, so ten equal keys are guaranteed to
        // stretch over more than two leaves.
        let mut tree = BPTree::new(3)?;
        tree.insert(1, "low");
        for _ in 0..10 {
            tree.insert(5, "hit");
        }
        tree.insert(9, "high");

        let hits = tree.range(&5, Comparator::Equal);
        assert_eq!(hits.len(), 10);
        assert!(hits.iter().all(|v| **v == "hit"));
        Ok(())
    }

    #[test]
    fn test_greater_equal_run_spanning_leaves() -> Result<()> {
        let mut tree = BPTree::new(3)?;
        for key in 0..30 {
            tree.insert(key, key);
        }

        let values: Vec<i32> = tree
            .range(&7, Comparator::GreaterOrEqual)
            .into_iter()
            .copied()
            .collect();
        assert_eq!(values, (7..30).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_less_equal_scans_from_first_leaf() -> Result<()> {
        let mut tree = BPTree::new(3)?;
        for key in 0..30 {
            tree.insert(key, key);
        }

        let values: Vec<i32> = tree
            .range(&7, Comparator::LessOrEqual)
            .into_iter()
            .copied()
            .collect();
        assert_eq!(values, (0..=7).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_equal_key_absent() -> Result<()> {
        let mut tree = BPTree::new(5)?;
        for key in [1, 3, 5, 7] {
            tree.insert(key, key);
        }

        assert!(tree.range(&4, Comparator::Equal).is_empty());
        assert!(tree.range(&0, Comparator::Equal).is_empty());
        assert!(tree.range(&8, Comparator::Equal).is_empty());
        Ok(())
    }
}
