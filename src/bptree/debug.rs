use std::fmt::{Debug, Formatter};

use crate::bptree::{node::Node, BPTree};

impl<K, V> Debug for BPTree<K, V>
where
    K: Debug,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.dump(f)
    }
}

impl<K, V> BPTree<K, V>
where
    K: Debug,
{
    /// Breadth-first, level-by-level rendering of the keys at each node.
    ///
    /// Diagnostic output only; the exact format is not part of the
    /// functional contract.
    fn dump(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some(root) = self.root else {
            return writeln!(f, "{{}}");
        };

        let mut level = vec![root];
        while !level.is_empty() {
            let mut next = Vec::new();

            f.write_str("{")?;
            for (i, &id) in level.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                match self.arena.node(id) {
                    Node::Branch(branch) => {
                        write!(f, "{:?}", branch.keys)?;
                        next.extend_from_slice(&branch.children);
                    }
                    Node::Leaf(leaf) => write!(f, "{:?}", leaf.keys)?,
                }
            }
            writeln!(f, "}}")?;

            level = next;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{BPTree, Result};

    #[test]
    fn test_dump_levels() -> Result<()> {
        let mut tree = BPTree::new(3)?;
        for key in 1..=4 {
            tree.insert(key, key);
        }

        let rendered = format!("{tree:?}");
        let levels: Vec<&str> = rendered.lines().collect();

        // One line per level, root first, every key present in the leaves.
        assert!(levels.len() >= 2);
        for key in ["1", "2", "3", "4"] {
            assert!(levels.last().expect("has a leaf level").contains(key));
        }
        Ok(())
    }

    #[test]
    fn test_dump_empty() -> Result<()> {
        let tree: BPTree<i32, i32> = BPTree::new(3)?;
        assert_eq!(format!("{tree:?}"), "{}\n");
        Ok(())
    }
}
