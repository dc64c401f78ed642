use crate::bptree::{arena::NodeId, branch::Branch, leaf::Leaf, node::Node, BPTree};

impl<K, V> BPTree<K, V>
where
    K: Ord + Clone,
{
    /// Inserts a key-value pair.
    ///
    /// Pairs already stored under an equal key are preserved, with the new
    /// pair placed before them in the leaf order. Splits propagate upward one
    /// level at a time as the recursion unwinds; the root overflow check here
    /// is the final backstop and the only place the root is ever replaced.
    pub fn insert(&mut self, key: K, value: V) {
        let root = match self.root {
            Some(root) => root,
            None => {
                let root = self.arena.alloc(Node::Leaf(Leaf::new()));
                self.root = Some(root);
                root
            }
        };

        self.insert_at(root, key, value);
        self.len += 1;

        if self.arena.node(root).is_overflow(self.order) {
            let (separator, right) = self.split_node(root);
            let new_root = Branch::new_root(separator, root, right);
            self.root = Some(self.arena.alloc(Node::Branch(new_root)));
        }
    }

    /// Recursive descent for [`insert`](Self::insert).
    ///
    /// A branch repairs only its immediate child: if the child overflows
    /// after the recursive call, it is split and the separator plus upper
    /// half are absorbed in place. This node's own overflow is left for the
    /// caller to detect.
    fn insert_at(&mut self, id: NodeId, key: K, value: V) {
        let (child, index) = match self.arena.node_mut(id) {
            Node::Leaf(leaf) => {
                leaf.insert(key, value);
                return;
            }
            Node::Branch(branch) => {
                let index = branch.search(&key);
                (branch.children[index], index)
            }
        };

        self.insert_at(child, key, value);

        if self.arena.node(child).is_overflow(self.order) {
            let (separator, right) = self.split_node(child);
            if let Node::Branch(branch) = self.arena.node_mut(id) {
                branch.absorb(index, separator, right);
            }
        }
    }

    /// Splits an overflowing node, keeping the lower half under `id` and
    /// allocating the upper half as a new node.
    ///
    /// Leaves and branches produce the same shape (a separator plus a new
    /// right node), which is what lets the caller absorb either uniformly.
    /// A leaf split also splices the new leaf into the chain, updating the
    /// links in both directions at the splice point.
    fn split_node(&mut self, id: NodeId) -> (K, NodeId) {
        match self.arena.node_mut(id) {
            Node::Leaf(leaf) => {
                let (separator, right) = leaf.split();
                let old_next = right.next;
                let right_id = self.arena.alloc(Node::Leaf(right));

                if let Some(leaf) = self.arena.node_mut(id).leaf_mut() {
                    leaf.next = Some(right_id);
                }
                if let Some(right) = self.arena.node_mut(right_id).leaf_mut() {
                    right.prev = Some(id);
                }
                if let Some(next_id) = old_next {
                    if let Some(next) = self.arena.node_mut(next_id).leaf_mut() {
                        next.prev = Some(right_id);
                    }
                }

                (separator, right_id)
            }
            Node::Branch(branch) => {
                let (separator, right) = branch.split();
                (separator, self.arena.alloc(Node::Branch(right)))
            }
        }
    }
}
