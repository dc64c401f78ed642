use crate::bptree::node::Node;

/// Identifies a node slot within a tree's [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(u32);

/// Slot storage for every node of a tree.
///
/// Child links and leaf sibling links are both [`NodeId`] indices into this
/// arena, so splicing the leaf chain never moves or aliases a node. Nodes are
/// only ever allocated (by the first insert and by splits); the whole arena
/// is reclaimed together when the tree is dropped.
pub(crate) struct Arena<K, V> {
    nodes: Vec<Node<K, V>>,
}

impl<K, V> Arena<K, V> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0 as usize]
    }
}
