use crate::bptree::{arena::NodeId, search::lower_bound};

/// A leaf node: parallel sorted sequences of keys and values, plus sibling
/// links forming the doubly-linked chain across all leaves in key order.
pub(crate) struct Leaf<K, V> {
    pub(crate) keys: Vec<K>,
    pub(crate) values: Vec<V>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<K, V> Leaf<K, V> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            prev: None,
            next: None,
        }
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.keys.len()
    }
}

impl<K, V> Leaf<K, V>
where
    K: Ord,
{
    /// Inserts the pair immediately before the first key that is not less
    /// than `key`, appending if every key is smaller. Repeated keys keep
    /// their relative insertion order.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        let index = lower_bound(&self.keys, &key);
        self.keys.insert(index, key);
        self.values.insert(index, value);
    }

    /// Moves the upper half of this leaf into a new right sibling, returning
    /// the separator (the right half's first key) together with it.
    ///
    /// The new leaf already points at this leaf's old successor; the caller
    /// finishes the chain splice once it has allocated an id for it.
    pub(crate) fn split(&mut self) -> (K, Self)
    where
        K: Clone,
    {
        let mid = self.keys.len() / 2;
        let right = Self {
            keys: self.keys.split_off(mid),
            values: self.values.split_off(mid),
            prev: None,
            next: self.next,
        };
        (right.keys[0].clone(), right)
    }
}
