//! Node/level model: arena handles, data nodes, and the sentinel record.

use slotmap::new_key_type;

/// Highest level a node may be sampled at (levels are 0-indexed).
pub const MAX_LEVEL: usize = 32;

/// Number of link slots the sentinel carries: one per level in `0..=MAX_LEVEL`.
pub const LEVELS: usize = MAX_LEVEL + 1;

new_key_type! {
    /// Generational arena key for a data node.
    pub(crate) struct NodeKey;
}

/// A link between nodes.
///
/// For forward links `None` is the end of that level. For backward links and
/// for update-array entries `None` names the sentinel.
pub(crate) type Link = Option<NodeKey>;

/// A data node. `forward.len() == level + 1`.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) forward: Vec<Link>,
    /// Level-0 predecessor; `None` when the predecessor is the sentinel.
    pub(crate) backward: Link,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn level(&self) -> usize {
        self.forward.len() - 1
    }
}

/// The sentinel: level heads plus the cached tail.
#[derive(Debug, Clone)]
pub(crate) struct Head {
    pub(crate) forward: [Link; LEVELS],
    /// Last data node, or `None` when the chain is empty.
    pub(crate) tail: Link,
}

impl Head {
    pub(crate) const fn new() -> Self {
        Self {
            forward: [None; LEVELS],
            tail: None,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.forward = [None; LEVELS];
        self.tail = None;
    }
}

impl Default for Head {
    fn default() -> Self {
        Self::new()
    }
}
