//! RawJumpList: structural layer of the skip list.
//!
//! Owns the node arena, the sentinel record and the current max level, and
//! performs the pointer surgery. It knows nothing about comparators: every
//! search is a `descend` driven by a caller-supplied "keep advancing"
//! predicate, and every mutation consumes the `Path` that search produced.
//!
//! All links stored here are valid arena keys; indexing `nodes[k]` on a link
//! read from the structure never fails.

use crate::node::{Head, Link, Node, NodeKey, LEVELS};
use core::sync::atomic::{AtomicU64, Ordering};
use slotmap::SlotMap;

/// Largest number of nodes the arena can address (32-bit slot index).
pub const MAX_LEN: usize = (u32::MAX - 1) as usize;

// 0 is reserved for the shared end position.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Outcome of a descent.
#[derive(Debug, Clone)]
pub(crate) struct Path {
    /// `update[l]` is the last node at level `l` the descent stopped on, or
    /// `None` for the sentinel. Levels above the current max stay `None`.
    pub(crate) update: [Link; LEVELS],
    /// Level-0 successor of `update[0]`: the only possible match.
    pub(crate) candidate: Link,
}

impl Path {
    /// The path of the first data node: the sentinel precedes it everywhere.
    pub(crate) const fn from_head(first: Link) -> Self {
        Self {
            update: [None; LEVELS],
            candidate: first,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RawJumpList<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    head: Head,
    level: usize,
    /// Identity stamped into every position this arena issues.
    id: u64,
    max_len: usize,
}

impl<T> RawJumpList<T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: Head::new(),
            level: 0,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            max_len: MAX_LEN,
        }
    }

    #[inline]
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub(crate) fn max_len(&self) -> usize {
        self.max_len
    }

    #[cfg(test)]
    pub(crate) fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len.min(MAX_LEN);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn level(&self) -> usize {
        self.level
    }

    #[inline]
    pub(crate) fn first(&self) -> Link {
        self.head.forward[0]
    }

    #[inline]
    pub(crate) fn last(&self) -> Link {
        self.head.tail
    }

    #[inline]
    pub(crate) fn contains(&self, k: NodeKey) -> bool {
        self.nodes.contains_key(k)
    }

    #[inline]
    pub(crate) fn value(&self, k: NodeKey) -> Option<&T> {
        self.nodes.get(k).map(|n| &n.value)
    }

    /// Level-0 successor; `None` past the last node or for a dead key.
    #[inline]
    pub(crate) fn next(&self, k: NodeKey) -> Link {
        self.nodes.get(k).and_then(|n| n.forward[0])
    }

    /// Level-0 predecessor; `None` when it is the sentinel or for a dead key.
    #[inline]
    pub(crate) fn prev(&self, k: NodeKey) -> Link {
        self.nodes.get(k).and_then(|n| n.backward)
    }

    #[cfg(test)]
    pub(crate) fn height(&self, k: NodeKey) -> Option<usize> {
        self.nodes.get(k).map(Node::level)
    }

    #[inline]
    fn link(&self, from: Link, level: usize) -> Link {
        match from {
            None => self.head.forward[level],
            Some(k) => self.nodes[k].forward[level],
        }
    }

    #[inline]
    fn set_link(&mut self, from: Link, level: usize, to: Link) {
        match from {
            None => self.head.forward[level] = to,
            Some(k) => self.nodes[k].forward[level] = to,
        }
    }

    /// Multi-level search. From the sentinel, walk each level from the
    /// current max down to 0, advancing while `advance(next)` holds, and
    /// record where each level stopped. Levels are never revisited.
    pub(crate) fn descend<F>(&self, mut advance: F) -> Path
    where
        F: FnMut(&T) -> bool,
    {
        let mut update = [None; LEVELS];
        let mut cur: Link = None;
        for level in (0..=self.level).rev() {
            while let Some(next) = self.link(cur, level) {
                if !advance(&self.nodes[next].value) {
                    break;
                }
                cur = Some(next);
            }
            update[level] = cur;
        }
        Path {
            update,
            candidate: self.link(cur, 0),
        }
    }

    /// Link a new node holding `value` right after `path.update[0]`, at
    /// levels `0..=level`. `tower` must be empty and able to hold
    /// `level + 1` links without reallocating.
    pub(crate) fn splice(&mut self, path: &Path, value: T, level: usize, mut tower: Vec<Link>) -> NodeKey {
        debug_assert!(level < LEVELS);
        debug_assert!(tower.is_empty() && tower.capacity() > level);

        // Levels above the old max were left at the sentinel by `descend`.
        if level > self.level {
            self.level = level;
        }
        tower.extend((0..=level).map(|l| self.link(path.update[l], l)));
        let successor = tower[0];
        let key = self.nodes.insert(Node {
            value,
            forward: tower,
            backward: path.update[0],
        });
        for l in 0..=level {
            self.set_link(path.update[l], l, Some(key));
        }
        match successor {
            Some(s) => self.nodes[s].backward = Some(key),
            None => self.head.tail = Some(key),
        }
        key
    }

    /// Unlink and free `key`, whose predecessors are recorded in `path`.
    /// Returns `None` if `key` is not a live node.
    pub(crate) fn unlink(&mut self, path: &Path, key: NodeKey) -> Option<T> {
        let node = self.nodes.remove(key)?;
        for l in 0..=node.level() {
            let pred = path.update[l];
            if self.link(pred, l) == Some(key) {
                self.set_link(pred, l, node.forward[l]);
            }
        }
        match node.forward[0] {
            Some(s) => self.nodes[s].backward = node.backward,
            None => self.head.tail = node.backward,
        }
        while self.level > 0 && self.head.forward[self.level].is_none() {
            self.level -= 1;
        }
        debug_assert!(self.head.forward.iter().all(|l| *l != Some(key)));
        Some(node.value)
    }

    /// Drop every node; the sentinel record is kept and reset. The id is kept:
    /// the arena bumps slot versions, so old positions go stale.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head.reset();
        self.level = 0;
    }
}

impl<T> Default for RawJumpList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<T> RawJumpList<T> {
    /// Check every structural invariant; panics with the first violation.
    pub(crate) fn assert_invariants<F>(&self, less: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        use crate::node::MAX_LEVEL;

        // Sortedness, backward links, tail and count along level 0.
        let mut prev: Link = None;
        let mut cur = self.head.forward[0];
        let mut count = 0;
        while let Some(k) = cur {
            let n = &self.nodes[k];
            assert_eq!(n.backward, prev, "backward link is not the level-0 predecessor");
            if let Some(p) = prev {
                assert!(
                    less(&self.nodes[p].value, &n.value),
                    "level-0 chain is not strictly increasing"
                );
            }
            assert!(n.level() <= MAX_LEVEL, "tower exceeds MAX_LEVEL");
            prev = cur;
            cur = n.forward[0];
            count += 1;
        }
        assert_eq!(self.head.tail, prev, "tail is not the last node");
        assert_eq!(count, self.nodes.len(), "count differs from level-0 chain");

        // Each level is a subsequence of the level below and holds exactly
        // the nodes tall enough for it.
        for l in 1..LEVELS {
            let mut below = self.head.forward[l - 1];
            let mut cur = self.head.forward[l];
            let mut on_level = 0;
            while let Some(k) = cur {
                assert!(self.nodes[k].level() >= l, "node linked above its height");
                loop {
                    match below {
                        Some(x) if x == k => break,
                        Some(x) => below = self.nodes[x].forward[l - 1],
                        None => panic!("level {l} is not a subsequence of level {}", l - 1),
                    }
                }
                on_level += 1;
                cur = self.nodes[k].forward[l];
            }
            let tall = self.nodes.values().filter(|n| n.level() >= l).count();
            assert_eq!(on_level, tall, "level {l} is missing tall nodes");
        }

        // Max level is tight.
        assert!(
            self.head.forward[self.level + 1..].iter().all(Option::is_none),
            "occupied level above recorded max"
        );
        assert!(
            self.level == 0 || self.head.forward[self.level].is_some(),
            "recorded max level is empty"
        );
    }
}
