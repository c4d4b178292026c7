//! jump-list: an ordered set of unique elements backed by a skip list,
//! with STL-style bidirectional positions.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: expected O(log n) insert, erase, lookup and bound queries with
//!   O(1) stepping in both directions, built in layers that can each be
//!   reasoned about on their own.
//! - Layers:
//!   - RawJumpList<T>: structural layer. Owns the node arena, the sentinel
//!     record (level heads plus tail) and the current max level. Provides
//!     the multi-level descent, splice and unlink. Knows nothing about
//!     ordering; the caller passes a predicate into each descent.
//!   - JumpList<T, C, G>: public API. Owns the comparator `C` and the level
//!     generator `G`, funnels every operation through one descent, and
//!     exposes `Position` handles and iterators.
//!
//! Constraints
//! - Single-threaded: no locks, no interior mutability. The only atomic is
//!   the process-wide counter that hands each list its identity.
//! - Nodes live in a `SlotMap` arena; links are generational keys, never
//!   raw pointers. A data node's tower holds `level + 1` forward links and
//!   one level-0 backward link.
//! - Unique elements under `C`; a duplicate insert reports the existing
//!   position instead of failing.
//! - Heights are sampled geometrically with `P = 0.5`, capped at the
//!   generator's `max_level()` and never above `MAX_LEVEL = 32`, from
//!   generator state owned by each list and seeded independently per
//!   instance.
//!
//! Invariants (hold after every public operation)
//! - Level 0 is strictly increasing under `C`.
//! - Every level is a subsequence of the level below; a node is linked at
//!   exactly the levels `0..=height`.
//! - The recorded max level is the highest level the sentinel reaches.
//! - Backward links name the level-0 predecessor; the tail names the last
//!   node.
//! - `len()` is the number of nodes on level 0.
//!
//! Positions
//! - `Position` is a `Copy` handle, the analogue of a bidirectional
//!   iterator. Stepping past either end lands on `end()`; stepping back
//!   from `end()` reaches the tail in O(1).
//! - A position whose element was erased is stale. It reads as absent and
//!   erasing it is a no-op; it never aliases a later element.
//! - Every position carries the identity of the list that issued it. The
//!   identity moves with the contents (`swap`, `mem::take`, `take_all`), and
//!   any other list treats the position as stale.
//!
//! Erase semantics
//! - Erase by position finds the predecessors by searching for the value at
//!   that position. With a comparator that looks at part of a value, the
//!   element removed is the stored one equivalent to it.
//!
//! Errors
//! - Only allocation failure is an error (`try_insert` returns
//!   `AllocError`, handing the value back). It is detected before any link
//!   changes, so a failed insert leaves the list untouched. Missing keys and
//!   `end()` are reported through return values.
//!
//! Notes and non-goals
//! - No persistence or serialization; in-memory only.
//! - No mutable element access: mutating an element could break ordering.
//! - Insert hints are accepted and ignored.

pub mod compare;
pub mod error;
pub mod iter;
mod jump_list;
#[cfg(test)]
mod jump_list_proptest;
pub mod level;
mod node;
mod position;
mod raw_list;

// Public surface
pub use compare::{Compare, Descending, Natural};
pub use error::{AllocError, AllocErrorKind};
pub use jump_list::JumpList;
pub use level::{GeometricLevelGenerator, LevelGenerator, P};
pub use node::MAX_LEVEL;
pub use position::Position;
