//! Position: a lightweight handle to an element or to end-of-sequence.

use crate::jump_list::JumpList;
use crate::node::{Link, NodeKey};

/// A place in a `JumpList`: an element or the end-of-sequence marker.
///
/// Positions are `Copy` and borrow nothing. A position stays valid while its
/// element is in the list; inserting or erasing other elements does not
/// affect it. Once its element is erased the position is stale and reads as
/// absent, even if the arena slot is reused.
///
/// Each position records the identity of the list that issued it. The
/// identity travels with the contents, so after `swap`, `mem::take` or
/// `take_all` a position resolves in whichever list now holds its element.
/// Any other list treats it as stale.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    owner: u64,
    key: Link,
}

impl Position {
    /// The end-of-sequence marker, shared by every list.
    pub const END: Position = Position { owner: 0, key: None };

    /// `None` maps to `END` whatever the owner.
    #[inline]
    pub(crate) fn new(owner: u64, key: Link) -> Self {
        match key {
            None => Position::END,
            Some(_) => Position { owner, key },
        }
    }

    #[inline]
    pub(crate) fn at(owner: u64, k: NodeKey) -> Self {
        Position { owner, key: Some(k) }
    }

    /// Arena key if this position was issued by the list `owner`.
    #[inline]
    pub(crate) fn key_in(&self, owner: u64) -> Link {
        self.key.filter(|_| self.owner == owner)
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.key.is_none()
    }

    /// Borrow the element at this position; `None` at the end, if stale, or
    /// if `list` did not issue it.
    pub fn get<'a, T, C, G>(&self, list: &'a JumpList<T, C, G>) -> Option<&'a T> {
        list.value_at(*self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::END
    }
}
