//! Iterators. They follow level-0 links only and never re-run a search.

use crate::compare::Compare;
use crate::jump_list::JumpList;
use crate::level::LevelGenerator;
use crate::node::Link;
use crate::raw_list::RawJumpList;
use core::iter::FusedIterator;

/// Borrowing iterator over every element in order.
pub struct Iter<'a, T> {
    raw: &'a RawJumpList<T>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(raw: &'a RawJumpList<T>) -> Self {
        Self {
            raw,
            front: raw.first(),
            back: raw.last(),
            remaining: raw.len(),
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let k = self.front?;
        self.front = self.raw.next(k);
        self.remaining -= 1;
        self.raw.value(k)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let k = self.back?;
        self.back = self.raw.prev(k);
        self.remaining -= 1;
        self.raw.value(k)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Borrowing iterator over the half-open span `[first, last)` of positions.
///
/// `first` must not come after `last`; a span given in the wrong order runs
/// to the end of the list instead.
pub struct Range<'a, T> {
    raw: &'a RawJumpList<T>,
    front: Link,
    back: Link,
    done: bool,
}

impl<'a, T> Range<'a, T> {
    pub(crate) fn new(raw: &'a RawJumpList<T>, first: Link, last: Link) -> Self {
        // Inclusive back end: the element just before `last`.
        let back = match last {
            None => raw.last(),
            Some(k) => raw.prev(k),
        };
        let live = first.map_or(false, |k| raw.contains(k));
        Self {
            raw,
            front: first,
            back,
            done: !live || back.is_none() || first == last,
        }
    }

    pub(crate) fn empty(raw: &'a RawJumpList<T>) -> Self {
        Self {
            raw,
            front: None,
            back: None,
            done: true,
        }
    }
}

impl<'a, T> Clone for Range<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let k = self.front?;
        if Some(k) == self.back {
            self.done = true;
        } else {
            self.front = self.raw.next(k);
            self.done = self.front.is_none();
        }
        self.raw.value(k)
    }
}

impl<'a, T> DoubleEndedIterator for Range<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let k = self.back?;
        if Some(k) == self.front {
            self.done = true;
        } else {
            self.back = self.raw.prev(k);
            self.done = self.back.is_none();
        }
        self.raw.value(k)
    }
}

impl<'a, T> FusedIterator for Range<'a, T> {}

/// Owning iterator; yields elements in order, removing them as it goes.
pub struct IntoIter<T, C, G> {
    pub(crate) list: JumpList<T, C, G>,
}

impl<T, C, G> Iterator for IntoIter<T, C, G>
where
    C: Compare<T>,
    G: LevelGenerator,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, C, G> DoubleEndedIterator for IntoIter<T, C, G>
where
    C: Compare<T>,
    G: LevelGenerator,
{
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_last()
    }
}

impl<T, C, G> ExactSizeIterator for IntoIter<T, C, G>
where
    C: Compare<T>,
    G: LevelGenerator,
{
}

impl<T, C, G> FusedIterator for IntoIter<T, C, G>
where
    C: Compare<T>,
    G: LevelGenerator,
{
}
