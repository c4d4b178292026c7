//! JumpList: the public ordered-set container.
//!
//! Every operation funnels through one descent of the raw layer. Lookups
//! read the candidate it returns; mutations hand its per-level predecessors
//! back to the raw layer for splicing or unlinking.

use crate::compare::{Compare, Natural};
use crate::error::{AllocError, AllocErrorKind};
use crate::iter::{IntoIter, Iter, Range};
use crate::level::{GeometricLevelGenerator, LevelGenerator};
use crate::node::{Link, NodeKey, MAX_LEVEL};
use crate::position::Position;
use crate::raw_list::{Path, RawJumpList};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Bound, RangeBounds};

/// An ordered set of unique elements stored in a skip list.
///
/// `C` orders the elements (`Natural` uses `Ord`); `G` samples node heights
/// and is seeded independently per instance by default.
pub struct JumpList<T, C = Natural, G = GeometricLevelGenerator> {
    raw: RawJumpList<T>,
    compare: C,
    levels: G,
}

impl<T: Ord> JumpList<T> {
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Empty list whose level sequence is reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_comparator_and_generator(Natural, GeometricLevelGenerator::with_seed(seed))
    }
}

impl<T, C> JumpList<T, C>
where
    C: Compare<T>,
{
    pub fn with_comparator(compare: C) -> Self {
        Self::with_comparator_and_generator(compare, GeometricLevelGenerator::new())
    }
}

// Accessors that never consult the comparator.
impl<T, C, G> JumpList<T, C, G> {
    pub fn with_comparator_and_generator(compare: C, levels: G) -> Self {
        Self {
            raw: RawJumpList::new(),
            compare,
            levels,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Upper bound on the number of elements the arena can address.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.raw.max_len()
    }

    /// Highest level currently in use; 0 when empty.
    #[inline]
    pub fn level(&self) -> usize {
        self.raw.level()
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    pub fn level_generator(&self) -> &G {
        &self.levels
    }

    pub fn first(&self) -> Option<&T> {
        self.raw.first().and_then(|k| self.raw.value(k))
    }

    pub fn last(&self) -> Option<&T> {
        self.raw.last().and_then(|k| self.raw.value(k))
    }

    #[inline]
    fn position(&self, link: Link) -> Position {
        Position::new(self.raw.id(), link)
    }

    /// Arena key behind `pos`, if this list issued it.
    #[inline]
    fn resolve(&self, pos: Position) -> Link {
        pos.key_in(self.raw.id())
    }

    /// Position of the first element, or `end()` when empty.
    #[inline]
    pub fn begin(&self) -> Position {
        self.position(self.raw.first())
    }

    #[inline]
    pub fn end(&self) -> Position {
        Position::END
    }

    /// Element at `pos`; `None` for `end()`, a stale position or one issued
    /// by another list.
    pub fn value_at(&self, pos: Position) -> Option<&T> {
        self.resolve(pos).and_then(|k| self.raw.value(k))
    }

    /// Step forward. The end position wraps to `begin()`; a stale or foreign
    /// position steps to `end()`.
    pub fn next(&self, pos: Position) -> Position {
        if pos.is_end() {
            return self.begin();
        }
        self.position(self.resolve(pos).and_then(|k| self.raw.next(k)))
    }

    /// Step backward. `end()` steps to the last element in O(1); the first
    /// element steps to `end()`.
    pub fn prev(&self, pos: Position) -> Position {
        if pos.is_end() {
            return self.position(self.raw.last());
        }
        self.position(self.resolve(pos).and_then(|k| self.raw.prev(k)))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.raw)
    }

    /// Elements in `[first, last)`. `first` must not come after `last`.
    /// A foreign or stale `last` gives an empty range.
    pub fn iter_between(&self, first: Position, last: Position) -> Range<'_, T> {
        if last.is_end() {
            return self.iter_from(first);
        }
        match (self.resolve(first), self.resolve(last)) {
            (Some(f), Some(l)) => Range::new(&self.raw, Some(f), Some(l)),
            _ => Range::empty(&self.raw),
        }
    }

    /// Elements from `pos` to the end.
    pub fn iter_from(&self, pos: Position) -> Range<'_, T> {
        Range::new(&self.raw, self.resolve(pos), None)
    }

    /// Drop every element. The level generator keeps its state.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Exchange contents, comparators and generators in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Move the contents out, leaving `self` empty with a freshly seeded
    /// generator and a copy of its comparator.
    pub fn take_all(&mut self) -> Self
    where
        C: Clone,
        G: Default,
    {
        let fresh = Self::with_comparator_and_generator(self.compare.clone(), G::default());
        core::mem::replace(self, fresh)
    }

    #[cfg(test)]
    pub(crate) fn raw(&self) -> &RawJumpList<T> {
        &self.raw
    }

    #[cfg(test)]
    pub(crate) fn height_at(&self, pos: Position) -> Option<usize> {
        self.resolve(pos).and_then(|k| self.raw.height(k))
    }

    #[cfg(test)]
    pub(crate) fn set_max_len(&mut self, max_len: usize) {
        self.raw.set_max_len(max_len);
    }
}

impl<T, C, G> JumpList<T, C, G>
where
    C: Compare<T>,
    G: LevelGenerator,
{
    /// Descent that stops before the first element not less than `key`.
    fn path_to(&self, key: &T) -> Path {
        let compare = &self.compare;
        self.raw.descend(|next| compare.less(next, key))
    }

    /// Candidate of `path` if it is equivalent to `key`. The candidate is
    /// never less than `key`, so one comparison decides.
    fn matching(&self, path: &Path, key: &T) -> Link {
        path.candidate
            .filter(|&k| self.raw.value(k).map_or(false, |v| !self.compare.less(key, v)))
    }

    /// Insert `value` unless an equivalent element exists.
    ///
    /// Returns the position of the new or existing element and whether the
    /// value was inserted. A rejected duplicate is dropped.
    ///
    /// # Panics
    /// If a node cannot be allocated; see [`JumpList::try_insert`].
    pub fn insert(&mut self, value: T) -> (Position, bool) {
        match self.try_insert(value) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible `insert`. On error nothing is linked and the value comes
    /// back inside the error.
    pub fn try_insert(&mut self, value: T) -> Result<(Position, bool), AllocError<T>> {
        let path = self.path_to(&value);
        if let Some(found) = self.matching(&path, &value) {
            return Ok((Position::at(self.raw.id(), found), false));
        }
        if self.raw.len() >= self.raw.max_len() {
            return Err(AllocError::new(AllocErrorKind::CapacityOverflow, value));
        }
        let cap = self.levels.max_level().min(MAX_LEVEL);
        let level = self.levels.next_level().min(cap);
        let mut tower = Vec::new();
        if tower.try_reserve_exact(level + 1).is_err() {
            return Err(AllocError::new(
                AllocErrorKind::OutOfMemory { levels: level + 1 },
                value,
            ));
        }
        let key = self.raw.splice(&path, value, level, tower);
        Ok((Position::at(self.raw.id(), key), true))
    }

    /// Insert a value built from `args`.
    pub fn emplace<A>(&mut self, args: A) -> (Position, bool)
    where
        T: From<A>,
    {
        self.insert(T::from(args))
    }

    /// Insert with a position hint. The hint is ignored: placement is always
    /// decided by the comparator.
    pub fn insert_hint(&mut self, _hint: Position, value: T) -> Position {
        self.insert(value).0
    }

    pub fn emplace_hint<A>(&mut self, hint: Position, args: A) -> Position
    where
        T: From<A>,
    {
        self.insert_hint(hint, T::from(args))
    }

    /// Replace the contents with `values`.
    pub fn assign<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(values);
    }

    /// Position of the element equivalent to `key`, or `end()`.
    pub fn find(&self, key: &T) -> Position {
        let path = self.path_to(key);
        self.position(self.matching(&path, key))
    }

    pub fn get(&self, key: &T) -> Option<&T> {
        self.value_at(self.find(key))
    }

    pub fn contains(&self, key: &T) -> bool {
        !self.find(key).is_end()
    }

    /// 0 or 1: elements are unique.
    pub fn count(&self, key: &T) -> usize {
        usize::from(self.contains(key))
    }

    /// First element not less than `key`.
    pub fn lower_bound(&self, key: &T) -> Position {
        self.position(self.path_to(key).candidate)
    }

    /// First element greater than `key`.
    pub fn upper_bound(&self, key: &T) -> Position {
        let compare = &self.compare;
        let candidate = self.raw.descend(|next| !compare.less(key, next)).candidate;
        self.position(candidate)
    }

    /// `[find(key), next)` when present, `(end, end)` otherwise.
    pub fn equal_range(&self, key: &T) -> (Position, Position) {
        let found = self.find(key);
        match self.resolve(found) {
            None => (found, found),
            Some(k) => (found, self.position(self.raw.next(k))),
        }
    }

    /// Elements within `bounds`. Inverted bounds give an empty range.
    pub fn range<R>(&self, bounds: R) -> Range<'_, T>
    where
        R: RangeBounds<T>,
    {
        let first = match bounds.start_bound() {
            Bound::Included(x) => self.lower_bound(x),
            Bound::Excluded(x) => self.upper_bound(x),
            Bound::Unbounded => self.begin(),
        };
        let last = match bounds.end_bound() {
            Bound::Included(x) => self.upper_bound(x),
            Bound::Excluded(x) => self.lower_bound(x),
            Bound::Unbounded => self.end(),
        };
        let inverted = match (self.value_at(first), self.value_at(last)) {
            (Some(a), Some(b)) => self.compare.less(b, a),
            (None, Some(_)) => true,
            _ => false,
        };
        if inverted {
            Range::empty(&self.raw)
        } else {
            Range::new(&self.raw, self.resolve(first), self.resolve(last))
        }
    }

    /// Unlink the element at `pos`, returning it and its successor.
    ///
    /// The predecessors are found by searching for the element's value, so
    /// the element removed is the one equivalent to the value at `pos`.
    fn remove_at(&mut self, pos: Position) -> Option<(T, Position)> {
        let key = self.resolve(pos)?;
        let value = self.raw.value(key)?;
        let path = self.path_to(value);
        let victim: NodeKey = self.matching(&path, value)?;
        let next = self.position(self.raw.next(victim));
        let removed = self.raw.unlink(&path, victim)?;
        Some((removed, next))
    }

    /// Erase the element at `pos` and return the position after it. Erasing
    /// `end()` or a stale position does nothing and returns `end()`.
    pub fn erase(&mut self, pos: Position) -> Position {
        self.remove_at(pos).map_or(Position::END, |(_, next)| next)
    }

    /// Erase the element equivalent to `key`; returns how many were removed
    /// (0 or 1).
    pub fn erase_value(&mut self, key: &T) -> usize {
        usize::from(self.take(key).is_some())
    }

    /// Erase `[first, last)` one element at a time and return `last`.
    ///
    /// An empty range (`first == last`) erases nothing and still returns
    /// `last`, not `end()`: the result always names the element after the
    /// span. A stale or foreign `last` erases nothing and returns `end()`;
    /// a span that breaks on a stale position stops there and returns `end()`.
    pub fn erase_range(&mut self, first: Position, last: Position) -> Position {
        if !last.is_end() && self.value_at(last).is_none() {
            return Position::END;
        }
        let mut cur = first;
        while cur != last {
            match self.remove_at(cur) {
                Some((_, next)) => cur = next,
                None => return Position::END,
            }
        }
        last
    }

    /// Remove and return the element equivalent to `key`.
    pub fn take(&mut self, key: &T) -> Option<T> {
        let path = self.path_to(key);
        let victim = self.matching(&path, key)?;
        self.raw.unlink(&path, victim)
    }

    pub fn pop_first(&mut self) -> Option<T> {
        let first = self.raw.first()?;
        self.raw.unlink(&Path::from_head(Some(first)), first)
    }

    pub fn pop_last(&mut self) -> Option<T> {
        let last = self.raw.last()?;
        self.remove_at(Position::at(self.raw.id(), last)).map(|(v, _)| v)
    }

    /// Keep only the elements for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cur = self.begin();
        while let Some(v) = self.value_at(cur) {
            cur = if keep(v) { self.next(cur) } else { self.erase(cur) };
        }
    }
}

impl<T: Ord> Default for JumpList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy. Elements are re-inserted, so the copy samples its own levels
/// with a fresh generator; only order and membership carry over.
impl<T, C, G> Clone for JumpList<T, C, G>
where
    T: Clone,
    C: Compare<T> + Clone,
    G: LevelGenerator + Default,
{
    fn clone(&self) -> Self {
        let mut out = Self::with_comparator_and_generator(self.compare.clone(), G::default());
        out.extend(self.iter().cloned());
        out
    }
}

impl<T, C, G> Extend<T> for JumpList<T, C, G>
where
    C: Compare<T>,
    G: LevelGenerator,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<'a, T, C, G> Extend<&'a T> for JumpList<T, C, G>
where
    T: Copy + 'a,
    C: Compare<T>,
    G: LevelGenerator,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord> FromIterator<T> for JumpList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for JumpList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, C, G> IntoIterator for JumpList<T, C, G>
where
    C: Compare<T>,
    G: LevelGenerator,
{
    type Item = T;
    type IntoIter = IntoIter<T, C, G>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, C, G> IntoIterator for &'a JumpList<T, C, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq, C, G> PartialEq for JumpList<T, C, G> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C, G> Eq for JumpList<T, C, G> {}

/// Lexicographic over the iteration sequences.
impl<T: PartialOrd, C, G> PartialOrd for JumpList<T, C, G> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, C, G> Ord for JumpList<T, C, G> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, C, G> Hash for JumpList<T, C, G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for v in self {
            v.hash(state);
        }
    }
}

impl<T: fmt::Debug, C, G> fmt::Debug for JumpList<T, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
