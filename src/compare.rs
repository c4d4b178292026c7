//! Comparator seam. The container orders elements only through `less`.

use core::cmp::Ordering;

/// A strict weak ordering over `T`.
///
/// Two values are equivalent when neither is `less` than the other; the
/// container keeps at most one element per equivalence class.
pub trait Compare<T: ?Sized> {
    fn less(&self, a: &T, b: &T) -> bool;

    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Ascending order via `Ord`. The default comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Compare<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a.cmp(b) == Ordering::Less
    }
}

/// Descending order via `Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: ?Sized + Ord> Compare<T> for Descending {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b.cmp(a) == Ordering::Less
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
