//! Allocation failure reported by `JumpList::try_insert`.

use core::fmt;

/// Why a node could not be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocErrorKind {
    /// The arena already holds `max_len()` nodes.
    CapacityOverflow,
    /// The allocator refused the node's tower of `levels` forward links.
    OutOfMemory { levels: usize },
}

impl fmt::Display for AllocErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocErrorKind::CapacityOverflow => f.write_str("jump list capacity overflow"),
            AllocErrorKind::OutOfMemory { levels } => {
                write!(f, "out of memory allocating a tower of {levels} links")
            }
        }
    }
}

/// Failed insertion. Nothing was spliced; the value is handed back.
#[derive(Clone, PartialEq, Eq)]
pub struct AllocError<T> {
    kind: AllocErrorKind,
    value: T,
}

impl<T> AllocError<T> {
    pub(crate) fn new(kind: AllocErrorKind, value: T) -> Self {
        Self { kind, value }
    }

    pub fn kind(&self) -> AllocErrorKind {
        self.kind
    }

    /// Recover the value that was not inserted.
    pub fn into_value(self) -> T {
        self.value
    }
}

// The value is left out so `T` needs no `Debug`.
impl<T> fmt::Debug for AllocError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllocError")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for AllocError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl<T> std::error::Error for AllocError<T> {}
