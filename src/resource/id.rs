//! Opaque handle values handed to callers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// Shared by every manager so a handle from one is never a live handle of another.
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Identity of one resource. Crosses the C ABI as a plain 64-bit integer.
///
/// Values are issued once per process and never reused, so a handle that
/// outlives its resource can never come to name a newer one. `0` is the
/// null handle.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ResourceHandle(u64);

impl ResourceHandle {
    pub const NULL: Self = Self(0);

    pub(crate) fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ResourceHandle {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
