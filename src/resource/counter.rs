//! Net allocation counter.

use std::sync::atomic::{AtomicI64, Ordering};

/// Creates completed minus destroys completed.
///
/// Atomic so a manager can sit in a `static`; the value carries no
/// synchronization with the records themselves, so relaxed ordering suffices.
#[derive(Debug, Default)]
pub(crate) struct AllocationCounter {
    value: AtomicI64,
}

impl AllocationCounter {
    pub const fn new() -> Self {
        Self {
            value: AtomicI64::new(0),
        }
    }

    /// Records one create and returns the new count.
    pub fn increment(&self) -> i64 {
        self.value.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Records one destroy and returns the new count.
    pub fn decrement(&self) -> i64 {
        self.value.fetch_sub(1, Ordering::Relaxed) - 1
    }

    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(AllocationCounter::new().get(), 0);
    }

    #[test]
    fn test_increment_and_decrement_return_new_value() {
        let counter = AllocationCounter::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.decrement(), 1);
        assert_eq!(counter.get(), 1);
    }
}
