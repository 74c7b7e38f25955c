//! The records a manager currently owns, keyed by handle.
//!
//! Records live inside the map, so a handle that is not a key cannot reach
//! any memory. Destroying a resource removes its key for good.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{ResourceError, Result};
use crate::resource::id::ResourceHandle;
use crate::resource::record::ResourceRecord;

#[derive(Debug, Default)]
pub(crate) struct LiveRegistry {
    live: Mutex<HashMap<ResourceHandle, Box<ResourceRecord>>>,
}

impl LiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while the lock is held cannot leave the map half-updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<ResourceHandle, Box<ResourceRecord>>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes ownership of `record` under `handle`.
    ///
    /// Growing the map reports out-of-memory instead of aborting.
    pub fn insert(&self, handle: ResourceHandle, record: Box<ResourceRecord>) -> Result<()> {
        let mut live = self.lock();
        live.try_reserve(1)
            .map_err(|_| ResourceError::AllocationFailure {
                size: std::mem::size_of::<(ResourceHandle, Box<ResourceRecord>)>(),
            })?;
        let previous = live.insert(handle, record);
        debug_assert!(previous.is_none(), "handle {handle} issued twice");
        Ok(())
    }

    /// Hands back the record so the caller decides when it is freed.
    pub fn remove(&self, handle: ResourceHandle) -> Option<Box<ResourceRecord>> {
        self.lock().remove(&handle)
    }

    pub fn contains(&self, handle: ResourceHandle) -> bool {
        self.lock().contains_key(&handle)
    }

    /// Runs `f` on the record if `handle` is live.
    pub fn with_live<R>(
        &self,
        handle: ResourceHandle,
        f: impl FnOnce(&ResourceRecord) -> R,
    ) -> Option<R> {
        self.lock().get(&handle).map(|record| f(&**record))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}
