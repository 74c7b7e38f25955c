//! Owning RAII handle over a resource record.

use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;

use tracing::warn;

use crate::error::Result;
use crate::resource::id::ResourceHandle;
use crate::resource::manager::LifecycleManager;

/// A live resource. Dropping it destroys the record exactly once.
///
/// The handle borrows the manager that created it and is neither `Send` nor
/// `Sync`, so a record is always created and released on the same thread.
pub struct Resource<'m> {
    handle: ResourceHandle,
    manager: &'m LifecycleManager,
    _not_send: PhantomData<*const ()>,
}

impl<'m> Resource<'m> {
    pub(crate) fn from_parts(manager: &'m LifecycleManager, handle: ResourceHandle) -> Self {
        Self {
            handle,
            manager,
            _not_send: PhantomData,
        }
    }

    /// The raw handle, for identification and the raw API.
    pub fn handle(&self) -> ResourceHandle {
        self.handle
    }

    pub fn is_valid(&self) -> bool {
        self.manager.is_valid_raw(self.handle)
    }

    /// Destroys the record now and reports whether it was still live.
    ///
    /// Only fails when the record was already released through the raw API.
    pub fn destroy(self) -> Result<()> {
        let this = ManuallyDrop::new(self);
        this.manager.destroy_raw(this.handle)
    }

    /// Gives up RAII ownership. The record stays live and counted.
    pub fn into_raw(self) -> ResourceHandle {
        ManuallyDrop::new(self).handle
    }
}

impl Drop for Resource<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.manager.destroy_raw(self.handle) {
            warn!(%err, "dropped a resource whose record was already released");
        }
    }
}

impl fmt::Debug for Resource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("handle", &self.handle)
            .field("valid", &self.is_valid())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LifecycleConfig;

    fn manager() -> LifecycleManager {
        LifecycleManager::with_config(LifecycleConfig::silent())
    }

    #[test]
    fn test_drop_destroys_once() {
        let manager = manager();
        {
            let resource = manager.create().unwrap();
            assert!(resource.is_valid());
            assert_eq!(manager.net_allocations(), 1);
        }
        assert_eq!(manager.net_allocations(), 0);
        assert_eq!(manager.live_handles(), 0);
    }

    #[test]
    fn test_explicit_destroy() {
        let manager = manager();
        let resource = manager.create().unwrap();
        let handle = resource.handle();

        resource.destroy().unwrap();
        assert_eq!(manager.net_allocations(), 0);
        assert!(!manager.is_valid_raw(handle));
    }

    #[test]
    fn test_into_raw_keeps_record_alive() {
        let manager = manager();
        let raw = manager.create().unwrap().into_raw();

        assert_eq!(manager.net_allocations(), 1);
        assert!(manager.is_valid_raw(raw));

        manager.destroy_raw(raw).unwrap();
        assert_eq!(manager.net_allocations(), 0);
    }

    #[test]
    fn test_destroy_after_raw_release_reports_error() {
        let manager = manager();
        let resource = manager.create().unwrap();
        manager.destroy_raw(resource.handle()).unwrap();

        assert!(!resource.is_valid());
        assert!(resource.destroy().is_err());
        assert_eq!(manager.net_allocations(), 0);
    }

    #[test]
    fn test_drop_after_raw_release_leaves_newer_resource_alone() {
        let manager = manager();
        let released = manager.create().unwrap();
        manager.destroy_raw(released.handle()).unwrap();

        let survivor = manager.create().unwrap();
        drop(released);

        assert!(survivor.is_valid());
        assert_eq!(manager.net_allocations(), 1);
    }
}
