//! Resource lifecycle: allocation, validity, destruction and accounting.
//!
//! [`LifecycleManager`] holds the state; [`Resource`] is the owning handle
//! Rust callers use. The C ABI in `ffi/` drives the same manager through
//! bare [`ResourceHandle`] values.

pub(crate) mod counter;
pub mod handle;
pub mod id;
pub mod manager;
pub(crate) mod notify;
pub(crate) mod record;
pub(crate) mod registry;

pub use handle::Resource;
pub use id::ResourceHandle;
pub use manager::LifecycleManager;
pub use notify::{ALLOCATED_MESSAGE, FREED_MESSAGE};

use crate::error::Result;

/// Creates a resource owned by the process-wide manager.
pub fn create() -> Result<Resource<'static>> {
    LifecycleManager::global().create()
}

/// Validity check against the process-wide manager. `None` is never valid.
pub fn is_valid(resource: Option<&Resource<'_>>) -> bool {
    LifecycleManager::global().is_valid(resource)
}

/// Destroys a resource, reporting a record that was already released.
pub fn destroy(resource: Resource<'_>) -> Result<()> {
    resource.destroy()
}

/// Net outstanding allocations of the process-wide manager.
pub fn net_allocations() -> i64 {
    LifecycleManager::global().net_allocations()
}
