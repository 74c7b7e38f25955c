//! Resource creation, validation, destruction and allocation queries.

use tracing::error;

use crate::ffi::status_of;
use crate::resource::{LifecycleManager, ResourceHandle};

/// Creates a new resource and returns an opaque handle to it.
///
/// # Returns
/// A non-zero handle to a ready resource, or 0 if allocation failed.
///
/// # Safety
/// The returned handle must eventually be passed to `nr_resource_destroy()`.
#[no_mangle]
pub extern "C" fn nr_resource_init() -> ResourceHandle {
    match LifecycleManager::global().create_raw() {
        Ok(handle) => handle,
        Err(err) => {
            error!(%err, "resource allocation failed");
            ResourceHandle::NULL
        }
    }
}

/// Returns 1 if `handle` names a live, ready resource and 0 otherwise.
/// Null and already destroyed handles return 0.
#[no_mangle]
pub extern "C" fn nr_resource_is_valid(handle: ResourceHandle) -> i32 {
    i32::from(LifecycleManager::global().is_valid_raw(handle))
}

/// Destroys a resource and frees its memory.
///
/// # Returns
/// `NR_OK`, or `NR_ERR_INVALID_HANDLE` if `handle` is 0, already destroyed,
/// or was not returned by `nr_resource_init()`. Rejected handles change nothing.
#[no_mangle]
pub extern "C" fn nr_resource_destroy(handle: ResourceHandle) -> i32 {
    status_of(LifecycleManager::global().destroy_raw(handle))
}

/// Number of resources created and not yet destroyed.
#[no_mangle]
pub extern "C" fn nr_resource_net_allocations() -> i64 {
    LifecycleManager::global().net_allocations()
}
