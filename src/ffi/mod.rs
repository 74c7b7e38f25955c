//! C ABI for foreign hosts.
//!
//! Every function here is a thin wrapper over [`LifecycleManager::global`]:
//! it converts Rust results into status codes or null handles. The actual
//! logic lives in the `resource` module.
//!
//! [`LifecycleManager::global`]: crate::LifecycleManager::global

pub mod lifecycle;
pub mod settings;

pub use lifecycle::{
    nr_resource_destroy, nr_resource_init, nr_resource_is_valid, nr_resource_net_allocations,
};
pub use settings::{nr_init_logging, nr_set_notify_mode};

/// Operation succeeded.
pub const NR_OK: i32 = 0;
/// Backing storage could not be allocated.
pub const NR_ERR_ALLOCATION: i32 = 1;
/// The handle does not refer to a live resource.
pub const NR_ERR_INVALID_HANDLE: i32 = 2;
/// A configuration value was rejected.
pub const NR_ERR_CONFIG: i32 = 3;

fn status_of(result: crate::Result<()>) -> i32 {
    match result {
        Ok(()) => NR_OK,
        Err(err) => err.status_code(),
    }
}
