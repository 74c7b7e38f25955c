//! Notification and logging controls for hosts.

use crate::config::NotifyMode;
use crate::ffi::status_of;
use crate::logging::init_logging;
use crate::resource::LifecycleManager;

/// Selects where allocate/free lines go: 0 = silent, 1 = tracing log, 2 = stdout.
///
/// # Returns
/// `NR_OK`, or `NR_ERR_CONFIG` for an unknown mode (the current mode is kept).
#[no_mangle]
pub extern "C" fn nr_set_notify_mode(mode: u8) -> i32 {
    status_of(NotifyMode::try_from(mode).map(|mode| {
        LifecycleManager::global().set_notify_mode(mode);
    }))
}

/// Installs a fmt subscriber filtered by `NATIVE_RESOURCE_LOG` (default `info`).
///
/// # Returns
/// `NR_OK`, or `NR_ERR_CONFIG` if a subscriber is already installed.
#[no_mangle]
pub extern "C" fn nr_init_logging() -> i32 {
    status_of(init_logging("info"))
}
