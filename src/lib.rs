//! Native Resource - a single native resource with explicit lifecycle
//!
//! A resource is created, checked for validity and destroyed exactly once,
//! while a counter tracks how many are outstanding. The library exposes a
//! C ABI (`nr_*` functions) for foreign hosts and an RAII wrapper for Rust.

pub mod config;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod resource;

pub use config::{LifecycleConfig, NotifyMode};
pub use error::{ResourceError, Result};
pub use logging::init_logging;
pub use resource::{
    create, destroy, is_valid, net_allocations, LifecycleManager, Resource, ResourceHandle,
};

#[cfg(test)]
mod test_support;
