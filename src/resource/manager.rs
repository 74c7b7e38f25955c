//! Creation, validation and destruction of resource records.

use std::alloc::{alloc, Layout};
use std::io::Write;
use std::sync::{LazyLock, OnceLock};

use tracing::{debug, warn};

use crate::config::{LifecycleConfig, NotifyMode};
use crate::error::{ResourceError, Result};
use crate::resource::counter::AllocationCounter;
use crate::resource::handle::Resource;
use crate::resource::id::ResourceHandle;
use crate::resource::notify::Notifier;
use crate::resource::record::ResourceRecord;
use crate::resource::registry::LiveRegistry;

// Holds a configuration error raised before any subscriber could record it.
static STARTUP_WARNING: OnceLock<ResourceError> = OnceLock::new();

static GLOBAL: LazyLock<LifecycleManager> = LazyLock::new(|| {
    let config = config_or_default(LifecycleConfig::from_env(), &STARTUP_WARNING);
    LifecycleManager::with_config(config)
});

fn config_or_default(
    loaded: Result<LifecycleConfig>,
    warning: &OnceLock<ResourceError>,
) -> LifecycleConfig {
    loaded.unwrap_or_else(|err| {
        warn!(%err, "ignoring notification setting, using the default");
        let _ = warning.set(err);
        LifecycleConfig::default()
    })
}

/// Logs the global manager's configuration error again, once a subscriber exists.
pub(crate) fn replay_startup_warning() -> bool {
    replay_warning(&STARTUP_WARNING)
}

fn replay_warning(warning: &OnceLock<ResourceError>) -> bool {
    match warning.get() {
        Some(err) => {
            warn!(%err, "ignored notification setting, using the default");
            true
        }
        None => false,
    }
}

/// Owns the allocation counter and the live records.
///
/// Every record created by a manager must be destroyed by the same manager.
/// The C ABI works against [`LifecycleManager::global`]; Rust callers may
/// also build private managers, which keeps their counts independent.
#[derive(Debug)]
pub struct LifecycleManager {
    counter: AllocationCounter,
    registry: LiveRegistry,
    notifier: Notifier,
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self::with_config(LifecycleConfig::default())
    }

    pub fn with_config(config: LifecycleConfig) -> Self {
        Self::from_notifier(Notifier::new(config.notify))
    }

    /// Like [`with_config`](Self::with_config), but [`NotifyMode::Stdout`]
    /// lines are written to `writer`.
    pub fn with_writer(config: LifecycleConfig, writer: impl Write + Send + 'static) -> Self {
        Self::from_notifier(Notifier::with_writer(config.notify, writer))
    }

    fn from_notifier(notifier: Notifier) -> Self {
        Self {
            counter: AllocationCounter::new(),
            registry: LiveRegistry::new(),
            notifier,
        }
    }

    /// The process-wide manager, configured from the environment on first use.
    pub fn global() -> &'static LifecycleManager {
        &GLOBAL
    }

    /// Allocates a ready record and wraps it in an owning handle.
    pub fn create(&self) -> Result<Resource<'_>> {
        let handle = self.create_raw()?;
        Ok(Resource::from_parts(self, handle))
    }

    /// Allocates a ready record and hands out its bare handle.
    ///
    /// The caller owns the record and must pass the handle to
    /// [`destroy_raw`](Self::destroy_raw) (or re-wrap it with
    /// [`adopt_raw`](Self::adopt_raw)) exactly once.
    pub fn create_raw(&self) -> Result<ResourceHandle> {
        let record = allocate_record()?;
        let handle = ResourceHandle::next();
        self.registry.insert(handle, record)?;

        let outstanding = self.counter.increment();
        debug!(handle = handle.get(), outstanding, "resource created");
        self.notifier.allocated(handle);

        Ok(handle)
    }

    /// True iff `resource` is present and refers to a live, ready record.
    pub fn is_valid(&self, resource: Option<&Resource<'_>>) -> bool {
        resource.is_some_and(|resource| self.is_valid_raw(resource.handle()))
    }

    /// True iff `handle` names a live record of this manager and its flag is set.
    ///
    /// Null, destroyed and foreign handles are all answered with false.
    pub fn is_valid_raw(&self, handle: ResourceHandle) -> bool {
        self.registry
            .with_live(handle, ResourceRecord::is_ready)
            .unwrap_or(false)
    }

    /// Releases a record previously returned by [`create_raw`](Self::create_raw).
    ///
    /// A handle that is null, already destroyed, or not owned by this manager
    /// is rejected with [`ResourceError::InvalidHandle`] and the count is left alone.
    pub fn destroy_raw(&self, handle: ResourceHandle) -> Result<()> {
        let Some(record) = self.registry.remove(handle) else {
            warn!(handle = handle.get(), "refusing to destroy a handle that is not live");
            return Err(ResourceError::InvalidHandle {
                handle: handle.get(),
            });
        };
        drop(record);

        let outstanding = self.counter.decrement();
        debug!(handle = handle.get(), outstanding, "resource destroyed");
        self.notifier.freed(handle);

        Ok(())
    }

    /// Takes a raw handle back under RAII ownership.
    ///
    /// The handle must be live in this manager; the count is not changed.
    pub fn adopt_raw(&self, handle: ResourceHandle) -> Result<Resource<'_>> {
        if self.registry.contains(handle) {
            Ok(Resource::from_parts(self, handle))
        } else {
            Err(ResourceError::InvalidHandle {
                handle: handle.get(),
            })
        }
    }

    /// Creates completed minus destroys completed.
    pub fn net_allocations(&self) -> i64 {
        self.counter.get()
    }

    /// Number of records currently live.
    pub fn live_handles(&self) -> usize {
        self.registry.len()
    }

    pub fn notify_mode(&self) -> NotifyMode {
        self.notifier.mode()
    }

    pub fn set_notify_mode(&self, mode: NotifyMode) {
        self.notifier.set_mode(mode);
    }
}

/// Obtains storage for one record, reporting out-of-memory instead of aborting.
fn allocate_record() -> Result<Box<ResourceRecord>> {
    let layout = Layout::new::<ResourceRecord>();

    // SAFETY: `ResourceRecord` is not zero-sized.
    let raw = unsafe { alloc(layout) }.cast::<ResourceRecord>();
    if raw.is_null() {
        return Err(ResourceError::AllocationFailure {
            size: layout.size(),
        });
    }

    // SAFETY: freshly allocated by the global allocator with the record's own
    // layout, which is exactly what `Box` expects to own and free.
    unsafe {
        raw.write(ResourceRecord::new());
        Ok(Box::from_raw(raw))
    }
}
