//! The human-readable allocate/free line.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use crate::config::NotifyMode;
use crate::resource::id::ResourceHandle;

pub const ALLOCATED_MESSAGE: &str = "Allocated a resource";
pub const FREED_MESSAGE: &str = "Freed a resource";

/// Emits one line per create/destroy according to a switchable [`NotifyMode`].
pub(crate) struct Notifier {
    mode: AtomicU8,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}

impl Notifier {
    pub fn new(mode: NotifyMode) -> Self {
        Self::with_writer(mode, io::stdout())
    }

    /// Plain lines go to `writer` instead of standard output.
    pub fn with_writer(mode: NotifyMode, writer: impl Write + Send + 'static) -> Self {
        Self {
            mode: AtomicU8::new(mode as u8),
            sink: Mutex::new(Box::new(writer)),
        }
    }

    pub fn mode(&self) -> NotifyMode {
        // Only valid codes are ever stored.
        NotifyMode::try_from(self.mode.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_mode(&self, mode: NotifyMode) {
        self.mode.store(mode as u8, Ordering::Relaxed);
    }

    pub fn allocated(&self, handle: ResourceHandle) {
        self.emit(ALLOCATED_MESSAGE, handle);
    }

    pub fn freed(&self, handle: ResourceHandle) {
        self.emit(FREED_MESSAGE, handle);
    }

    fn emit(&self, message: &str, handle: ResourceHandle) {
        match self.mode() {
            NotifyMode::Silent => {}
            NotifyMode::Log => {
                info!(target: "native_resource", handle = handle.get(), "{message}");
            }
            NotifyMode::Stdout => {
                let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
                if let Err(err) = writeln!(sink, "{message}").and_then(|()| sink.flush()) {
                    warn!(%err, "failed to write resource notification");
                }
            }
        }
    }
}
