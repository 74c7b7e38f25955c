//! The heap record behind every resource handle.

/// Backing storage of one resource.
///
/// Callers only ever hold a [`ResourceHandle`](crate::ResourceHandle) naming it.
#[derive(Debug)]
pub(crate) struct ResourceRecord {
    ready: bool,
}

impl ResourceRecord {
    /// A freshly initialized record. The readiness flag is set here and never changes.
    pub(crate) fn new() -> Self {
        Self { ready: true }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}
