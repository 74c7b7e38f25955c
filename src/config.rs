//! Runtime configuration for lifecycle notifications.
//!
//! The only knob is where the "Allocated a resource" / "Freed a resource"
//! lines go. Hosts that load the library through the C ABI cannot hand us a
//! Rust value, so the process-wide manager reads its mode from
//! `NATIVE_RESOURCE_NOTIFY` and can be switched later with
//! `nr_set_notify_mode`.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{ResourceError, Result};

/// Environment variable consulted by [`LifecycleConfig::from_env`].
pub const NOTIFY_ENV: &str = "NATIVE_RESOURCE_NOTIFY";

/// Destination of the per-resource notification line.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotifyMode {
    /// No notification at all.
    Silent = 0,
    /// An `info` event on the `native_resource` tracing target.
    #[default]
    Log = 1,
    /// A plain line on standard output, or on the writer given to
    /// [`LifecycleManager::with_writer`](crate::LifecycleManager::with_writer).
    Stdout = 2,
}

impl NotifyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Log => "log",
            Self::Stdout => "stdout",
        }
    }
}

impl fmt::Display for NotifyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotifyMode {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" | "off" | "none" => Ok(Self::Silent),
            "log" | "tracing" => Ok(Self::Log),
            "stdout" | "print" => Ok(Self::Stdout),
            other => Err(ResourceError::Config {
                key: NOTIFY_ENV,
                reason: format!("unknown notify mode {other:?}"),
            }),
        }
    }
}

impl TryFrom<u8> for NotifyMode {
    type Error = ResourceError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Silent),
            1 => Ok(Self::Log),
            2 => Ok(Self::Stdout),
            other => Err(ResourceError::Config {
                key: "notify mode",
                reason: format!("no mode with code {other}"),
            }),
        }
    }
}

/// Settings a [`LifecycleManager`](crate::LifecycleManager) is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleConfig {
    pub notify: NotifyMode,
}

impl LifecycleConfig {
    pub fn silent() -> Self {
        Self {
            notify: NotifyMode::Silent,
        }
    }

    pub fn with_notify(mut self, notify: NotifyMode) -> Self {
        self.notify = notify;
        self
    }

    /// Reads [`NOTIFY_ENV`]. An unset variable yields the default config.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(NOTIFY_ENV) {
            config.notify = raw.parse()?;
        }
        Ok(config)
    }
}
