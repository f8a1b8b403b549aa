//! gcheck Configuration
//!
//! Library defaults with runtime environment overrides.
//!
//! # Configuration Priority (highest wins)
//!
//! 1. Programmatic `CheckConfig::apply()` / `kprint::set_*`
//! 2. Environment variables (read once, on first use)
//! 3. Library defaults
//!
//! # Example
//!
//! ```rust
//! use gcheck_core::{CheckConfig, LogLevel};
//!
//! CheckConfig::from_env()
//!     .log_level(LogLevel::Warn)
//!     .capture_backtrace(false)
//!     .apply();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use crate::env::{env_get, env_get_bool};
use crate::kprint::{self, LogLevel};

/// Default log level when `GCHECK_LOG_LEVEL` is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Default for `GCHECK_BACKTRACE`.
pub const DEFAULT_CAPTURE_BACKTRACE: bool = true;

static INIT: Once = Once::new();
static CAPTURE_BACKTRACE: AtomicBool = AtomicBool::new(DEFAULT_CAPTURE_BACKTRACE);

/// Runtime configuration shared by all gcheck crates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Minimum level printed by the `k*` log macros
    pub log_level: LogLevel,
    /// Flush stderr after every line
    pub flush_eprint: bool,
    /// Capture a backtrace when a check error is raised
    pub capture_backtrace: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            flush_eprint: false,
            capture_backtrace: DEFAULT_CAPTURE_BACKTRACE,
        }
    }
}

impl CheckConfig {
    /// Create config from defaults with environment overrides.
    ///
    /// Environment variables (all optional):
    /// - `GCHECK_LOG_LEVEL` - off/error/warn/info/debug/trace or 0-5
    /// - `GCHECK_FLUSH_EPRINT` - flush stderr after each line (0/1)
    /// - `GCHECK_BACKTRACE` - capture backtraces on check failure (0/1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: env_get("GCHECK_LOG_LEVEL", defaults.log_level),
            flush_eprint: env_get_bool("GCHECK_FLUSH_EPRINT", defaults.flush_eprint),
            capture_backtrace: env_get_bool("GCHECK_BACKTRACE", defaults.capture_backtrace),
        }
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn flush_eprint(mut self, enabled: bool) -> Self {
        self.flush_eprint = enabled;
        self
    }

    pub fn capture_backtrace(mut self, enabled: bool) -> Self {
        self.capture_backtrace = enabled;
        self
    }

    /// Install this configuration process-wide.
    ///
    /// Suppresses the lazy environment read if it has not happened yet.
    pub fn apply(&self) {
        INIT.call_once(|| {});
        self.store();
    }

    fn store(&self) {
        kprint::store(self.log_level, self.flush_eprint);
        CAPTURE_BACKTRACE.store(self.capture_backtrace, Ordering::Relaxed);
    }
}

/// Read the environment once. Called lazily by every accessor.
#[inline]
pub(crate) fn ensure_init() {
    INIT.call_once(|| CheckConfig::from_env().store());
}

/// Whether check errors should capture a backtrace.
#[inline]
pub fn backtrace_enabled() -> bool {
    ensure_init();
    CAPTURE_BACKTRACE.load(Ordering::Relaxed)
}
