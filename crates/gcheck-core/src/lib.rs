//! # gcheck-core
//!
//! Shared support for the gcheck crates.
//!
//! This crate has no domain logic of its own. It carries the pieces every
//! other crate in the workspace leans on.
//!
//! ## Modules
//!
//! - `kprint` - Kernel-style leveled stderr printing macros
//! - `env` - Environment variable utilities
//! - `config` - Runtime configuration (log level, flushing, backtraces)
//!
//! ## Debug checks
//!
//! [`DEBUG_CHECKS`] is the build-time switch for debug-only assertions.
//! It is `true` when the crate is built with `debug_assertions` or with the
//! `debug-checks` feature, `false` otherwise. Macros in downstream crates
//! branch on `$crate`-qualified copies of this constant so the decision is
//! made once, here, rather than in every caller's cfg context.

pub mod kprint;
pub mod env;
pub mod config;

// Re-exports for convenience
pub use config::{backtrace_enabled, CheckConfig};
pub use env::{env_get, env_get_bool, env_get_opt, env_get_str, env_is_set};
pub use kprint::LogLevel;

cfg_if::cfg_if! {
    if #[cfg(any(debug_assertions, feature = "debug-checks"))] {
        /// Debug-only checks are compiled in.
        pub const DEBUG_CHECKS: bool = true;
    } else {
        /// Debug-only checks are compiled out.
        pub const DEBUG_CHECKS: bool = false;
    }
}
