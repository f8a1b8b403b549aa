//! # gcheck — structured check errors
//!
//! A small error type for failed checks plus the macros that raise it.
//!
//! ## Design
//!
//! [`CheckError`] carries:
//!
//! - a primary message, fixed once raised,
//! - context lines appended by outer layers while the error propagates,
//! - the [`Site`] that raised it and the stringified condition,
//! - a backtrace captured at raise time (see `GCHECK_BACKTRACE`).
//!
//! `what_without_backtrace()` renders the message followed by each context
//! line on its own line, indented by two spaces, in the order they were
//! added. `what()` adds the raising site and the backtrace.
//!
//! ## Quick Start
//!
//! ```rust
//! use gcheck::{check, rethrow, CheckResult};
//!
//! fn validate(dim: i64, rank: i64) -> CheckResult<()> {
//!     check!(dim < rank, "dim ", dim, " out of range for rank ", rank);
//!     Ok(())
//! }
//!
//! fn reduce(dim: i64) -> CheckResult<()> {
//!     if let Err(e) = validate(dim, 2) {
//!         rethrow!(e, "while reducing over dim ", dim);
//!     }
//!     Ok(())
//! }
//!
//! let err = reduce(5).unwrap_err();
//! assert_eq!(
//!     err.what_without_backtrace(),
//!     "dim 5 out of range for rank 2\n  while reducing over dim 5",
//! );
//! ```
//!
//! ## Macros
//!
//! | Macro                          | Effect on failure |
//! |--------------------------------|-------------------|
//! | `check!`                       | `ErrorKind::Error` |
//! | `check_value!` / `check_type!` / `check_index!` / `check_not_implemented!` | same, other kinds |
//! | `fail!`                        | always raises |
//! | `internal_assert!`             | `ErrorKind::InternalAssert`, every build |
//! | `internal_assert_debug_only!`  | as above with debug checks, not evaluated otherwise |
//! | `rethrow!`                     | appends a context line, returns the error again |
//! | `warn!` / `warn_once!`         | never raise; go to the warning handler |
//!
//! Message parts are written with `Display`, concatenated, evaluated only
//! when the check fails and never more than once.

mod site;
mod context;
mod error;
#[macro_use]
mod macros;
mod convert;
pub mod warning;

// ── Public API ────────────────────────────────────────────────────

pub use site::Site;
pub use context::{ErrorContext, CONTEXT_INDENT};
pub use error::{CheckError, CheckResult, ErrorKind};
pub use convert::ResultExt;
pub use warning::{
    CollectingWarningHandler, LogWarningHandler, Warning, WarningHandler, WarningHandlerGuard,
};

/// Whether `internal_assert_debug_only!` is compiled in.
pub use gcheck_core::DEBUG_CHECKS;

/// Support code for the exported macros. Not public API.
#[doc(hidden)]
pub mod __private {
    use core::fmt::{Display, Write};

    use crate::{CheckError, ErrorContext, ErrorKind, Site};

    pub fn concat(parts: &[&dyn Display]) -> String {
        let mut out = String::new();
        for part in parts {
            let _ = write!(out, "{}", part);
        }
        out
    }

    pub fn default_message(condition: &'static str) -> String {
        format!("Expected `{}` to be true, but got false.", condition)
    }

    pub fn internal_message(condition: &'static str, file: &'static str, line: u32, extra: &str) -> String {
        let mut msg = format!(
            "internal assert failed: `{}` at {}:{}, please report a bug",
            condition, file, line
        );
        if !extra.is_empty() {
            msg.push_str(". ");
            msg.push_str(extra);
        }
        msg
    }

    #[cold]
    #[inline(never)]
    pub fn raise(kind: ErrorKind, message: String, condition: &'static str, site: Site) -> CheckError {
        CheckError::raise(ErrorContext::new(kind, message, site).with_condition(condition))
    }
}
