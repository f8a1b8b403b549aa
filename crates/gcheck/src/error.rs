use std::error::Error;
use std::fmt;

use crate::context::ErrorContext;
use crate::Site;

/// Classification of a check failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic failed check (`check!`, `fail!`)
    Error,
    /// Argument had a bad value (`check_value!`)
    Value,
    /// Argument had a bad type (`check_type!`)
    Type,
    /// Index out of range (`check_index!`)
    Index,
    /// Feature not implemented (`check_not_implemented!`)
    NotImplemented,
    /// Broken internal invariant (`internal_assert!`)
    InternalAssert,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "error",
            ErrorKind::Value => "value error",
            ErrorKind::Type => "type error",
            ErrorKind::Index => "index error",
            ErrorKind::NotImplemented => "not implemented",
            ErrorKind::InternalAssert => "internal assert",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured check error.
///
/// Carries a primary message, an append-only list of context lines added
/// while the error travels up the stack, the raising call site, and a
/// backtrace captured at raise time.
///
/// Two views:
///
/// - [`what_without_backtrace`](Self::what_without_backtrace): the message
///   followed by each context line on its own line, indented by two spaces.
///   `Display` prints this view.
/// - [`what`](Self::what): the same text plus the raising site and the
///   backtrace. `{:#}` prints this view.
///
/// ```
/// use gcheck::{CheckError, ErrorKind};
///
/// let mut err = CheckError::new(ErrorKind::Error, "This is invalid");
/// err.add_context("While checking X");
/// err.add_context("While checking Y");
/// assert_eq!(
///     err.what_without_backtrace(),
///     "This is invalid\n  While checking X\n  While checking Y",
/// );
/// ```
pub struct CheckError {
    inner: Box<ErrorContext>,
}

/// Convenience Result alias.
pub type CheckResult<T> = Result<T, CheckError>;

// ── Constructors ──────────────────────────────────────────────────

impl CheckError {
    /// Create an error raised at the caller's location.
    ///
    /// Prefer the check macros, which also record the condition text and
    /// only build the message on failure.
    #[track_caller]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::raise(ErrorContext::new(kind, message.into(), Site::caller()))
    }

    /// Finish a pre-built context: capture the backtrace and trace the raise.
    pub fn raise(mut ctx: ErrorContext) -> Self {
        ctx.capture_backtrace();
        gcheck_core::kdebug!("{} raised at {}: {}", ctx.kind, ctx.site, ctx.message());
        Self { inner: Box::new(ctx) }
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl CheckError {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.inner.kind
    }

    /// The primary message, without context lines.
    #[inline]
    pub fn message(&self) -> &str {
        self.inner.message()
    }

    /// Context lines in the order they were added.
    #[inline]
    pub fn context(&self) -> &[String] {
        self.inner.context()
    }

    #[inline]
    pub fn site(&self) -> Site {
        self.inner.site
    }

    /// Source text of the failed condition, when raised by a check macro.
    #[inline]
    pub fn condition(&self) -> Option<&'static str> {
        self.inner.condition
    }

    #[inline]
    pub fn backtrace(&self) -> Option<&str> {
        self.inner.backtrace.as_deref()
    }

    /// Message and context lines, no site or backtrace.
    #[inline]
    pub fn what_without_backtrace(&self) -> &str {
        self.inner.rendered()
    }

    /// Full report: message, context lines, raising site, backtrace.
    pub fn what(&self) -> String {
        let mut out = format!(
            "{}\n{} raised at {}",
            self.inner.rendered(),
            self.inner.kind,
            self.inner.site
        );
        if let Some(bt) = &self.inner.backtrace {
            out.push('\n');
            out.push_str(bt);
        }
        out
    }
}

// ── Context ───────────────────────────────────────────────────────

impl CheckError {
    /// Append a context line. Earlier lines are kept as they are.
    pub fn add_context(&mut self, line: impl Into<String>) {
        self.inner.push_context(line.into());
    }

    /// Builder form of [`add_context`](Self::add_context).
    pub fn with_context(mut self, line: impl Into<String>) -> Self {
        self.add_context(line);
        self
    }
}

// ── std::error::Error ─────────────────────────────────────────────

impl Error for CheckError {}

// ── Display / Debug ───────────────────────────────────────────────

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.what())
        } else {
            f.write_str(self.what_without_backtrace())
        }
    }
}

impl fmt::Debug for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckError")
            .field("context", &self.inner)
            .finish()
    }
}

impl From<CheckError> for std::io::Error {
    fn from(err: CheckError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_records_caller() {
        let line = line!() + 1;
        let err = CheckError::new(ErrorKind::Value, "bad value");
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err.message(), "bad value");
        assert_eq!(err.site().file(), file!());
        assert_eq!(err.site().line(), line);
        assert!(err.context().is_empty());
        assert!(err.condition().is_none());
    }

    #[test]
    fn single_context_line() {
        let err = CheckError::new(ErrorKind::Error, "This is invalid")
            .with_context("While checking X");
        assert_eq!(err.what_without_backtrace(), "This is invalid\n  While checking X");
    }

    #[test]
    fn context_appends_in_order() {
        let mut err = CheckError::new(ErrorKind::Error, "M");
        err.add_context("C1");
        err.add_context("C2");
        err.add_context("C3");
        assert_eq!(err.what_without_backtrace(), "M\n  C1\n  C2\n  C3");
        assert_eq!(err.message(), "M");
        assert_eq!(err.context(), ["C1", "C2", "C3"]);
    }

    #[test]
    fn what_includes_site() {
        let err = CheckError::new(ErrorKind::Index, "index 4 out of range").with_context("in gather");
        let full = err.what();
        assert!(full.starts_with("index 4 out of range\n  in gather\nindex error raised at "), "{}", full);
        assert!(full.contains(file!()), "{}", full);
    }

    #[test]
    fn display_views() {
        let err = CheckError::new(ErrorKind::Error, "M").with_context("C1");
        assert_eq!(format!("{}", err), "M\n  C1");
        assert_eq!(format!("{:#}", err), err.what());
    }

    #[test]
    fn kind_names() {
        assert_eq!(ErrorKind::Error.to_string(), "error");
        assert_eq!(ErrorKind::NotImplemented.to_string(), "not implemented");
        assert_eq!(ErrorKind::InternalAssert.to_string(), "internal assert");
    }

    #[test]
    fn into_io_error() {
        let err = CheckError::new(ErrorKind::Error, "M");
        let io: std::io::Error = err.into();
        assert_eq!(io.kind(), std::io::ErrorKind::Other);
        assert_eq!(io.to_string(), "M");
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<CheckError>();
    }

    #[test]
    fn crosses_threads() {
        let err = std::thread::spawn(|| CheckError::new(ErrorKind::Error, "from worker"))
            .join()
            .unwrap();
        assert_eq!(err.what_without_backtrace(), "from worker");
    }
}
