use crate::{CheckError, CheckResult};

// ── ResultExt — context annotation on Results ─────────────────────

/// Extension trait for adding context lines to a `CheckResult`.
///
/// The method form of `rethrow!`: on `Err` the line is appended to the
/// error's context, on `Ok` nothing happens.
///
/// ```
/// use gcheck::{check, CheckResult, ResultExt};
///
/// fn parse_dim(d: i64) -> CheckResult<usize> {
///     check!(d >= 0, "negative dimension ", d);
///     Ok(d as usize)
/// }
///
/// let err = parse_dim(-1)
///     .context("while parsing shape")
///     .with_context(|| format!("for input {}", 0))
///     .unwrap_err();
/// assert_eq!(
///     err.what_without_backtrace(),
///     "negative dimension -1\n  while parsing shape\n  for input 0",
/// );
/// ```
pub trait ResultExt<T> {
    /// Append a fixed context line on the error path.
    fn context(self, line: impl Into<String>) -> CheckResult<T>;

    /// Append a lazily built context line. `f` only runs on the error path.
    fn with_context<S, F>(self, f: F) -> CheckResult<T>
    where
        S: Into<String>,
        F: FnOnce() -> S;
}

impl<T> ResultExt<T> for CheckResult<T> {
    fn context(self, line: impl Into<String>) -> CheckResult<T> {
        self.map_err(|e| e.with_context(line))
    }

    fn with_context<S, F>(self, f: F) -> CheckResult<T>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        self.map_err(|e: CheckError| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::ErrorKind;

    fn failing() -> CheckResult<u32> {
        Err(CheckError::new(ErrorKind::Error, "This is invalid"))
    }

    #[test]
    fn context_on_error() {
        let e = failing().context("While checking X").unwrap_err();
        assert_eq!(e.what_without_backtrace(), "This is invalid\n  While checking X");
    }

    #[test]
    fn context_chain_order() {
        let e = failing()
            .context("While checking X")
            .context("While checking Y")
            .unwrap_err();
        assert_eq!(
            e.what_without_backtrace(),
            "This is invalid\n  While checking X\n  While checking Y"
        );
    }

    #[test]
    fn with_context_is_lazy_on_ok() {
        let calls = Cell::new(0);
        let ok: CheckResult<u32> = Ok(5);
        let v = ok
            .with_context(|| {
                calls.set(calls.get() + 1);
                "unused"
            })
            .unwrap();
        assert_eq!(v, 5);
        assert_eq!(calls.get(), 0);

        let _ = failing().with_context(|| {
            calls.set(calls.get() + 1);
            "used"
        });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn question_mark_propagation() {
        fn layer() -> CheckResult<u32> {
            let v = failing().context("in layer")?;
            Ok(v + 1)
        }
        let e = layer().unwrap_err();
        assert_eq!(e.context(), ["in layer"]);
    }
}
