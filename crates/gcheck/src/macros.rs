//! Check, assert, rethrow and warn macros.
//!
//! Every raising macro expands to an early `return Err(..)` from the
//! enclosing function, so that function must return a `Result` whose error
//! type implements `From<CheckError>`. Message parts are only evaluated on
//! the failure path, and each exactly once.

/// Concatenate the `Display` of every part into a `String`.
///
/// Each part is evaluated exactly once, left to right.
#[doc(hidden)]
#[macro_export]
macro_rules! __message {
    () => {
        ::std::string::String::new()
    };
    ($($part:expr),+ $(,)?) => {
        $crate::__private::concat(&[ $( &$part as &dyn ::core::fmt::Display ),+ ])
    };
}

/// Shared expansion of the `check*!` family.
#[doc(hidden)]
#[macro_export]
macro_rules! __check {
    ($kind:expr, $cond:expr $(,)?) => {
        if !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::__private::raise(
                    $kind,
                    $crate::__private::default_message(stringify!($cond)),
                    stringify!($cond),
                    $crate::Site::new(file!(), line!(), column!()),
                ),
            ));
        }
    };
    ($kind:expr, $cond:expr, $($part:expr),+ $(,)?) => {
        if !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::__private::raise(
                    $kind,
                    $crate::__message!($($part),+),
                    stringify!($cond),
                    $crate::Site::new(file!(), line!(), column!()),
                ),
            ));
        }
    };
}

/// Return a `CheckError` if a condition is false.
///
/// The message is the concatenation of the parts' `Display` output. With no
/// parts a default message naming the condition is used.
///
/// ```
/// use gcheck::{check, CheckResult};
///
/// fn positive(x: i32) -> CheckResult<i32> {
///     check!(x > 0, "expected a positive value, got ", x);
///     Ok(x)
/// }
///
/// let err = positive(-3).unwrap_err();
/// assert_eq!(err.what_without_backtrace(), "expected a positive value, got -3");
/// ```
#[macro_export]
macro_rules! check {
    ($($arg:tt)+) => {
        $crate::__check!($crate::ErrorKind::Error, $($arg)+)
    };
}

/// `check!` raising an [`ErrorKind::Value`](crate::ErrorKind::Value) error.
#[macro_export]
macro_rules! check_value {
    ($($arg:tt)+) => {
        $crate::__check!($crate::ErrorKind::Value, $($arg)+)
    };
}

/// `check!` raising an [`ErrorKind::Type`](crate::ErrorKind::Type) error.
#[macro_export]
macro_rules! check_type {
    ($($arg:tt)+) => {
        $crate::__check!($crate::ErrorKind::Type, $($arg)+)
    };
}

/// `check!` raising an [`ErrorKind::Index`](crate::ErrorKind::Index) error.
#[macro_export]
macro_rules! check_index {
    ($($arg:tt)+) => {
        $crate::__check!($crate::ErrorKind::Index, $($arg)+)
    };
}

/// `check!` raising an [`ErrorKind::NotImplemented`](crate::ErrorKind::NotImplemented) error.
#[macro_export]
macro_rules! check_not_implemented {
    ($($arg:tt)+) => {
        $crate::__check!($crate::ErrorKind::NotImplemented, $($arg)+)
    };
}

/// Unconditionally return a `CheckError` built from the parts.
#[macro_export]
macro_rules! fail {
    ($($part:expr),+ $(,)?) => {
        return ::core::result::Result::Err(::core::convert::From::from(
            $crate::__private::raise(
                $crate::ErrorKind::Error,
                $crate::__message!($($part),+),
                "false",
                $crate::Site::new(file!(), line!(), column!()),
            ),
        ))
    };
}

/// Assert an internal invariant, in every build configuration.
///
/// Failure means a bug in the caller's crate, not bad input. The message
/// names the condition and the location, followed by the parts.
///
/// ```
/// use gcheck::{internal_assert, CheckResult, ErrorKind};
///
/// fn pop(stack: &mut Vec<u8>) -> CheckResult<u8> {
///     internal_assert!(!stack.is_empty(), "pop on empty stack");
///     Ok(stack.pop().unwrap_or_default())
/// }
///
/// let err = pop(&mut Vec::new()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InternalAssert);
/// assert!(err.message().ends_with("please report a bug. pop on empty stack"));
/// ```
#[macro_export]
macro_rules! internal_assert {
    ($cond:expr $(,)?) => {
        if !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::__private::raise(
                    $crate::ErrorKind::InternalAssert,
                    $crate::__private::internal_message(stringify!($cond), file!(), line!(), ""),
                    stringify!($cond),
                    $crate::Site::new(file!(), line!(), column!()),
                ),
            ));
        }
    };
    ($cond:expr, $($part:expr),+ $(,)?) => {
        if !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::__private::raise(
                    $crate::ErrorKind::InternalAssert,
                    $crate::__private::internal_message(
                        stringify!($cond),
                        file!(),
                        line!(),
                        &$crate::__message!($($part),+),
                    ),
                    stringify!($cond),
                    $crate::Site::new(file!(), line!(), column!()),
                ),
            ));
        }
    };
}

/// `internal_assert!` that only exists in builds with debug checks.
///
/// With debug checks off (release build without the `debug-checks`
/// feature) the whole assertion sits behind a `false` constant: neither the
/// condition nor any part is evaluated.
#[macro_export]
macro_rules! internal_assert_debug_only {
    ($($arg:tt)+) => {
        if $crate::DEBUG_CHECKS {
            $crate::internal_assert!($($arg)+);
        }
    };
}

/// Append a context line to a caught `CheckError` and return it again.
///
/// ```
/// use gcheck::{check, rethrow, CheckResult};
///
/// fn inner() -> CheckResult<()> {
///     check!(false, "This is invalid");
///     Ok(())
/// }
///
/// fn outer() -> CheckResult<()> {
///     if let Err(e) = inner() {
///         rethrow!(e, "While checking X");
///     }
///     Ok(())
/// }
///
/// assert_eq!(
///     outer().unwrap_err().what_without_backtrace(),
///     "This is invalid\n  While checking X",
/// );
/// ```
#[macro_export]
macro_rules! rethrow {
    ($err:expr, $($part:expr),+ $(,)?) => {{
        let mut __err: $crate::CheckError = $err;
        __err.add_context($crate::__message!($($part),+));
        return ::core::result::Result::Err(::core::convert::From::from(__err));
    }};
}

/// Emit a warning through the current thread's warning handler.
///
/// Never fails and never returns early.
#[macro_export]
macro_rules! warn {
    ($($part:expr),+ $(,)?) => {
        $crate::warning::warn($crate::Warning::new(
            $crate::__message!($($part),+),
            $crate::Site::new(file!(), line!(), column!()),
        ))
    };
}

/// `warn!` that fires at most once per call site for the whole process.
#[macro_export]
macro_rules! warn_once {
    ($($part:expr),+ $(,)?) => {{
        static __ONCE: ::std::sync::Once = ::std::sync::Once::new();
        __ONCE.call_once(|| $crate::warn!($($part),+));
    }};
}
