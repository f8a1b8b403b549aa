//! Call-site identification for raised errors and warnings.
//!
//! A `Site` is the `file:line:column` triple of the macro invocation (or the
//! `#[track_caller]` caller) that raised a `CheckError` or emitted a
//! `Warning`. It is carried for diagnostics only and never participates in
//! the no-backtrace message.

use core::fmt;
use std::panic::Location;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Site {
    file: &'static str,
    line: u32,
    column: u32,
}

impl Site {
    /// Unknown site, used when an error is built without location info.
    pub const UNKNOWN: Site = Site { file: "<unknown>", line: 0, column: 0 };

    /// Construct from `file!()`, `line!()`, `column!()`.
    ///
    /// ```
    /// use gcheck::Site;
    /// let site = Site::new("src/lib.rs", 10, 5);
    /// assert_eq!(site.to_string(), "src/lib.rs:10:5");
    /// ```
    #[inline]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// The location of the caller, through `#[track_caller]` frames.
    #[inline]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub const fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.line == 0
    }
}

impl From<&'static Location<'static>> for Site {
    fn from(loc: &'static Location<'static>) -> Self {
        Self::new(loc.file(), loc.line(), loc.column())
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Site({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_site() {
        assert!(Site::UNKNOWN.is_unknown());
        assert_eq!(Site::UNKNOWN.to_string(), "<unknown>:0:0");
    }

    #[test]
    fn caller_points_here() {
        let line = line!() + 1;
        let site = Site::caller();
        assert_eq!(site.file(), file!());
        assert_eq!(site.line(), line);
        assert!(!site.is_unknown());
    }

    #[test]
    fn caller_through_track_caller() {
        #[track_caller]
        fn outer() -> Site {
            Site::caller()
        }
        let line = line!() + 1;
        let site = outer();
        assert_eq!(site.line(), line);
    }

    #[test]
    fn debug_format() {
        let site = Site::new("a.rs", 3, 7);
        assert_eq!(format!("{:?}", site), "Site(a.rs:3:7)");
    }
}
