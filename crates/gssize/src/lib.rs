//! # gssize
//!
//! Signed sizes for containers.
//!
//! `ssize(&c)` turns `c.size()` into a signed count so callers can do index
//! arithmetic without sprinkling `as isize` casts. The result type is never
//! narrower than `isize`, and is promoted (to `i64`, `i128`, ...) when the
//! container's size type is wider than a pointer, so nothing is truncated.
//!
//! ## Modules
//!
//! - `signed` - Unsigned size types and their signed result types
//! - `container` - The `HasSize` trait and std collection impls
//! - `ssize` - `ssize` / `try_ssize`
//!
//! ## Overflow
//!
//! A size larger than the result type's max is a caller bug. With debug
//! checks (`debug_assertions` or the `debug-checks` feature) `ssize` panics
//! with a message containing `greater_than_max`; without them the check is
//! compiled out. `try_ssize` is always checked and returns `SizeOverflow`.

pub mod signed;
pub mod container;
mod ssize;

pub use container::HasSize;
pub use signed::SignedSize;
pub use ssize::{ssize, try_ssize, SignedSizeOf, SizeOverflow, GREATER_THAN_MAX};
