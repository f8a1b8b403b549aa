use core::any::type_name;
use core::fmt;

use crate::container::HasSize;
use crate::signed::SignedSize;

/// Signed result type of [`ssize`] for a container type.
pub type SignedSizeOf<C> = <<C as HasSize>::Size as SignedSize>::Signed;

/// Marker present in every overflow report.
pub const GREATER_THAN_MAX: &str = "greater_than_max";

/// A size that does not fit in its signed result type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeOverflow {
    pub size: u128,
    pub target: &'static str,
}

impl SizeOverflow {
    fn of<S: SignedSize>(size: S) -> Self {
        Self {
            size: size.widen(),
            target: type_name::<S::Signed>(),
        }
    }
}

impl fmt::Display for SizeOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: size {} cannot be represented as {}",
            GREATER_THAN_MAX, self.size, self.target
        )
    }
}

impl std::error::Error for SizeOverflow {}

/// Signed size of a container.
///
/// The result is at least `isize`, wider when the container's size type is
/// wider than a pointer (see [`crate::signed`]).
///
/// # Panics
///
/// With debug checks enabled, panics with a `greater_than_max` message when
/// the size does not fit. Without debug checks the value is cast unchecked.
///
/// ```
/// use gssize::ssize;
///
/// let v = vec!['a', 'b', 'c'];
/// let n: isize = ssize(&v);
/// assert_eq!(n, 3);
/// assert_eq!((0..n).rev().count(), 3);
/// ```
#[inline]
#[track_caller]
pub fn ssize<C: HasSize + ?Sized>(container: &C) -> <C::Size as SignedSize>::Signed {
    let size = container.size();
    if gcheck_core::DEBUG_CHECKS {
        match size.checked_signed() {
            Some(signed) => return signed,
            None => greater_than_max(SizeOverflow::of(size)),
        }
    }
    size.cast_signed()
}

/// Checked in every build; overflow is returned instead of panicking.
#[inline]
pub fn try_ssize<C>(container: &C) -> Result<<C::Size as SignedSize>::Signed, SizeOverflow>
where
    C: HasSize + ?Sized,
{
    let size = container.size();
    size.checked_signed().ok_or_else(|| SizeOverflow::of(size))
}

#[cold]
#[inline(never)]
#[track_caller]
fn greater_than_max(overflow: SizeOverflow) -> ! {
    let at = std::panic::Location::caller();
    gcheck_core::kerror!("ssize at {}: {}", at, overflow);
    panic!("{}", overflow)
}
