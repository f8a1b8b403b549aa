//! Unsigned size types and their signed result types.
//!
//! The result type is the common type of `isize` and the signed counterpart
//! of the input: never narrower than `isize`, promoted further when the
//! input is wider than a pointer.
//!
//! | Input   | 16-bit | 32-bit | 64-bit |
//! |---------|--------|--------|--------|
//! | `u8`    | isize  | isize  | isize  |
//! | `u16`   | isize  | isize  | isize  |
//! | `u32`   | i32    | isize  | isize  |
//! | `u64`   | i64    | i64    | isize  |
//! | `u128`  | i128   | i128   | i128   |
//! | `usize` | isize  | isize  | isize  |

use core::fmt;

/// An unsigned size that can be converted to a signed count.
pub trait SignedSize: Copy + fmt::Display {
    /// Signed result type, at least as wide as `isize`.
    type Signed: Copy + fmt::Debug + fmt::Display + PartialEq;

    /// `Some` when the value fits in `Signed`.
    fn checked_signed(self) -> Option<Self::Signed>;

    /// Unchecked cast; wraps when the value does not fit.
    fn cast_signed(self) -> Self::Signed;

    /// Lossless widening, for error reports.
    fn widen(self) -> u128;

    #[inline]
    fn exceeds_signed_max(self) -> bool {
        self.checked_signed().is_none()
    }
}

macro_rules! impl_signed_size {
    ($($unsigned:ty => $signed:ty),* $(,)?) => {$(
        impl SignedSize for $unsigned {
            type Signed = $signed;

            #[inline]
            fn checked_signed(self) -> Option<$signed> {
                <$signed>::try_from(self).ok()
            }

            #[inline]
            fn cast_signed(self) -> $signed {
                self as $signed
            }

            #[inline]
            fn widen(self) -> u128 {
                self as u128
            }
        }
    )*};
}

impl_signed_size! {
    u8 => isize,
    u16 => isize,
    usize => isize,
    u128 => i128,
}

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        impl_signed_size! {
            u32 => isize,
            u64 => isize,
        }
    } else if #[cfg(target_pointer_width = "32")] {
        impl_signed_size! {
            u32 => isize,
            u64 => i64,
        }
    } else {
        impl_signed_size! {
            u32 => i32,
            u64 => i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_fit() {
        assert_eq!(3u8.checked_signed(), Some(3isize));
        assert_eq!(3u16.checked_signed(), Some(3isize));
        assert_eq!(3usize.checked_signed(), Some(3isize));
        assert_eq!(3u128.checked_signed(), Some(3i128));
    }

    #[test]
    fn narrow_inputs_never_overflow() {
        assert!(!u8::MAX.exceeds_signed_max());
        assert!(!u16::MAX.exceeds_signed_max());
    }

    #[test]
    fn boundary_at_signed_max() {
        let max = isize::MAX as usize;
        assert_eq!(max.checked_signed(), Some(isize::MAX));
        assert!((max + 1).exceeds_signed_max());
        assert!(usize::MAX.exceeds_signed_max());
        assert!(u128::MAX.exceeds_signed_max());
        assert!(!(i128::MAX as u128).exceeds_signed_max());
    }

    #[test]
    fn u64_boundary() {
        assert!(!(i64::MAX as u64).exceeds_signed_max());
        assert!(((i64::MAX as u64) + 1).exceeds_signed_max());
    }

    #[test]
    fn cast_wraps() {
        assert_eq!(usize::MAX.cast_signed(), -1isize);
    }

    #[test]
    fn widen_is_lossless() {
        assert_eq!(usize::MAX.widen(), usize::MAX as u128);
        assert_eq!(u64::MAX.widen(), u64::MAX as u128);
    }
}
