//! Storage word types and layout helpers.
//!
//! A [`UintN`](crate::UintN) is stored as a fixed array of machine words. This
//! module describes the unsigned integer types usable as those words and the
//! arithmetic that maps a logical bit width onto them.
//!
//! # Layout
//!
//! - `S = T::BITS` bits per word
//! - `W = ceil(N / S)` words for an `N`-bit value
//! - Only the low `top_bits(N, S)` bits of the most significant word carry
//!   value; the rest is padding

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Binary, Debug};
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl, Shr};

/// An unsigned machine integer usable as `UintN` storage.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128`. This trait cannot be
/// implemented outside this crate.
pub trait Word:
    Copy
    + Default
    + Eq
    + Hash
    + Debug
    + Binary
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Serialize
    + DeserializeOwned
    + seal::Sealed
    + 'static
{
    /// Width of the word in bits.
    const BITS: u32;
    /// All bits cleared.
    const ZERO: Self;
    /// Only the least significant bit set.
    const ONE: Self;
    /// All bits set.
    const MAX: Self;

    /// Number of set bits (hardware popcount where available).
    fn count_ones(self) -> u32;

    /// Subtraction modulo `2^BITS`.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Keep the low `BITS` bits of `x`.
    fn truncate_from(x: u128) -> Self;

    /// Mask with the low `n` bits set.
    #[inline(always)]
    fn low_mask(n: u32) -> Self {
        if n == 0 {
            Self::ZERO
        } else if n >= Self::BITS {
            Self::MAX
        } else {
            Self::MAX >> (Self::BITS - n)
        }
    }
}

macro_rules! word {
    ($($t:ty),+ $(,)?) => { $(
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$t>::MAX;

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn truncate_from(x: u128) -> Self {
                x as $t
            }
        }
        impl seal::Sealed for $t {}
    )+ };
}

word!(u8, u16, u32, u64, u128);

/// Number of `word_bits`-wide words needed to hold `bits` bits.
///
/// Usable in const position, which is how [`uint_n!`](crate::uint_n!) computes
/// the storage length of a `UintN` type.
pub const fn word_count(bits: usize, word_bits: u32) -> usize {
    let width = word_bits as usize;
    bits / width + (bits % width != 0) as usize
}

/// Number of meaningful bits in the most significant word.
///
/// `bits % word_bits`, or a full word when `bits` is an exact multiple.
pub const fn top_bits(bits: usize, word_bits: u32) -> u32 {
    let rem = (bits % word_bits as usize) as u32;
    if rem == 0 {
        word_bits
    } else {
        rem
    }
}

#[doc(hidden)]
mod seal {
    #[doc(hidden)]
    pub trait Sealed {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(1, 8), 1);
        assert_eq!(word_count(8, 8), 1);
        assert_eq!(word_count(9, 8), 2);
        assert_eq!(word_count(32, 8), 4);
        assert_eq!(word_count(64, 64), 1);
        assert_eq!(word_count(65, 64), 2);
        assert_eq!(word_count(300, 128), 3);
    }

    #[test]
    fn test_top_bits() {
        assert_eq!(top_bits(1, 8), 1);
        assert_eq!(top_bits(8, 8), 8);
        assert_eq!(top_bits(10, 8), 2);
        assert_eq!(top_bits(11, 8), 3);
        assert_eq!(top_bits(128, 64), 64);
        assert_eq!(top_bits(130, 64), 2);
    }

    #[test]
    fn test_low_mask() {
        assert_eq!(<u8 as Word>::low_mask(0), 0);
        assert_eq!(<u8 as Word>::low_mask(1), 0b1);
        assert_eq!(<u8 as Word>::low_mask(3), 0b111);
        assert_eq!(<u8 as Word>::low_mask(8), u8::MAX);
        assert_eq!(<u64 as Word>::low_mask(63), u64::MAX >> 1);
        assert_eq!(<u128 as Word>::low_mask(200), u128::MAX);
    }

    #[test]
    fn test_word_constants() {
        assert_eq!(<u8 as Word>::BITS, 8);
        assert_eq!(<u16 as Word>::BITS, 16);
        assert_eq!(<u32 as Word>::BITS, 32);
        assert_eq!(<u64 as Word>::BITS, 64);
        assert_eq!(<u128 as Word>::BITS, 128);
        assert_eq!(<u32 as Word>::MAX, u32::MAX);
    }

    #[test]
    fn test_word_arithmetic() {
        assert_eq!(Word::count_ones(0b1011_0001u8), 4);
        assert_eq!(Word::wrapping_sub(0u8, 1), u8::MAX);
        assert_eq!(Word::wrapping_sub(5u16, 1), 4);
        assert_eq!(<u8 as Word>::truncate_from(0x1ff), 0xff);
        assert_eq!(<u16 as Word>::truncate_from(0x1_2345), 0x2345);
    }
}
