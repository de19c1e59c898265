//! UintN - Fixed-width unsigned integers packed into machine words.
//!
//! This module provides an `N`-bit unsigned value stored inline as an array of
//! `W` words of type `T`, with no heap allocation. It supports left shift,
//! bitwise AND, pre-decrement, population count and single-bit access.
//!
//! # Design
//!
//! - Uses `[T; W]` for storage, `W = ceil(N / T::BITS)`
//! - Word 0 is the MOST significant word; word `W - 1` is the least
//! - Bit indexing: word_idx = W - 1 - bit_idx / S, bit_offset = bit_idx % S
//! - Only the low `TOP_BITS` bits of word 0 carry value; the bits above them
//!   are padding
//!
//! # Padding
//!
//! Storage is not re-masked after mutation. `from_word`, `from_words`,
//! `decrement` and `shift_left` may leave values in the padding bits of
//! word 0. Every logical read (`test`, `count_ones`, `is_zero`, `Display`,
//! `to_bitvec`) masks them away. Equality and hashing compare raw words.
//!
//! # Examples
//!
//! ```
//! use fixbits::{popcount, uint_n};
//!
//! type U10 = uint_n!(10, u8);
//!
//! let mut x = U10::from_words([0b00, 0b1010_1001]);
//! x <<= 3;
//! assert_eq!(x.to_string(), "01'01001000");
//! assert_eq!(popcount(&x), 3);
//! ```

use crate::error::{FixbitsError, Result};
use crate::word::{top_bits, word_count, Word};
use bitvec::prelude::*;
use itertools::Itertools;
use rand::Rng;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, Shl, ShlAssign};

/// An `N`-bit unsigned integer stored in `W` words of type `T`.
///
/// `W` must equal `ceil(N / T::BITS)` and `N` must be non-zero; a mismatched
/// type fails to compile as soon as a value of it is constructed. Use
/// [`uint_n!`](crate::uint_n!) to name the type without spelling `W`.
///
/// Equality and hashing compare raw storage words, padding bits included, so
/// two values holding the same `N` bits can compare unequal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UintN<T: Word, const N: usize, const W: usize> {
    /// Storage words, most significant first
    words: [T; W],
}

impl<T: Word, const N: usize, const W: usize> UintN<T, N, W> {
    /// Logical width in bits.
    pub const BITS: usize = N;

    /// Number of storage words.
    pub const WORDS: usize = W;

    /// Width of one storage word in bits.
    pub const WORD_BITS: u32 = T::BITS;

    /// Number of meaningful bits in the most significant word.
    pub const TOP_BITS: u32 = top_bits(N, T::BITS);

    const LAYOUT: () = assert!(
        N > 0 && W == word_count(N, T::BITS),
        "UintN<T, N, W> requires N > 0 and W == ceil(N / T::BITS)"
    );

    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a value with every bit cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbits::uint_n;
    ///
    /// let x = <uint_n!(9, u8)>::zero();
    /// assert!(x.is_zero());
    /// assert_eq!(x.to_string(), "0'00000000");
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        let () = Self::LAYOUT;
        Self {
            words: [T::ZERO; W],
        }
    }

    /// Create a value whose least significant word is `x`.
    ///
    /// All more significant words are zero. When `W == 1`, bits of `x` above
    /// `N` land in padding and are ignored by logical reads.
    #[inline]
    pub fn from_word(x: T) -> Self {
        let mut value = Self::zero();
        value.words[W - 1] = x;
        value
    }

    /// Create a value from all `W` storage words, most significant first.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbits::uint_n;
    ///
    /// let x = <uint_n!(9, u8)>::from_words([0b1, 0b101]);
    /// assert_eq!(x.to_string(), "1'00000101");
    /// ```
    #[inline]
    pub const fn from_words(words: [T; W]) -> Self {
        let () = Self::LAYOUT;
        Self { words }
    }

    /// Create a value from a runtime-sized slice of words, most significant first.
    ///
    /// Fails with [`FixbitsError::InvalidWordCount`] unless `slice.len() == W`.
    pub fn try_from_word_slice(slice: &[T]) -> Result<Self> {
        let words: [T; W] = slice
            .try_into()
            .map_err(|_| FixbitsError::InvalidWordCount {
                expected: W,
                actual: slice.len(),
            })?;
        Ok(Self::from_words(words))
    }

    /// Create a uniformly random value over the logical range.
    ///
    /// Padding bits are left cleared.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut value = Self::zero();
        for word in value.words.iter_mut() {
            *word = T::truncate_from(rng.gen::<u128>());
        }
        value.words[0] &= Self::top_mask();
        value
    }

    // =========================================================================
    // Storage Access
    // =========================================================================

    /// Get read-only access to the storage words, most significant first.
    ///
    /// Includes padding bits exactly as stored.
    #[inline(always)]
    pub const fn words(&self) -> &[T; W] {
        &self.words
    }

    /// Return true if every logical bit is zero.
    pub fn is_zero(&self) -> bool {
        self.words[0] & Self::top_mask() == T::ZERO
            && self.words[1..].iter().all(|w| *w == T::ZERO)
    }

    /// Storage word holding bit `pos`.
    #[inline(always)]
    pub const fn word_index_for(pos: usize) -> usize {
        W - 1 - pos / T::BITS as usize
    }

    /// Offset of bit `pos` inside its storage word.
    #[inline(always)]
    pub const fn bit_offset_for(pos: usize) -> u32 {
        (pos % T::BITS as usize) as u32
    }

    #[inline(always)]
    fn bit_mask_for(pos: usize) -> T {
        T::ONE << Self::bit_offset_for(pos)
    }

    #[inline(always)]
    fn top_mask() -> T {
        T::low_mask(Self::TOP_BITS)
    }

    // =========================================================================
    // Arithmetic and Bitwise Operations
    // =========================================================================

    /// Shift the whole value left by `pos` bits, in place.
    ///
    /// Bits moved past position `N - 1` are discarded and low bits are filled
    /// with zeros. Shifting by `N` or more clears every logical bit.
    pub fn shift_left(&mut self, pos: usize) -> &mut Self {
        let upper = pos / T::BITS as usize;
        let lower = upper + 1;
        let shift = (pos % T::BITS as usize) as u32;

        // Destination i only reads sources at i + upper and i + lower, both >= i,
        // so walking from the most significant word never reads an overwritten word.
        for i in 0..W {
            if i + upper >= W {
                self.words[i] = T::ZERO;
                continue;
            }

            let mut word = self.words[i + upper] << shift;
            if shift != 0 && i + lower < W {
                word |= self.words[i + lower] >> (T::BITS - shift);
            }
            self.words[i] = word;
        }

        self
    }

    /// Bitwise AND with `rhs`, in place.
    pub fn and_with(&mut self, rhs: &Self) -> &mut Self {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a &= *b;
        }
        self
    }

    /// Subtract one, in place, and return the new value.
    ///
    /// The borrow ripples from the least significant word upward. Zero wraps to
    /// all ones, including the padding bits of word 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbits::uint_n;
    ///
    /// let mut x = <uint_n!(9, u8)>::zero();
    /// assert_eq!(x.decrement().to_string(), "1'11111111");
    /// ```
    pub fn decrement(&mut self) -> Self {
        for word in self.words.iter_mut().rev() {
            let borrow = *word == T::ZERO;
            *word = word.wrapping_sub(T::ONE);
            if !borrow {
                break;
            }
        }
        *self
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits in the logical range (population count).
    ///
    /// Padding bits of word 0 are never counted.
    #[inline]
    pub fn count_ones(&self) -> usize {
        let top = (self.words[0] & Self::top_mask()).count_ones() as usize;
        top + self.words[1..]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum::<usize>()
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Return whether bit `pos` is set (0 = least significant bit).
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `pos >= N`.
    #[inline]
    pub fn test(&self, pos: usize) -> bool {
        debug_assert!(pos < N, "bit index {} out of bounds (width: {})", pos, N);
        (self.words[Self::word_index_for(pos)] & Self::bit_mask_for(pos)) != T::ZERO
    }

    /// Set bit `pos` to 1.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `pos >= N`.
    #[inline]
    pub fn set(&mut self, pos: usize) {
        debug_assert!(pos < N, "bit index {} out of bounds (width: {})", pos, N);
        self.words[Self::word_index_for(pos)] |= Self::bit_mask_for(pos);
    }

    /// Clear bit `pos` to 0.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `pos >= N`.
    #[inline]
    pub fn unset(&mut self, pos: usize) {
        debug_assert!(pos < N, "bit index {} out of bounds (width: {})", pos, N);
        self.words[Self::word_index_for(pos)] &= !Self::bit_mask_for(pos);
    }

    /// Checked [`test`](Self::test).
    pub fn try_test(&self, pos: usize) -> Result<bool> {
        Self::check_index(pos)?;
        Ok(self.test(pos))
    }

    /// Checked [`set`](Self::set).
    pub fn try_set(&mut self, pos: usize) -> Result<()> {
        Self::check_index(pos)?;
        self.set(pos);
        Ok(())
    }

    /// Checked [`unset`](Self::unset).
    pub fn try_unset(&mut self, pos: usize) -> Result<()> {
        Self::check_index(pos)?;
        self.unset(pos);
        Ok(())
    }

    #[inline]
    fn check_index(pos: usize) -> Result<()> {
        if pos < N {
            Ok(())
        } else {
            Err(FixbitsError::IndexOutOfBounds {
                index: pos,
                width: N,
            })
        }
    }

    // =========================================================================
    // bitvec Interop
    // =========================================================================

    /// Copy the logical bits into a `BitVec` where index `i` is bit position `i`.
    pub fn to_bitvec(&self) -> BitVec<usize, Lsb0> {
        let mut bv = BitVec::repeat(false, N);
        for pos in 0..N {
            if self.test(pos) {
                bv.set(pos, true);
            }
        }
        bv
    }

    /// Build a value from a bit slice where index `i` is bit position `i`.
    ///
    /// Fails with [`FixbitsError::InvalidLength`] unless `bits.len() == N`.
    pub fn from_bitslice<S: BitStore, O: BitOrder>(bits: &BitSlice<S, O>) -> Result<Self> {
        if bits.len() != N {
            return Err(FixbitsError::InvalidLength {
                expected: N,
                actual: bits.len(),
            });
        }

        let mut value = Self::zero();
        for pos in bits.iter_ones() {
            value.set(pos);
        }
        Ok(value)
    }
}

/// Count number of set bits in the logical range of `x`.
///
/// # Examples
///
/// ```
/// use fixbits::{popcount, uint_n};
///
/// // Bit 2 is padding for a 2-bit value
/// assert_eq!(popcount(&<uint_n!(2, u8)>::from_word(0b111)), 2);
/// ```
#[inline]
pub fn popcount<T: Word, const N: usize, const W: usize>(x: &UintN<T, N, W>) -> usize {
    x.count_ones()
}

impl<T: Word, const N: usize, const W: usize> Default for UintN<T, N, W> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Word, const N: usize, const W: usize> From<T> for UintN<T, N, W> {
    fn from(x: T) -> Self {
        Self::from_word(x)
    }
}

// =============================================================================
// Shift Operators
// =============================================================================

impl<T: Word, const N: usize, const W: usize> ShlAssign<usize> for UintN<T, N, W> {
    fn shl_assign(&mut self, pos: usize) {
        self.shift_left(pos);
    }
}

impl<T: Word, const N: usize, const W: usize> Shl<usize> for UintN<T, N, W> {
    type Output = UintN<T, N, W>;

    fn shl(mut self, pos: usize) -> Self::Output {
        self.shift_left(pos);
        self
    }
}

impl<T: Word, const N: usize, const W: usize> Shl<usize> for &UintN<T, N, W> {
    type Output = UintN<T, N, W>;

    fn shl(self, pos: usize) -> Self::Output {
        *self << pos
    }
}

// =============================================================================
// Bitwise Operators
// =============================================================================

impl<T: Word, const N: usize, const W: usize> BitAndAssign<&UintN<T, N, W>> for UintN<T, N, W> {
    fn bitand_assign(&mut self, rhs: &UintN<T, N, W>) {
        self.and_with(rhs);
    }
}

impl<T: Word, const N: usize, const W: usize> BitAndAssign for UintN<T, N, W> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.and_with(&rhs);
    }
}

impl<T: Word, const N: usize, const W: usize> BitAnd for UintN<T, N, W> {
    type Output = UintN<T, N, W>;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self.and_with(&rhs);
        self
    }
}

impl<T: Word, const N: usize, const W: usize> BitAnd for &UintN<T, N, W> {
    type Output = UintN<T, N, W>;

    fn bitand(self, rhs: Self) -> Self::Output {
        *self & *rhs
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl<T: Word, const N: usize, const W: usize> fmt::Display for UintN<T, N, W> {
    /// Binary digits, most significant first, with `'` between storage words.
    ///
    /// The leading group has `TOP_BITS` digits; every other group has a full
    /// word of digits. Padding bits are not shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.words[0] & Self::top_mask();
        write!(f, "{:0width$b}", top, width = Self::TOP_BITS as usize)?;

        if W > 1 {
            let rest = self.words[1..].iter().format_with("'", |w, g| {
                g(&format_args!("{:0width$b}", w, width = T::BITS as usize))
            });
            write!(f, "'{}", rest)?;
        }

        Ok(())
    }
}
