//! Fixbits - Fixed-Width Unsigned Integers over Machine Words
//!
//! Fixbits provides [`UintN`], a logically `N`-bit unsigned value built out of
//! a fixed array of machine words. It is a building block for data structures
//! (for example hash-table bucket metadata) that need bit widths not matching
//! a native integer size, with predictable bit-level semantics and no
//! dynamic allocation.
//!
//! # Key Characteristics
//!
//! - Inline `[T; W]` storage, `W = ceil(N / T::BITS)`, no heap allocation
//! - Most significant word stored first, bits addressed from the least
//!   significant end
//! - Left shift, bitwise AND, pre-decrement, population count and single-bit
//!   test/set/unset
//! - Word type selectable among `u8`, `u16`, `u32`, `u64` and `u128`
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use fixbits::{popcount, uint_n};
//!
//! type U11 = uint_n!(11, u8);
//!
//! let mut x = U11::zero();
//! x.set(1);
//! x.set(3);
//! x.set(7);
//! x.set(10);
//!
//! assert_eq!(x.to_string(), "100'10001010");
//! assert_eq!(popcount(&x), 4);
//! assert!(x.test(10));
//! ```
//!
//! ## Shift, AND and Decrement
//!
//! ```
//! use fixbits::uint_n;
//!
//! type U10 = uint_n!(10, u8);
//!
//! let x = U10::from_words([0b10, 0b111]);
//! let y = U10::from_words([0b11, 0b101]);
//! assert_eq!((x & y).to_string(), "10'00000101");
//!
//! let mut z = U10::from_words([0b1, 0b1]);
//! z.decrement();
//! z.decrement();
//! assert_eq!(z.to_string(), "00'11111111");
//! assert_eq!((z << 2).to_string(), "11'11111100");
//! ```
//!
//! # Safety
//!
//! Fixbits uses `debug_assert!` for bit-position checks in hot paths, providing:
//!
//! - Zero-cost bounds checking in release builds
//! - Full validation during development and testing
//! - Checked `try_test`/`try_set`/`try_unset` variants for untrusted positions

// Module declarations
#[macro_use]
mod macros;

pub mod error;
pub mod serdes;
pub mod uint_n;
pub mod word;

// Re-exports for convenient access
pub use error::{FixbitsError, Result};
pub use uint_n::{popcount, UintN};
pub use word::Word;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Fixbits";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Fixbits"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        let x: UintN<u32, 40, 2> = UintN::zero();
        let _result: Result<()> = Ok(());
        assert_eq!(popcount(&x), 0);
        assert_eq!(<u32 as Word>::BITS, 32);
    }
}
