//! Type-level helpers.

/// Name a [`UintN`](crate::UintN) type by bit width, computing its word count.
///
/// `uint_n!(N, T)` expands to `UintN<T, N, W>` with `W = ceil(N / T::BITS)`.
/// The word type defaults to `u64`.
///
/// # Examples
///
/// ```
/// use fixbits::uint_n;
///
/// type Meta = uint_n!(10, u8);
/// assert_eq!(Meta::WORDS, 2);
///
/// type Wide = uint_n!(130);
/// assert_eq!(Wide::WORDS, 3);
/// ```
#[macro_export]
macro_rules! uint_n {
    ($bits:expr) => {
        $crate::uint_n!($bits, u64)
    };
    ($bits:expr, $word:ty) => {
        $crate::UintN<
            $word,
            { $bits },
            { $crate::word::word_count($bits, <$word as $crate::Word>::BITS) },
        >
    };
}

#[cfg(test)]
mod tests {
    use crate::UintN;

    #[test]
    fn test_macro_layout() {
        assert_eq!(<uint_n!(1, u8)>::WORDS, 1);
        assert_eq!(<uint_n!(9, u8)>::WORDS, 2);
        assert_eq!(<uint_n!(32, u8)>::WORDS, 4);
        assert_eq!(<uint_n!(64)>::WORDS, 1);
        assert_eq!(<uint_n!(65)>::WORDS, 2);
    }

    #[test]
    fn test_macro_matches_explicit_type() {
        let a: uint_n!(10, u8) = UintN::from_words([0b10, 0b111]);
        let b: UintN<u8, 10, 2> = UintN::from_words([0b10, 0b111]);
        assert_eq!(a, b);
    }
}
