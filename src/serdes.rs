//! Serialization support for [`UintN`].
//!
//! A value is encoded as a fixed-length tuple of its `W` storage words, most
//! significant first. Padding bits are written exactly as stored. Binary
//! encoding uses bincode; the text encoding is a JSON array of words.
//!
//! # Examples
//!
//! ```
//! use fixbits::uint_n;
//!
//! let x = <uint_n!(9, u8)>::from_words([0b1, 0b101]);
//! assert_eq!(x.to_json().unwrap(), "[1,5]");
//! assert_eq!(x.to_binary().unwrap(), vec![1, 5]);
//! ```

use crate::error::Result;
use crate::uint_n::UintN;
use crate::word::Word;
use bincode::Options;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Word, const N: usize, const W: usize> Serialize for UintN<T, N, W> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(W)?;
        for word in self.words() {
            tup.serialize_element(word)?;
        }
        tup.end()
    }
}

impl<'de, T: Word, const N: usize, const W: usize> Deserialize<'de> for UintN<T, N, W> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(W, WordsVisitor::<T, N, W>(PhantomData))
    }
}

struct WordsVisitor<T, const N: usize, const W: usize>(PhantomData<T>);

impl<'de, T: Word, const N: usize, const W: usize> Visitor<'de> for WordsVisitor<T, N, W> {
    type Value = UintN<T, N, W>;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "a sequence of {} words of {} bits", W, T::BITS)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut words = [T::ZERO; W];
        for (idx, word) in words.iter_mut().enumerate() {
            *word = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(idx, &self))?;
        }
        Ok(UintN::from_words(words))
    }
}

impl<T: Word, const N: usize, const W: usize> UintN<T, N, W> {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to binary (bincode).
    ///
    /// Words are written in storage order with fixed-width little-endian
    /// encoding and no length prefix.
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        Ok(binary_options().serialize(self)?)
    }

    /// Deserialize from binary (bincode).
    ///
    /// `data` must hold exactly `W` words; trailing bytes are rejected.
    pub fn from_binary(data: &[u8]) -> Result<Self> {
        Ok(binary_options().deserialize(data)?)
    }
}

fn binary_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

#[cfg(test)]
mod tests {
    use crate::error::FixbitsError;

    type U9 = crate::uint_n!(9, u8);
    type U70 = crate::uint_n!(70, u64);

    #[test]
    fn test_json_roundtrip() {
        let x = U9::from_words([0b1, 0b101]);
        let json = x.to_json().unwrap();
        assert_eq!(json, "[1,5]");
        assert_eq!(U9::from_json(&json).unwrap(), x);
    }

    #[test]
    fn test_binary_layout() {
        let x = U70::from_words([0b10, 1]);
        let bytes = x.to_binary().unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[0], 0b10);
        assert_eq!(bytes[8], 1);
        assert_eq!(U70::from_binary(&bytes).unwrap(), x);
    }

    #[test]
    fn test_short_input_rejected() {
        assert!(matches!(U9::from_json("[1]"), Err(FixbitsError::Json(_))));
        assert!(matches!(
            U9::from_binary(&[1]),
            Err(FixbitsError::Serialization(_))
        ));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        assert!(matches!(
            U9::from_binary(&[1, 5, 0]),
            Err(FixbitsError::Serialization(_))
        ));
        assert_eq!(U9::from_binary(&[1, 5]).unwrap(), U9::from_words([1, 5]));
    }

    #[test]
    fn test_padding_preserved() {
        let mut x = U9::zero();
        x.decrement();
        let restored = U9::from_json(&x.to_json().unwrap()).unwrap();
        assert_eq!(restored.words(), &[0xff, 0xff]);
    }
}
