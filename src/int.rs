//! Arbitrary width integer held as a sequence of magnitude words and a sign.

use crate::common::buf::WordBuf;
use crate::common::util;
use crate::defs::{Error, Sign, Word};

/// A signed integer of arbitrary width: an unsigned magnitude as an ordered
/// little-endian sequence of words, and a sign. The word sequence may
/// contain all-zero leading words, e.g. left by sign extension in the
/// source of the value; they do not affect any operation.
#[derive(Debug)]
pub struct IntNumber {
    m: WordBuf,
    s: Sign,
}

impl IntNumber {
    /// Constructs an integer from the magnitude words `m` (least
    /// significant word first) and the sign `s`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory for the magnitude.
    pub fn from_words(m: &[Word], s: Sign) -> Result<Self, Error> {
        Ok(IntNumber {
            m: WordBuf::from_words(m)?,
            s,
        })
    }

    /// Returns the sign of `self`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns the magnitude words of `self`, least significant word first.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.m
    }

    /// Returns true if the magnitude of `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.m.iter().all(|v| *v == 0)
    }

    /// Returns the zero-based index of the most significant set bit of the
    /// magnitude, i.e. the floor of the binary logarithm of the magnitude.
    ///
    /// The magnitude must not be zero; calling on a zero magnitude is a
    /// contract violation and panics.
    pub fn binary_log(&self) -> usize {
        assert!(!self.is_zero(), "binary logarithm of a zero magnitude");

        util::bit_len(&self.m) - 1
    }

    /// Returns the number of zero bits below the least significant set bit
    /// of the magnitude, or the total bit size of the magnitude if it is
    /// zero.
    pub fn trailing_zeros(&self) -> usize {
        util::count_trailing_zeroes(&self.m)
    }
}

macro_rules! impl_int_from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for IntNumber {
                fn from(v: $t) -> Self {
                    IntNumber { m: WordBuf::inline(&[v as Word]), s: Sign::Pos }
                }
            }
        )*
    };
}

impl_int_from_unsigned!(u8, u16, u32, u64);

macro_rules! impl_int_from_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for IntNumber {
                fn from(v: $t) -> Self {
                    let s = if v < 0 { Sign::Neg } else { Sign::Pos };
                    IntNumber { m: WordBuf::inline(&[v.unsigned_abs() as Word]), s }
                }
            }
        )*
    };
}

impl_int_from_signed!(i8, i16, i32, i64);

impl From<u128> for IntNumber {
    fn from(v: u128) -> Self {
        IntNumber {
            m: WordBuf::inline(&[v as Word, (v >> 64) as Word]),
            s: Sign::Pos,
        }
    }
}

impl From<i128> for IntNumber {
    fn from(v: i128) -> Self {
        let s = if v < 0 { Sign::Neg } else { Sign::Pos };
        let mag = v.unsigned_abs();

        IntNumber {
            m: WordBuf::inline(&[mag as Word, (mag >> 64) as Word]),
            s,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::WORD_SIGNIFICANT_BIT;
    use rand::random;

    #[test]
    fn test_int_number() {
        // zero detection with padding words
        assert!(IntNumber::from_words(&[], Sign::Pos).unwrap().is_zero());
        assert!(IntNumber::from_words(&[0, 0, 0], Sign::Neg).unwrap().is_zero());
        assert!(!IntNumber::from_words(&[0, 1, 0], Sign::Pos).unwrap().is_zero());

        // padding words do not perturb the binary logarithm
        let n = IntNumber::from_words(&[123], Sign::Pos).unwrap();
        assert!(n.binary_log() == 6);
        let n = IntNumber::from_words(&[123, 0, 0, 0], Sign::Pos).unwrap();
        assert!(n.binary_log() == 6);
        let n = IntNumber::from_words(&[0, 1, 0], Sign::Pos).unwrap();
        assert!(n.binary_log() == 64);
        assert!(n.trailing_zeros() == 64);

        // agreement with the fixed width intrinsics
        for _ in 0..1000 {
            let v: u64 = random();
            if v == 0 {
                continue;
            }

            let n = IntNumber::from(v);
            assert!(n.binary_log() == 63 - v.leading_zeros() as usize);
            assert!(n.trailing_zeros() == v.trailing_zeros() as usize);

            let v: u128 = random();
            let n = IntNumber::from(v);
            assert!(n.binary_log() == 127 - v.leading_zeros() as usize);
            assert!(n.trailing_zeros() == v.trailing_zeros() as usize);
        }
    }

    #[test]
    fn test_int_from_primitive() {
        let n = IntNumber::from(-1i8);
        assert!(n.sign() == Sign::Neg);
        assert!(n.words() == [1]);

        let n = IntNumber::from(i64::MIN);
        assert!(n.sign() == Sign::Neg);
        assert!(n.words() == [WORD_SIGNIFICANT_BIT]);

        let n = IntNumber::from(i128::MIN);
        assert!(n.sign() == Sign::Neg);
        assert!(n.words() == [0, 1 << 63]);

        let n = IntNumber::from(u128::MAX);
        assert!(n.sign() == Sign::Pos);
        assert!(n.words() == [u64::MAX, u64::MAX]);

        let n = IntNumber::from(0u32);
        assert!(n.sign() == Sign::Pos);
        assert!(n.is_zero());
    }

    #[test]
    #[should_panic]
    fn test_binary_log_of_zero() {
        IntNumber::from(0u64).binary_log();
    }
}
