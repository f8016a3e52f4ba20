//! Binary floating point format descriptors.

use lazy_static::lazy_static;

use crate::defs::{DoubleWord, Error, Exponent, Sign, Word, DOUBLE_WORD_BIT_SIZE};
use crate::num::FloatNumber;

/// Descriptor of a binary floating point representation: the total bit size
/// of the representation, the bit size of the exponent field, and the bit
/// size of the stored significand field (the implicit integer bit of normal
/// values is not stored and not counted).
///
/// The exponent bias, the exponent range, and the special values of the
/// format are all derived from the three sizes.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct FloatFormat {
    total: usize,
    ew: usize,
    sw: usize,
}

impl FloatFormat {
    /// Returns a format descriptor with the total size of `total` bits,
    /// exponent field size of `ew` bits, and stored significand field size
    /// of `sw` bits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the field sizes do not fit the total size,
    ///    the exponent field is smaller than 2 or larger than 30 bits, or
    ///    the significand field is smaller than 2 bits (no room for the
    ///    quiet/signaling NaN distinction).
    pub fn new(total: usize, ew: usize, sw: usize) -> Result<Self, Error> {
        if !(2..=30).contains(&ew)
            || sw < 2
            || total > DOUBLE_WORD_BIT_SIZE
            || sw + ew + 1 > total
        {
            return Err(Error::InvalidArgument);
        }

        Ok(FloatFormat { total, ew, sw })
    }

    /// Returns the total bit size of the representation.
    #[inline]
    pub fn total_bit_size(&self) -> usize {
        self.total
    }

    /// Returns the bit size of the exponent field.
    #[inline]
    pub fn exponent_bit_size(&self) -> usize {
        self.ew
    }

    /// Returns the bit size of the stored significand field.
    #[inline]
    pub fn significand_bit_size(&self) -> usize {
        self.sw
    }

    /// Returns the exponent bias of the format.
    #[inline]
    pub fn bias(&self) -> Word {
        (1 << (self.ew - 1)) - 1
    }

    /// Returns the maximum unbiased exponent of a finite value.
    #[inline]
    pub fn max_exponent(&self) -> Exponent {
        self.bias() as Exponent
    }

    /// Returns the minimum unbiased exponent of a normal value.
    #[inline]
    pub fn min_exponent(&self) -> Exponent {
        1 - self.bias() as Exponent
    }

    /// Returns the unbiased exponent of the least nonzero subnormal value.
    #[inline]
    pub fn min_subnormal_exponent(&self) -> Exponent {
        self.min_exponent() - self.sw as Exponent
    }

    /// Returns the all-ones exponent field pattern of infinities and NaN.
    #[inline]
    pub fn max_exponent_pattern(&self) -> Word {
        (1 << self.ew) - 1
    }

    /// Returns the mask of the stored significand field.
    #[inline]
    pub fn significand_mask(&self) -> DoubleWord {
        (1 << self.sw) - 1
    }

    /// Returns the significand bit distinguishing quiet NaN from signaling NaN.
    #[inline]
    pub fn quiet_bit(&self) -> DoubleWord {
        1 << (self.sw - 1)
    }

    /// Returns the significand bit set in the signaling NaN special value.
    #[inline]
    pub fn signaling_bit(&self) -> DoubleWord {
        1 << (self.sw - 2)
    }

    /// Returns zero with the sign `s`.
    #[inline]
    pub fn zero(&self, s: Sign) -> FloatNumber {
        FloatNumber::from_parts(*self, s, 0, 0)
    }

    /// Returns infinity with the sign `s`.
    #[inline]
    pub fn infinity(&self, s: Sign) -> FloatNumber {
        FloatNumber::from_parts(*self, s, self.max_exponent_pattern(), 0)
    }

    /// Returns the quiet NaN special value with an empty payload.
    #[inline]
    pub fn nan(&self) -> FloatNumber {
        FloatNumber::from_parts(*self, Sign::Pos, self.max_exponent_pattern(), self.quiet_bit())
    }

    /// Returns the signaling NaN special value with an empty payload.
    #[inline]
    pub fn signaling_nan(&self) -> FloatNumber {
        FloatNumber::from_parts(
            *self,
            Sign::Pos,
            self.max_exponent_pattern(),
            self.signaling_bit(),
        )
    }

    /// Returns the greatest finite value: all bits of the significand are
    /// set to 1, the exponent field has the greatest finite pattern, and the
    /// sign is positive.
    pub fn max_value(&self) -> FloatNumber {
        FloatNumber::from_parts(
            *self,
            Sign::Pos,
            self.max_exponent_pattern() - 1,
            self.significand_mask(),
        )
    }

    /// Returns the smallest finite value: all bits of the significand are
    /// set to 1, the exponent field has the greatest finite pattern, and the
    /// sign is negative.
    pub fn min_value(&self) -> FloatNumber {
        FloatNumber::from_parts(
            *self,
            Sign::Neg,
            self.max_exponent_pattern() - 1,
            self.significand_mask(),
        )
    }

    /// Returns the minimum positive subnormal value: only the least
    /// significant bit of the significand is set to 1, and the exponent
    /// field is zero.
    pub fn min_positive(&self) -> FloatNumber {
        FloatNumber::from_parts(*self, Sign::Pos, 0, 1)
    }

    /// Returns the minimum positive normal value: the significand field is
    /// zero, and the exponent field has the smallest normal pattern.
    pub fn min_positive_normal(&self) -> FloatNumber {
        FloatNumber::from_parts(*self, Sign::Pos, 1, 0)
    }
}

lazy_static! {

    /// IEEE 754 half precision interchange format.
    pub static ref BINARY16: FloatFormat = FloatFormat::new(16, 5, 10).expect("Format binary16 initialization.");

    /// IEEE 754 single precision interchange format.
    pub static ref BINARY32: FloatFormat = FloatFormat::new(32, 8, 23).expect("Format binary32 initialization.");

    /// IEEE 754 double precision interchange format.
    pub static ref BINARY64: FloatFormat = FloatFormat::new(64, 11, 52).expect("Format binary64 initialization.");

    /// IEEE 754 quadruple precision interchange format.
    pub static ref BINARY128: FloatFormat = FloatFormat::new(128, 15, 112).expect("Format binary128 initialization.");

    /// bfloat16: binary32 truncated to 16 bits.
    pub static ref BFLOAT16: FloatFormat = FloatFormat::new(16, 8, 7).expect("Format bfloat16 initialization.");
}
