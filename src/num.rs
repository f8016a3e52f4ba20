//! FloatNumber definition, classification, and basic manipulation operations.

use core::num::FpCategory;

use crate::defs::{DoubleWord, Error, Exponent, Sign, Word, DOUBLE_WORD_BIT_SIZE};
use crate::format::FloatFormat;

#[cfg(any(test, feature = "std"))]
use crate::format::{BINARY32, BINARY64};

/// A floating point value held as raw parts of its representation: a sign,
/// an exponent field bit pattern, and a stored significand field bit
/// pattern, interpreted against a [FloatFormat].
///
/// Classification of the value derives purely from the bit patterns.
/// Equality and hashing follow representation identity, not numeric
/// comparison: `-0` differs from `+0`, and NaN values with equal payloads
/// are equal.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct FloatNumber {
    fmt: FloatFormat,
    s: Sign,
    e: Word,
    m: DoubleWord,
}

impl FloatNumber {
    /// Constructs a number from parts known to fit the format fields.
    pub(crate) fn from_parts(fmt: FloatFormat, s: Sign, e: Word, m: DoubleWord) -> Self {
        debug_assert!(e <= fmt.max_exponent_pattern());
        debug_assert!(m <= fmt.significand_mask());

        FloatNumber { fmt, s, e, m }
    }

    /// Constructs a number of the format `fmt` from the raw parts:
    ///
    ///  - `s` is the sign.
    ///  - `e` is the exponent field bit pattern.
    ///  - `m` is the stored significand field bit pattern.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `e` or `m` does not fit the corresponding field
    ///    of the format.
    pub fn from_raw_parts(fmt: FloatFormat, s: Sign, e: Word, m: DoubleWord) -> Result<Self, Error> {
        if e > fmt.max_exponent_pattern() || m > fmt.significand_mask() {
            return Err(Error::InvalidArgument);
        }

        Ok(FloatNumber { fmt, s, e, m })
    }

    /// Constructs a number of the format `fmt` from the packed
    /// representation `bits`: the significand field in the low bits, the
    /// exponent field above it, and the sign bit on top.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `bits` has bits set above the sign bit.
    pub fn from_bits(fmt: FloatFormat, bits: u128) -> Result<Self, Error> {
        let width = fmt.exponent_bit_size() + fmt.significand_bit_size() + 1;

        if width < DOUBLE_WORD_BIT_SIZE && bits >> width != 0 {
            return Err(Error::InvalidArgument);
        }

        let s = if bits >> (width - 1) & 1 != 0 { Sign::Neg } else { Sign::Pos };
        let e = (bits >> fmt.significand_bit_size()) as Word & fmt.max_exponent_pattern();
        let m = bits & fmt.significand_mask();

        Ok(FloatNumber { fmt, s, e, m })
    }

    /// Returns the packed representation of `self`: the significand field
    /// in the low bits, the exponent field above it, and the sign bit on
    /// top.
    pub fn to_bits(&self) -> u128 {
        let sign_bit = if self.s.is_negative() {
            1 << (self.fmt.exponent_bit_size() + self.fmt.significand_bit_size())
        } else {
            0
        };

        sign_bit | self.magnitude()
    }

    /// Returns the format of `self`.
    #[inline]
    pub fn format(&self) -> FloatFormat {
        self.fmt
    }

    /// Returns the sign of `self`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns the exponent field bit pattern of `self`.
    #[inline]
    pub fn exponent_pattern(&self) -> Word {
        self.e
    }

    /// Returns the stored significand field bit pattern of `self`.
    #[inline]
    pub fn significand_pattern(&self) -> DoubleWord {
        self.m
    }

    /// Returns true if `self` is zero of either sign.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.e == 0 && self.m == 0
    }

    /// Returns true if `self` is subnormal: the exponent field is zero and
    /// the significand field is not.
    #[inline]
    pub fn is_subnormal(&self) -> bool {
        self.e == 0 && self.m != 0
    }

    /// Returns true if `self` is a normal value.
    #[inline]
    pub fn is_normal(&self) -> bool {
        self.e != 0 && self.e != self.fmt.max_exponent_pattern()
    }

    /// Returns true if `self` is a finite value: zero, subnormal, or normal.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.e != self.fmt.max_exponent_pattern()
    }

    /// Returns true if `self` is infinity of either sign.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.e == self.fmt.max_exponent_pattern() && self.m == 0
    }

    /// Returns true if `self` is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.e == self.fmt.max_exponent_pattern() && self.m != 0
    }

    /// Returns true if `self` is a signaling NaN: the quiet bit of the
    /// significand field is clear.
    #[inline]
    pub fn is_signaling_nan(&self) -> bool {
        self.is_nan() && self.m & self.fmt.quiet_bit() == 0
    }

    /// Returns the classification of `self`.
    pub fn classify(&self) -> FpCategory {
        if self.is_nan() {
            FpCategory::Nan
        } else if self.is_infinite() {
            FpCategory::Infinite
        } else if self.is_zero() {
            FpCategory::Zero
        } else if self.is_subnormal() {
            FpCategory::Subnormal
        } else {
            FpCategory::Normal
        }
    }

    /// Returns the unbiased exponent of `self`. For a subnormal value the
    /// exponent of the value itself is returned, as if the representation
    /// were normalized.
    ///
    /// `self` must be finite and nonzero.
    pub fn exponent(&self) -> Exponent {
        debug_assert!(self.is_finite() && !self.is_zero());

        if self.is_normal() {
            self.e as Exponent - self.fmt.bias() as Exponent
        } else {
            let msb = DOUBLE_WORD_BIT_SIZE - 1 - self.m.leading_zeros() as usize;

            self.fmt.min_exponent() + msb as Exponent - self.fmt.significand_bit_size() as Exponent
        }
    }

    /// Returns the number of significant fractional bits of the significand
    /// of `self`: the stored field width minus trailing zero bits for a
    /// normal value, and the distance between the highest and the lowest
    /// set bit for a subnormal value. The leading bit of the significand,
    /// implicit or explicit, is not counted.
    ///
    /// `self` must be finite.
    pub fn significand_width(&self) -> usize {
        debug_assert!(self.is_finite());

        if self.m == 0 {
            0
        } else if self.is_normal() {
            self.fmt.significand_bit_size() - self.m.trailing_zeros() as usize
        } else {
            let msb = DOUBLE_WORD_BIT_SIZE - 1 - self.m.leading_zeros() as usize;

            msb - self.m.trailing_zeros() as usize
        }
    }

    /// Returns a copy of the number with the sign reversed.
    #[inline]
    pub fn neg(&self) -> Self {
        let mut ret = *self;
        ret.s = ret.s.invert();
        ret
    }

    /// Sets the sign of `self` to `s`.
    #[inline]
    pub fn set_sign(&mut self, s: Sign) {
        self.s = s;
    }

    /// Returns the next representable value of the format toward positive
    /// infinity. NaN is returned unchanged.
    pub fn next_up(&self) -> Self {
        if self.is_nan() || (self.is_infinite() && self.s.is_positive()) {
            return *self;
        }

        if self.s.is_negative() {
            let mag = self.magnitude();
            if mag == 0 {
                // -0 steps to the least positive subnormal
                Self::from_parts(self.fmt, Sign::Pos, 0, 1)
            } else {
                Self::from_magnitude(self.fmt, Sign::Neg, mag - 1)
            }
        } else {
            Self::from_magnitude(self.fmt, Sign::Pos, self.magnitude() + 1)
        }
    }

    /// Returns the next representable value of the format toward negative
    /// infinity. NaN is returned unchanged.
    pub fn next_down(&self) -> Self {
        if self.is_nan() {
            return *self;
        }

        self.neg().next_up().neg()
    }

    // Exponent and significand fields combined into a single magnitude.
    // Consecutive magnitudes are consecutive values of the format.
    #[inline]
    fn magnitude(&self) -> DoubleWord {
        (self.e as DoubleWord) << self.fmt.significand_bit_size() | self.m
    }

    #[inline]
    fn from_magnitude(fmt: FloatFormat, s: Sign, mag: DoubleWord) -> Self {
        Self::from_parts(
            fmt,
            s,
            (mag >> fmt.significand_bit_size()) as Word,
            mag & fmt.significand_mask(),
        )
    }

    /// Constructs a binary64 number from the bit pattern of `f`.
    #[cfg(any(test, feature = "std"))]
    pub fn from_f64(f: f64) -> Self {
        let u = f.to_bits();

        let s = if u >> 63 != 0 { Sign::Neg } else { Sign::Pos };

        Self::from_parts(
            *BINARY64,
            s,
            (u >> 52) as Word & 0x7ff,
            (u & 0xf_ffff_ffff_ffff) as DoubleWord,
        )
    }

    /// Converts a binary64 number to the native f64 value with the same bit
    /// pattern. `self` must be of the binary64 format.
    #[cfg(any(test, feature = "std"))]
    pub fn to_f64(&self) -> f64 {
        assert!(self.fmt == *BINARY64);

        f64::from_bits(self.to_bits() as u64)
    }

    /// Constructs a binary32 number from the bit pattern of `f`.
    #[cfg(any(test, feature = "std"))]
    pub fn from_f32(f: f32) -> Self {
        let u = f.to_bits();

        let s = if u >> 31 != 0 { Sign::Neg } else { Sign::Pos };

        Self::from_parts(
            *BINARY32,
            s,
            (u >> 23) as Word & 0xff,
            (u & 0x7f_ffff) as DoubleWord,
        )
    }

    /// Converts a binary32 number to the native f32 value with the same bit
    /// pattern. `self` must be of the binary32 format.
    #[cfg(any(test, feature = "std"))]
    pub fn to_f32(&self) -> f32 {
        assert!(self.fmt == *BINARY32);

        f32::from_bits(self.to_bits() as u32)
    }

    /// Returns a random finite value of the format `fmt`: zero, subnormal,
    /// or normal, with either sign. Function does not follow any specific
    /// distribution law. The intended use of this function is for testing.
    #[cfg(feature = "random")]
    pub fn random_finite(fmt: FloatFormat) -> Self {
        let e = rand::random::<Word>() % fmt.max_exponent_pattern();
        let m = rand::random::<DoubleWord>() & fmt.significand_mask();
        let s = if rand::random::<u8>() & 1 == 0 { Sign::Pos } else { Sign::Neg };

        Self::from_parts(fmt, s, e, m)
    }
}
