//! Formatting of FloatNumber.

use core::fmt::{self, Display, Formatter, Write};

use crate::num::FloatNumber;

impl Display for FloatNumber {
    /// Formats the number using the hexadecimal significand notation,
    /// e.g. `0x1.921fb54442d18p+1`. NaN is formatted as `NaN` or `sNaN`
    /// disregarding the payload, infinity as `Inf`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.sign().is_negative() {
            f.write_char('-')?;
        }

        if self.is_nan() {
            f.write_str(if self.is_signaling_nan() { "sNaN" } else { "NaN" })
        } else if self.is_infinite() {
            f.write_str("Inf")
        } else {
            let sw = self.format().significand_bit_size();
            let nw = (sw + 3) / 4 * 4;
            let frac = self.significand_pattern() << (nw - sw);

            f.write_str(if self.is_normal() { "0x1." } else { "0x0." })?;

            for i in (0..nw / 4).rev() {
                write!(f, "{:x}", frac >> (i * 4) & 0xf)?;
            }

            let e = if self.is_normal() {
                self.exponent()
            } else if self.is_zero() {
                0
            } else {
                self.format().min_exponent()
            };

            if e >= 0 {
                write!(f, "p+{}", e)
            } else {
                write!(f, "p{}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use crate::defs::Sign;
    use crate::format::{BINARY32, BINARY64};
    use crate::num::FloatNumber;

    #[test]
    fn test_format_str() {
        assert!(format!("{}", FloatNumber::from_f64(1.0)) == "0x1.0000000000000p+0");
        assert!(format!("{}", FloatNumber::from_f64(-1.5)) == "-0x1.8000000000000p+0");
        assert!(
            format!("{}", FloatNumber::from_f64(std::f64::consts::PI))
                == "0x1.921fb54442d18p+1"
        );
        assert!(format!("{}", FloatNumber::from_f64(0.5)) == "0x1.0000000000000p-1");
        assert!(format!("{}", BINARY64.zero(Sign::Pos)) == "0x0.0000000000000p+0");
        assert!(format!("{}", BINARY64.zero(Sign::Neg)) == "-0x0.0000000000000p+0");
        assert!(format!("{}", BINARY64.min_positive()) == "0x0.0000000000001p-1022");
        assert!(format!("{}", BINARY32.infinity(Sign::Neg)) == "-Inf");
        assert!(format!("{}", BINARY32.nan()) == "NaN");
        assert!(format!("{}", BINARY32.signaling_nan()) == "sNaN");
        assert!(format!("{}", FloatNumber::from_f32(1.0)) == "0x1.000000p+0");
    }
}
