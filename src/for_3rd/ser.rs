//! Serialization of FloatNumber.
//! A number is serialized as its format field sizes and the packed bit
//! pattern, which keeps any value, including NaN payloads, lossless.

use crate::FloatNumber;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

impl Serialize for FloatNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fmt = self.format();

        let mut s = serializer.serialize_struct("FloatNumber", 4)?;
        s.serialize_field("total", &fmt.total_bit_size())?;
        s.serialize_field("exponent", &fmt.exponent_bit_size())?;
        s.serialize_field("significand", &fmt.significand_bit_size())?;
        s.serialize_field("bits", &self.to_bits())?;
        s.end()
    }
}
