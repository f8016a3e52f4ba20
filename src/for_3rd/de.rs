//! Deserialization of FloatNumber.

use core::fmt::Formatter;

use crate::{FloatFormat, FloatNumber};
use serde::de::{Error, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

const FIELDS: &[&str] = &["total", "exponent", "significand", "bits"];

pub struct FloatNumberVisitor {}

impl<'de> Deserialize<'de> for FloatNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct("FloatNumber", FIELDS, FloatNumberVisitor {})
    }
}

fn build<E: Error>(total: usize, ew: usize, sw: usize, bits: u128) -> Result<FloatNumber, E> {
    let fmt = FloatFormat::new(total, ew, sw).map_err(|e| Error::custom(format!("{e:?}")))?;

    FloatNumber::from_bits(fmt, bits).map_err(|e| Error::custom(format!("{e:?}")))
}

impl<'de> Visitor<'de> for FloatNumberVisitor {
    type Value = FloatNumber;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "struct FloatNumber")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let total = seq.next_element()?.ok_or_else(|| Error::invalid_length(0, &self))?;
        let ew = seq.next_element()?.ok_or_else(|| Error::invalid_length(1, &self))?;
        let sw = seq.next_element()?.ok_or_else(|| Error::invalid_length(2, &self))?;
        let bits = seq.next_element()?.ok_or_else(|| Error::invalid_length(3, &self))?;

        build(total, ew, sw, bits)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut total = None;
        let mut ew = None;
        let mut sw = None;
        let mut bits = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "total" => total = Some(map.next_value()?),
                "exponent" => ew = Some(map.next_value()?),
                "significand" => sw = Some(map.next_value()?),
                "bits" => bits = Some(map.next_value()?),
                _ => return Err(Error::unknown_field(&key, FIELDS)),
            }
        }

        let total = total.ok_or_else(|| Error::missing_field("total"))?;
        let ew = ew.ok_or_else(|| Error::missing_field("exponent"))?;
        let sw = sw.ok_or_else(|| Error::missing_field("significand"))?;
        let bits = bits.ok_or_else(|| Error::missing_field("bits"))?;

        build(total, ew, sw, bits)
    }
}

#[cfg(test)]
mod tests {

    use serde_json::{from_str, to_string};

    use crate::{FloatNumber, BINARY128, BINARY32};

    #[test]
    fn from_json() {
        let x = FloatNumber::from_f64(1.0);
        assert_eq!(
            x,
            from_str::<FloatNumber>(
                "{\"total\":64,\"exponent\":11,\"significand\":52,\"bits\":4607182418800017408}"
            )
            .unwrap()
        );

        // a malformed format descriptor is rejected
        assert!(from_str::<FloatNumber>(
            "{\"total\":8,\"exponent\":11,\"significand\":52,\"bits\":0}"
        )
        .is_err());

        // bits outside of the representation are rejected
        assert!(from_str::<FloatNumber>(
            "{\"total\":32,\"exponent\":8,\"significand\":23,\"bits\":4607182418800017408}"
        )
        .is_err());

        // round trip of values with NaN payloads and of wide formats
        for x in [
            FloatNumber::from_f32(f32::NAN),
            BINARY32.signaling_nan(),
            BINARY128.max_value(),
            BINARY128.min_positive().neg(),
        ] {
            let s = to_string(&x).unwrap();
            assert_eq!(x, from_str::<FloatNumber>(&s).unwrap());
        }
    }
}
