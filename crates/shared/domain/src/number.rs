/// Serde helpers that render integral `f64` values without a fractional part
/// (`20` instead of `20.0`), keeping warehouse payloads byte-stable.
///
/// Use with `#[serde(with = "crate::number::compact_float")]`.
pub mod compact_float {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Largest magnitude where every integer is exactly representable as `f64`.
    const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

    /// Serializes integral values as JSON integers and everything else as floats.
    ///
    /// # Errors
    /// Propagates serializer errors.
    #[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    /// Accepts both integer and floating point numbers.
    ///
    /// # Errors
    /// Returns an error if the input is not a number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Parcel {
        #[serde(with = "super::compact_float")]
        size: f64,
    }

    #[test]
    fn integral_values_drop_the_fraction() {
        let json = serde_json::to_string(&Parcel { size: 20.0 }).expect("serialize");
        assert_eq!(json, r#"{"size":20}"#);
    }

    #[test]
    fn fractional_values_are_kept() {
        let json = serde_json::to_string(&Parcel { size: 40.5 }).expect("serialize");
        assert_eq!(json, r#"{"size":40.5}"#);
        let json = serde_json::to_string(&Parcel { size: 0.2 }).expect("serialize");
        assert_eq!(json, r#"{"size":0.2}"#);
    }

    #[test]
    fn integers_deserialize_into_floats() {
        let parsed: Parcel = serde_json::from_str(r#"{"size":6}"#).expect("deserialize");
        assert_eq!(parsed, Parcel { size: 6.0 });
    }
}
