//! Numeric fields as clients send them.
//!
//! Browsers and hand-written `curl` calls disagree on whether `price` is `100`
//! or `"100"`. Both are accepted; surrounding whitespace is ignored. A blank
//! string is not a number, and neither is anything else that does not parse to
//! a finite value. The validation layer rejects both.

use serde::{Deserialize, Serialize, Serializer};

/// A number, or a string that should be read as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(#[serde(serialize_with = "serialize_number")] f64),
    Text(String),
}

impl Numeric {
    /// Casts to a finite `f64`, or `None` when the value is not a number.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Numeric::Number(n) => *n,
            Numeric::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// A string with nothing but whitespace in it.
    pub fn is_blank(&self) -> bool {
        matches!(self, Numeric::Text(s) if s.trim().is_empty())
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Number(f64::from(value))
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

/// Writes whole numbers without a fractional part, so a price of `55000.0`
/// goes over the wire as `55000`.
pub fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53

    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casts_numbers_and_numeric_strings() {
        assert_eq!(Numeric::Number(100.0).to_f64(), Some(100.0));
        assert_eq!(Numeric::from(" 42.5 ").to_f64(), Some(42.5));
    }

    #[test]
    fn blank_strings_are_not_numbers() {
        assert_eq!(Numeric::from("").to_f64(), None);
        assert_eq!(Numeric::from("   ").to_f64(), None);
        assert!(Numeric::from(" ").is_blank());
        assert!(!Numeric::from("0").is_blank());
        assert!(!Numeric::Number(0.0).is_blank());
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(Numeric::from("abc").to_f64(), None);
        assert_eq!(Numeric::from("NaN").to_f64(), None);
        assert_eq!(Numeric::from("inf").to_f64(), None);
    }

    #[test]
    fn deserializes_either_shape() {
        let n: Numeric = serde_json::from_str("5").unwrap();
        assert_eq!(n.to_f64(), Some(5.0));
        let s: Numeric = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(s.to_f64(), Some(7.0));
    }

    #[test]
    fn whole_numbers_serialize_as_integers() {
        #[derive(Serialize)]
        struct Price(#[serde(serialize_with = "serialize_number")] f64);

        assert_eq!(serde_json::to_string(&Price(55000.0)).unwrap(), "55000");
        assert_eq!(serde_json::to_string(&Price(19.99)).unwrap(), "19.99");
    }
}
