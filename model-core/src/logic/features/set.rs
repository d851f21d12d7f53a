//! Feature Set - raw per-submission input
//!
//! An ordered key → value mapping as it arrives from a form, a CSV row or a
//! JSON body. Nothing is validated here; unknown keys and junk values are
//! kept so that validation can report them.
//!
//! Insertion order matters: it is the tie-break order when ranking
//! contributing features.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// FEATURE VALUE
// ============================================================================

/// A single submitted value
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Text(String),
    Missing,
}

impl FeatureValue {
    /// Empty text and explicit nulls both count as missing
    pub fn is_missing(&self) -> bool {
        match self {
            FeatureValue::Missing => true,
            FeatureValue::Text(s) => s.is_empty(),
            FeatureValue::Number(_) => false,
        }
    }

    /// Numeric reading of the value, `None` if missing or unparseable
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(n) if !n.is_nan() => Some(*n),
            FeatureValue::Number(_) => None,
            FeatureValue::Text(s) => parse_decimal(s),
            FeatureValue::Missing => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Number(n) => f.write_str(&format_decimal(*n)),
            FeatureValue::Text(s) => write!(f, "{}", s),
            FeatureValue::Missing => write!(f, "null"),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl<T: Into<FeatureValue>> From<Option<T>> for FeatureValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FeatureValue::Missing)
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FeatureValue::Number(n) => serializer.serialize_f64(*n),
            FeatureValue::Text(s) => serializer.serialize_str(s),
            FeatureValue::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for FeatureValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = FeatureValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number, a string or null")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<FeatureValue, E> {
                Ok(FeatureValue::Number(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<FeatureValue, E> {
                Ok(FeatureValue::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<FeatureValue, E> {
                Ok(FeatureValue::Number(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FeatureValue, E> {
                Ok(FeatureValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<FeatureValue, E> {
                Ok(FeatureValue::Text(v))
            }

            fn visit_none<E: de::Error>(self) -> Result<FeatureValue, E> {
                Ok(FeatureValue::Missing)
            }

            fn visit_unit<E: de::Error>(self) -> Result<FeatureValue, E> {
                Ok(FeatureValue::Missing)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<FeatureValue, D::Error> {
                FeatureValue::deserialize(d)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// ============================================================================
// DECIMAL PARSING
// ============================================================================

/// Parse the leading decimal number of `input`.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"12.5mm"` reads as 12.5 while `"abc"`, `""` and `"."` do not parse.
/// `Infinity` with an optional sign is accepted.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Render a number the way form frontends print it back.
///
/// Shortest round-trip digits; exponent form outside [1e-6, 1e21) with an
/// explicit `+` on positive exponents; `Infinity` / `NaN` spelled out.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", value);
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

// ============================================================================
// FEATURE SET
// ============================================================================

/// Ordered raw submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    entries: Vec<(String, FeatureValue)>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value; an overwritten key keeps its position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FeatureValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for FeatureSet
where
    K: Into<String>,
    V: Into<FeatureValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FeatureSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = FeatureSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of feature values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FeatureSet, A::Error> {
                let mut set = FeatureSet::new();
                while let Some((key, value)) = access.next_entry::<String, FeatureValue>()? {
                    set.insert(key, value);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_prefix() {
        assert_eq!(parse_decimal("13.54"), Some(13.54));
        assert_eq!(parse_decimal("  0.5"), Some(0.5));
        assert_eq!(parse_decimal("12.5mm"), Some(12.5));
        assert_eq!(parse_decimal(".25"), Some(0.25));
        assert_eq!(parse_decimal("5."), Some(5.0));
        assert_eq!(parse_decimal("-3e2"), Some(-300.0));
        assert_eq!(parse_decimal("1e"), Some(1.0));
        assert_eq!(parse_decimal("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(13.54), "13.54");
        assert_eq!(format_decimal(500.0), "500");
        assert_eq!(format_decimal(-0.0), "0");
        assert_eq!(format_decimal(1e20), "100000000000000000000");
        assert_eq!(format_decimal(1e22), "1e+22");
        assert_eq!(format_decimal(-2.5e21), "-2.5e+21");
        assert_eq!(format_decimal(0.000001), "0.000001");
        assert_eq!(format_decimal(1.5e-7), "1.5e-7");
        assert_eq!(format_decimal(f64::INFINITY), "Infinity");
        assert_eq!(format_decimal(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_decimal(f64::NAN), "NaN");
    }

    #[test]
    fn test_parse_decimal_rejects() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("e5"), None);
    }

    #[test]
    fn test_missing_values() {
        assert!(FeatureValue::Missing.is_missing());
        assert!(FeatureValue::from("").is_missing());
        assert!(!FeatureValue::from(" ").is_missing());
        assert!(!FeatureValue::from(0.0).is_missing());
        assert_eq!(FeatureValue::from(None::<f64>), FeatureValue::Missing);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut set = FeatureSet::new().with("b", 1.0).with("a", 2.0);
        set.insert("b", "3");

        let keys: Vec<_> = set.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(set.get("b"), Some(&FeatureValue::Text("3".into())));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let json = r#"{"worst_area": 711.2, "mean_radius": "13.54", "se_area": null, "x": ""}"#;
        let set: FeatureSet = serde_json::from_str(json).unwrap();

        let keys: Vec<_> = set.keys().collect();
        assert_eq!(keys, vec!["worst_area", "mean_radius", "se_area", "x"]);
        assert_eq!(set.get("worst_area"), Some(&FeatureValue::Number(711.2)));
        assert_eq!(set.get("mean_radius").and_then(|v| v.as_f64()), Some(13.54));
        assert!(set.get("se_area").unwrap().is_missing());
        assert!(set.get("x").unwrap().is_missing());
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<FeatureSet>("[1, 2]").is_err());
        assert!(serde_json::from_str::<FeatureSet>(r#"{"a": [1]}"#).is_err());
    }

    #[test]
    fn test_serialize_roundtrip_shape() {
        let set = FeatureSet::new().with("mean_radius", 13.54).with("mean_texture", "abc");
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value, serde_json::json!({"mean_radius": 13.54, "mean_texture": "abc"}));
    }
}
