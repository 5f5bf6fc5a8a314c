//! Size intents - what an element wants for one extent.
//!
//! Intents are declarative: `Exact` pins a length, `Grow` claims a
//! weighted share of leftover space, `Shrink` hugs content, `Stretch`
//! fills the parent. The size resolver turns intents into concrete
//! property values; nothing here touches the platform.

use std::str::FromStr;

use serde::Deserialize;

// =============================================================================
// SizeValue - A concrete length
// =============================================================================

/// A concrete length: either logical units or a raw platform string.
///
/// Logical units go through the unit converter (`1` unit is 1.125 times
/// the root font size). Raw strings pass through untouched, so any
/// platform length expression (`"50%"`, `"12rem"`, `"calc(...)"`)
/// remains available.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeValue {
    /// Logical units, converted to `px` by the unit converter.
    Units(f64),
    /// A raw platform length, passed through verbatim.
    Raw(String),
}

impl SizeValue {
    /// Sentinel for "no upper bound": any non-finite unit count.
    ///
    /// A `Grow` max of this value suppresses the max property entirely
    /// instead of writing an absurd length.
    pub const UNBOUNDED: SizeValue = SizeValue::Units(f64::INFINITY);

    /// Whether this value means "no bound at all".
    pub fn is_unbounded(&self) -> bool {
        match self {
            Self::Units(u) => !u.is_finite(),
            Self::Raw(_) => false,
        }
    }
}

impl From<f64> for SizeValue {
    fn from(value: f64) -> Self {
        Self::Units(value)
    }
}

impl From<i32> for SizeValue {
    fn from(value: i32) -> Self {
        Self::Units(value as f64)
    }
}

impl From<&str> for SizeValue {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for SizeValue {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

// =============================================================================
// FlexSpec - Grow descriptor
// =============================================================================

/// Weighted growth with optional bounds.
///
/// `min`/`max` given here win over the standalone min/max props of the
/// same extent. A non-finite `max` means unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexSpec {
    pub weight: f64,
    pub min: Option<SizeValue>,
    pub max: Option<SizeValue>,
}

impl FlexSpec {
    /// Growth with the given weight and no bounds.
    pub fn weighted(weight: f64) -> Self {
        Self {
            weight,
            min: None,
            max: None,
        }
    }

    pub fn min(mut self, min: impl Into<SizeValue>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn max(mut self, max: impl Into<SizeValue>) -> Self {
        self.max = Some(max.into());
        self
    }
}

impl Default for FlexSpec {
    fn default() -> Self {
        Self::weighted(1.0)
    }
}

// =============================================================================
// SizeSpec - The intent itself
// =============================================================================

/// Sizing intent for one extent of one element.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SizeSpec {
    /// Rigid at exactly this length.
    Exact(SizeValue),
    /// Take a weighted share of leftover space.
    Grow(FlexSpec),
    /// Hug content.
    #[default]
    Shrink,
    /// Fill the parent.
    Stretch,
}

impl SizeSpec {
    /// Growth with weight 1.
    pub fn grow() -> Self {
        Self::Grow(FlexSpec::default())
    }

    /// Growth with the given weight.
    pub fn grow_weighted(weight: f64) -> Self {
        Self::Grow(FlexSpec::weighted(weight))
    }

    /// An exact length.
    pub fn exact(value: impl Into<SizeValue>) -> Self {
        Self::Exact(value.into())
    }

    /// Parse the string shorthand, never failing.
    ///
    /// - `"stretch"` is [`SizeSpec::Stretch`]
    /// - `"fit"` / `"fit-content"` is [`SizeSpec::Shrink`]
    /// - `"<number>f"` (like `"2f"`, `"1.5f"`) is weighted growth
    /// - anything else is an exact raw length
    pub fn parse_lenient(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed {
            "stretch" => return Self::Stretch,
            "fit" | "fit-content" => return Self::Shrink,
            _ => {}
        }
        if let Some(weight) = parse_grow_shorthand(trimmed) {
            return Self::Grow(FlexSpec::weighted(weight));
        }
        Self::Exact(SizeValue::Raw(trimmed.to_string()))
    }
}

impl From<f64> for SizeSpec {
    fn from(value: f64) -> Self {
        Self::Exact(SizeValue::Units(value))
    }
}

impl From<i32> for SizeSpec {
    fn from(value: i32) -> Self {
        Self::Exact(SizeValue::Units(value as f64))
    }
}

impl From<&str> for SizeSpec {
    fn from(value: &str) -> Self {
        Self::parse_lenient(value)
    }
}

impl From<FlexSpec> for SizeSpec {
    fn from(value: FlexSpec) -> Self {
        Self::Grow(value)
    }
}

/// `"2f"` -> `Some(2.0)`. None when the string is not grow shorthand.
fn parse_grow_shorthand(s: &str) -> Option<f64> {
    let body = s.strip_suffix('f')?;
    if body.is_empty() {
        return None;
    }
    body.parse::<f64>().ok()
}

// =============================================================================
// Strict parsing (for style sheets)
// =============================================================================

/// Error from strict intent parsing.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseIntentError {
    #[error("empty size intent")]
    Empty,
    #[error("bad grow weight in {0:?}")]
    BadGrowWeight(String),
}

impl FromStr for SizeSpec {
    type Err = ParseIntentError;

    /// Like [`SizeSpec::parse_lenient`], but rejects inputs that look
    /// like grow shorthand with an unparseable weight, and rejects
    /// empty strings. Used by the style sheet loader, where feedback
    /// beats silence.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseIntentError::Empty);
        }
        if let Some(body) = trimmed.strip_suffix('f') {
            let numeric_intent =
                !body.is_empty() && body.chars().all(|c| c.is_ascii_digit() || "+-.eE".contains(c));
            if numeric_intent && body.parse::<f64>().is_err() {
                return Err(ParseIntentError::BadGrowWeight(trimmed.to_string()));
            }
        }
        Ok(Self::parse_lenient(trimmed))
    }
}

// =============================================================================
// Serde forms
// =============================================================================

/// Raw serde shape for a [`SizeValue`]: number or string.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum SizeValueRepr {
    Units(f64),
    Raw(String),
}

impl From<SizeValueRepr> for SizeValue {
    fn from(repr: SizeValueRepr) -> Self {
        match repr {
            SizeValueRepr::Units(u) => SizeValue::Units(u),
            SizeValueRepr::Raw(s) => SizeValue::Raw(s),
        }
    }
}

impl<'de> Deserialize<'de> for SizeValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(SizeValueRepr::deserialize(deserializer)?.into())
    }
}

/// Raw serde shape for a [`SizeSpec`]: number, shorthand string, or a
/// grow descriptor map.
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeSpecRepr {
    Units(f64),
    Shorthand(String),
    Flex {
        grow: f64,
        #[serde(default)]
        min: Option<SizeValue>,
        #[serde(default)]
        max: Option<SizeValue>,
    },
}

impl<'de> Deserialize<'de> for SizeSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SizeSpecRepr::deserialize(deserializer)? {
            SizeSpecRepr::Units(u) => Ok(SizeSpec::Exact(SizeValue::Units(u))),
            SizeSpecRepr::Shorthand(s) => {
                s.parse::<SizeSpec>().map_err(serde::de::Error::custom)
            }
            SizeSpecRepr::Flex { grow, min, max } => {
                Ok(SizeSpec::Grow(FlexSpec { weight: grow, min, max }))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grow_shorthand() {
        assert_eq!(SizeSpec::from("2f"), SizeSpec::grow_weighted(2.0));
        assert_eq!(SizeSpec::from("1.5f"), SizeSpec::grow_weighted(1.5));
        assert_eq!(SizeSpec::from("0f"), SizeSpec::grow_weighted(0.0));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(SizeSpec::from("stretch"), SizeSpec::Stretch);
        assert_eq!(SizeSpec::from("fit"), SizeSpec::Shrink);
        assert_eq!(SizeSpec::from("fit-content"), SizeSpec::Shrink);
    }

    #[test]
    fn test_parse_raw_lengths_pass_through() {
        assert_eq!(
            SizeSpec::from("50%"),
            SizeSpec::Exact(SizeValue::Raw("50%".into()))
        );
        assert_eq!(
            SizeSpec::from("12rem"),
            SizeSpec::Exact(SizeValue::Raw("12rem".into()))
        );
        // "1fr" ends in 'r', not 'f': stays raw
        assert_eq!(
            SizeSpec::from("1fr"),
            SizeSpec::Exact(SizeValue::Raw("1fr".into()))
        );
    }

    #[test]
    fn test_numbers_are_units() {
        assert_eq!(SizeSpec::from(3), SizeSpec::Exact(SizeValue::Units(3.0)));
        assert_eq!(
            SizeSpec::from(2.5),
            SizeSpec::Exact(SizeValue::Units(2.5))
        );
    }

    #[test]
    fn test_default_is_shrink() {
        assert_eq!(SizeSpec::default(), SizeSpec::Shrink);
    }

    #[test]
    fn test_strict_rejects_empty() {
        assert_eq!("".parse::<SizeSpec>(), Err(ParseIntentError::Empty));
        assert_eq!("   ".parse::<SizeSpec>(), Err(ParseIntentError::Empty));
    }

    #[test]
    fn test_strict_rejects_garbled_weight() {
        assert_eq!(
            "1..5f".parse::<SizeSpec>(),
            Err(ParseIntentError::BadGrowWeight("1..5f".into()))
        );
        // A plain keyword ending in 'f' is not numeric intent
        assert!("serif".parse::<SizeSpec>().is_ok());
    }

    #[test]
    fn test_flex_spec_builder() {
        let spec = FlexSpec::weighted(2.0).min(1).max(10);
        assert_eq!(spec.weight, 2.0);
        assert_eq!(spec.min, Some(SizeValue::Units(1.0)));
        assert_eq!(spec.max, Some(SizeValue::Units(10.0)));
    }

    #[test]
    fn test_unbounded_sentinel() {
        assert!(SizeValue::UNBOUNDED.is_unbounded());
        assert!(SizeValue::Units(f64::NAN).is_unbounded());
        assert!(!SizeValue::Units(1e9).is_unbounded());
        assert!(!SizeValue::Raw("999999px".into()).is_unbounded());
    }

    #[test]
    fn test_deserialize_number() {
        let spec: SizeSpec = serde_json::from_str("4").unwrap();
        assert_eq!(spec, SizeSpec::Exact(SizeValue::Units(4.0)));
    }

    #[test]
    fn test_deserialize_shorthand() {
        let spec: SizeSpec = serde_json::from_str("\"2f\"").unwrap();
        assert_eq!(spec, SizeSpec::grow_weighted(2.0));
        let spec: SizeSpec = serde_json::from_str("\"stretch\"").unwrap();
        assert_eq!(spec, SizeSpec::Stretch);
    }

    #[test]
    fn test_deserialize_flex_descriptor() {
        let spec: SizeSpec = serde_json::from_str(r#"{"grow": 2, "max": 40}"#).unwrap();
        assert_eq!(
            spec,
            SizeSpec::Grow(FlexSpec {
                weight: 2.0,
                min: None,
                max: Some(SizeValue::Units(40.0)),
            })
        );
    }

    #[test]
    fn test_deserialize_flex_descriptor_raw_bounds() {
        let spec: SizeSpec = serde_json::from_str(r#"{"grow": 1, "min": "4rem"}"#).unwrap();
        assert_eq!(
            spec,
            SizeSpec::Grow(FlexSpec {
                weight: 1.0,
                min: Some(SizeValue::Raw("4rem".into())),
                max: None,
            })
        );
    }
}
