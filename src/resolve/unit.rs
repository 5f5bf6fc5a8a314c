//! Unit converter - logical units to platform lengths.
//!
//! One logical unit is 1.125 times the root font size, so `1` at the
//! default 16px root is exactly `18px`. Conversions truncate to a
//! fixed number of decimals after nudging the value by a small epsilon;
//! the nudge keeps artifacts like `1.2599999999999998` from truncating
//! down to `1.259` when the intended value was `1.26`.

use crate::style::SizeValue;

/// Logical units per root-font-size pixel.
pub const UNIT_SCALE: f64 = 1.125;

/// Decimals kept in emitted pixel lengths.
pub const PX_DECIMALS: i32 = 3;

/// Conversion context: everything unit resolution depends on.
///
/// Today that is only the root font size. Captured once per layout
/// context; elements in one context share one set of metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Root font size in pixels.
    pub root_font_px: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self { root_font_px: 16.0 }
    }
}

impl Metrics {
    pub const fn new(root_font_px: f64) -> Self {
        Self { root_font_px }
    }

    /// Pixels per logical unit.
    pub fn px_per_unit(&self) -> f64 {
        UNIT_SCALE * self.root_font_px
    }

    /// Convert logical units to a pixel length string.
    ///
    /// ```
    /// use flexel::resolve::Metrics;
    ///
    /// assert_eq!(Metrics::default().px(1.0), "18px");
    /// assert_eq!(Metrics::new(20.0).px(1.0), "22.5px");
    /// ```
    pub fn px(&self, units: f64) -> String {
        format!("{}px", scalar(units * self.px_per_unit()))
    }

    /// Convert a size value to a platform length.
    ///
    /// Units are converted; raw strings pass through verbatim.
    pub fn length(&self, value: &SizeValue) -> String {
        match value {
            SizeValue::Units(units) => self.px(*units),
            SizeValue::Raw(raw) => raw.clone(),
        }
    }
}

/// Truncate to `decimals` places after an epsilon nudge toward the
/// intended value. The epsilon is one decimal finer than the kept
/// precision, so it can only repair float artifacts, never change a
/// genuinely distinct value.
pub fn to_fixed(value: f64, decimals: i32) -> f64 {
    if value < 0.0 {
        return -to_fixed(-value, decimals);
    }
    let eps = 10f64.powi(-(decimals + 1));
    let scale = 10f64.powi(decimals);
    ((value + eps) * scale).trunc() / scale
}

/// Fixed-precision number with trailing zeros trimmed: `18`, `1.26`.
pub(crate) fn scalar(value: f64) -> String {
    let fixed = to_fixed(value, PX_DECIMALS);
    let mut text = format!("{:.*}", PX_DECIMALS as usize, fixed);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

/// Percentage string: `percent(1.0)` is `"100%"`.
pub(crate) fn percent(fraction: f64) -> String {
    format!("{}%", scalar(fraction * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_unit_at_default_root() {
        assert_eq!(Metrics::default().px(1.0), "18px");
    }

    #[test]
    fn test_one_unit_at_larger_root() {
        assert_eq!(Metrics::new(20.0).px(1.0), "22.5px");
    }

    #[test]
    fn test_epsilon_repairs_float_artifact() {
        // 0.07 * 18 = 1.2599999999999998 in f64; truncation without the
        // nudge would emit 1.259
        assert_eq!(Metrics::default().px(0.07), "1.26px");
    }

    #[test]
    fn test_repeating_fraction_lands_on_integer() {
        // (1/3) * 18 = 5.999999999999999
        assert_eq!(Metrics::default().px(1.0 / 3.0), "6px");
    }

    #[test]
    fn test_epsilon_does_not_invent_precision() {
        // A genuinely sub-epsilon value must not round up
        assert_eq!(to_fixed(1.2594, PX_DECIMALS), 1.259);
        assert_eq!(to_fixed(1.2596, PX_DECIMALS), 1.259);
    }

    #[test]
    fn test_negative_values_mirror() {
        assert_eq!(to_fixed(-1.2599999999999998, PX_DECIMALS), -1.26);
        assert_eq!(Metrics::default().px(-1.0), "-18px");
    }

    #[test]
    fn test_raw_lengths_pass_through() {
        let m = Metrics::default();
        assert_eq!(m.length(&SizeValue::Raw("50%".into())), "50%");
        assert_eq!(m.length(&SizeValue::Raw("12rem".into())), "12rem");
    }

    #[test]
    fn test_unit_lengths_convert() {
        let m = Metrics::default();
        assert_eq!(m.length(&SizeValue::Units(2.0)), "36px");
        assert_eq!(m.length(&SizeValue::Units(0.5)), "9px");
    }

    #[test]
    fn test_scalar_trims_zeros() {
        assert_eq!(scalar(18.0), "18");
        assert_eq!(scalar(22.5), "22.5");
        assert_eq!(scalar(1.26), "1.26");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1.0), "100%");
        assert_eq!(percent(2.0), "200%");
        assert_eq!(percent(0.5), "50%");
    }
}
