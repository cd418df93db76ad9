//! Canonicalization of raw quote fields.
//!
//! The upstream feed delivers the same field as a number on some days and a
//! formatted string on others, so every numeric field passes through
//! [`normalize`] before any comparison. Failures are per-record, recovered by
//! the caller (skip and log), never fatal to a run.

use crate::domain::quote::RawValue;
use std::fmt;

/// Which canonicalization rule applies to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Price,
    Percent,
    Amount,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Price => "price",
            FieldKind::Percent => "percent",
            FieldKind::Amount => "amount",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("missing {kind} field")]
    Missing { kind: FieldKind },

    #[error("unparsable {kind} value: {raw:?}")]
    Unparsable { kind: FieldKind, raw: String },

    #[error("non-finite {kind} value")]
    NonFinite { kind: FieldKind },
}

/// Convert a raw field into a canonical finite decimal.
///
/// - `Price`: thousands separators stripped, then the magnitude heuristic of
///   [`rescale_price`] applied.
/// - `Percent`: a trailing `%` stripped, no rescaling.
/// - `Amount`: plain parse, no rescaling; hundred-million conversion is the
///   caller's job at scoring/output time.
pub fn normalize(kind: FieldKind, raw: Option<&RawValue>) -> Result<f64, NormalizeError> {
    let raw = raw.ok_or(NormalizeError::Missing { kind })?;

    let value = match raw {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => {
            let cleaned = match kind {
                FieldKind::Price => s.replace(',', ""),
                FieldKind::Percent => s.trim_end_matches('%').to_string(),
                FieldKind::Amount => s.clone(),
            };
            cleaned
                .trim()
                .parse::<f64>()
                .map_err(|_| NormalizeError::Unparsable {
                    kind,
                    raw: s.clone(),
                })?
        }
    };

    if !value.is_finite() {
        return Err(NormalizeError::NonFinite { kind });
    }

    match kind {
        FieldKind::Price => Ok(rescale_price(value)),
        FieldKind::Percent | FieldKind::Amount => Ok(value),
    }
}

/// Best-effort correction for feeds that deliver prices pre-scaled by ±1000.
///
/// Known-approximate behavior: a legitimately sub-1-yuan or above-1000-yuan
/// price is rescaled too. The thresholds are kept exactly as the upstream
/// data quirk demands; swap this function out if the feed is ever fixed.
pub fn rescale_price(value: f64) -> f64 {
    let magnitude = value.abs();
    if magnitude < 1.0 {
        value * 1000.0
    } else if magnitude > 1000.0 {
        value / 1000.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn text(s: &str) -> Option<RawValue> {
        Some(RawValue::Text(s.to_string()))
    }

    fn num(n: f64) -> Option<RawValue> {
        Some(RawValue::Number(n))
    }

    #[test]
    fn price_string_above_thousand_is_scaled_down() {
        // "1234" with no decimal point: magnitude > 1000 → 1.234
        let v = normalize(FieldKind::Price, text("1234").as_ref()).unwrap();
        assert_relative_eq!(v, 1.234);
    }

    #[test]
    fn price_below_one_is_scaled_up() {
        let v = normalize(FieldKind::Price, num(0.05).as_ref()).unwrap();
        assert_relative_eq!(v, 50.0);
    }

    #[test]
    fn price_in_normal_range_untouched() {
        let v = normalize(FieldKind::Price, num(12.34).as_ref()).unwrap();
        assert_relative_eq!(v, 12.34);
    }

    #[test]
    fn price_strips_thousands_separators() {
        // "1,234" parses to 1234, then the magnitude heuristic kicks in
        let v = normalize(FieldKind::Price, text("1,234").as_ref()).unwrap();
        assert_relative_eq!(v, 1.234);
    }

    #[test]
    fn percent_strips_trailing_sign_without_rescale() {
        let v = normalize(FieldKind::Percent, text("10.01%").as_ref()).unwrap();
        assert_relative_eq!(v, 10.01);
    }

    #[test]
    fn percent_plain_number_passes_through() {
        let v = normalize(FieldKind::Percent, num(0.05).as_ref()).unwrap();
        assert_relative_eq!(v, 0.05);
    }

    #[test]
    fn amount_is_never_rescaled() {
        let v = normalize(FieldKind::Amount, num(650_000_000.0).as_ref()).unwrap();
        assert_relative_eq!(v, 650_000_000.0);
    }

    #[test]
    fn unparsable_text_is_an_error() {
        let err = normalize(FieldKind::Price, text("-").as_ref()).unwrap_err();
        assert!(matches!(err, NormalizeError::Unparsable { kind: FieldKind::Price, .. }));
    }

    #[test]
    fn missing_field_is_an_error() {
        let err = normalize(FieldKind::Amount, None).unwrap_err();
        assert!(matches!(err, NormalizeError::Missing { kind: FieldKind::Amount }));
    }

    #[test]
    fn non_finite_number_is_an_error() {
        let err = normalize(FieldKind::Percent, num(f64::NAN).as_ref()).unwrap_err();
        assert!(matches!(err, NormalizeError::NonFinite { .. }));
    }

    #[test]
    fn negative_price_rescales_by_magnitude() {
        let v = normalize(FieldKind::Price, num(-0.5).as_ref()).unwrap();
        assert_relative_eq!(v, -500.0);
    }
}
