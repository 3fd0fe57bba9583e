//! Numeric literals with SPICE engineering-unit suffixes.

use serde::{Deserialize, Serialize};

/// How a bare `m` suffix is resolved.
///
/// SPICE reads `m` as milli, but hand-written crossbar netlists routinely
/// write `Res=10M` meaning ten megaohms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MSuffix {
    /// Mega for resistances, milli for everything else.
    #[default]
    #[cfg_attr(feature = "cli", value(aliases = ["context", "auto"]))]
    Contextual,
    /// Always milli (strict SPICE).
    Milli,
    /// Always mega.
    Mega,
}

impl MSuffix {
    /// Parse a policy name, as passed across the WASM boundary.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "contextual" | "context" | "auto" => Some(Self::Contextual),
            "milli" => Some(Self::Milli),
            "mega" => Some(Self::Mega),
            _ => None,
        }
    }

    fn multiplier(self, context: ValueContext) -> f64 {
        match (self, context) {
            (Self::Milli, _) => 1e-3,
            (Self::Mega, _) => 1e6,
            (Self::Contextual, ValueContext::Resistance) => 1e6,
            (Self::Contextual, ValueContext::Generic) => 1e-3,
        }
    }
}

/// What kind of quantity a literal is known to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueContext {
    /// Resistance in ohms
    Resistance,
    /// Anything else (capacitance, time, voltage)
    Generic,
}

/// Parse a literal with an optional engineering suffix, returning `None`
/// when no finite number can be extracted.
///
/// The suffix is the trailing alphabetic run; only its leading letters
/// select the scale, so `10uF` is ten microfarads and `5kohm` five kilohms.
pub fn try_parse_value(text: &str, context: ValueContext, policy: MSuffix) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let split = text
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_ascii_alphabetic())
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let (num_str, suffix) = text.split_at(split);
    let suffix = suffix.to_ascii_lowercase();

    let multiplier = if suffix.starts_with("meg") {
        1e6
    } else {
        match suffix.chars().next() {
            Some('k') => 1e3,
            Some('m') => policy.multiplier(context),
            Some('u') => 1e-6,
            Some('n') => 1e-9,
            Some('p') => 1e-12,
            Some('f') => 1e-15,
            _ => 1.0,
        }
    };

    match parse_number(num_str) {
        Some(v) => Some(v * multiplier),
        None => parse_number(text),
    }
}

/// Parse a literal with an optional engineering suffix, defaulting to zero.
pub fn parse_value(text: &str, context: ValueContext, policy: MSuffix) -> f64 {
    try_parse_value(text, context, policy).unwrap_or(0.0)
}

/// Parse a plain, suffix-free finite number.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a value with the largest SPICE suffix that keeps the mantissa at
/// or above one. `meg` is used for 1e6 so the output re-parses unambiguously.
pub fn format_engineering(value: f64) -> String {
    const SCALES: [(f64, &str); 8] = [
        (1e6, "meg"),
        (1e3, "k"),
        (1.0, ""),
        (1e-3, "m"),
        (1e-6, "u"),
        (1e-9, "n"),
        (1e-12, "p"),
        (1e-15, "f"),
    ];

    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let magnitude = value.abs();
    let (scale, suffix) = SCALES
        .iter()
        .copied()
        .find(|(scale, _)| magnitude >= *scale * (1.0 - 1e-9))
        .unwrap_or((1e-15, "f"));

    let mantissa = format!("{:.3}", value / scale);
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", mantissa, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn generic(text: &str) -> f64 {
        parse_value(text, ValueContext::Generic, MSuffix::Contextual)
    }

    #[test]
    fn test_standard_suffixes() {
        assert_relative_eq!(generic("10k"), 10_000.0);
        assert_relative_eq!(generic("2meg"), 2e6);
        assert_relative_eq!(generic("2MEG"), 2e6);
        assert_relative_eq!(generic("4.7u"), 4.7e-6);
        assert_relative_eq!(generic("100n"), 100e-9);
        assert_relative_eq!(generic("3p"), 3e-12);
        assert_relative_eq!(generic("1e-15"), 1e-15);
        assert_relative_eq!(generic("1F"), 1e-15);
        assert_relative_eq!(generic("5000000.0"), 5e6);
    }

    #[test]
    fn test_unit_letters_after_scale_are_ignored() {
        assert_relative_eq!(generic("10uF"), 10e-6);
        assert_relative_eq!(generic("5kohm"), 5e3);
    }

    #[test]
    fn test_m_suffix_policy() {
        let r = ValueContext::Resistance;
        assert_relative_eq!(parse_value("10M", r, MSuffix::Contextual), 10e6);
        assert_relative_eq!(parse_value("10m", ValueContext::Generic, MSuffix::Contextual), 10e-3);
        assert_relative_eq!(parse_value("10M", r, MSuffix::Milli), 10e-3);
        assert_relative_eq!(parse_value("10m", ValueContext::Generic, MSuffix::Mega), 10e6);
    }

    #[test]
    fn test_unparseable_defaults_to_zero() {
        assert_eq!(generic(""), 0.0);
        assert_eq!(generic("vstage1"), 0.0);
        assert_eq!(try_parse_value("abc", ValueContext::Generic, MSuffix::Milli), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(MSuffix::from_name("MEGA"), Some(MSuffix::Mega));
        assert_eq!(MSuffix::from_name("milli"), Some(MSuffix::Milli));
        assert_eq!(MSuffix::from_name("contextual"), Some(MSuffix::Contextual));
        assert_eq!(MSuffix::from_name("giga"), None);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_policy_value_names() {
        use clap::ValueEnum;
        assert_eq!(MSuffix::from_str("mega", false), Ok(MSuffix::Mega));
        assert_eq!(MSuffix::from_str("MILLI", true), Ok(MSuffix::Milli));
        assert_eq!(MSuffix::from_str("auto", false), Ok(MSuffix::Contextual));
        assert!(MSuffix::from_str("giga", true).is_err());
    }

    #[test]
    fn test_format_engineering() {
        assert_eq!(format_engineering(10e6), "10meg");
        assert_eq!(format_engineering(200.0), "200");
        assert_eq!(format_engineering(1e-15), "1f");
        assert_eq!(format_engineering(4.7e-6), "4.7u");
        assert_eq!(format_engineering(0.0), "0");
    }
}
