use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

static QUANTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+))(Ki|Mi|Gi|Ti|Pi|Ei|n|u|m|k|M|G|T|P|E|[eE][+-]?[0-9]+)?$",
    )
    .expect("quantity pattern compiles")
});

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("quantities must match the regular expression '^([+-]?[0-9.]+)([eEinumkKMGTP]*[-+]?[0-9]*)$', got {0:?}")]
pub struct ParseQuantityError(pub String);

/// A resource amount such as `100m`, `128Mi` or `1e3`, kept together with its
/// original spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    raw: String,
    value: f64,
}

impl Quantity {
    pub fn parse(raw: &str) -> Result<Quantity, ParseQuantityError> {
        let trimmed = raw.trim();
        let captures = QUANTITY_REGEX
            .captures(trimmed)
            .ok_or_else(|| ParseQuantityError(raw.to_string()))?;

        let mantissa: f64 = captures[1]
            .parse()
            .map_err(|_| ParseQuantityError(raw.to_string()))?;
        let multiplier = match captures.get(2).map(|suffix| suffix.as_str()) {
            None => 1.0,
            Some(suffix) => suffix_multiplier(suffix).ok_or_else(|| ParseQuantityError(raw.to_string()))?,
        };

        let value = mantissa * multiplier;
        if !value.is_finite() {
            return Err(ParseQuantityError(raw.to_string()));
        }

        Ok(Quantity {
            raw: trimmed.to_string(),
            value,
        })
    }

    /// Amount in base units (cores, bytes).
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn suffix_multiplier(suffix: &str) -> Option<f64> {
    let multiplier = match suffix {
        "Ki" => 1024f64,
        "Mi" => 1024f64.powi(2),
        "Gi" => 1024f64.powi(3),
        "Ti" => 1024f64.powi(4),
        "Pi" => 1024f64.powi(5),
        "Ei" => 1024f64.powi(6),
        "n" => 1e-9,
        "u" => 1e-6,
        "m" => 1e-3,
        "k" => 1e3,
        "M" => 1e6,
        "G" => 1e9,
        "T" => 1e12,
        "P" => 1e15,
        "E" => 1e18,
        exponent => {
            let power: i32 = exponent[1..].parse().ok()?;
            10f64.powi(power)
        }
    };

    Some(multiplier)
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
