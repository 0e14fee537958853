//! Formatting of chart values for legends and labels.

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

const GROUP_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a share of a whole with one decimal place, e.g. `12.5%`.
pub fn percentage_label(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

/// Formats a number with thousands separators and at most three fraction
/// digits, e.g. `1234567.5` as `1,234,567.5`.
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut output = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.is_empty();
    if value.is_sign_negative() && !is_zero {
        output.push('-');
    }

    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            output.push(GROUP_SEPARATOR);
        }
        output.push(digit);
    }

    if !fraction.is_empty() {
        output.push('.');
        output.push_str(fraction);
    }

    output
}

/// Decorates grouped numbers with a unit, e.g. a currency symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFormat {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl ValueFormat {
    pub fn plain() -> ValueFormat {
        Self::default()
    }

    pub fn currency(symbol: impl Into<String>) -> ValueFormat {
        Self {
            prefix: symbol.into(),
            suffix: String::new(),
        }
    }

    pub fn format(&self, value: f64) -> String {
        FormattedValue {
            format: self,
            value,
        }
        .to_string()
    }
}

struct FormattedValue<'a> {
    format: &'a ValueFormat,
    value: f64,
}

impl Display for FormattedValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{prefix}{value}{suffix}",
            prefix = self.format.prefix,
            value = grouped(self.value),
            suffix = self.format.suffix
        )
    }
}
