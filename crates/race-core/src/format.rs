// File: crates/race-core/src/format.rs
// Summary: Locale-aware grouped number formatting for value labels.

use crate::config::NumberLocale;

/// Significant digits kept by the default (type-less) grouped format.
const PRECISION: usize = 12;

/// Minus sign used for negative values (U+2212, as typeset by chart libraries).
pub const MINUS: char = '\u{2212}';

/// Formats values with thousands grouping in one of the supported locales.
///
/// Output follows the grouped default format of web charting libraries:
/// up to 12 significant digits with insignificant trailing zeros removed,
/// the integer part grouped in threes, and exponent notation only for very
/// small or very large magnitudes.
///
/// ```
/// use race_core::{NumberFormatter, NumberLocale};
///
/// assert_eq!(NumberFormatter::new(NumberLocale::Pt).format(100_000.0), "100.000");
/// assert_eq!(NumberFormatter::new(NumberLocale::En).format(1_250.5), "1,250.5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormatter {
    thousands: char,
    decimal: char,
}

impl NumberFormatter {
    pub fn new(locale: NumberLocale) -> Self {
        match locale {
            NumberLocale::Pt => Self { thousands: '.', decimal: ',' },
            NumberLocale::En => Self { thousands: ',', decimal: '.' },
        }
    }

    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        let mut out = String::new();
        // -0 formats like 0.
        if value < 0.0 {
            out.push(MINUS);
        }
        let magnitude = value.abs();
        if magnitude.is_infinite() {
            out.push_str("Infinity");
            return out;
        }

        let digits = to_precision(magnitude, PRECISION);
        let (mantissa, exponent) = match digits.find('e') {
            Some(i) => digits.split_at(i),
            None => (digits.as_str(), ""),
        };
        let (int_part, frac_part) = match mantissa.find('.') {
            Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
            None => (mantissa, ""),
        };

        out.push_str(&group(int_part, self.thousands));
        if !frac_part.is_empty() {
            out.push(self.decimal);
            out.push_str(frac_part);
        }
        out.push_str(exponent);
        out
    }

    /// The formatter as a standalone function value.
    pub fn into_fn(self) -> impl Fn(f64) -> String {
        move |v| self.format(v)
    }
}

/// Render a non-negative finite value with `precision` significant digits, trimming
/// trailing zeros. Exponent form (`1.5e+21`) is used when the decimal exponent is
/// below -6 or at least `precision`.
fn to_precision(x: f64, precision: usize) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{:.*e}", precision - 1, x);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -6 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{}", trim_zeros(mantissa), sign, exp.abs());
    }
    let decimals = (precision as i32 - 1 - exp).max(0) as usize;
    trim_zeros(&format!("{:.*}", decimals, x)).to_string()
}

fn trim_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

fn group(int_part: &str, sep: char) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_switches_to_exponent_form() {
        assert_eq!(to_precision(1e21, PRECISION), "1e+21");
        assert_eq!(to_precision(1.5e-7, PRECISION), "1.5e-7");
        assert_eq!(to_precision(0.000001, PRECISION), "0.000001");
        assert_eq!(to_precision(999_999_999_999.0, PRECISION), "999999999999");
    }

    #[test]
    fn grouping_inserts_separator_every_three_digits() {
        assert_eq!(group("1", '.'), "1");
        assert_eq!(group("123", '.'), "123");
        assert_eq!(group("1234", '.'), "1.234");
        assert_eq!(group("1234567", ','), "1,234,567");
    }
}
