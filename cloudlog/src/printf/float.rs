//! Decimal conversion of floating-point numbers for the `%e`, `%f` and `%g` verbs.
//!
//! The digit generation is done by the standard library's `{:e}` formatting, which produces
//! either the shortest representation that round-trips or a correctly rounded one for a given
//! number of significant digits. This module only lays those digits out.

use std::cmp;

/// Formats `value` like `strconv.FormatFloat`.
///
/// `precision` of `None` selects the shortest representation that reads back as the same
/// number of `bits` width. Negative numbers carry a leading `-`, infinities are `+Inf` and
/// `-Inf`.
pub(super) fn format(value: f64, bits: u32, verb: char, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    let value = value.abs();

    match verb {
        'e' | 'E' => {
            let decimal = match precision {
                Some(precision) => Decimal::rounded(value, precision + 1),
                None => Decimal::shortest(value, bits),
            };
            let precision = precision.unwrap_or_else(|| decimal.len().saturating_sub(1));
            decimal.write_exponent(&mut out, precision, verb);
        }
        'g' | 'G' => {
            let (decimal, mut precision, exponent_threshold) = match precision {
                Some(precision) => {
                    let precision = precision.max(1);
                    let decimal = Decimal::rounded(value, precision);
                    let mut threshold = precision;
                    if threshold > decimal.len() && decimal.len() as i32 >= decimal.point {
                        threshold = decimal.len();
                    }
                    (decimal, precision, threshold)
                }
                None => {
                    let decimal = Decimal::shortest(value, bits);
                    let precision = decimal.len();
                    (decimal, precision, 6)
                }
            };

            let exponent = decimal.point - 1;
            let exponent_verb = if verb == 'G' { 'E' } else { 'e' };
            if exponent < -4 || exponent >= exponent_threshold as i32 {
                precision = cmp::min(precision, decimal.len());
                decimal.write_exponent(&mut out, precision.saturating_sub(1), exponent_verb);
            } else {
                if precision as i32 > decimal.point {
                    precision = decimal.len();
                }
                let fraction = cmp::max(precision as i32 - decimal.point, 0);
                decimal.write_fixed(&mut out, fraction as usize);
            }
        }
        // 'f' | 'F'
        _ => match precision {
            Some(precision) => {
                use std::fmt::Write;
                // Writing into a `String` cannot fail.
                let _ = write!(out, "{value:.precision$}");
            }
            None => {
                let decimal = Decimal::shortest(value, bits);
                let fraction = cmp::max(decimal.len() as i32 - decimal.point, 0);
                decimal.write_fixed(&mut out, fraction as usize);
            }
        },
    }

    out
}

/// A non-negative number as significant digits and the position of the decimal point.
///
/// The value is `0.d₁d₂d₃… × 10^point`. Zero has no digits.
#[derive(Debug, PartialEq)]
struct Decimal {
    digits: Vec<u8>,
    point: i32,
}

impl Decimal {
    /// The shortest digits that read back as the same `f32` or `f64`.
    fn shortest(value: f64, bits: u32) -> Self {
        if bits == 32 {
            // Exact, the value was widened from an f32.
            let narrow = value as f32;
            Self::parse(&format!("{narrow:e}"))
        } else {
            Self::parse(&format!("{value:e}"))
        }
    }

    /// Digits rounded to `significant` places, at least one.
    fn rounded(value: f64, significant: usize) -> Self {
        let fraction_digits = significant.saturating_sub(1);
        Self::parse(&format!("{value:.fraction_digits$e}"))
    }

    /// Parses `d.ddde±x` as produced by the `{:e}` formatter.
    fn parse(scientific: &str) -> Self {
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
        while digits.last() == Some(&b'0') {
            digits.pop();
        }

        if digits.is_empty() {
            Self {
                digits,
                point: 0,
            }
        } else {
            Self {
                digits,
                point: exponent + 1,
            }
        }
    }

    fn len(&self) -> usize {
        self.digits.len()
    }

    /// The digit at `index`, or `0` outside the stored digits.
    fn digit(&self, index: i32) -> char {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.digits.get(index))
            .map_or('0', |&digit| char::from(digit))
    }

    /// `d.ddde±dd`
    fn write_exponent(&self, out: &mut String, precision: usize, verb: char) {
        out.push(self.digit(0));

        if precision > 0 {
            out.push('.');
            for index in 1..=precision {
                out.push(self.digit(index as i32));
            }
        }

        out.push(verb);
        // Zero has exponent 0.
        let exponent = if self.digits.is_empty() {
            0
        } else {
            self.point - 1
        };
        out.push(if exponent < 0 { '-' } else { '+' });
        let exponent = exponent.unsigned_abs();
        if exponent < 10 {
            out.push('0');
        }
        out.push_str(&exponent.to_string());
    }

    /// `ddd.ddd`
    fn write_fixed(&self, out: &mut String, precision: usize) {
        if self.point > 0 {
            for index in 0..self.point {
                out.push(self.digit(index));
            }
        } else {
            out.push('0');
        }

        if precision > 0 {
            out.push('.');
            for index in 1..=precision as i32 {
                out.push(self.digit(self.point + index - 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Decimal, format};

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(
            Decimal::parse("1.2345e6"),
            Decimal {
                digits: b"12345".to_vec(),
                point: 7,
            }
        );
        assert_eq!(
            Decimal::parse("1e-5"),
            Decimal {
                digits: b"1".to_vec(),
                point: -4,
            }
        );
        assert_eq!(
            Decimal::parse("0e0"),
            Decimal {
                digits: Vec::new(),
                point: 0,
            }
        );
    }

    #[test_case(1_000_000.0, 'g', None => "1e+06"; "million switches to exponent")]
    #[test_case(123_456.0, 'g', None => "123456"; "six digits stay fixed")]
    #[test_case(0.0001, 'g', None => "0.0001"; "small stays fixed")]
    #[test_case(0.00001, 'g', None => "1e-05"; "smaller switches to exponent")]
    #[test_case(0.0, 'g', None => "0"; "zero")]
    #[test_case(-2.5, 'g', None => "-2.5"; "negative")]
    #[test_case(1e21, 'g', None => "1e+21"; "large")]
    #[test_case(1e100, 'g', None => "1e+100"; "three digit exponent")]
    #[test_case(1234.0, 'g', Some(3) => "1.23e+03"; "precision forces exponent")]
    #[test_case(100.0, 'g', Some(3) => "100"; "precision matching digits")]
    #[test_case(0.0, 'g', Some(3) => "0"; "zero with precision")]
    #[test_case(1234.5678, 'e', Some(6) => "1.234568e+03"; "scientific")]
    #[test_case(0.0, 'e', Some(2) => "0.00e+00"; "scientific zero")]
    #[test_case(1234.5678, 'E', None => "1.2345678E+03"; "shortest scientific")]
    #[test_case(3.14159, 'f', Some(2) => "3.14"; "fixed")]
    #[test_case(2.675, 'f', Some(2) => "2.67"; "fixed rounds the binary value")]
    #[test_case(f64::INFINITY, 'f', Some(6) => "+Inf"; "infinity")]
    #[test_case(f64::NEG_INFINITY, 'g', None => "-Inf"; "negative infinity")]
    #[test_case(f64::NAN, 'e', None => "NaN"; "not a number")]
    fn formats(value: f64, verb: char, precision: Option<usize>) -> String {
        format(value, 64, verb, precision)
    }

    #[test]
    fn single_precision_uses_its_own_shortest_digits() {
        assert_eq!(format(f64::from(0.1_f32), 32, 'g', None), "0.1");
        assert_eq!(format(f64::from(0.1_f32), 64, 'g', None), "0.10000000149011612");
    }
}
