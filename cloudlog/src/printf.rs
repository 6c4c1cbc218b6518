//! printf-style message interpolation.
//!
//! [`sprintf`] follows the conventions of C `printf` as refined by Go's `fmt` package, which is
//! what the `…f` logging operations have always accepted. Formatting is best-effort: problems
//! are rendered inline in the output instead of being reported as errors.
//!
//! # Verbs
//!
//! | Verb            | Applies to            | Output                                           |
//! |-----------------|-----------------------|--------------------------------------------------|
//! | `%v`            | everything            | the default format, as used by [`sprint`]        |
//! | `%s`            | strings, `Display`    | the text                                         |
//! | `%q`            | strings, integers     | a double-quoted string or single-quoted char     |
//! | `%d %b %o %O`   | integers, `char`      | base 10, 2, 8, 8 with `0o` prefix                |
//! | `%x %X`         | integers, strings     | base 16, or the hex encoding of the bytes        |
//! | `%c %U`         | integers, `char`      | the character, or `U+0041` notation              |
//! | `%e %E %f %F`   | floats                | scientific or decimal notation, precision 6      |
//! | `%g %G`         | floats                | the shortest of `%e` and `%f`                    |
//! | `%t`            | booleans              | `true` or `false`                                |
//! | `%T`            | everything            | the type name                                    |
//! | `%%`            | nothing               | a literal percent sign                           |
//!
//! Flags `+`, `-`, `#`, `0` and space, a width, and a `.precision` may appear between the `%`
//! and the verb. Width and precision may be `*` to take them from the next integer argument, and
//! `[n]` selects the (1-based) argument for the following verb or `*`.
//!
//! # Inline errors
//!
//! ```text
//! wrong type           %d with "hi"     %!d(&str=hi)
//! missing argument     %d with nothing  %!d(MISSING)
//! unused arguments     "" with 1        %!(EXTRA i64=1)
//! trailing percent     "50%"            50%!(NOVERB)
//! bad index            %[9]d            %!d(BADINDEX)
//! bad width/precision  %*d with "x"     %!(BADWIDTH)
//! ```
//!
//! [`sprint`]: crate::sprint

mod float;

use crate::value::Value;

/// Numbers past this are treated as nonsense widths, precisions and indexes.
const TOO_LARGE: usize = 1_000_000;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Interpolates `args` into `format`.
///
/// # Examples
///
/// ```rust
/// use cloudlog::{Value, sprintf};
///
/// assert_eq!(sprintf("count=%d", &[Value::from(5)]), "count=5");
/// assert_eq!(sprintf("%-6s|%6.2f", &["id".into(), 3.14159.into()]), "id    |  3.14");
/// assert_eq!(sprintf("%d %d", &[Value::from(1)]), "1 %!d(MISSING)");
/// ```
pub fn sprintf(format: &str, args: &[Value<'_>]) -> String {
    let mut printer = Printer::default();
    printer.print_formatted(format, args);
    printer.buf
}

/// Renders a single value with the `%v` verb and no flags.
pub(crate) fn format_default(value: &Value<'_>) -> String {
    let mut printer = Printer::default();
    printer.print_arg(value, 'v');
    printer.buf
}

#[derive(Clone, Copy, Default)]
struct Flags {
    plus: bool,
    minus: bool,
    sharp: bool,
    space: bool,
    zero: bool,
    /// `%#v`, stored apart from `sharp` since it changes the output form rather than adding
    /// prefixes.
    sharp_v: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

#[derive(Default)]
struct Printer {
    buf: String,
    flags: Flags,
    /// An explicit `[n]` index was used, unused arguments are not reported then.
    reordered: bool,
    good_arg_num: bool,
}

impl Printer {
    fn print_formatted(&mut self, format: &str, args: &[Value<'_>]) {
        let bytes = format.as_bytes();
        let end = bytes.len();
        let mut arg_num = 0;
        let mut after_index;
        let mut i = 0;

        while i < end {
            self.good_arg_num = true;

            let literal_start = i;
            while i < end && bytes[i] != b'%' {
                i += 1;
            }
            self.buf.push_str(&format[literal_start..i]);
            if i >= end {
                break;
            }

            // Skip the `%`.
            i += 1;
            self.flags = Flags::default();

            while i < end {
                match bytes[i] {
                    b'#' => self.flags.sharp = true,
                    // Zero padding is only allowed on the left.
                    b'0' => self.flags.zero = !self.flags.minus,
                    b'+' => self.flags.plus = true,
                    b'-' => {
                        self.flags.minus = true;
                        self.flags.zero = false;
                    }
                    b' ' => self.flags.space = true,
                    _ => break,
                }
                i += 1;
            }

            (arg_num, i, after_index) = self.arg_number(arg_num, bytes, i, args.len());

            if i < end && bytes[i] == b'*' {
                i += 1;
                let (width, next_arg) = int_from_arg(args, arg_num);
                arg_num = next_arg;
                match width {
                    Some(width) => {
                        if width < 0 {
                            self.flags.minus = true;
                            self.flags.zero = false;
                        }
                        self.flags.width = usize::try_from(width.unsigned_abs()).ok();
                    }
                    None => self.buf.push_str("%!(BADWIDTH)"),
                }
                after_index = false;
            } else {
                let (width, next) = parse_num(bytes, i, end);
                i = next;
                self.flags.width = width;
                // "%[3]2d"
                if after_index && width.is_some() {
                    self.good_arg_num = false;
                }
            }

            if i < end && bytes[i] == b'.' {
                i += 1;
                // "%[3].2d"
                if after_index {
                    self.good_arg_num = false;
                }
                (arg_num, i, after_index) = self.arg_number(arg_num, bytes, i, args.len());
                if i < end && bytes[i] == b'*' {
                    i += 1;
                    let (precision, next_arg) = int_from_arg(args, arg_num);
                    arg_num = next_arg;
                    // Negative precisions make no sense.
                    match precision.and_then(|precision| usize::try_from(precision).ok()) {
                        Some(precision) => self.flags.precision = Some(precision),
                        None => self.buf.push_str("%!(BADPREC)"),
                    }
                    after_index = false;
                } else {
                    let (precision, next) = parse_num(bytes, i, end);
                    i = next;
                    // A lone `.` means a precision of zero.
                    self.flags.precision = Some(precision.unwrap_or(0));
                }
            }

            if !after_index {
                (arg_num, i, _) = self.arg_number(arg_num, bytes, i, args.len());
            }

            let Some(verb) = format.get(i..).and_then(|rest| rest.chars().next()) else {
                self.buf.push_str("%!(NOVERB)");
                break;
            };
            i += verb.len_utf8();

            match verb {
                // Percent does not absorb operands and ignores width and precision.
                '%' => self.buf.push('%'),
                _ if !self.good_arg_num => self.bad_arg_num(verb),
                _ if arg_num >= args.len() => self.missing_arg(verb),
                _ => {
                    if verb == 'v' {
                        self.flags.sharp_v = self.flags.sharp;
                        self.flags.sharp = false;
                        self.flags.plus = false;
                    }
                    self.print_arg(&args[arg_num], verb);
                    arg_num += 1;
                }
            }
        }

        if !self.reordered && arg_num < args.len() {
            self.flags = Flags::default();
            self.buf.push_str("%!(EXTRA ");
            for (index, arg) in args[arg_num..].iter().enumerate() {
                if index > 0 {
                    self.buf.push_str(", ");
                }
                self.buf.push_str(arg.type_name());
                self.buf.push('=');
                self.print_arg(arg, 'v');
            }
            self.buf.push(')');
        }
    }

    /// Consumes an `[n]` argument index at `i`, if present.
    ///
    /// Returns the new argument number, the new position, and whether an index was parsed.
    fn arg_number(
        &mut self,
        arg_num: usize,
        format: &[u8],
        i: usize,
        num_args: usize,
    ) -> (usize, usize, bool) {
        if format.get(i) != Some(&b'[') {
            return (arg_num, i, false);
        }
        self.reordered = true;

        let (index, consumed) = parse_arg_index(&format[i..]);
        match index {
            Some(Some(index)) if index < num_args => (index, i + consumed, true),
            _ => {
                self.good_arg_num = false;
                (arg_num, i + consumed, index.is_some())
            }
        }
    }

    fn print_arg(&mut self, arg: &Value<'_>, verb: char) {
        if verb == 'T' {
            self.fmt_s(arg.type_name());
            return;
        }

        match *arg {
            Value::Bool(value) => self.fmt_bool(value, verb, arg),
            Value::I64(value) => {
                self.fmt_integer(value.unsigned_abs(), value < 0, true, verb, arg);
            }
            Value::U64(value) => self.fmt_integer(value, false, false, verb, arg),
            Value::F64(value) => self.fmt_float(value, 64, verb, arg),
            Value::F32(value) => self.fmt_float(f64::from(value), 32, verb, arg),
            Value::Str(value) => self.fmt_string(value, verb, arg),
            Value::Char(value) => match verb {
                'v' | 's' => self.fmt_s(value.encode_utf8(&mut [0; 4])),
                _ => self.fmt_integer(u64::from(value), false, false, verb, arg),
            },
            Value::Display { value, .. } => match verb {
                'v' | 's' | 'x' | 'X' | 'q' => {
                    let rendered = value.to_string();
                    self.fmt_string(&rendered, verb, arg);
                }
                _ => self.bad_verb(verb, arg),
            },
        }
    }

    fn bad_verb(&mut self, verb: char, arg: &Value<'_>) {
        self.buf.push_str("%!");
        self.buf.push(verb);
        self.buf.push('(');
        self.buf.push_str(arg.type_name());
        self.buf.push('=');
        self.print_arg(arg, 'v');
        self.buf.push(')');
    }

    fn bad_arg_num(&mut self, verb: char) {
        self.buf.push_str("%!");
        self.buf.push(verb);
        self.buf.push_str("(BADINDEX)");
    }

    fn missing_arg(&mut self, verb: char) {
        self.buf.push_str("%!");
        self.buf.push(verb);
        self.buf.push_str("(MISSING)");
    }

    fn fmt_bool(&mut self, value: bool, verb: char, arg: &Value<'_>) {
        match verb {
            't' | 'v' => self.pad(if value { "true" } else { "false" }),
            _ => self.bad_verb(verb, arg),
        }
    }

    fn fmt_integer(
        &mut self,
        magnitude: u64,
        negative: bool,
        signed: bool,
        verb: char,
        arg: &Value<'_>,
    ) {
        // Two's complement view of the value, for the verbs that treat it as a code point.
        let raw = if negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        };

        match verb {
            'v' if self.flags.sharp_v && !signed => {
                let sharp = std::mem::replace(&mut self.flags.sharp, true);
                self.fmt_unsigned(magnitude, negative, 16, verb, LOWER_DIGITS);
                self.flags.sharp = sharp;
            }
            'v' | 'd' => self.fmt_unsigned(magnitude, negative, 10, verb, LOWER_DIGITS),
            'b' => self.fmt_unsigned(magnitude, negative, 2, verb, LOWER_DIGITS),
            'o' | 'O' => self.fmt_unsigned(magnitude, negative, 8, verb, LOWER_DIGITS),
            'x' => self.fmt_unsigned(magnitude, negative, 16, verb, LOWER_DIGITS),
            'X' => self.fmt_unsigned(magnitude, negative, 16, verb, UPPER_DIGITS),
            'c' => {
                let c = to_char(raw);
                self.pad(c.encode_utf8(&mut [0; 4]));
            }
            'q' => {
                let mut quoted = String::new();
                quote_char(&mut quoted, to_char(raw), self.flags.plus);
                self.pad(&quoted);
            }
            'U' => self.fmt_unicode(raw),
            _ => self.bad_verb(verb, arg),
        }
    }

    /// Formats `magnitude` in `base`, with a leading `-` when `negative`.
    fn fmt_unsigned(
        &mut self,
        mut magnitude: u64,
        negative: bool,
        base: u64,
        verb: char,
        digits: &[u8; 16],
    ) {
        let flags = self.flags;

        // Two ways to ask for extra leading zero digits: %.3d or %03d. If both are given the
        // zero flag is ignored and spaces are used for the width.
        let mut min_digits = 0;
        if let Some(precision) = flags.precision {
            min_digits = precision;
            // Precision 0 with value 0 prints nothing but padding.
            if precision == 0 && magnitude == 0 {
                self.flags.zero = false;
                self.write_padding(flags.width.unwrap_or(0));
                self.flags.zero = flags.zero;
                return;
            }
        } else if let Some(width) = flags.width.filter(|_| flags.zero && !flags.minus) {
            min_digits = width;
            if negative || flags.plus || flags.space {
                // Leave room for the sign.
                min_digits = min_digits.saturating_sub(1);
            }
        }

        // Built right-to-left, then reversed.
        let mut reversed = Vec::with_capacity(24);
        loop {
            reversed.push(digits[(magnitude % base) as usize]);
            magnitude /= base;
            if magnitude == 0 {
                break;
            }
        }
        while reversed.len() < min_digits {
            reversed.push(b'0');
        }

        if flags.sharp {
            match base {
                2 => reversed.extend_from_slice(b"b0"),
                8 if reversed.last() != Some(&b'0') => reversed.push(b'0'),
                16 => {
                    reversed.push(if digits == UPPER_DIGITS { b'X' } else { b'x' });
                    reversed.push(b'0');
                }
                _ => {}
            }
        }
        if verb == 'O' {
            reversed.extend_from_slice(b"o0");
        }

        if negative {
            reversed.push(b'-');
        } else if flags.plus {
            reversed.push(b'+');
        } else if flags.space {
            reversed.push(b' ');
        }

        let formatted: String = reversed.iter().rev().map(|&byte| char::from(byte)).collect();

        // Zero padding has already been handled as precision above.
        self.flags.zero = false;
        self.pad(&formatted);
        self.flags.zero = flags.zero;
    }

    fn fmt_unicode(&mut self, raw: u64) {
        let digits = self.flags.precision.filter(|&p| p > 4).unwrap_or(4);
        let mut formatted = format!("U+{raw:0digits$X}");

        if self.flags.sharp {
            if let Some(c) = u32::try_from(raw)
                .ok()
                .and_then(char::from_u32)
                .filter(|&c| is_print(c))
            {
                formatted.push_str(" '");
                formatted.push(c);
                formatted.push('\'');
            }
        }

        let zero = std::mem::replace(&mut self.flags.zero, false);
        self.pad(&formatted);
        self.flags.zero = zero;
    }

    fn fmt_float(&mut self, value: f64, bits: u32, verb: char, arg: &Value<'_>) {
        match verb {
            'v' => self.fmt_float_as(value, bits, 'g', None),
            'g' | 'G' => self.fmt_float_as(value, bits, verb, None),
            'e' | 'E' | 'f' | 'F' => self.fmt_float_as(value, bits, verb, Some(6)),
            _ => self.bad_verb(verb, arg),
        }
    }

    fn fmt_float_as(&mut self, value: f64, bits: u32, verb: char, default_precision: Option<usize>) {
        let flags = self.flags;
        let precision = flags.precision.or(default_precision);

        // Always carry an explicit sign while working, it is dropped again below if unwanted.
        let mut num = float::format(value, bits, verb, precision);
        if !num.starts_with(['+', '-']) {
            num.insert(0, '+');
        }
        if flags.space && num.starts_with('+') && !flags.plus {
            num.replace_range(..1, " ");
        }

        // Infinities and NaN don't look like numbers and are never zero padded.
        if num[1..].starts_with(['I', 'N']) {
            if num[1..].starts_with('N') && !flags.space && !flags.plus {
                num.remove(0);
            }
            self.flags.zero = false;
            self.pad(&num);
            self.flags.zero = flags.zero;
            return;
        }

        if flags.sharp {
            force_decimal_point(&mut num, verb, precision);
        }

        if flags.plus || !num.starts_with('+') {
            // With zero padding the sign goes before the zeros.
            match flags.width {
                Some(width) if flags.zero && !flags.minus && width > num.len() => {
                    let (sign, digits) = num.split_at(1);
                    self.buf.push_str(sign);
                    self.write_padding(width - num.len());
                    self.buf.push_str(digits);
                }
                _ => self.pad(&num),
            }
            return;
        }

        self.pad(&num[1..]);
    }

    fn fmt_string(&mut self, value: &str, verb: char, arg: &Value<'_>) {
        match verb {
            'v' if self.flags.sharp_v => self.fmt_q(value),
            'v' | 's' => self.fmt_s(value),
            'x' => self.fmt_sx(value, LOWER_DIGITS),
            'X' => self.fmt_sx(value, UPPER_DIGITS),
            'q' => self.fmt_q(value),
            _ => self.bad_verb(verb, arg),
        }
    }

    fn fmt_s(&mut self, value: &str) {
        let value = self.truncate(value);
        self.pad(value);
    }

    /// Hex encoding of the bytes; the precision limits how many bytes are encoded.
    fn fmt_sx(&mut self, value: &str, digits: &[u8; 16]) {
        let bytes = value.as_bytes();
        let length = self
            .flags
            .precision
            .map_or(bytes.len(), |precision| precision.min(bytes.len()));
        let prefix = if digits == UPPER_DIGITS { "0X" } else { "0x" };

        let mut encoded = String::with_capacity(length * 5);
        if self.flags.sharp && length > 0 {
            encoded.push_str(prefix);
        }
        for (index, byte) in bytes[..length].iter().enumerate() {
            if self.flags.space && index > 0 {
                encoded.push(' ');
                if self.flags.sharp {
                    encoded.push_str(prefix);
                }
            }
            encoded.push(char::from(digits[usize::from(byte >> 4)]));
            encoded.push(char::from(digits[usize::from(byte & 0xF)]));
        }

        self.pad(&encoded);
    }

    fn fmt_q(&mut self, value: &str) {
        let value = self.truncate(value);
        if self.flags.sharp && can_backquote(value) {
            self.pad(&format!("`{value}`"));
        } else {
            let mut quoted = String::with_capacity(value.len() + 2);
            quote_str(&mut quoted, value, self.flags.plus);
            self.pad(&quoted);
        }
    }

    /// Cuts `value` down to `precision` characters.
    fn truncate<'v>(&self, value: &'v str) -> &'v str {
        match self.flags.precision {
            Some(precision) => match value.char_indices().nth(precision) {
                Some((end, _)) => &value[..end],
                None => value,
            },
            None => value,
        }
    }

    /// Appends `value`, padded to the width on the side chosen by the flags.
    fn pad(&mut self, value: &str) {
        let Some(width) = self.flags.width else {
            self.buf.push_str(value);
            return;
        };
        let fill = width.saturating_sub(value.chars().count());
        if self.flags.minus {
            self.buf.push_str(value);
            self.write_padding(fill);
        } else {
            self.write_padding(fill);
            self.buf.push_str(value);
        }
    }

    fn write_padding(&mut self, count: usize) {
        let fill = if self.flags.zero && !self.flags.minus {
            '0'
        } else {
            ' '
        };
        self.buf.extend(std::iter::repeat_n(fill, count));
    }
}

/// Parses a run of decimal digits starting at `i`.
///
/// Returns the number, if there were any digits and it was not absurdly large, and the position
/// after it.
fn parse_num(format: &[u8], mut i: usize, end: usize) -> (Option<usize>, usize) {
    let mut num = None;
    while i < end && format[i].is_ascii_digit() {
        let so_far = num.unwrap_or(0);
        if so_far > TOO_LARGE {
            return (None, end);
        }
        num = Some(so_far * 10 + usize::from(format[i] - b'0'));
        i += 1;
    }
    (num, i)
}

/// Parses `[n]` at the start of `format`.
///
/// Returns `None` if the brackets are malformed, `Some(None)` for the out-of-range `[0]`, and
/// the zero-based index otherwise, along with how many bytes to skip.
fn parse_arg_index(format: &[u8]) -> (Option<Option<usize>>, usize) {
    // There must be at least 3 bytes: [n].
    if format.len() < 3 {
        return (None, 1);
    }

    match format.iter().position(|&byte| byte == b']') {
        Some(close) => match parse_num(format, 1, close) {
            (Some(index), end) if end == close => (Some(index.checked_sub(1)), close + 1),
            _ => (None, close + 1),
        },
        None => (None, 1),
    }
}

/// Takes the argument at `arg_num` as a width or precision.
///
/// Returns the value if it is a reasonable integer, and the next argument number.
fn int_from_arg(args: &[Value<'_>], arg_num: usize) -> (Option<i64>, usize) {
    let Some(arg) = args.get(arg_num) else {
        return (None, arg_num);
    };

    let num = match *arg {
        Value::I64(value) => Some(value),
        Value::U64(value) => i64::try_from(value).ok(),
        _ => None,
    };
    let num = num.filter(|num| num.unsigned_abs() <= TOO_LARGE as u64);

    (num, arg_num + 1)
}

fn to_char(raw: u64) -> char {
    u32::try_from(raw)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// An approximation of "graphic and not a space other than U+0020".
fn is_print(c: char) -> bool {
    c == ' ' || !(c.is_control() || c.is_whitespace() || c == '\u{FEFF}')
}

fn can_backquote(value: &str) -> bool {
    !value.chars().any(|c| {
        c == '`' || c == '\u{7F}' || c == '\u{FEFF}' || (c < ' ' && c != '\t')
    })
}

fn quote_str(out: &mut String, value: &str, ascii_only: bool) {
    out.push('"');
    for c in value.chars() {
        escape_char(out, c, '"', ascii_only);
    }
    out.push('"');
}

fn quote_char(out: &mut String, c: char, ascii_only: bool) {
    out.push('\'');
    escape_char(out, c, '\'', ascii_only);
    out.push('\'');
}

fn escape_char(out: &mut String, c: char, quote: char, ascii_only: bool) {
    use std::fmt::Write;

    if c == quote || c == '\\' {
        out.push('\\');
        out.push(c);
        return;
    }
    if is_print(c) && (c.is_ascii() || !ascii_only) {
        out.push(c);
        return;
    }

    let code = u32::from(c);
    // Writing into a `String` cannot fail.
    let _ = match c {
        '\u{7}' => out.write_str("\\a"),
        '\u{8}' => out.write_str("\\b"),
        '\u{C}' => out.write_str("\\f"),
        '\n' => out.write_str("\\n"),
        '\r' => out.write_str("\\r"),
        '\t' => out.write_str("\\t"),
        '\u{B}' => out.write_str("\\v"),
        _ if code < 0x20 || code == 0x7F => write!(out, "\\x{code:02x}"),
        _ if code < 0x1_0000 => write!(out, "\\u{code:04x}"),
        _ => write!(out, "\\U{code:08x}"),
    };
}

/// Implements `#` for floats: always print a decimal point, and for `%g` keep trailing zeros up
/// to the precision.
fn force_decimal_point(num: &mut String, verb: char, precision: Option<usize>) {
    let mut digits = match verb {
        'g' | 'G' => precision.unwrap_or(6),
        _ => 0,
    };

    // The exponent is set aside and re-attached at the end, skipping the sign at 0.
    let tail = match num[1..].find(['e', 'E']) {
        Some(position) => num.split_off(position + 1),
        None => String::new(),
    };

    let mut has_decimal_point = false;
    let mut saw_nonzero_digit = false;
    for c in num[1..].chars() {
        match c {
            '.' => has_decimal_point = true,
            _ => {
                if c != '0' {
                    saw_nonzero_digit = true;
                }
                // Count significant digits after the first non-zero digit.
                if saw_nonzero_digit {
                    digits = digits.saturating_sub(1);
                }
            }
        }
    }

    if !has_decimal_point {
        // A lone leading 0 counts once.
        if &num[1..] == "0" {
            digits = digits.saturating_sub(1);
        }
        num.push('.');
    }
    num.extend(std::iter::repeat_n('0', digits));
    num.push_str(&tail);
}
